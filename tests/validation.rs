use well_path_planner::config::{FieldValue, PlanConfig, RawLocation, ValidationError};
use well_path_planner::{KopSpec, Location};
use well_path_planner::model::constants::MAX_STATIONS;

fn target() -> RawLocation {
    RawLocation::new(300.0, 400.0, 5_000.0)
}

#[test]
fn text_and_numeric_fields_parse_to_locations() {
    let config = PlanConfig::new(
        RawLocation::new("100", " 200 ", 0.0),
        vec![RawLocation::new("-50.5", 75.25, "4000")],
    );
    let plan = config.validate().expect("valid plan");
    assert_eq!(plan.surface, Location::new(100.0, 200.0, 0.0));
    assert_eq!(plan.targets, vec![Location::new(-50.5, 75.25, 4_000.0)]);
    assert_eq!(plan.kop, KopSpec::Derive);
    assert_eq!(plan.interval, 10.0);
    assert_eq!(plan.build_rate, 2.0);
}

#[test]
fn zero_is_a_complete_surface_field() {
    let config = PlanConfig::new(RawLocation::new("0", "0", "0"), vec![target()]);
    assert!(config.validate().is_ok());
}

#[test]
fn blank_surface_field_is_rejected() {
    let config = PlanConfig::new(RawLocation::new("10", "", "0"), vec![target()]);
    let err = config.validate().expect_err("blank east");
    assert_eq!(err, ValidationError::IncompleteSurface);
    assert_eq!(err.to_string(), "Please fill in all Surface Location fields.");
}

#[test]
fn target_list_must_not_be_empty() {
    let config = PlanConfig::new(RawLocation::new(0.0, 0.0, 0.0), Vec::new());
    assert_eq!(config.validate(), Err(ValidationError::NoTargets));
}

#[test]
fn incomplete_target_is_reported_by_number() {
    let config = PlanConfig::new(
        RawLocation::new(0.0, 0.0, 0.0),
        vec![target(), RawLocation::new("10", "20", "  ")],
    );
    let err = config.validate().expect_err("blank tvd");
    assert_eq!(err, ValidationError::IncompleteTarget(2));
    assert_eq!(err.to_string(), "Please fill in all fields for Target 2.");
}

#[test]
fn non_numeric_text_is_rejected() {
    let config = PlanConfig::new(
        RawLocation::new(0.0, 0.0, 0.0),
        vec![RawLocation::new("12a", "0", "100")],
    );
    assert_eq!(
        config.validate(),
        Err(ValidationError::InvalidNumber {
            field: "target 1 north".to_string(),
            value: "12a".to_string(),
        })
    );

    let config = PlanConfig::new(
        RawLocation::new(0.0, 0.0, 0.0),
        vec![RawLocation::new("inf", "0", "100")],
    );
    assert!(matches!(
        config.validate(),
        Err(ValidationError::InvalidNumber { .. })
    ));
}

#[test]
fn kop_text_selects_manual_or_derived_mode() {
    let mut config = PlanConfig::new(RawLocation::new(0.0, 0.0, 0.0), vec![target()]);

    config.kop = Some(FieldValue::from("   "));
    assert_eq!(config.validate().map(|p| p.kop), Ok(KopSpec::Derive));

    config.kop = Some(FieldValue::from("1500.5"));
    assert_eq!(config.validate().map(|p| p.kop), Ok(KopSpec::Manual(1_500.5)));

    config.kop = Some(FieldValue::Number(800.0));
    assert_eq!(config.validate().map(|p| p.kop), Ok(KopSpec::Manual(800.0)));

    config.kop = Some(FieldValue::from("deep"));
    assert!(matches!(
        config.validate(),
        Err(ValidationError::InvalidNumber { field, .. }) if field == "kop"
    ));
}

#[test]
fn interval_and_build_rate_must_be_positive() {
    let mut config = PlanConfig::new(RawLocation::new(0.0, 0.0, 0.0), vec![target()]);
    config.interval = 0.0;
    assert_eq!(config.validate(), Err(ValidationError::InvalidInterval(0.0)));

    config.interval = 10.0;
    config.build_rate = -2.0;
    assert_eq!(config.validate(), Err(ValidationError::InvalidBuildRate(-2.0)));
}

#[test]
fn zero_depth_first_target_needs_a_manual_kop() {
    let mut config = PlanConfig::new(
        RawLocation::new(0.0, 0.0, 0.0),
        vec![RawLocation::new(100.0, 100.0, 0.0), target()],
    );
    assert_eq!(config.validate(), Err(ValidationError::ZeroTargetDepth));

    config.kop = Some(FieldValue::from("0"));
    assert!(config.validate().is_ok());
}

#[test]
fn triplet_text_splits_into_fields() {
    assert_eq!(
        RawLocation::from_triplet("1, 2.5 ,3000"),
        RawLocation::new("1", "2.5", "3000")
    );

    let partial = RawLocation::from_triplet("1,2");
    assert!(partial.tvd.is_blank());
    let config = PlanConfig::new(RawLocation::new(0.0, 0.0, 0.0), vec![partial]);
    assert_eq!(config.validate(), Err(ValidationError::IncompleteTarget(1)));
}

#[test]
fn interval_too_fine_for_the_path_is_rejected() {
    let mut config = PlanConfig::new(
        RawLocation::new(0.0, 0.0, 0.0),
        vec![RawLocation::new(100.0, 100.0, 3_000.0)],
    );
    config.kop = Some(FieldValue::from(500.0));

    config.interval = 0.01;
    assert!(config.validate().is_ok());

    config.interval = 1e-12;
    match config.validate() {
        Err(ValidationError::TooManyStations {
            interval,
            stations,
            limit,
        }) => {
            assert_eq!(interval, 1e-12);
            assert_eq!(limit, MAX_STATIONS);
            assert!(stations > limit, "{stations} stations");
        }
        other => panic!("expected TooManyStations, got {other:?}"),
    }

    // the derived KOP counts too
    config.kop = None;
    assert!(matches!(
        config.validate(),
        Err(ValidationError::TooManyStations { .. })
    ));
}
