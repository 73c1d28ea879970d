use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn wellpath() -> Command {
    Command::cargo_bin("wellpath").expect("wellpath bin")
}

const SCENARIO: [&str; 8] = [
    "--surface",
    "0,0,0",
    "--target",
    "100,100,3000",
    "--kop",
    "500",
    "--interval",
    "500",
];

#[test]
fn prints_control_points_and_survey() {
    wellpath()
        .args(SCENARIO)
        .args(["--columns", "well-path,xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Surface Location"))
        .stdout(predicate::str::contains("KOP"))
        .stdout(predicate::str::contains("Target 1"))
        .stdout(predicate::str::contains("Inc (deg)"))
        .stdout(predicate::str::contains("TVD (ft)"))
        .stdout(predicate::str::contains("500.80"))
        .stdout(predicate::str::contains("DLS").not());
}

#[test]
fn export_writes_mia_listing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("mia.csv");

    wellpath()
        .args(SCENARIO)
        .args(["--quiet", "--export", path.to_str().expect("utf8 path")])
        .assert()
        .success()
        .stderr(predicate::str::contains("MIA export written to"));

    let text = fs::read_to_string(&path).expect("read export");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Point,MD (ft),Inclination (deg),Azimuth (deg)");
    assert_eq!(lines[1], "1,0.00,0.00,0.00");
    assert_eq!(lines[3], "3,0.00,0.00,0.00");
    assert_eq!(lines[4], "4,500.80,3.24,45.00");
    assert!(!text.ends_with('\n'));
}

#[test]
fn negative_coordinates_need_no_equals_sign() {
    wellpath()
        .args(["--surface", "-10,0,0", "--target", "-100,50,3000"])
        .args(["--kop", "500", "--interval", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Surface Location\s+-10\.00\s+0\.00\s+0\.00").expect("regex"))
        .stdout(predicate::str::is_match(r"Target 1\s+-100\.00\s+50\.00\s+3000\.00").expect("regex"));
}

#[test]
fn incomplete_surface_is_reported() {
    wellpath()
        .args(["--target", "100,100,3000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please fill in all Surface Location fields.",
        ));
}

#[test]
fn bad_number_names_the_field() {
    wellpath()
        .args(["--surface", "0,0,0", "--target", "100,abc,3000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target 1 east"));
}

#[test]
fn plan_file_drives_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan = dir.path().join("plan.yaml");
    fs::write(
        &plan,
        "surface: { north: 0, east: 0, tvd: 0 }\n\
         targets:\n  - { north: 300, east: 400, tvd: 5000 }\n\
         interval: 100\n",
    )
    .expect("write plan");

    wellpath()
        .args(["--plan", plan.to_str().expect("utf8 path")])
        .args(["--columns", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4739.41"))
        .stdout(predicate::str::contains("4839.41"));
}

#[test]
fn plan_file_conflicts_with_inline_targets() {
    wellpath()
        .args(["--plan", "plan.yaml", "--target", "1,1,1"])
        .assert()
        .failure();
}

#[test]
fn table_goes_to_stdout() {
    wellpath()
        .args(SCENARIO)
        .args(["--quiet", "--table", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Point,MD (ft),Inc (deg),Azi (deg),North (ft),East (ft),TVD (ft),RF,DLS,Dogleg",
        ))
        .stdout(predicate::str::contains("Infinity"));
}

#[test]
fn two_d_handoff_needs_both_axes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("handoff.json");

    wellpath()
        .args(SCENARIO)
        .args(["--quiet", "--plot", "2d", "--x-axis", "North"])
        .args(["--handoff", path.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select both X and Y axes."));
}

#[test]
fn three_d_handoff_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("handoff.json");

    wellpath()
        .args(SCENARIO)
        .args(["--quiet", "--plot", "3d"])
        .args(["--handoff", path.to_str().expect("utf8 path")])
        .assert()
        .success();

    let text = fs::read_to_string(&path).expect("read handoff");
    assert!(text.contains("\"plot_type\": \"3D\""));
    assert!(text.contains("\"interpolatedData\""));
    assert!(text.contains("\"interpolatedmiaData\""));
    assert!(!text.contains("x_axis_label"));
}

#[test]
fn handoff_requires_plot_mode() {
    wellpath()
        .args(SCENARIO)
        .args(["--handoff", "-"])
        .assert()
        .failure();
}
