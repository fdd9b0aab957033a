use assert_cmd::Command;
use predicates::prelude::*;

fn funcplot() -> Command {
    Command::cargo_bin("funcplot").unwrap()
}

#[test]
fn headless_default_frame() {
    funcplot()
        .arg("--headless")
        .assert()
        .success()
        .stdout("frame 1: axes drawn, 800 points plotted, 0 skipped\n");
}

#[test]
fn headless_runs_requested_frames() {
    funcplot()
        .args(["--headless", "--frames", "3", "--size", "400x300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frame 3: axes drawn, 800 points plotted"))
        .stdout(predicate::str::contains("frame 4").not());
}

#[test]
fn headless_counts_skipped_samples() {
    funcplot()
        .args(["--headless", "--expr", "sqrt(x)"])
        .assert()
        .success()
        .stdout("frame 1: axes drawn, 400 points plotted, 400 skipped\n");
}

#[test]
fn malformed_expression_still_draws_axes() {
    funcplot()
        .args(["--headless", "--expr", "2x^"])
        .assert()
        .success()
        .stdout("frame 1: axes drawn, plot skipped: operator is missing an operand\n");
}

#[test]
fn coarser_step_means_fewer_samples() {
    funcplot()
        .args(["--headless", "--step", "0.5", "--half-width", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("40 points plotted"));
}

#[test]
fn non_positive_step_is_rejected() {
    funcplot()
        .args(["--headless", "--step", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step"));
}

#[test]
fn zero_extent_is_rejected() {
    funcplot()
        .args(["--headless", "--half-height", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("half_height"));
}

#[test]
fn zero_fps_is_rejected() {
    funcplot()
        .args(["--headless", "--fps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fps"));
}

#[test]
fn malformed_size_is_rejected() {
    funcplot()
        .args(["--headless", "--size", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WIDTHxHEIGHT"));
}

#[test]
fn log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("funcplot.log");

    funcplot()
        .arg("--headless")
        .arg("--log")
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting funcplot"));
    assert!(contents.contains("render loop started"));
    assert!(contents.contains("headless run finished"));
}

#[test]
fn huge_extent_is_rejected() {
    funcplot()
        .args(["--headless", "--half-width", "1e19"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("half_width"));
}

#[test]
fn tiny_step_is_rejected() {
    funcplot()
        .args(["--headless", "--step", "1e-300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("samples per frame"));
}

#[test]
fn huge_point_radius_is_rejected() {
    funcplot()
        .args(["--headless", "--point-radius", "1e6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("point_radius"));
}
