use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn simulate_n_writes_batch_report_and_histogram() {
    let config_file = assert_fs::NamedTempFile::new("batch.yaml").unwrap();
    config_file
        .write_str("simulation:\n  days: 60\n  demand_model: normal\n")
        .unwrap();
    let output_file = assert_fs::NamedTempFile::new("batch_out.yaml").unwrap();

    let config_arg = config_file.path().to_str().unwrap();
    let output_arg = output_file.path().to_str().unwrap();
    let histogram_path = format!("{output_arg}.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("stockpolicy");
    cmd.args([
        "simulate-n", "-c", config_arg, "-o", output_arg, "-n", "40", "-s", "3",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Batch Simulation Report"))
        .stdout(predicate::str::contains("Iterations: 40"))
        .stdout(predicate::str::contains(format!(
            "Batch result for 40 runs written to {output_arg}"
        )));

    let output = fs::read_to_string(output_arg).unwrap();
    assert!(output.contains("report:"));
    assert!(output.contains("demand_model: normal"));
    assert!(output.contains("stockout_days:"));
    assert!(output.contains("p85:"));
    assert!(output.contains("stockout_counts:"));

    assert!(fs::metadata(&histogram_path).unwrap().len() > 0);
    fs::remove_file(&histogram_path).unwrap();
}

#[test]
fn simulate_n_rejects_zero_iterations() {
    let output_file = assert_fs::NamedTempFile::new("none.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("stockpolicy");
    cmd.args(["simulate-n", "-o", output_arg, "-n", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("iterations must be greater than zero"));
}
