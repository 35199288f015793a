use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_run_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-customizer"));
    cmd.arg("run").arg("tests/fixtures/run_input.json");

    cmd.assert().success().stdout(
        "{\"operations\":[\
         {\"move\":{\"paymentMethodId\":\"B\",\"index\":0}},\
         {\"move\":{\"paymentMethodId\":\"A\",\"index\":1}},\
         {\"hide\":{\"paymentMethodId\":\"C\"}}]}\n",
    );

    Ok(())
}

#[test]
fn test_cli_run_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let input = std::fs::read_to_string("tests/fixtures/run_input.json")?;

    let mut cmd = assert_cmd::Command::new(cargo_bin!("payment-customizer"));
    cmd.arg("run").arg("--pretty").write_stdin(input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"paymentMethodId\": \"B\""))
        .stdout(predicate::str::contains("\"index\": 1"));

    Ok(())
}

#[test]
fn test_cli_encode_priority_list() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-customizer"));
    cmd.arg("encode").arg("tests/fixtures/priorities.csv");

    cmd.assert().success().stdout(
        "[{\"name\":\"Card\",\"priority\":1},\
         {\"name\":\"Cash on Delivery\",\"priority\":2},\
         {\"name\":\"Bank Deposit\",\"priority\":3}]\n",
    );

    Ok(())
}

#[test]
fn test_cli_debug_logging_goes_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-customizer"));
    cmd.env_remove("RUST_LOG")
        .arg("--log-level")
        .arg("debug")
        .arg("run")
        .arg("tests/fixtures/run_input.json");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Resolved payment method operations"))
        .stdout(predicate::str::contains("Resolved").not());

    Ok(())
}
