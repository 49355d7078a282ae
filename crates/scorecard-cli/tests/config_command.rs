mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_config_init_then_show() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written to"));
    assert!(fixture.data_dir().join("config.toml").exists());

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[api]"))
        .stdout(predicate::str::contains("footnote_tokens = \"per_step\""))
        .stdout(predicate::str::contains("api_key").not());
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let fixture = TestFixture::new();

    fixture.command().args(["config", "init"]).assert().success();
    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_masks_api_key() {
    let fixture = TestFixture::new();

    fixture
        .command_with_format("json")
        .env("SCORECARD_API_KEY", "secret-key")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"api_key\": \"********\""))
        .stdout(predicate::str::contains("secret-key").not());
}

#[test]
fn test_compare_without_api_key_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["compare", "MIT", "Stanford"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API key configured"));
}
