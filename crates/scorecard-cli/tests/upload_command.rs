mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_upload_stores_sanitized_copy() {
    let fixture = TestFixture::new();
    let source = fixture.write_file("My Transcript (2024).txt", "GPA 3.9");

    fixture
        .command()
        .arg("upload")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("File uploaded:"));

    let stored = fixture.data_dir().join("uploads/My_Transcript__2024_.txt");
    assert_eq!(std::fs::read_to_string(stored).unwrap(), "GPA 3.9");
}

#[test]
fn test_upload_rejects_disallowed_type() {
    let fixture = TestFixture::new();
    let source = fixture.write_file("chart.png", "png");

    fixture
        .command()
        .arg("upload")
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File type disallowed: image/png"));
}
