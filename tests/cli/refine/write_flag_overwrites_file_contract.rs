use std::fs;

use predicates::prelude::*;

use crate::harness::{TestContext, completion_body};

#[test]
fn write_flag_replaces_the_input_file_with_the_revision() {
    let refined = "resource \"google_sql_database_instance\" \"db\" {\n  deletion_protection = true\n}";

    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("main.tf"), "resource \"google_sql_database_instance\" \"db\" {}\n")
        .unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(refined))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli()
        .args([
            "refine",
            "main.tf",
            "--feedback",
            "enable deletion protection",
            "--provider",
            "gcp",
            "--service",
            "Cloud SQL",
            "--write",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Updated main.tf"));

    assert_eq!(fs::read(ctx.work_dir().join("main.tf")).unwrap(), refined.as_bytes());
    mock.assert();
}
