use std::fs;

use predicates::prelude::*;

use crate::harness::{TestContext, completion_body};

const ORIGINAL: &str = "resource \"aws_instance\" \"web\" {}\n";

#[test]
fn one_feedback_submission_sends_one_request() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("main.tf"), ORIGINAL).unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::Regex("use gp3 volumes".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("resource \"aws_instance\" \"web\" { volume_type = \"gp3\" }"))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli()
        .args([
            "refine",
            "main.tf",
            "--feedback",
            "use gp3 volumes",
            "--provider",
            "aws",
            "--service",
            "EC2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("gp3"));

    mock.assert();

    // Without --write the input file is left untouched.
    assert_eq!(fs::read_to_string(ctx.work_dir().join("main.tf")).unwrap(), ORIGINAL);
}

#[test]
fn blank_feedback_fails_without_calling_the_endpoint() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("main.tf"), ORIGINAL).unwrap();

    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/v1/chat/completions").expect(0).create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli()
        .args([
            "refine",
            "main.tf",
            "--feedback",
            "   ",
            "--provider",
            "aws",
            "--service",
            "EC2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Feedback must not be empty"));

    mock.assert();
}
