use predicates::prelude::*;

use crate::harness::TestContext;

#[test]
fn exits_nonzero_when_every_file_fails() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"invalid request"}}"#)
        .expect(6)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli()
        .args(["generate", "--provider", "azure", "--service", "AKS"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ All 6 file(s) failed to generate."))
        .stdout(predicate::str::contains("===== provider.tf ====="))
        .stdout(predicate::str::contains("Generation failed: Completion API error: invalid request"));

    mock.assert();
}
