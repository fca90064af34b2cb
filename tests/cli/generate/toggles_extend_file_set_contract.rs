use predicates::prelude::*;

use crate::harness::{TestContext, completion_body};

#[test]
fn modules_and_rego_toggles_add_two_files() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("generated"))
        .expect(8)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli()
        .args(["generate", "--provider", "gcp", "--service", "GKE", "--modules", "--rego"])
        .assert()
        .success()
        .stdout(predicate::str::contains("===== modules.tf ====="))
        .stdout(predicate::str::contains("===== rego_policies.tf ====="))
        .stdout(predicate::str::contains("✅ Generated 8 file(s)."));

    mock.assert();
}
