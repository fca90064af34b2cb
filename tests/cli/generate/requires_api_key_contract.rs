use predicates::prelude::*;

use crate::harness::TestContext;

#[test]
fn missing_credential_is_fatal_before_any_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/v1/chat/completions").expect(0).create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli_without_api_key()
        .args(["generate", "--provider", "aws", "--service", "EC2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing environment variable: OPENAI_API_KEY"));

    mock.assert();
}
