use crate::harness::{TestContext, completion_body};

#[test]
fn exported_files_match_completion_output_byte_for_byte() {
    let content = "resource \"aws_instance\" \"web\" {\n  ami           = var.ami\n  instance_type = var.instance_type\n}";

    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(content))
        .expect(6)
        .create();
    ctx.write_config(&format!("{}/v1/chat/completions", server.url()));

    ctx.cli()
        .args(["generate", "--provider", "aws", "--service", "EC2", "--out", "out"])
        .assert()
        .success();

    for file in
        ["provider.tf", "variables.tf", "main.tf", "backend.tf", "outputs.tf", "instructions.md"]
    {
        assert_eq!(
            ctx.read_exported("out", file),
            content.as_bytes(),
            "{} was not exported verbatim",
            file
        );
    }

    mock.assert();
}
