//! Shared testing harness for `terragen` integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Build a chat-completions success body carrying `content`.
pub(crate) fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
    .to_string()
}

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    _root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { _root: root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a `terragen.toml` pointing the completion endpoint at `api_url`.
    ///
    /// Retries are reduced to a single attempt so failure tests stay fast.
    pub(crate) fn write_config(&self, api_url: &str) {
        let content = format!(
            r#"[api]
api_url = "{}"
model = "gpt-4o"
temperature = 0.1
timeout_secs = 5
max_retries = 1
retry_delay_ms = 1
"#,
            api_url
        );
        fs::write(self.work_dir.join("terragen.toml"), content)
            .expect("Failed to write test config");
    }

    /// Build a command for the compiled `terragen` binary with a test credential.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("terragen").expect("Failed to locate terragen binary");
        cmd.current_dir(&self.work_dir).env("OPENAI_API_KEY", "test-key");
        cmd
    }

    /// Build a command with the credential removed from the environment.
    pub(crate) fn cli_without_api_key(&self) -> Command {
        let mut cmd = Command::cargo_bin("terragen").expect("Failed to locate terragen binary");
        cmd.current_dir(&self.work_dir).env_remove("OPENAI_API_KEY");
        cmd
    }

    /// Read an exported file from a directory below the work dir.
    pub(crate) fn read_exported(&self, dir: &str, file: &str) -> Vec<u8> {
        fs::read(self.work_dir.join(dir).join(file)).expect("Failed to read exported file")
    }

    /// True when the exported file exists.
    pub(crate) fn exported_exists(&self, dir: &str, file: &str) -> bool {
        self.work_dir.join(dir).join(file).exists()
    }
}
