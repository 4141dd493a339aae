use std::{io::Write, path::Path};

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// The `rlp-canon` binary with a config path that does not exist, so only the
/// built-in defaults apply unless a test says otherwise.
pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("rlp-canon").expect("binary should be built");
    cmd.env_remove("RUST_LOG")
        .arg("--config-path=missing-config.json");
    cmd
}

/// The `rlp-canon` binary reading its defaults from `config_path`.
pub fn cli_with_config(config_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rlp-canon").expect("binary should be built");
    cmd.env_remove("RUST_LOG")
        .arg(format!("--config-path={}", config_path.display()));
    cmd
}

pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
