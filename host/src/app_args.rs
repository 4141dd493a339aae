use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rlp_canon_lib::SingleByteRule;
use serde::{Deserialize, Serialize};

fn default_config_path() -> PathBuf {
    PathBuf::from("host/config/config.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log() -> usize {
    7
}

#[derive(Debug, Parser)]
#[command(
    name = "rlp-canon",
    about = "Canonical RLP encoder",
    long_about = None
)]
pub struct App {
    #[command(flatten)]
    pub global_opts: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a JSON value and print the RLP bytes as hex. Arrays are lists,
    /// `0x` strings are bytes, other strings are text, non-negative integers are
    /// numbers and `{"bigint": "..."}` holds an integer of any size. Use
    /// `{"text": "..."}` or `{"bytes": "..."}` to pick the kind explicitly, e.g.
    /// for text that starts with `0x`.
    Encode(EncodeArgs),
    /// Print the length prefix for a payload of the given size as hex.
    Length(LengthArgs),
    /// Print the encodings of the built-in demonstration inputs.
    Demo,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// JSON value to encode
    #[arg(required_unless_present = "input_path")]
    pub json: Option<String>,

    #[arg(long, require_equals = true, conflicts_with = "json")]
    /// Read the JSON value from a file instead
    pub input_path: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LengthArgs {
    /// Payload length in bytes
    pub length: u128,

    #[arg(long)]
    /// Use the list offset (0xc0) instead of the scalar offset (0x80)
    pub list: bool,
}

/// Options shared by every command. Values given on the command line win over
/// the config file, which wins over the built-in defaults.
#[derive(Default, Clone, Serialize, Deserialize, Debug, Args)]
#[serde(default)]
pub struct GlobalOpts {
    #[arg(long, require_equals = true, default_value = "host/config/config.json")]
    #[serde(default = "default_config_path")]
    /// Path to a json config file with default values for the options below.
    /// A missing file is ignored
    pub config_path: PathBuf,

    #[arg(long, require_equals = true, env = "RUST_LOG")]
    /// Set the log level
    /// [default: info]
    pub log_level: Option<String>,

    #[arg(long, require_equals = true)]
    /// Write json logs to daily rotated files in this directory
    pub log_path: Option<PathBuf>,

    #[arg(long, require_equals = true)]
    /// Number of rotated log files to keep
    /// [default: 7]
    pub max_log: Option<usize>,

    #[arg(long, require_equals = true)]
    /// Which single bytes skip the length prefix: `canonical` (below 0x80) or
    /// `legacy` (up to and including 0x80)
    /// [default: canonical]
    pub single_byte_rule: Option<SingleByteRule>,
}

impl GlobalOpts {
    pub fn log_level(&self) -> String {
        self.log_level.clone().unwrap_or_else(default_log_level)
    }

    pub fn max_log(&self) -> usize {
        self.max_log.unwrap_or_else(default_max_log)
    }

    pub fn single_byte_rule(&self) -> SingleByteRule {
        self.single_byte_rule.unwrap_or_default()
    }
}
