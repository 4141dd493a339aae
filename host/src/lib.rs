// Copyright 2023 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod app_args;
pub mod demo;
pub mod error;

use rlp_canon_lib::{encode_length, to_hex, Encoder, Offset, Value};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::{
    app_args::{App, Command, EncodeArgs, GlobalOpts},
    error::{HostError, HostResult},
};

impl GlobalOpts {
    /// Read the options from the config file and merge them with the current options.
    pub fn merge_from_file(&mut self) -> HostResult<()> {
        if !self.config_path.exists() {
            debug!("No config file at {}", self.config_path.display());
            return Ok(());
        }
        let file = std::fs::File::open(&self.config_path)?;
        let reader = std::io::BufReader::new(file);
        let mut config: JsonValue = serde_json::from_reader(reader)?;
        let this = serde_json::to_value(&self)?;
        merge(&mut config, &this);

        *self = serde_json::from_value(config)?;
        Ok(())
    }
}

/// Merges two json's together, overwriting `a` with the values of `b`
fn merge(a: &mut JsonValue, b: &JsonValue) {
    match (a, b) {
        (JsonValue::Object(a), JsonValue::Object(b)) => {
            for (k, v) in b {
                merge(a.entry(k.clone()).or_insert(JsonValue::Null), v);
            }
        }
        (a, b) if !b.is_null() => *a = b.clone(),
        // If b is null, just keep a (which means do nothing).
        _ => {}
    }
}

/// Runs the selected command and returns what should be printed.
pub fn run(app: &App) -> HostResult<String> {
    let encoder = Encoder::new(app.global_opts.single_byte_rule());
    match &app.command {
        Command::Encode(args) => {
            let json = read_json(args)?;
            let value = Value::try_from(&json)?;
            let bytes = encoder.encode(&value)?;
            info!(
                "Encoded {} value into {} bytes ({} rule)",
                value.kind(),
                bytes.len(),
                encoder.rule()
            );
            Ok(to_hex(&bytes))
        }
        Command::Length(args) => {
            let offset = if args.list { Offset::List } else { Offset::Scalar };
            Ok(to_hex(&encode_length(args.length, offset)?))
        }
        Command::Demo => demo::render(&encoder),
    }
}

fn read_json(args: &EncodeArgs) -> HostResult<JsonValue> {
    match (&args.json, &args.input_path) {
        (Some(json), _) => Ok(serde_json::from_str(json)?),
        (None, Some(path)) => {
            let file = std::fs::File::open(path)?;
            Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
        }
        (None, None) => Err(HostError::InvalidArgs(
            "either a JSON value or --input-path is required".to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlp_canon_lib::SingleByteRule;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_merge_keeps_unset_values() {
        let mut config = json!({"log_level": "debug", "single_byte_rule": "legacy"});
        merge(
            &mut config,
            &json!({"log_level": null, "single_byte_rule": "canonical", "max_log": 3}),
        );
        assert_eq!(
            config,
            json!({"log_level": "debug", "single_byte_rule": "canonical", "max_log": 3})
        );
    }

    #[test_log::test]
    fn test_merge_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"single_byte_rule": "legacy", "max_log": 3}}"#).unwrap();

        let mut opts = GlobalOpts {
            config_path: file.path().to_path_buf(),
            max_log: Some(10),
            ..Default::default()
        };
        opts.merge_from_file().unwrap();

        assert_eq!(opts.single_byte_rule(), SingleByteRule::Legacy);
        assert_eq!(opts.max_log(), 10);
        assert_eq!(opts.log_level(), "info");
    }

    #[test_log::test]
    fn test_missing_config_file_is_ignored() {
        let mut opts = GlobalOpts {
            config_path: "does/not/exist.json".into(),
            ..Default::default()
        };
        opts.merge_from_file().unwrap();
        assert_eq!(opts.single_byte_rule(), SingleByteRule::Canonical);
    }

    #[test]
    fn test_run_encode() {
        let app = App {
            global_opts: GlobalOpts::default(),
            command: Command::Encode(EncodeArgs {
                json: Some(r#"["cat", "dog"]"#.to_owned()),
                input_path: None,
            }),
        };
        assert_eq!(run(&app).unwrap(), "c88363617483646f67");
    }

    #[test]
    fn test_run_rejects_float() {
        let app = App {
            global_opts: GlobalOpts::default(),
            command: Command::Encode(EncodeArgs {
                json: Some("[1, 2.5]".to_owned()),
                input_path: None,
            }),
        };
        assert!(matches!(
            run(&app),
            Err(HostError::Rlp(rlp_canon_lib::RlpError::UnsupportedType {
                kind: "float",
                ..
            }))
        ));
    }
}
