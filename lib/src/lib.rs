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

//! Canonical Recursive Length Prefix (RLP) encoding of nested lists and scalars.
//!
//! ```
//! use rlp_canon_lib::{encode, to_hex, Value};
//!
//! let bytes = encode(&Value::list(["cat", "dog"])).unwrap();
//! assert_eq!(to_hex(&bytes), "c88363617483646f67");
//! ```

pub mod encode;
pub mod error;
pub mod header;
#[cfg(feature = "json")]
pub mod json;
pub mod scalar;
pub mod utils;
pub mod value;

pub use encode::{encode, Encoder, SingleByteRule};
pub use error::{RlpError, RlpResult};
pub use header::{encode_length, length_of_length, Offset, LIST_OFFSET, SCALAR_OFFSET};
#[cfg(feature = "json")]
pub use json::encode_json;
pub use scalar::{minimal_be_bytes, normalize};
pub use utils::to_hex;
pub use value::Value;

/// The encoding of every empty scalar: zero, empty bytes and the empty string.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// The encoding of the empty list.
pub const EMPTY_LIST_CODE: u8 = 0xc0;
