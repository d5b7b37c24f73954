//! Parse curl command lines into structured request descriptors.
//!
//! Turns a shell-quoted `curl ...` string into a [`ParsedRequest`]: method,
//! URL, headers, query parameters, body data, auth, cookies, and the common
//! transfer flags. No shell is invoked and no request is issued; replaying,
//! inspecting, or translating the descriptor is the caller's business.
//!
//! ```text
//! Raw command → Tokenize → Interpret (+ flag registry) → ParsedRequest
//! ```
//!
//! Parsing is deliberately permissive. Unrecognized flags are skipped,
//! malformed arguments degrade to no-ops, and nothing returns an error; a
//! mangled snippet produces a partial descriptor rather than a failure.
//!
//! # Example
//!
//! ```
//! use curl_parser::parse;
//!
//! let request = parse(
//!     r#"curl -X POST -H "Content-Type: application/json" -d '{"name":"Sleepy"}' https://api.example.com/items"#,
//! );
//! assert_eq!(request.method, "POST");
//! assert_eq!(request.url, "https://api.example.com/items");
//! assert_eq!(request.data.as_deref(), Some(r#"{"name":"Sleepy"}"#));
//! ```

mod parser;
mod request;
mod tokenizer;

pub use parser::{flag_registry, parse, parse_with_registry, FlagDef, FlagEffect};
pub use request::ParsedRequest;
pub use tokenizer::{tokenize, Token, TokenKind};
