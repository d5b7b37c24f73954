//! Curl command interpretation pipeline.
//!
//! ```text
//! Raw command → Tokenize → Interpret (+ flag registry) → ParsedRequest
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently. The
//! registry is plain data; substituting a different table changes which
//! flags the interpreter understands.

mod interpreter;
mod registry;
mod url;

pub use registry::{flag_registry, FlagDef, FlagEffect};

use crate::request::ParsedRequest;
use crate::tokenizer::tokenize;

/// Parse a curl invocation with the default flag registry.
pub fn parse(command: &str) -> ParsedRequest {
    parse_with_registry(command, &flag_registry())
}

/// Parse a curl invocation against a caller-supplied flag registry.
///
/// Blank input short-circuits to the default record without tokenizing.
pub fn parse_with_registry(command: &str, registry: &[FlagDef]) -> ParsedRequest {
    if command.trim().is_empty() {
        return ParsedRequest::default();
    }
    let tokens = tokenize(command);
    tracing::trace!(?tokens, "tokenized curl command");
    interpreter::interpret(&tokens, registry)
}
