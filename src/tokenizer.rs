//! Shell-like tokenizer for curl command strings.
//!
//! Splits a raw command into typed tokens while respecting single/double
//! quoting and backslash escaping. POSIX quoting rules are mirrored only as
//! far as curl snippets need them; there is no variable expansion, globbing,
//! or pipeline syntax. The tokenizer is lenient: unterminated quotes and
//! dangling escapes flush whatever was accumulated instead of failing.

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A `-`/`--` flag, dash included in the value.
    Option,
    /// A plain or quoted word.
    Argument,
    /// An unquoted `http(s)://` URL, captured whole.
    Url,
}

/// A single token produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded content: quotes stripped, escapes resolved.
    pub value: String,
    /// Original substring including quoting and escaping. Kept for
    /// round-trip and debugging use; never consulted when matching flags.
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Option,
    Argument,
    QuoteSingle,
    QuoteDouble,
    Escape,
}

/// Split a curl invocation into an ordered token sequence.
///
/// A leading `curl` word (any case) is stripped before scanning. Empty input
/// produces an empty sequence.
pub fn tokenize(command: &str) -> Vec<Token> {
    let command = strip_curl_prefix(command);
    let chars: Vec<char> = command.chars().collect();

    let mut tokens = Vec::new();
    let mut value = String::new();
    let mut raw = String::new();
    let mut kind = TokenKind::Argument;
    let mut state = State::Initial;
    // Which quote state to resume after an escape sequence.
    let mut escape_return = State::Initial;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            State::Initial => {
                if is_blank(c) {
                    i += 1;
                    continue;
                } else if c == '-' {
                    kind = TokenKind::Option;
                    value.push(c);
                    raw.push(c);
                    state = State::Option;
                } else if c == '\'' || c == '"' {
                    kind = TokenKind::Argument;
                    raw.push(c);
                    state = if c == '\'' {
                        State::QuoteSingle
                    } else {
                        State::QuoteDouble
                    };
                } else if rest_is_url(&chars[i..]) {
                    // Unquoted URLs are consumed whole in one step, so the
                    // interpreter can find the target without re-scanning
                    // arbitrary arguments for an http(s) prefix.
                    let start = i;
                    while i < chars.len() && !is_blank(chars[i]) {
                        i += 1;
                    }
                    let url: String = chars[start..i].iter().collect();
                    tokens.push(Token {
                        kind: TokenKind::Url,
                        value: url.clone(),
                        raw: url,
                    });
                    continue;
                } else {
                    kind = TokenKind::Argument;
                    value.push(c);
                    raw.push(c);
                    state = State::Argument;
                }
            }
            State::Option | State::Argument => {
                if is_blank(c) {
                    tokens.push(Token {
                        kind,
                        value: std::mem::take(&mut value),
                        raw: std::mem::take(&mut raw),
                    });
                    state = State::Initial;
                } else {
                    // A quote here is a literal character; an option token
                    // never opens a quoted section.
                    value.push(c);
                    raw.push(c);
                }
            }
            State::QuoteSingle => {
                if c == '\'' {
                    raw.push(c);
                    tokens.push(Token {
                        kind,
                        value: std::mem::take(&mut value),
                        raw: std::mem::take(&mut raw),
                    });
                    state = State::Initial;
                } else if c == '\\' && matches!(next, Some('\'') | Some('\\')) {
                    raw.push(c);
                    escape_return = state;
                    state = State::Escape;
                } else {
                    value.push(c);
                    raw.push(c);
                }
            }
            State::QuoteDouble => {
                if c == '"' {
                    raw.push(c);
                    tokens.push(Token {
                        kind,
                        value: std::mem::take(&mut value),
                        raw: std::mem::take(&mut raw),
                    });
                    state = State::Initial;
                } else if c == '\\' && matches!(next, Some('"') | Some('\\') | Some('$')) {
                    raw.push(c);
                    escape_return = state;
                    state = State::Escape;
                } else {
                    value.push(c);
                    raw.push(c);
                }
            }
            State::Escape => {
                value.push(c);
                raw.push(c);
                state = escape_return;
            }
        }
        i += 1;
    }

    // Lenient end-of-input: flush an in-progress token, terminated or not.
    if !value.is_empty() {
        tokens.push(Token { kind, value, raw });
    }

    tokens
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Trim the input and drop a leading `curl` word (case-insensitive) when it
/// stands alone or is followed by whitespace.
fn strip_curl_prefix(command: &str) -> &str {
    let trimmed = command.trim();
    match trimmed.get(..4) {
        Some(word) if word.eq_ignore_ascii_case("curl") => {
            let rest = &trimmed[4..];
            match rest.chars().next() {
                None => rest,
                Some(c) if is_blank(c) => rest.trim_start_matches(is_blank),
                Some(_) => trimmed,
            }
        }
        _ => trimmed,
    }
}

/// Does the remaining input start an unquoted URL (`https?://` followed by
/// at least one non-blank character)?
fn rest_is_url(rest: &[char]) -> bool {
    for scheme in ["http://", "https://"] {
        if rest_starts_with(rest, scheme) {
            return rest.get(scheme.len()).is_some_and(|c| !is_blank(*c));
        }
    }
    false
}

fn rest_starts_with(rest: &[char], prefix: &str) -> bool {
    prefix.chars().enumerate().all(|(i, p)| rest.get(i) == Some(&p))
}
