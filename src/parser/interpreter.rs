//! Interpreter: walks the token stream and accumulates a request.
//!
//! A single forward pass over the tokens, with the cursor advancing an extra
//! step whenever a flag consumes its argument. The URL is located separately
//! by one reverse scan before the pass begins.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::registry::{FlagDef, FlagEffect, FORM_URLENCODED, MULTIPART_FORM_DATA};
use super::url::{decode_component, parse_query, select_url};
use crate::request::ParsedRequest;
use crate::tokenizer::{Token, TokenKind};

const CONTENT_TYPE: &str = "Content-Type";

/// Interpret a token sequence against a flag registry.
pub(super) fn interpret(tokens: &[Token], registry: &[FlagDef]) -> ParsedRequest {
    let mut builder = RequestBuilder::new(select_url(tokens));

    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        // URL tokens were handled by the reverse scan; arguments not claimed
        // by a preceding flag carry no meaning of their own.
        if token.kind != TokenKind::Option {
            continue;
        }

        let effect = match registry.iter().find(|def| def.matches(&token.value)) {
            Some(def) => def.effect,
            None => {
                if let Some(method) = fused_method(&token.value) {
                    builder.request.method = method.to_string();
                } else {
                    tracing::trace!(flag = %token.value, "unrecognized flag, skipping");
                }
                continue;
            }
        };

        if effect.takes_value() {
            // A flag with no token left to consume is a no-op.
            let Some(argument) = iter.next() else { continue };
            builder.apply_value_flag(effect, &argument.value);
        } else {
            builder.apply_bare_flag(effect);
        }
    }

    builder.finish()
}

/// Method fused into the flag spelling, as in `-XPUT`.
fn fused_method(value: &str) -> Option<&str> {
    let method = value.strip_prefix("-X")?;
    if !method.is_empty() && method.bytes().all(|b| b.is_ascii_uppercase()) {
        Some(method)
    } else {
        None
    }
}

/// Mutable accumulator for the single pass.
///
/// Holds the partially-built [`ParsedRequest`] plus the order-dependent
/// intermediate state (pending data chunks, pending form entries) that only
/// resolves once the whole token stream has been seen.
struct RequestBuilder {
    request: ParsedRequest,
    data_chunks: Vec<String>,
    form_entries: Vec<(String, String)>,
}

impl RequestBuilder {
    fn new(url: String) -> Self {
        Self {
            request: ParsedRequest {
                url,
                ..ParsedRequest::default()
            },
            data_chunks: Vec::new(),
            form_entries: Vec::new(),
        }
    }

    fn apply_bare_flag(&mut self, effect: FlagEffect) {
        match effect {
            FlagEffect::Head => self.request.method = "HEAD".to_string(),
            FlagEffect::Compressed => {
                self.request.compressed = true;
                self.request
                    .headers
                    .entry("Accept-Encoding".to_string())
                    .or_insert_with(|| "deflate, gzip".to_string());
            }
            FlagEffect::Redirect => self.request.follow_redirects = true,
            FlagEffect::Insecure => self.request.insecure = true,
            // Value-taking effects are routed through apply_value_flag.
            _ => {}
        }
    }

    fn apply_value_flag(&mut self, effect: FlagEffect, argument: &str) {
        match effect {
            FlagEffect::Method => self.request.method = argument.to_uppercase(),
            FlagEffect::HeaderPair => self.header_pair(argument),
            FlagEffect::Header(name) => {
                self.request
                    .headers
                    .insert(name.to_string(), argument.to_string());
            }
            FlagEffect::Data(content_type) => self.push_data(content_type, argument),
            FlagEffect::User => self.set_auth(argument),
            FlagEffect::Cookie => self.add_cookies(argument),
            FlagEffect::Timeout => self.request.timeout = Some(argument.to_string()),
            // Bare effects never reach here; takes_value filtered them out.
            _ => {}
        }
    }

    /// Split a `Name: value` argument on the first colon. Arguments without
    /// a colon are dropped; the value loses its leading whitespace only.
    fn header_pair(&mut self, argument: &str) {
        let Some((name, value)) = argument.split_once(':') else {
            return;
        };
        if name.is_empty() {
            return;
        }
        self.request
            .headers
            .insert(name.to_string(), value.trim_start().to_string());
    }

    /// The data-flag rule. The flag's default content type applies only when
    /// no Content-Type header is set yet; the branch below then reads the
    /// *current* header, so an explicit `-H` seen earlier always wins.
    fn push_data(&mut self, default_content_type: &str, argument: &str) {
        if !self.request.headers.contains_key(CONTENT_TYPE) {
            self.request
                .headers
                .insert(CONTENT_TYPE.to_string(), default_content_type.to_string());
        }
        let content_type = self
            .request
            .headers
            .get(CONTENT_TYPE)
            .cloned()
            .unwrap_or_default();

        if content_type == MULTIPART_FORM_DATA {
            // Arguments without `=` are dropped.
            if let Some((key, value)) = argument.split_once('=') {
                self.request
                    .multipart_form_data
                    .get_or_insert_with(HashMap::new)
                    .insert(key.to_string(), value.to_string());
            }
        } else {
            // The `{` check keeps JSON bodies that happen to contain `=`
            // out of the form entries.
            if content_type == FORM_URLENCODED
                && argument.contains('=')
                && !argument.starts_with('{')
            {
                for pair in argument.split('&') {
                    let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                    if !key.is_empty() {
                        self.form_entries.push((key.to_string(), value.to_string()));
                    }
                }
            }
            self.data_chunks.push(argument.to_string());
        }

        // Data implies POST, but never overrides an explicit method flag.
        if self.request.method == "GET" {
            self.request.method = "POST".to_string();
        }
    }

    fn set_auth(&mut self, credentials: &str) {
        self.request.auth = Some(credentials.to_string());
        let encoded = STANDARD.encode(credentials);
        self.request
            .headers
            .insert("Authorization".to_string(), format!("Basic {encoded}"));
    }

    /// Split a cookie string on `;`, then each segment on its first `=`.
    /// Later pairs overwrite earlier ones with the same key; a segment whose
    /// value fails to decode keeps the raw value without aborting the rest.
    fn add_cookies(&mut self, argument: &str) {
        for segment in argument.split(';') {
            let Some((key, value)) = segment.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let value = decode_component(value).unwrap_or_else(|| value.to_string());
            self.request.cookies.insert(key.to_string(), value);
        }
    }

    /// Resolve the order-dependent state and produce the final record.
    fn finish(mut self) -> ParsedRequest {
        if !self.data_chunks.is_empty() {
            self.request.data = Some(self.data_chunks.join("&"));
        }

        // Form entries only count if the content type still says so after
        // the whole pass; a later `-H` can retract them. Multipart entries
        // keep form_data absent, the two maps never coexist.
        if !self.form_entries.is_empty()
            && self.request.multipart_form_data.is_none()
            && self
                .request
                .headers
                .get(CONTENT_TYPE)
                .is_some_and(|ct| ct == FORM_URLENCODED)
        {
            let mut form = HashMap::new();
            for (key, value) in self.form_entries {
                form.insert(key, value);
            }
            self.request.form_data = Some(form);
        }

        if let Some((base, query)) = self.request.url.split_once('?') {
            let base = base.to_string();
            self.request.query = parse_query(query);
            self.request.url = base;
        }

        self.request
    }
}
