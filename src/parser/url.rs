//! URL selection and query-string decomposition.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use crate::tokenizer::{Token, TokenKind};

/// Pick the request URL by scanning from the end. Tokens carrying an
/// explicit `http(s)` scheme are preferred; the loose bare-domain shape is
/// only a fallback, so a dotted header value (a User-Agent string, say)
/// cannot shadow the actual target. Within a tier the reverse scan makes
/// the positionally-last candidate win when a URL-shaped string also
/// appears earlier as some flag's argument.
pub(super) fn select_url(tokens: &[Token]) -> String {
    tokens
        .iter()
        .rev()
        .find(|token| {
            token.kind == TokenKind::Url
                || (token.kind == TokenKind::Argument && has_url_scheme(&token.value))
        })
        .or_else(|| {
            tokens
                .iter()
                .rev()
                .find(|token| token.kind == TokenKind::Argument && looks_like_domain(&token.value))
        })
        .map(|token| token.value.clone())
        .unwrap_or_default()
}

fn has_url_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Loose `host.tld` shape: something, a dot, something that is not another
/// dot. Intentionally permissive; callers rely on the false positives.
fn looks_like_domain(value: &str) -> bool {
    match value.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty() && !rest.starts_with('.'),
        None => false,
    }
}

/// Parse the part after `?` into decoded key/value pairs. Pairs with an
/// empty key are dropped; later duplicates win; a pair that fails to decode
/// keeps its raw substrings without aborting the rest.
pub(super) fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key.is_empty() {
            continue;
        }
        let (key, value) = match (decode_component(key), decode_component(value)) {
            (Some(key), Some(value)) => (key, value),
            _ => (key.to_string(), value.to_string()),
        };
        params.insert(key, value);
    }
    params
}

/// Percent-decode one component; `None` when the decoded bytes are not
/// valid UTF-8.
pub(super) fn decode_component(component: &str) -> Option<String> {
    percent_decode_str(component)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
