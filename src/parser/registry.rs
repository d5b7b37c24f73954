//! Flag registry: single source of truth for the recognized curl flags.
//!
//! The interpreter dispatches entirely on membership here; swapping in a
//! different table changes which flags are understood without touching the
//! pass itself. Flags absent from the table are silently skipped.

/// Default content type implied by the plain data flags.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
/// Default content type implied by `--data-binary`.
pub const OCTET_STREAM: &str = "application/octet-stream";
/// Default content type implied by `-F`/`--form`.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Semantic category of a recognized flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    /// Headers-only request (`-I`).
    Head,
    /// Request compressed transfer (`--compressed`).
    Compressed,
    /// Explicit method; the next token carries the method name.
    Method,
    /// Free-form header; the next token is a `Name: value` pair.
    HeaderPair,
    /// Fixed header name, filled from the next token.
    Header(&'static str),
    /// Body data; the payload is the flag's implied default content type.
    Data(&'static str),
    /// Basic auth credentials in `user:pass` form.
    User,
    /// Cookie string of `;`-separated pairs.
    Cookie,
    /// Timeout value, kept verbatim.
    Timeout,
    /// Follow redirects.
    Redirect,
    /// Skip TLS verification.
    Insecure,
}

impl FlagEffect {
    /// Whether the flag consumes the following token as its argument.
    pub fn takes_value(self) -> bool {
        !matches!(
            self,
            FlagEffect::Head | FlagEffect::Compressed | FlagEffect::Redirect | FlagEffect::Insecure
        )
    }
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Primary spelling (long form where curl defines one).
    pub long: &'static str,
    /// Optional short spelling.
    pub short: Option<&'static str>,
    /// What the flag does to the accumulated request.
    pub effect: FlagEffect,
    /// Human-readable description.
    pub description: &'static str,
}

impl FlagDef {
    /// Check if this definition matches the given option token.
    pub fn matches(&self, arg: &str) -> bool {
        arg == self.long || self.short == Some(arg)
    }
}

/// Build the default flag registry.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        // === Method flags ===
        FlagDef {
            long: "-I",
            short: None,
            effect: FlagEffect::Head,
            description: "Fetch headers only",
        },
        FlagDef {
            long: "--compressed",
            short: None,
            effect: FlagEffect::Compressed,
            description: "Request a compressed response",
        },
        FlagDef {
            long: "--request",
            short: Some("-X"),
            effect: FlagEffect::Method,
            description: "Explicit request method",
        },
        // === Header flags ===
        FlagDef {
            long: "--header",
            short: Some("-H"),
            effect: FlagEffect::HeaderPair,
            description: "Add a header from a 'Name: value' pair",
        },
        FlagDef {
            long: "--user-agent",
            short: Some("-A"),
            effect: FlagEffect::Header("User-Agent"),
            description: "Set the User-Agent header",
        },
        // === Data flags, each with its implied content type ===
        FlagDef {
            long: "--data",
            short: Some("-d"),
            effect: FlagEffect::Data(FORM_URLENCODED),
            description: "Request body data",
        },
        FlagDef {
            long: "--data-raw",
            short: None,
            effect: FlagEffect::Data(FORM_URLENCODED),
            description: "Request body data, no @file interpretation",
        },
        FlagDef {
            long: "--data-urlencode",
            short: None,
            effect: FlagEffect::Data(FORM_URLENCODED),
            description: "Request body data, url-encoded",
        },
        FlagDef {
            long: "--data-binary",
            short: None,
            effect: FlagEffect::Data(OCTET_STREAM),
            description: "Request body data, sent as-is",
        },
        FlagDef {
            long: "--form",
            short: Some("-F"),
            effect: FlagEffect::Data(MULTIPART_FORM_DATA),
            description: "Multipart form field",
        },
        // === Everything else ===
        FlagDef {
            long: "--user",
            short: Some("-u"),
            effect: FlagEffect::User,
            description: "Basic auth credentials (user:pass)",
        },
        FlagDef {
            long: "--cookie",
            short: Some("-b"),
            effect: FlagEffect::Cookie,
            description: "Cookies to send",
        },
        // -m sits here because the classic table treats it as the short
        // timeout spelling; --max-time itself is not recognized.
        FlagDef {
            long: "--connect-timeout",
            short: Some("-m"),
            effect: FlagEffect::Timeout,
            description: "Timeout in seconds",
        },
        FlagDef {
            long: "--location",
            short: Some("-L"),
            effect: FlagEffect::Redirect,
            description: "Follow redirects",
        },
        FlagDef {
            long: "--insecure",
            short: Some("-k"),
            effect: FlagEffect::Insecure,
            description: "Skip TLS certificate verification",
        },
    ]
}
