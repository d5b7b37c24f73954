use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Structured result of parsing a curl invocation.
///
/// Fields mirror what the command line said, not what a well-formed HTTP
/// request requires: `url` may be empty, header names keep the case they
/// were written in, and nothing is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequest {
    pub url: String,
    /// Upper-cased method; `"GET"` unless a method or data flag changed it.
    pub method: String,
    pub headers: HashMap<String, String>,
    /// Key/value pairs split off the URL's query string, percent-decoded.
    pub query: HashMap<String, String>,
    /// Raw body data; multiple data flags are joined with `&`.
    pub data: Option<String>,
    /// Credentials from `-u`/`--user` in their original `user:pass` form.
    pub auth: Option<String>,
    pub cookies: HashMap<String, String>,
    /// Timeout value kept verbatim, not parsed to a number.
    pub timeout: Option<String>,
    /// Reserved; no flag in the default registry populates it.
    pub proxy: Option<String>,
    pub follow_redirects: bool,
    pub insecure: bool,
    pub compressed: bool,
    /// Populated only when the body's effective content type is url-encoded
    /// form data. Mutually exclusive with `multipart_form_data`.
    pub form_data: Option<HashMap<String, String>>,
    /// Populated only for multipart form bodies.
    pub multipart_form_data: Option<HashMap<String, String>>,
}

impl Default for ParsedRequest {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: "GET".to_string(),
            headers: HashMap::new(),
            query: HashMap::new(),
            data: None,
            auth: None,
            cookies: HashMap::new(),
            timeout: None,
            proxy: None,
            follow_redirects: false,
            insecure: false,
            compressed: false,
            form_data: None,
            multipart_form_data: None,
        }
    }
}
