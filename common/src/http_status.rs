//! HTTP status categorization for remote-call failures.

/// HTTP status code captured from a failed upstream response.
///
/// Kept as a plain `u16` wrapper so error types in `explainer-core` can
/// carry it without depending on reqwest's status type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 4xx responses. For the Gemini endpoint this almost always means the
    /// credential was rejected or the request body was malformed.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx responses: the service itself failed.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Coarse label used in log lines when a remote call fails.
    pub fn category(&self) -> &'static str {
        if self.is_client_error() {
            "client error"
        } else if self.is_server_error() {
            "server error"
        } else {
            "unexpected status"
        }
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
