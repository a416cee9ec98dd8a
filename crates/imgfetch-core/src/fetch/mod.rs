//! HTTP retrieval.
//!
//! Uses the curl crate (libcurl) to GET a URL with an identifying User-Agent
//! and a hard timeout, buffering the full response body and capturing the
//! reported Content-Type. No retries; any transport failure or non-2xx status
//! is an error.

mod headers;

use std::fmt;
use std::str;
use std::time::Duration;

/// Identifying User-Agent sent with every request.
pub const USER_AGENT: &str = "UbuntuImageFetcher/1.0";

/// Per-request timeout applied by default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Knobs for a single fetch. `Default` gives the production values; tests
/// shorten the timeout to exercise the failure path quickly.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A buffered HTTP response: full body plus the reported Content-Type
/// (empty string when the header was absent).
#[derive(Debug, Clone)]
pub struct Response {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Error from a single fetch (curl failure or HTTP error status).
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection refused, TLS, etc.).
    Curl(curl::Error),
    /// Response had a non-2xx status.
    Http(u32),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}

/// Performs a GET request and returns the buffered body and Content-Type.
///
/// Follows redirects; only the final response's headers count. Runs in the
/// current thread and blocks until the transfer completes or times out.
pub fn fetch(url: &str, options: &FetchOptions) -> Result<Response, FetchError> {
    let mut body: Vec<u8> = Vec::new();
    let mut header_lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(&options.user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(options.timeout)?;
    easy.timeout(options.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    let content_type = headers::content_type_from_lines(&header_lines);
    tracing::debug!(url, content_type = %content_type, bytes = body.len(), "fetch completed");

    Ok(Response { body, content_type })
}
