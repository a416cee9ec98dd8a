//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body with a configurable status and Content-Type,
//! or stalls without responding to exercise the client timeout.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ImageServerOptions {
    /// HTTP status line code for every response.
    pub status: u32,
    /// `Content-Type` header value; `None` omits the header entirely.
    pub content_type: Option<String>,
    /// If true, accept connections but never write a response.
    pub stall: bool,
}

impl Default for ImageServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: Some("image/png".to_string()),
            stall: false,
        }
    }
}

/// Starts a server in a background thread serving `body` with the given
/// Content-Type. Returns the base URL (e.g. "http://127.0.0.1:12345/").
/// The server runs until the process exits.
pub fn start(body: Vec<u8>, content_type: &str) -> String {
    start_with_options(
        body,
        ImageServerOptions {
            content_type: Some(content_type.to_string()),
            ..ImageServerOptions::default()
        },
    )
}

/// Like `start` but with full control over status/Content-Type/stalling.
pub fn start_with_options(body: Vec<u8>, opts: ImageServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &body, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: &ImageServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));

    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    if opts.stall {
        // Hold the connection open well past any client timeout.
        thread::sleep(Duration::from_secs(30));
        return;
    }

    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        _ => "Status",
    };
    let content_type_header = opts
        .content_type
        .as_deref()
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        opts.status,
        reason,
        body.len(),
        content_type_header
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
