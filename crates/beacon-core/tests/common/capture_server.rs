//! Minimal HTTP/1.1 server that records POST bodies for integration tests.
//!
//! Each request is answered with a fixed status and its method, headers and
//! body are sent over a channel so the test can assert on what the
//! transport put on the wire.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Starts a server answering every request with `status` (e.g. "202 Accepted").
/// Returns the endpoint URL and the receiving end of the capture channel. The
/// server runs until the process exits.
pub fn start(status: &'static str) -> (String, Receiver<CapturedRequest>) {
    start_with_headers(status, "")
}

/// Like `start` but adds `extra_headers` (each line ending in `\r\n`) to every
/// response, e.g. a `Location` header for redirects.
pub fn start_with_headers(
    status: &'static str,
    extra_headers: &'static str,
) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let tx = tx.clone();
            thread::spawn(move || handle(stream, status, extra_headers, tx));
        }
    });
    (format!("http://127.0.0.1:{}/api/event", port), rx)
}

fn handle(
    mut stream: TcpStream,
    status: &str,
    extra_headers: &str,
    tx: Sender<CapturedRequest>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_header_end(&data) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while data.len() < body_start + content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    let end = (body_start + content_length).min(data.len());
    let body = String::from_utf8_lossy(&data[body_start.min(end)..end]).into_owned();

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n{}\r\nok",
        status, extra_headers
    );
    let _ = stream.write_all(response.as_bytes());

    let _ = tx.send(CapturedRequest {
        method,
        path,
        headers,
        body,
    });
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}
