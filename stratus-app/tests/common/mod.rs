//! Scripted one-thread HTTP server for end-to-end flow tests.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// What the server saw for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Serves a scripted list of `(status, body)` responses in order, one
/// connection per exchange, then exits.
pub struct MockBackend {
    pub port: u16,
    requests: Receiver<Seen>,
    handle: Option<JoinHandle<()>>,
}

impl MockBackend {
    pub fn serve(script: Vec<(u16, &str)>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let script: Vec<(u16, String)> = script
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for (status, body) in script {
                let (stream, _) = listener.accept().expect("accept");
                let seen = handle_one(stream, status, &body);
                if tx.send(seen).is_err() {
                    break;
                }
            }
        });

        Self {
            port,
            requests: rx,
            handle: Some(handle),
        }
    }

    /// Base URL for clients that want one.
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Wait for the whole script to be consumed and return every request
    /// the server saw, in order.
    pub fn finish(mut self) -> Vec<Seen> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("server thread");
        }
        self.requests.try_iter().collect()
    }
}

fn handle_one(stream: TcpStream, status: u16, body: &str) -> Seen {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut request_body = vec![0u8; content_length];
    reader.read_exact(&mut request_body).expect("request body");

    let reason = match status {
        200 => "OK",
        201 => "Created",
        404 => "Not Found",
        409 => "Conflict",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).expect("write response");

    Seen {
        method,
        path,
        body: String::from_utf8_lossy(&request_body).into_owned(),
    }
}
