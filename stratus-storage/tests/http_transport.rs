//! `HttpTransport` against a real local socket.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use serde_json::json;

use stratus_storage::{HttpTransport, Method, Transport};

/// What the server saw for one request.
#[derive(Debug, Clone)]
struct Seen {
    method: String,
    path: String,
    body: String,
}

/// Serve the scripted `(status, body)` responses in order, one connection
/// each, then exit. Returns the port and a channel of observed requests.
fn serve(script: Vec<(u16, String)>) -> (u16, Receiver<Seen>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in script {
            let (stream, _) = listener.accept().expect("accept");
            let seen = handle_one(stream, status, &body);
            if tx.send(seen).is_err() {
                break;
            }
        }
    });

    (port, rx)
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

#[test]
fn get_round_trip() {
    let (port, seen) = serve(vec![(200, r#"{"data": "hello"}"#.to_string())]);
    let transport = HttpTransport::new("127.0.0.1", port);

    let response = transport
        .call(Method::Get, "/dcrn/mygame/file/gamedata.json", None)
        .expect("call");
    assert_eq!(response.status, 200);
    let value: serde_json::Value = response.json("file payload").expect("json");
    assert_eq!(value["data"], "hello");

    let request = seen.recv().expect("seen");
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/dcrn/mygame/file/gamedata.json");
    assert!(request.body.is_empty());
}

#[test]
fn post_sends_json_body() {
    let (port, seen) = serve(vec![(201, String::new())]);
    let transport = HttpTransport::new("127.0.0.1", port);

    let body = json!({ "origin": "https://tok@github.com/dcrn/mygame.git" });
    let response = transport
        .call(Method::Post, "/dcrn/mygame", Some(&body))
        .expect("call");
    assert_eq!(response.status, 201);

    let request = seen.recv().expect("seen");
    assert_eq!(request.method, "POST");
    let sent: serde_json::Value = serde_json::from_str(&request.body).expect("sent json");
    assert_eq!(sent, body);
}

#[test]
fn error_status_is_a_response_not_a_transport_error() {
    let (port, _seen) = serve(vec![(404, String::new())]);
    let transport = HttpTransport::new("127.0.0.1", port);

    let response = transport
        .call(Method::Get, "/dcrn/nope", None)
        .expect("a 404 is still a response");
    assert_eq!(response.status, 404);
}

#[test]
fn connection_refused_is_a_transport_error() {
    // Bind then drop to get a port nothing is listening on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let transport = HttpTransport::new("127.0.0.1", port);

    let err = transport.call(Method::Get, "/dcrn/mygame", None).unwrap_err();
    assert!(!err.message.is_empty());
}
