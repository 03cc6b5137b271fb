use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request the mock server received
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub body: Value,
}

impl SeenRequest {
    pub fn method(&self) -> &str {
        self.body["method"].as_str().unwrap_or_default()
    }
}

/// Minimal HTTP/1.1 responder answering JSON-RPC calls by method name
#[derive(Clone)]
pub struct MockServer {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockServer {
    /// Start serving `(status, body)` pairs keyed by JSON-RPC method
    pub async fn start(responses: Vec<(&str, u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let responses: Arc<HashMap<String, (u16, String)>> = Arc::new(
            responses
                .into_iter()
                .map(|(method, status, body)| (method.to_string(), (status, body.to_string())))
                .collect(),
        );
        let seen = Arc::new(Mutex::new(Vec::new()));

        let server_seen = Arc::clone(&seen);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let responses = Arc::clone(&responses);
                let seen = Arc::clone(&server_seen);
                tokio::spawn(async move {
                    handle_connection(stream, &responses, &seen).await;
                });
            }
        });

        Self { base_url, seen }
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    responses: &HashMap<String, (u16, String)>,
    seen: &Mutex<Vec<SeenRequest>>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body: Value = serde_json::from_slice(&buf[header_end..]).unwrap_or(Value::Null);
    let request = SeenRequest { path, body };
    let (status, payload) = responses
        .get(request.method())
        .cloned()
        .unwrap_or((404, "not found".to_string()));
    seen.lock().unwrap().push(request);

    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
