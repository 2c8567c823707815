//! A minimal HTTP responder for driving the binary end to end.
//!
//! Every connection carries exactly one request and is closed after the
//! response, which is how the client is told not to reuse it.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

impl RecordedRequest {
    /// Value of the `page` query parameter, if any.
    pub fn page(&self) -> Option<u32> {
        let query = self.path.split_once('?')?.1;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
            .and_then(|value| value.parse().ok())
    }

    /// Trailing numeric path segment, i.e. the asset id of a DELETE.
    pub fn asset_id(&self) -> Option<u64> {
        self.path.rsplit('/').next()?.parse().ok()
    }
}

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Start serving on an ephemeral port; `handler` returns status and body.
    pub fn start<F>(handler: F) -> StubServer
    where
        F: Fn(&RecordedRequest) -> (u16, String) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                if let Some(request) = read_request(&stream) {
                    recorded.lock().unwrap().push(request.clone());
                    let (status, body) = handler(&request);
                    write_response(stream, status, &body);
                }
            }
        });

        StubServer {
            base_url: format!("http://{}/v1/", address),
            requests,
        }
    }

    /// Accept connections but never answer them.
    pub fn silent() -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let mut open = Vec::new();
            for stream in listener.incoming().flatten() {
                open.push(stream);
            }
        });

        StubServer {
            base_url: format!("http://{}/v1/", address),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method)
            .collect()
    }
}

fn read_request(stream: &TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut authorization = None;
    let mut user_agent = None;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).ok()? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            let name = name.trim();
            if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.trim().to_string());
            } else if name.eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim().to_string());
            }
        }
    }

    Some(RecordedRequest {
        method,
        path,
        authorization,
        user_agent,
    })
}

fn write_response(mut stream: TcpStream, status: u16, body: &str) {
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// JSON body of one listing page holding assets `first..first + count`.
pub fn assets_page(first: u64, count: u64) -> String {
    let assets: Vec<String> = (first..first + count)
        .map(|id| {
            format!(
                r#"{{"id":{},"filename":"https://a.storyblok.com/f/1/file-{}.png","content_type":"image/png"}}"#,
                id, id
            )
        })
        .collect();
    format!(r#"{{"assets":[{}]}}"#, assets.join(","))
}

/// Serve a folder of `total` assets (ids 1..=total) in pages of 100, and answer
/// every DELETE with 200 except for `failing_id`, which gets a 500.
pub fn folder_handler(
    total: u64,
    failing_id: Option<u64>,
) -> impl Fn(&RecordedRequest) -> (u16, String) + Send + 'static {
    move |request: &RecordedRequest| match request.method.as_str() {
        "GET" => {
            let page = request.page().unwrap_or(1) as u64;
            let first = (page - 1) * 100 + 1;
            let count = if first > total {
                0
            } else {
                (total - first + 1).min(100)
            };
            (200, assets_page(first, count))
        }
        "DELETE" if request.asset_id() == failing_id => {
            (500, r#"{"error":"boom"}"#.to_string())
        }
        "DELETE" => (200, String::new()),
        _ => (405, String::new()),
    }
}
