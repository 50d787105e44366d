//! Scripted mock backend for end-to-end gateway tests.
//!
//! Serves a fixed list of replies in order, one per request, and records
//! every request it receives before answering.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};

use ava_config::ApiConfig;
use ava_gateway::ApiClient;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub struct Reply {
    status: u16,
    body: Vec<u8>,
    content_type: &'static str,
}

impl Reply {
    /// A success envelope around `data`.
    pub fn ok(data: &serde_json::Value) -> Self {
        Self::json(200, &serde_json::json!({ "message": "ok", "data": data }))
    }

    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string().into_bytes(),
            content_type: "application/json",
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            content_type: "text/plain",
        }
    }

    pub fn bytes(body: &[u8], content_type: &'static str) -> Self {
        Self {
            status: 200,
            body: body.to_vec(),
            content_type,
        }
    }
}

pub struct MockBackend {
    pub base_url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    pub fn start(replies: Vec<Reply>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend");
        let addr = server.server_addr().to_ip().expect("ip listen address");
        let recorded = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&recorded);
        std::thread::spawn(move || {
            for reply in replies {
                let Ok(mut request) = server.recv() else {
                    return;
                };
                let mut body = Vec::new();
                let _ = request.as_reader().read_to_end(&mut body);
                sink.lock().unwrap().push(Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    authorization: header(&request, "Authorization"),
                    content_type: header(&request, "Content-Type"),
                    body,
                });

                let response = tiny_http::Response::from_data(reply.body)
                    .with_status_code(reply.status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", reply.content_type).unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            recorded,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    /// Config pointing both base URLs at this backend.
    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            internal_url: self.base_url.clone(),
            public_url: self.base_url.clone(),
            ..Default::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config()).expect("client builds")
    }
}

fn header(request: &tiny_http::Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}
