/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use zenfolio::v1::{Auth, Client, Config};

/// What the mock service sends back for a request
#[allow(dead_code)]
pub(crate) enum Reply {
    Result(Value),
    Error(Option<&'static str>, &'static str),
    WrongId(Value),
    Status(u16, &'static str),
    Raw(&'static str),
}

/// A request as seen by the mock service
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub path: String,
    pub query: Option<String>,
    pub method: String,
    pub params: Vec<Value>,
    pub id: Value,
    pub token: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

type Responder = Box<dyn Fn(&Recorded) -> Reply + Send>;

struct MockState {
    requests: Vec<Recorded>,
    responder: Responder,
}

type Shared = Arc<Mutex<MockState>>;

/// In-process stand in for the Zenfolio service.
///
/// JSON posted to `/api` is treated as an RPC envelope; anything else is recorded as raw data.
pub(crate) struct MockService {
    pub base_url: String,
    state: Shared,
}

#[allow(dead_code)]
impl MockService {
    pub fn start(responder: impl Fn(&Recorded) -> Reply + Send + 'static) -> Self {
        let state = Arc::new(Mutex::new(MockState {
            requests: Vec::new(),
            responder: Box::new(responder),
        }));

        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        let app = Router::new().fallback(handle).with_state(state.clone());
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api", self.base_url)
    }

    pub fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint(),
            ..Config::default()
        }
    }

    pub fn client(&self) -> Client {
        Client::new(self.config()).unwrap()
    }

    pub fn client_with_auth(&self, username: &str, password: &str) -> Client {
        Client::with_auth(self.config(), Auth::new(username, password)).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.method).collect()
    }
}

async fn handle(
    State(state): State<Shared>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let envelope: Value = if uri.path() == "/api" {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    } else {
        Value::Null
    };
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = Recorded {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        method: envelope["method"].as_str().unwrap_or_default().to_string(),
        params: envelope["params"].as_array().cloned().unwrap_or_default(),
        id: envelope["id"].clone(),
        token: header_str("x-zenfolio-token"),
        content_type: header_str("content-type"),
        body,
    };

    let reply = {
        let mut state = state.lock().unwrap();
        let reply = (state.responder)(&recorded);
        state.requests.push(recorded.clone());
        reply
    };

    let json_body = |v: Value| {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            v.to_string(),
        )
            .into_response()
    };
    match reply {
        Reply::Result(result) => json_body(json!({"id": recorded.id, "result": result})),
        Reply::Error(code, message) => json_body(json!({
            "id": recorded.id,
            "result": null,
            "error": {"code": code, "message": message}
        })),
        Reply::WrongId(result) => {
            let wrong = (recorded.id.as_u64().unwrap_or_default() + 1) % 65536;
            json_body(json!({"id": wrong, "result": result}))
        }
        Reply::Status(status, body) => (
            StatusCode::from_u16(status).unwrap(),
            [("x-mock", "yes")],
            body.to_string(),
        )
            .into_response(),
        Reply::Raw(body) => (StatusCode::OK, body.to_string()).into_response(),
    }
}
