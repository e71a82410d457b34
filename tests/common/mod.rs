//! Shared test helpers.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use tperformant_api::{
    ApiConfig, AuthCredentials, HttpRequest, HttpResponse, HttpTransport, TPerformantApi,
    TransportError,
};

/// In-process transport that records requests and replays canned responses.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with a JSON body.
    pub fn respond(self, code: u16, body: serde_json::Value) -> Self {
        self.respond_raw(code, HashMap::new(), &body.to_string())
    }

    /// Queues a response with arbitrary headers and body.
    pub fn respond_raw(self, code: u16, headers: HashMap<String, Vec<String>>, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(code, headers, body)));
        self
    }

    /// Queues a transport failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns every request sent so far.
    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// Returns the most recent request.
    pub fn last(&self) -> HttpRequest {
        self.sent().pop().expect("no request was sent")
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued")
    }
}

impl HttpTransport for &FakeTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// Builds a client over a fake transport with the default configuration.
pub fn api(transport: &FakeTransport) -> TPerformantApi<&FakeTransport> {
    TPerformantApi::with_transport(&ApiConfig::default(), transport)
}

pub fn credentials() -> AuthCredentials {
    AuthCredentials::new("access-123", "client-456", "user@example.com").unwrap()
}

/// Response headers carrying a full set of credentials.
pub fn credential_headers(token: &str) -> HashMap<String, Vec<String>> {
    let mut headers = HashMap::new();
    headers.insert("access-token".to_string(), vec![token.to_string()]);
    headers.insert("client".to_string(), vec!["client-456".to_string()]);
    headers.insert("uid".to_string(), vec!["user@example.com".to_string()]);
    headers
}
