// civic-client/tests/common/mod.rs
// In-memory transport shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use civic_client::{ClientError, ClientResult, HttpClient};
use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned answer for one route
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, String),
}

/// One request as the client issued it
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Transport that records every call and answers from a route table
///
/// Unknown routes answer 404.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    routes: Mutex<HashMap<(&'static str, String), Reply>>,
    calls: Mutex<Vec<Call>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: &'static str, path: &str, reply: Reply) -> Self {
        self.set(method, path, reply);
        self
    }

    /// Replace a route after construction
    pub fn set(&self, method: &'static str, path: &str, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self, method: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method)
            .map(|c| c.path)
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn answer<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get(&(method, path.to_string()))
            .cloned();
        match reply {
            Some(Reply::Json(value)) => Ok(serde_json::from_value(value)?),
            Some(Reply::Status(code, text)) => Err(ClientError::from_status(
                StatusCode::from_u16(code).unwrap(),
                &text,
            )),
            None => Err(ClientError::from_status(
                StatusCode::NOT_FOUND,
                r#"{"detail": "Not found."}"#,
            )),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.answer("GET", path, None)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.answer("POST", path, Some(body))
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.answer("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.answer::<Value>("DELETE", path, None).map(|_| ())
    }
}

pub fn json(value: Value) -> Reply {
    Reply::Json(value)
}

pub fn status(code: u16, body: &str) -> Reply {
    Reply::Status(code, body.to_string())
}
