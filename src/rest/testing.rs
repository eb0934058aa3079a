//! A scripted transport for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::clients::{HttpError, HttpMethod, HttpResponse, Transport};
use crate::rest::{Options, Params};

/// One request seen by [`StubTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub path: String,
    pub params: Params,
    pub body: Option<Params>,
    pub options: Options,
}

/// Replays queued responses in order and records every call.
///
/// Once the queue is empty it answers `200 {}`.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(200, HashMap::new(), body)));
    }

    pub fn fail(&self, error: HttpError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
        body: Option<&Params>,
        options: &Options,
    ) -> Result<HttpResponse, HttpError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            params: params.clone(),
            body: body.cloned(),
            options: options.clone(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, HashMap::new(), json!({}))))
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(
        &self,
        path: &str,
        params: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError> {
        self.record(HttpMethod::Get, path, params, None, options)
    }

    async fn post(
        &self,
        path: &str,
        body: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError> {
        self.record(HttpMethod::Post, path, &Params::new(), Some(body), options)
    }

    async fn put(
        &self,
        path: &str,
        body: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError> {
        self.record(HttpMethod::Put, path, &Params::new(), Some(body), options)
    }

    async fn delete(&self, path: &str, options: &Options) -> Result<HttpResponse, HttpError> {
        self.record(HttpMethod::Delete, path, &Params::new(), None, options)
    }
}
