//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::transport::{Method, Response, Transport, TransportError};

/// One recorded round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub route: String,
    pub body: Option<Value>,
}

/// Replays a scripted queue of responses and records every call.
#[derive(Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Result<Response, String>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a raw body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.script.borrow_mut().push_back(Ok(Response {
            status,
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    /// Queue a response with a JSON body.
    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.script.borrow_mut().push_back(Ok(Response {
            status,
            body: body.to_string().into_bytes(),
        }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.script.borrow_mut().push_back(Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn call(
        &self,
        method: Method,
        route: &str,
        body: Option<&Value>,
    ) -> Result<Response, TransportError> {
        self.calls.borrow_mut().push(Call {
            method,
            route: route.to_string(),
            body: body.cloned(),
        });
        match self.script.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError { message }),
            None => panic!("unscripted call: {method} {route}"),
        }
    }
}
