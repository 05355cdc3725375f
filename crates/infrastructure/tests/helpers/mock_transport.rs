#![allow(dead_code)]

use async_trait::async_trait;
use dnsreq_domain::DomainError;
use dnsreq_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use super::builders::ResponseBuilder;

pub enum MockReply {
    /// Fail the call with a transport timeout.
    Timeout,
    /// Fail the call with an I/O error.
    IoError,
    /// Answer with A records, echoing the request's ID and question.
    Addresses(Vec<[u8; 4]>),
    /// Return these bytes verbatim.
    Raw(Vec<u8>),
}

/// Scripted in-memory transport that records every request it sees.
pub struct MockTransport {
    script: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    pub fn new(script: Vec<MockReply>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn answer(request: &[u8], addresses: &[[u8; 4]]) -> Vec<u8> {
        let id = u16::from_be_bytes([request[0], request[1]]);
        let question = &request[12..];
        let qname = &question[..question.len() - 4];

        let mut response = ResponseBuilder::new(id).question_bytes(question);
        for ip in addresses {
            response = response.record(qname, 1, 60, ip);
        }
        response.build()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.requests.lock().unwrap().push(message_bytes.to_vec());

        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockReply::Timeout);

        let bytes = match reply {
            MockReply::Timeout => {
                return Err(DomainError::TransportTimeout {
                    server: "mock".to_string(),
                })
            }
            MockReply::IoError => {
                return Err(DomainError::IoError("connection refused".to_string()))
            }
            MockReply::Addresses(addresses) => Self::answer(message_bytes, &addresses),
            MockReply::Raw(bytes) => bytes,
        };

        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
