use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::{DnsTransport, TransportResponse, UdpTransport};
use crate::dns::wire::{decode_header, QueryOptions};
use dnsreq_domain::{DomainError, ResolverConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends one query to one server and hands back the parsed response.
///
/// Only timeouts are retried. A response is accepted only if its ID matches
/// the request and its QR bit is set.
pub struct DnsForwarder {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
    attempts: u32,
    transaction_id: Option<u16>,
}

impl DnsForwarder {
    pub fn new(transport: Arc<dyn DnsTransport>, timeout: Duration, attempts: u32) -> Self {
        Self {
            transport,
            timeout,
            attempts: attempts.max(1),
            transaction_id: None,
        }
    }

    /// Use a fixed transaction ID instead of a random one per query.
    pub fn with_transaction_id(mut self, id: u16) -> Self {
        self.transaction_id = Some(id);
        self
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let server_addr: SocketAddr = config
            .server
            .parse()
            .map_err(|e| DomainError::InvalidServerAddress(format!("{}: {}", config.server, e)))?;

        let transport = UdpTransport::with_recv_size(server_addr, config.recv_buffer_size);
        let forwarder = Self::new(
            Arc::new(transport),
            Duration::from_millis(config.timeout_ms),
            config.attempts,
        );

        Ok(match config.transaction_id {
            Some(id) => forwarder.with_transaction_id(id),
            None => forwarder,
        })
    }

    pub async fn query(
        &self,
        domain: &str,
        options: &QueryOptions,
    ) -> Result<DnsResponse, DomainError> {
        let (id, request_bytes) = match self.transaction_id {
            Some(id) => (id, MessageBuilder::build_query_with_id(domain, id, options)?),
            None => MessageBuilder::build_query(domain, options)?,
        };

        debug!(
            domain = %domain,
            id = id,
            record_type = %options.record_type,
            protocol = self.transport.protocol_name(),
            "Sending DNS query"
        );

        let response = self.send_with_retries(&request_bytes).await?;

        let header = decode_header(&response.bytes)?;
        if header.id != id {
            return Err(DomainError::TransactionIdMismatch {
                expected: id,
                received: header.id,
            });
        }
        if !header.is_response() {
            return Err(DomainError::NotAResponse);
        }

        ResponseParser::parse(&response.bytes)
    }

    async fn send_with_retries(
        &self,
        request_bytes: &[u8],
    ) -> Result<TransportResponse, DomainError> {
        let mut attempt = 1;
        loop {
            match self.transport.send(request_bytes, self.timeout).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_timeout() && attempt < self.attempts => {
                    warn!(
                        attempt = attempt,
                        max_attempts = self.attempts,
                        error = %e,
                        "DNS query timed out, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
