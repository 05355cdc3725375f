use crate::dns::wire::decode_message;
use dnsreq_domain::{DomainError, Message, ResponseCode};
use std::net::Ipv4Addr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub addresses: Vec<Ipv4Addr>,

    pub cnames: Vec<String>,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub min_ttl: Option<u32>,

    pub message: Message,
}

impl DnsResponse {
    pub fn is_nodata(&self) -> bool {
        self.rcode == ResponseCode::NoError && self.message.answers.is_empty()
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = decode_message(response_bytes)?;

        let rcode = message.header.response_code();
        let truncated = message.header.is_truncated();
        let addresses: Vec<Ipv4Addr> = message.addresses().collect();
        let cnames: Vec<String> = message.cnames().map(str::to_string).collect();
        let min_ttl = message.min_ttl();

        debug!(
            id = message.header.id,
            rcode = %rcode,
            addresses = addresses.len(),
            cnames = cnames.len(),
            truncated = truncated,
            authority = message.header.authority_count,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            addresses,
            cnames,
            rcode,
            truncated,
            min_ttl,
            message,
        })
    }
}
