//! DNS Message Builder
//!
//! Wraps the wire encoder with transaction-ID selection so callers get the
//! ID they need for response matching together with the request bytes.

use crate::dns::wire::{encode_query_with, QueryOptions};
use dnsreq_domain::DomainError;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random transaction ID
    ///
    /// Returns the ID alongside the serialized message.
    pub fn build_query(
        domain: &str,
        options: &QueryOptions,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query_with_id(domain, id, options)?;
        Ok((id, bytes))
    }

    /// Build a query with a caller-chosen transaction ID
    pub fn build_query_with_id(
        domain: &str,
        id: u16,
        options: &QueryOptions,
    ) -> Result<Vec<u8>, DomainError> {
        Ok(encode_query_with(domain, id, options)?)
    }
}
