pub mod forwarding;
pub mod transport;
pub mod wire;

pub use forwarding::{DnsForwarder, DnsResponse, MessageBuilder, ResponseParser};
pub use transport::{DnsTransport, TransportResponse};
pub use wire::{decode_message, encode_query, encode_query_with, QueryOptions};
