//! dnsreq infrastructure: wire codec, transports and query forwarding.
pub mod dns;
