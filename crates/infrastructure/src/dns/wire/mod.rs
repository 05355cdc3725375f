//! DNS wire codec (RFC 1035 §4), restricted to uncompressed names.
//!
//! Every read is bounds-checked against the caller's buffer; malformed or
//! truncated input comes back as a [`DecodeError`] carrying the offset
//! where the walk stopped. Nothing here performs I/O or keeps state
//! between calls.
//!
//! [`DecodeError`]: dnsreq_domain::DecodeError

pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod record;

pub use header::{decode_header, encode_header};
pub use message::{decode_message, encode_query, encode_query_with, QueryOptions};
pub use name::{decode_name, encode_name, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use question::{decode_question, encode_question};
pub use record::decode_record;

fn read_u16(buf: &[u8], pos: usize) -> Option<u16> {
    let bytes = buf.get(pos..pos.checked_add(2)?)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn read_u32(buf: &[u8], pos: usize) -> Option<u32> {
    let bytes = buf.get(pos..pos.checked_add(4)?)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
