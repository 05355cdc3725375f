use super::read_u16;
use dnsreq_domain::{DecodeError, Header, HEADER_LEN};

/// Appends the six header fields in network byte order.
pub fn encode_header(header: &Header, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&header.id.to_be_bytes());
    buf.extend_from_slice(&header.flags.to_be_bytes());
    buf.extend_from_slice(&header.question_count.to_be_bytes());
    buf.extend_from_slice(&header.answer_count.to_be_bytes());
    buf.extend_from_slice(&header.authority_count.to_be_bytes());
    buf.extend_from_slice(&header.additional_count.to_be_bytes());
}

pub fn decode_header(buf: &[u8]) -> Result<Header, DecodeError> {
    if buf.len() < HEADER_LEN {
        return Err(DecodeError::BufferTooShort { len: buf.len() });
    }

    let field = |pos| read_u16(buf, pos).ok_or(DecodeError::BufferTooShort { len: buf.len() });

    Ok(Header {
        id: field(0)?,
        flags: field(2)?,
        question_count: field(4)?,
        answer_count: field(6)?,
        authority_count: field(8)?,
        additional_count: field(10)?,
    })
}
