use super::name::{decode_name, encode_name};
use super::read_u16;
use dnsreq_domain::{DecodeError, EncodeError, Question};

/// Appends QNAME, QTYPE and QCLASS.
pub fn encode_question(question: &Question, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
    encode_name(&question.name, buf)?;
    buf.extend_from_slice(&question.qtype.to_be_bytes());
    buf.extend_from_slice(&question.qclass.to_be_bytes());
    Ok(())
}

/// Reads one question entry, returning it with the offset just past QCLASS.
pub fn decode_question(buf: &[u8], start: usize) -> Result<(Question, usize), DecodeError> {
    let (name, name_end) = decode_name(buf, start)?;

    let truncated = DecodeError::TruncatedRecord { offset: name_end };
    let qtype = read_u16(buf, name_end).ok_or(truncated.clone())?;
    let qclass = read_u16(buf, name_end + 2).ok_or(truncated)?;

    Ok((
        Question {
            name,
            qtype,
            qclass,
        },
        name_end + 4,
    ))
}
