use super::name::decode_name;
use super::{read_u16, read_u32};
use dnsreq_domain::{DecodeError, RData, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

// TYPE(2) + CLASS(2) + TTL(4) + RDLENGTH(2)
const FIXED_FIELDS_LEN: usize = 10;
const IPV4_LEN: usize = 4;

/// Reads the resource record starting at `start`.
///
/// Returns the record and the offset just past its RDATA.
pub fn decode_record(buf: &[u8], start: usize) -> Result<(ResourceRecord, usize), DecodeError> {
    if start >= buf.len() {
        return Err(DecodeError::TruncatedRecord { offset: start });
    }

    let (name, name_end) = decode_name(buf, start)?;

    let truncated = DecodeError::TruncatedRecord { offset: name_end };
    if name_end + FIXED_FIELDS_LEN > buf.len() {
        return Err(truncated);
    }
    let rtype = read_u16(buf, name_end).ok_or(truncated.clone())?;
    let rclass = read_u16(buf, name_end + 2).ok_or(truncated.clone())?;
    let ttl = read_u32(buf, name_end + 4).ok_or(truncated.clone())?;
    let rdlength = read_u16(buf, name_end + 8).ok_or(truncated)? as usize;

    let rdata_start = name_end + FIXED_FIELDS_LEN;
    let rdata_end = rdata_start + rdlength;
    let rdata = buf
        .get(rdata_start..rdata_end)
        .ok_or(DecodeError::TruncatedRecord {
            offset: rdata_start,
        })?;

    let rdata = interpret_rdata(rtype, rdata, rdata_start)?;

    Ok((
        ResourceRecord {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        },
        rdata_end,
    ))
}

fn interpret_rdata(rtype: u16, rdata: &[u8], rdata_start: usize) -> Result<RData, DecodeError> {
    match RecordType::from_u16(rtype) {
        Some(RecordType::A) => {
            let octets = <[u8; IPV4_LEN]>::try_from(rdata).map_err(|_| {
                DecodeError::UnexpectedRDataLength {
                    offset: rdata_start,
                    rtype,
                    expected: IPV4_LEN,
                    actual: rdata.len(),
                }
            })?;
            Ok(RData::A(Ipv4Addr::from(octets)))
        }
        Some(RecordType::CNAME) => {
            // Decoded against the RDATA window alone so the target can never
            // borrow bytes from the following record.
            let (target, name_len) =
                decode_name(rdata, 0).map_err(|e| rebase(e, rdata_start))?;
            if name_len != rdata.len() {
                return Err(DecodeError::UnexpectedRDataLength {
                    offset: rdata_start,
                    rtype,
                    expected: name_len,
                    actual: rdata.len(),
                });
            }
            Ok(RData::Cname(target))
        }
        _ => Ok(RData::Opaque(rdata.to_vec())),
    }
}

/// Shifts a window-relative error offset back into message coordinates.
fn rebase(err: DecodeError, base: usize) -> DecodeError {
    match err {
        DecodeError::TruncatedName { offset } => DecodeError::TruncatedName {
            offset: base + offset,
        },
        DecodeError::NameTooLong { offset } => DecodeError::NameTooLong {
            offset: base + offset,
        },
        DecodeError::CompressionPointer { offset } => DecodeError::CompressionPointer {
            offset: base + offset,
        },
        DecodeError::UnsupportedLabelType { offset, byte } => {
            DecodeError::UnsupportedLabelType {
                offset: base + offset,
                byte,
            }
        }
        other => other,
    }
}
