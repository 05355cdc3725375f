use dnsreq_domain::{DecodeError, EncodeError};

pub const MAX_LABEL_LEN: usize = 63;
/// Maximum encoded name length, terminator included.
pub const MAX_NAME_LEN: usize = 255;

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_TAG: u8 = 0xC0;

/// Appends `name` as a length-prefixed label sequence ending in a zero byte.
///
/// A single trailing dot is accepted (`"example.com."`); `""` and `"."` are
/// the root name. Any other empty label is rejected. Labels are written as
/// raw bytes with no IDNA normalisation, except for the presentation
/// escapes produced by [`decode_name`]: `\.` and `\\` stand for the
/// literal byte, `\DDD` for the byte with decimal value DDD.
pub fn encode_name(name: &str, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
    let mut encoded = Vec::with_capacity(name.len() + 2);
    for label in split_labels(name)? {
        if label.len() > MAX_LABEL_LEN {
            return Err(EncodeError::LabelTooLong {
                label: String::from_utf8_lossy(&label).into_owned(),
                len: label.len(),
            });
        }
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(&label);
    }
    encoded.push(0);

    if encoded.len() > MAX_NAME_LEN {
        return Err(EncodeError::NameTooLong {
            len: encoded.len(),
        });
    }

    buf.extend_from_slice(&encoded);
    Ok(())
}

/// Splits a presentation-form name on unescaped dots, resolving escapes.
fn split_labels(name: &str) -> Result<Vec<Vec<u8>>, EncodeError> {
    if name.is_empty() || name == "." {
        return Ok(Vec::new());
    }

    let empty_label = || EncodeError::EmptyLabel {
        name: name.to_string(),
    };
    let bytes = name.as_bytes();
    let mut labels = Vec::new();
    let mut current = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'.' => {
                if current.is_empty() {
                    return Err(empty_label());
                }
                labels.push(std::mem::take(&mut current));
                i += 1;
            }
            b'\\' => match bytes.get(i + 1..i + 4).and_then(decimal_escape) {
                Some(byte) => {
                    current.push(byte);
                    i += 4;
                }
                None => {
                    // A lone trailing backslash stands for itself
                    current.push(bytes.get(i + 1).copied().unwrap_or(b'\\'));
                    i += 2;
                }
            },
            byte => {
                current.push(byte);
                i += 1;
            }
        }
    }

    if !current.is_empty() {
        labels.push(current);
    }
    Ok(labels)
}

fn decimal_escape(digits: &[u8]) -> Option<u8> {
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = digits
        .iter()
        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
    u8::try_from(value).ok()
}

/// Appends one label in presentation form.
///
/// Dots and backslashes inside the label are backslash-escaped; bytes
/// outside printable ASCII become `\DDD`, the way dig prints them.
fn push_escaped(name: &mut String, label: &[u8]) {
    for &byte in label {
        match byte {
            b'.' | b'\\' => {
                name.push('\\');
                name.push(byte as char);
            }
            0x21..=0x7E => name.push(byte as char),
            _ => name.push_str(&format!("\\{:03}", byte)),
        }
    }
}

/// Reads the label sequence starting at `start`.
///
/// Returns the dotted name (no trailing dot, `""` for the root) and the
/// offset just past the terminating zero byte. Dots and backslashes inside
/// a label are backslash-escaped and bytes outside printable ASCII become
/// `\DDD`, so passing the name back to [`encode_name`] reproduces the same
/// wire bytes. Error offsets are
/// indexes into `buf`.
pub fn decode_name(buf: &[u8], start: usize) -> Result<(String, usize), DecodeError> {
    let mut pos = start;
    let mut name = String::new();

    loop {
        let len_byte = *buf
            .get(pos)
            .ok_or(DecodeError::TruncatedName { offset: pos })?;

        match len_byte & LABEL_TYPE_MASK {
            0 => {}
            POINTER_TAG => return Err(DecodeError::CompressionPointer { offset: pos }),
            _ => {
                return Err(DecodeError::UnsupportedLabelType {
                    offset: pos,
                    byte: len_byte,
                })
            }
        }

        if len_byte == 0 {
            return Ok((name, pos + 1));
        }

        let label_start = pos + 1;
        let label_end = label_start + len_byte as usize;
        if label_end > buf.len() {
            return Err(DecodeError::TruncatedName { offset: pos });
        }
        // +1 for the terminator still to come
        if label_end - start + 1 > MAX_NAME_LEN {
            return Err(DecodeError::NameTooLong { offset: start });
        }

        if !name.is_empty() {
            name.push('.');
        }
        push_escaped(&mut name, &buf[label_start..label_end]);
        pos = label_end;
    }
}
