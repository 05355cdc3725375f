use thiserror::Error;

/// Failures while turning a domain name into wire bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Label '{label}' is {len} bytes long (max 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Empty label in domain name '{name}'")]
    EmptyLabel { name: String },

    #[error("Encoded domain name is {len} bytes long (max 255)")]
    NameTooLong { len: usize },
}

/// Failures while walking a response buffer.
///
/// Every variant except `BufferTooShort` carries the byte offset, relative
/// to the start of the message, where decoding stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Buffer too short for a DNS header: {len} bytes (need 12)")]
    BufferTooShort { len: usize },

    #[error("Domain name truncated at offset {offset}")]
    TruncatedName { offset: usize },

    #[error("Resource record truncated at offset {offset}")]
    TruncatedRecord { offset: usize },

    #[error("Unexpected RDATA length {actual} for type {rtype} at offset {offset} (expected {expected})")]
    UnexpectedRDataLength {
        offset: usize,
        rtype: u16,
        expected: usize,
        actual: usize,
    },

    #[error("Domain name at offset {offset} exceeds 255 bytes")]
    NameTooLong { offset: usize },

    #[error("Compression pointer at offset {offset} is not supported")]
    CompressionPointer { offset: usize },

    #[error("Unsupported label type 0x{byte:02x} at offset {offset}")]
    UnsupportedLabelType { offset: usize, byte: u8 },
}

impl DecodeError {
    /// Byte offset where decoding failed, when the error has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::BufferTooShort { .. } => None,
            DecodeError::TruncatedName { offset }
            | DecodeError::TruncatedRecord { offset }
            | DecodeError::UnexpectedRDataLength { offset, .. }
            | DecodeError::NameTooLong { offset }
            | DecodeError::CompressionPointer { offset }
            | DecodeError::UnsupportedLabelType { offset, .. } => Some(*offset),
        }
    }

    /// True when the buffer ended before the structure it announced.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::BufferTooShort { .. }
                | DecodeError::TruncatedName { .. }
                | DecodeError::TruncatedRecord { .. }
        )
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    Encode(#[from] EncodeError),

    #[error("Invalid DNS response: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transaction ID mismatch: sent {expected:#06x}, received {received:#06x}")]
    TransactionIdMismatch { expected: u16, received: u16 },

    #[error("Received a message with the QR bit clear")]
    NotAResponse,
}

impl DomainError {
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            DomainError::QueryTimeout | DomainError::TransportTimeout { .. }
        )
    }
}
