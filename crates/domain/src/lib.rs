//! dnsreq domain layer: message model, error taxonomy and configuration.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod header;
pub mod message;
pub mod question;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_record::{RData, RecordType, ResourceRecord};
pub use errors::{DecodeError, DomainError, EncodeError};
pub use header::{pack_flags, Flags, Header, ResponseCode, HEADER_LEN};
pub use message::Message;
pub use question::{Question, CLASS_IN};
