use super::RecordType;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Interpreted record payload.
///
/// Only A and CNAME payloads get a typed form; every other type keeps its
/// RDATA bytes as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RData {
    A(Ipv4Addr),
    Cname(String),
    Opaque(Vec<u8>),
}

impl RData {
    /// Human-readable payload, `None` for opaque data.
    pub fn text(&self) -> Option<String> {
        match self {
            RData::A(addr) => Some(addr.to_string()),
            RData::Cname(name) => Some(name.clone()),
            RData::Opaque(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: String,

    pub rtype: u16,

    pub rclass: u16,

    pub ttl: u32,

    pub rdata: RData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match &self.rdata {
            RData::A(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn cname(&self) -> Option<&str> {
        match &self.rdata {
            RData::Cname(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = if self.rclass == crate::CLASS_IN {
            "IN".to_string()
        } else {
            format!("CLASS{}", self.rclass)
        };
        write!(
            f,
            "{}.\t{}\t{}\t{}\t",
            self.name,
            self.ttl,
            class,
            RecordType::describe(self.rtype)
        )?;
        match &self.rdata {
            RData::A(addr) => write!(f, "{}", addr),
            RData::Cname(name) => write!(f, "{}.", name),
            RData::Opaque(data) => write!(f, "\\# {}", data.len()),
        }
    }
}
