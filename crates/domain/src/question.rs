use crate::RecordType;
use serde::Serialize;
use std::fmt;

/// The Internet class, the only one queries are built for.
pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype: record_type.to_u16(),
            qclass: CLASS_IN,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.\t", self.name)?;
        if self.qclass == CLASS_IN {
            write!(f, "IN")?;
        } else {
            write!(f, "CLASS{}", self.qclass)?;
        }
        write!(f, "\t{}", RecordType::describe(self.qtype))
    }
}
