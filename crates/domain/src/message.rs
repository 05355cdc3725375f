use crate::{Header, Question, ResourceRecord};
use serde::Serialize;
use std::net::Ipv4Addr;

/// A decoded response: header, question section and answer section.
///
/// Authority and additional records are present on the wire but are not
/// decoded; their counts remain visible through the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
}

impl Message {
    /// IPv4 addresses from the answer section, in wire order.
    pub fn addresses(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.answers.iter().filter_map(ResourceRecord::ipv4)
    }

    /// CNAME targets from the answer section, in wire order.
    pub fn cnames(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().filter_map(ResourceRecord::cname)
    }

    pub fn min_ttl(&self) -> Option<u32> {
        self.answers.iter().map(|r| r.ttl).min()
    }
}
