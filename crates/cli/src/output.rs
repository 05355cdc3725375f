use dnsreq_domain::{Message, RecordType};
use dnsreq_infrastructure::dns::DnsResponse;
use std::fmt;
use std::time::Duration;

/// dig-style rendering of one query and its response.
pub struct TextReport<'a> {
    pub domain: &'a str,
    pub record_type: RecordType,
    pub server: &'a str,
    pub elapsed: Duration,
    pub response: &'a DnsResponse,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = &self.response.message;
        let header = &message.header;
        let flags = header.flags();

        writeln!(
            f,
            "; <<>> dnsreq {} <<>> {} {}",
            env!("CARGO_PKG_VERSION"),
            self.domain,
            self.record_type
        )?;
        let opcode = match flags.opcode {
            0 => "QUERY".to_string(),
            other => format!("OPCODE{}", other),
        };
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
            opcode, self.response.rcode, header.id
        )?;
        writeln!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            flags,
            header.question_count,
            header.answer_count,
            header.authority_count,
            header.additional_count
        )?;
        if self.response.truncated {
            writeln!(f, ";; WARNING: response truncated (TC bit set)")?;
        }
        if self.response.is_nxdomain() {
            writeln!(f, ";; WARNING: {} does not exist (NXDOMAIN)", self.domain)?;
        } else if self.response.is_server_error() {
            writeln!(
                f,
                ";; WARNING: server {} could not answer ({})",
                self.server, self.response.rcode
            )?;
        }

        if !message.questions.is_empty() {
            writeln!(f)?;
            writeln!(f, ";; QUESTION SECTION:")?;
            for question in &message.questions {
                writeln!(f, ";{}", question)?;
            }
        }

        if !message.answers.is_empty() {
            writeln!(f)?;
            writeln!(f, ";; ANSWER SECTION:")?;
            for record in &message.answers {
                writeln!(f, "{}", record)?;
            }
        }

        writeln!(f)?;
        writeln!(f, ";; Query time: {} msec", self.elapsed.as_millis())?;
        writeln!(f, ";; SERVER: {}", self.server)?;
        if !self.response.addresses.is_empty() {
            let ips: Vec<String> = self
                .response
                .addresses
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(f, ";; ADDRESSES: {}", ips.join(", "))?;
        }
        Ok(())
    }
}

pub fn render_json(message: &Message) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(message)
}
