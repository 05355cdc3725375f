#![allow(dead_code)]

/// Encodes a dotted name by hand, independent of the codec under test.
pub fn wire_name(name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00);
    buf
}

/// Assembles response messages byte by byte.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    answer_count: Option<u16>,
    authority_count: u16,
    trailer: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180, // QR, RD, RA, NOERROR
            questions: Vec::new(),
            answers: Vec::new(),
            answer_count: None,
            authority_count: 0,
            trailer: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        let mut q = wire_name(name);
        q.extend_from_slice(&qtype.to_be_bytes());
        q.extend_from_slice(&1u16.to_be_bytes());
        self.questions.push(q);
        self
    }

    /// Question entry copied verbatim, e.g. from a request.
    pub fn question_bytes(mut self, bytes: &[u8]) -> Self {
        self.questions.push(bytes.to_vec());
        self
    }

    pub fn record(mut self, name: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        let mut rr = name.to_vec();
        rr.extend_from_slice(&rtype.to_be_bytes());
        rr.extend_from_slice(&1u16.to_be_bytes());
        rr.extend_from_slice(&ttl.to_be_bytes());
        rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        rr.extend_from_slice(rdata);
        self.answers.push(rr);
        self
    }

    pub fn a_answer(self, name: &str, ip: [u8; 4], ttl: u32) -> Self {
        self.record(&wire_name(name), 1, ttl, &ip)
    }

    pub fn cname_answer(self, name: &str, target: &str, ttl: u32) -> Self {
        self.record(&wire_name(name), 5, ttl, &wire_name(target))
    }

    /// Overrides ANCOUNT instead of deriving it from the records added.
    pub fn answer_count(mut self, count: u16) -> Self {
        self.answer_count = Some(count);
        self
    }

    /// Raw bytes appended after the answer section, counted as authority.
    pub fn authority_bytes(mut self, count: u16, bytes: &[u8]) -> Self {
        self.authority_count = count;
        self.trailer.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let ancount = self
            .answer_count
            .unwrap_or(self.answers.len() as u16);

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        buf.extend_from_slice(&ancount.to_be_bytes());
        buf.extend_from_slice(&self.authority_count.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        for q in &self.questions {
            buf.extend_from_slice(q);
        }
        for rr in &self.answers {
            buf.extend_from_slice(rr);
        }
        buf.extend_from_slice(&self.trailer);
        buf
    }
}
