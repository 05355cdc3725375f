use super::header::{decode_header, encode_header};
use super::question::{decode_question, encode_question};
use super::record::decode_record;
use dnsreq_domain::{
    DecodeError, EncodeError, Flags, Header, Message, Question, RecordType, HEADER_LEN,
};

/// Query shape for [`encode_query_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            record_type: RecordType::A,
            recursion_desired: false,
        }
    }
}

/// Builds a single-question IN/A query with recursion-desired clear.
pub fn encode_query(domain: &str, transaction_id: u16) -> Result<Vec<u8>, EncodeError> {
    encode_query_with(domain, transaction_id, &QueryOptions::default())
}

/// Builds a single-question IN query with the given type and RD bit.
pub fn encode_query_with(
    domain: &str,
    transaction_id: u16,
    options: &QueryOptions,
) -> Result<Vec<u8>, EncodeError> {
    let header = Header::query(transaction_id, Flags::query(options.recursion_desired));
    let question = Question::new(domain, options.record_type);

    let mut buf = Vec::with_capacity(512);
    encode_header(&header, &mut buf);
    encode_question(&question, &mut buf)?;
    Ok(buf)
}

/// Decodes the header, question section and answer section of `buf`.
///
/// The walk is strictly sequential: header, then `question_count`
/// questions, then `answer_count` records. Authority and additional
/// sections, and any bytes after the last answer, are left unread.
pub fn decode_message(buf: &[u8]) -> Result<Message, DecodeError> {
    let header = decode_header(buf)?;
    let mut offset = HEADER_LEN;

    let mut questions = Vec::new();
    for _ in 0..header.question_count {
        let (question, next) = decode_question(buf, offset)?;
        questions.push(question);
        offset = next;
    }

    let mut answers = Vec::new();
    for _ in 0..header.answer_count {
        let (record, next) = decode_record(buf, offset)?;
        answers.push(record);
        offset = next;
    }

    Ok(Message {
        header,
        questions,
        answers,
    })
}
