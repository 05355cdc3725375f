use dnsreq_domain::{Header, Message, Question, RData, RecordType, ResourceRecord, CLASS_IN};
use std::net::Ipv4Addr;
use std::str::FromStr;

fn a_record(name: &str, ip: [u8; 4], ttl: u32) -> ResourceRecord {
    ResourceRecord {
        name: name.to_string(),
        rtype: RecordType::A.to_u16(),
        rclass: CLASS_IN,
        ttl,
        rdata: RData::A(Ipv4Addr::from(ip)),
    }
}

fn cname_record(name: &str, target: &str, ttl: u32) -> ResourceRecord {
    ResourceRecord {
        name: name.to_string(),
        rtype: RecordType::CNAME.to_u16(),
        rclass: CLASS_IN,
        ttl,
        rdata: RData::Cname(target.to_string()),
    }
}

#[test]
fn test_record_type_codes() {
    for rt in [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::PTR,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
    ] {
        assert_eq!(RecordType::from_u16(rt.to_u16()), Some(rt));
        assert_eq!(RecordType::from_str(rt.as_str()), Ok(rt));
    }
    assert_eq!(RecordType::from_u16(99), None);
    assert_eq!(RecordType::describe(99), "TYPE99");
    assert_eq!(RecordType::from_str("cname"), Ok(RecordType::CNAME));
    assert!(RecordType::from_str("BOGUS").is_err());
}

#[test]
fn test_rdata_text() {
    assert_eq!(
        RData::A(Ipv4Addr::new(192, 168, 0, 1)).text().as_deref(),
        Some("192.168.0.1")
    );
    assert_eq!(
        RData::Cname("example.org".to_string()).text().as_deref(),
        Some("example.org")
    );
    assert_eq!(RData::Opaque(vec![1, 2, 3]).text(), None);
}

#[test]
fn test_record_display() {
    let record = a_record("example.com", [93, 184, 216, 34], 300);
    assert_eq!(record.to_string(), "example.com.\t300\tIN\tA\t93.184.216.34");

    let record = cname_record("www.example.com", "example.com", 60);
    assert_eq!(
        record.to_string(),
        "www.example.com.\t60\tIN\tCNAME\texample.com."
    );

    let record = ResourceRecord {
        name: "example.com".to_string(),
        rtype: 99,
        rclass: 3,
        ttl: 1,
        rdata: RData::Opaque(vec![0; 5]),
    };
    assert_eq!(record.to_string(), "example.com.\t1\tCLASS3\tTYPE99\t\\# 5");
    assert_eq!(record.record_type(), None);
}

#[test]
fn test_question_display() {
    let question = Question::new("example.com", RecordType::A);
    assert_eq!(question.qtype, 1);
    assert_eq!(question.qclass, CLASS_IN);
    assert_eq!(question.to_string(), "example.com.\tIN\tA");
}

#[test]
fn test_message_helpers() {
    let message = Message {
        header: Header::default(),
        questions: vec![Question::new("www.example.com", RecordType::A)],
        answers: vec![
            cname_record("www.example.com", "example.com", 600),
            a_record("example.com", [10, 0, 0, 1], 120),
            a_record("example.com", [10, 0, 0, 2], 300),
        ],
    };

    let addrs: Vec<Ipv4Addr> = message.addresses().collect();
    assert_eq!(addrs, vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)]);
    assert_eq!(message.cnames().collect::<Vec<_>>(), vec!["example.com"]);
    assert_eq!(message.min_ttl(), Some(120));
}

#[test]
fn test_message_without_answers_has_no_min_ttl() {
    let message = Message {
        header: Header::default(),
        questions: vec![],
        answers: vec![],
    };
    assert_eq!(message.min_ttl(), None);
    assert_eq!(message.addresses().count(), 0);
}
