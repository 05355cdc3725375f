use serde::Serialize;
use std::fmt;

/// Size of the fixed DNS header on the wire.
pub const HEADER_LEN: usize = 12;

const QR_SHIFT: u16 = 15;
const OPCODE_SHIFT: u16 = 11;
const AA_SHIFT: u16 = 10;
const TC_SHIFT: u16 = 9;
const RD_SHIFT: u16 = 8;
const RA_SHIFT: u16 = 7;
const NIBBLE: u16 = 0x000F;

/// The six 16-bit fields of a DNS message header, flags still packed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    /// Header for a single-question query.
    pub fn query(id: u16, flags: Flags) -> Self {
        Self {
            id,
            flags: flags.pack(),
            question_count: 1,
            ..Self::default()
        }
    }

    pub fn flags(&self) -> Flags {
        Flags::unpack(self.flags)
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from((self.flags & NIBBLE) as u8)
    }

    pub fn is_response(&self) -> bool {
        self.flags & (1 << QR_SHIFT) != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & (1 << TC_SHIFT) != 0
    }
}

/// Unpacked view of the header flags word.
///
/// Layout (bit 15 first): `QR | Opcode(4) | AA | TC | RD | RA | Z(3) | RCODE(4)`.
/// The three Z bits are not represented and always pack to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Flags {
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub rcode: u8,
}

impl Flags {
    /// Flags for a standard query, optionally asking for recursion.
    pub fn query(recursion_desired: bool) -> Self {
        Self {
            rd: recursion_desired,
            ..Self::default()
        }
    }

    /// Packs the sub-fields into their standard bit positions.
    ///
    /// Opcode and RCODE are masked to 4 bits so an out-of-range value can
    /// never spill into a neighbouring field.
    pub fn pack(&self) -> u16 {
        (u16::from(self.qr) << QR_SHIFT)
            | ((u16::from(self.opcode) & NIBBLE) << OPCODE_SHIFT)
            | (u16::from(self.aa) << AA_SHIFT)
            | (u16::from(self.tc) << TC_SHIFT)
            | (u16::from(self.rd) << RD_SHIFT)
            | (u16::from(self.ra) << RA_SHIFT)
            | (u16::from(self.rcode) & NIBBLE)
    }

    pub fn unpack(raw: u16) -> Self {
        Self {
            qr: raw & (1 << QR_SHIFT) != 0,
            opcode: ((raw >> OPCODE_SHIFT) & NIBBLE) as u8,
            aa: raw & (1 << AA_SHIFT) != 0,
            tc: raw & (1 << TC_SHIFT) != 0,
            rd: raw & (1 << RD_SHIFT) != 0,
            ra: raw & (1 << RA_SHIFT) != 0,
            rcode: (raw & NIBBLE) as u8,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.qr, "qr"),
            (self.aa, "aa"),
            (self.tc, "tc"),
            (self.rd, "rd"),
            (self.ra, "ra"),
        ];
        let mut first = true;
        for (set, name) in names {
            if set {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Packs the seven flag sub-fields into one 16-bit word.
///
/// Single-bit fields are taken from their lowest bit; opcode and rcode
/// from their lowest four bits.
pub fn pack_flags(qr: u16, opcode: u16, aa: u16, tc: u16, rd: u16, ra: u16, rcode: u16) -> u16 {
    Flags {
        qr: qr & 1 == 1,
        opcode: (opcode & NIBBLE) as u8,
        aa: aa & 1 == 1,
        tc: tc & 1 == 1,
        rd: rd & 1 == 1,
        ra: ra & 1 == 1,
        rcode: (rcode & NIBBLE) as u8,
    }
    .pack()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u8),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            c => ResponseCode::Other(c),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            known => f.write_str(known.as_str()),
        }
    }
}
