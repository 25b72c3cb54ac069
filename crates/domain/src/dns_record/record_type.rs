use crate::DomainError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// TYPE field of a resource record.
///
/// Types outside this list are carried as `Unknown` with their numeric
/// code. `NS` is named for parsing only; like `Unknown` it has no rendering
/// mnemonic and carries an opaque payload. Equality, ordering and hashing all go through the
/// numeric code, so `Unknown(1)` and `A` are the same type.
#[derive(Debug, Clone, Copy)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    PTR,
    HINFO,
    TXT,
    AAAA,
    SRV,

    /// Query-only wildcard matching every type.
    ANY,

    Unknown(u16),
}

impl RecordType {
    /// Mnemonic used when rendering keys, `None` for types outside the table.
    pub fn as_str(&self) -> Option<&'static str> {
        match RecordType::from_u16(self.to_u16()) {
            RecordType::A => Some("A"),
            RecordType::CNAME => Some("CNAME"),
            RecordType::PTR => Some("PTR"),
            RecordType::HINFO => Some("HINFO"),
            RecordType::TXT => Some("TXT"),
            RecordType::AAAA => Some("AAAA"),
            RecordType::SRV => Some("SRV"),
            RecordType::ANY => Some("ANY"),
            RecordType::NS | RecordType::Unknown(_) => None,
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::ANY => 255,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            12 => RecordType::PTR,
            13 => RecordType::HINFO,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            33 => RecordType::SRV,
            255 => RecordType::ANY,
            other => RecordType::Unknown(other),
        }
    }

    pub fn is_any(&self) -> bool {
        self.to_u16() == 255
    }

    /// Whether records of this type carry an opaque byte payload.
    pub fn is_generic(&self) -> bool {
        matches!(
            RecordType::from_u16(self.to_u16()),
            RecordType::NS | RecordType::Unknown(_)
        )
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.to_u16() == other.to_u16()
    }
}

impl Eq for RecordType {}

impl PartialOrd for RecordType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u16().cmp(&other.to_u16())
    }
}

impl Hash for RecordType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_u16().hash(state);
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        RecordType::from_u16(code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => f.write_str(s),
            None => write!(f, "TYPE{}", self.to_u16()),
        }
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "PTR" => Ok(RecordType::PTR),
            "HINFO" => Ok(RecordType::HINFO),
            "TXT" => Ok(RecordType::TXT),
            "AAAA" => Ok(RecordType::AAAA),
            "SRV" => Ok(RecordType::SRV),
            "ANY" | "*" => Ok(RecordType::ANY),
            other => other
                .strip_prefix("TYPE")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordType::from_u16)
                .ok_or_else(|| DomainError::InvalidRecordType(s.to_string())),
        }
    }
}
