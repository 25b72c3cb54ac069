use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// CLASS field of a resource record.
///
/// In multicast DNS the top bit of the class is the cache-flush flag; it is
/// kept packed into the value so that keys compare and hash on the full
/// 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordClass(pub u16);

impl RecordClass {
    pub const IN: RecordClass = RecordClass(1);

    pub const CACHE_FLUSH: u16 = 0x8000;

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn cache_flush(&self) -> bool {
        self.0 & Self::CACHE_FLUSH != 0
    }

    pub fn with_cache_flush(&self) -> Self {
        RecordClass(self.0 | Self::CACHE_FLUSH)
    }

    pub fn without_cache_flush(&self) -> Self {
        RecordClass(self.0 & !Self::CACHE_FLUSH)
    }

    /// Mnemonic used when rendering keys. The flush flag wins over the
    /// plain class; classes other than IN have no mnemonic.
    pub fn as_str(&self) -> Option<&'static str> {
        if self.cache_flush() {
            Some("FLUSH")
        } else if *self == Self::IN {
            Some("IN")
        } else {
            None
        }
    }
}

impl Default for RecordClass {
    fn default() -> Self {
        Self::IN
    }
}

impl From<u16> for RecordClass {
    fn from(value: u16) -> Self {
        RecordClass(value)
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => f.write_str(s),
            None => write!(f, "CLASS{}", self.0),
        }
    }
}

impl FromStr for RecordClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(Self::IN),
            "FLUSH" => Ok(Self::IN.with_cache_flush()),
            other => other
                .strip_prefix("CLASS")
                .and_then(|code| code.parse::<u16>().ok())
                .map(RecordClass)
                .ok_or_else(|| DomainError::InvalidRecordClass(s.to_string())),
        }
    }
}
