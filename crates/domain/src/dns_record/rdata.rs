use super::RecordType;
use crate::name::domain_equal;
use crate::StringList;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a resource record.
///
/// The variant always agrees with the type of the record's key; any type
/// without a dedicated variant carries its RDATA as opaque bytes in
/// `Generic`.
#[derive(Debug, Clone)]
pub enum RData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    PTR(String),
    HINFO {
        cpu: String,
        os: String,
    },
    TXT(StringList),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Generic(Vec<u8>),
}

impl RData {
    /// Zeroed payload for a record of type `record_type`.
    pub fn empty(record_type: RecordType) -> Self {
        match RecordType::from_u16(record_type.to_u16()) {
            RecordType::A => RData::A(Ipv4Addr::UNSPECIFIED),
            RecordType::AAAA => RData::AAAA(Ipv6Addr::UNSPECIFIED),
            RecordType::CNAME => RData::CNAME(String::new()),
            RecordType::PTR => RData::PTR(String::new()),
            RecordType::HINFO => RData::HINFO {
                cpu: String::new(),
                os: String::new(),
            },
            RecordType::TXT => RData::TXT(StringList::new()),
            RecordType::SRV => RData::SRV {
                priority: 0,
                weight: 0,
                port: 0,
                target: String::new(),
            },
            RecordType::NS | RecordType::ANY | RecordType::Unknown(_) => {
                RData::Generic(Vec::new())
            }
        }
    }

    /// The record type this payload belongs to, `None` for generic bytes
    /// which fit any type without a dedicated variant.
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            RData::A(_) => Some(RecordType::A),
            RData::AAAA(_) => Some(RecordType::AAAA),
            RData::CNAME(_) => Some(RecordType::CNAME),
            RData::PTR(_) => Some(RecordType::PTR),
            RData::HINFO { .. } => Some(RecordType::HINFO),
            RData::TXT(_) => Some(RecordType::TXT),
            RData::SRV { .. } => Some(RecordType::SRV),
            RData::Generic(_) => None,
        }
    }

    pub fn fits(&self, record_type: RecordType) -> bool {
        match self.record_type() {
            Some(own) => own == record_type,
            None => record_type.is_generic(),
        }
    }

    /// Compares two payloads of the same type. Names compare as domain
    /// names, HINFO strings exactly, everything else byte for byte.
    ///
    /// # Panics
    ///
    /// Panics if the payloads belong to different types.
    pub fn rdata_equal(&self, other: &RData) -> bool {
        match (self, other) {
            (
                RData::SRV {
                    priority: ap,
                    weight: aw,
                    port: aport,
                    target: at,
                },
                RData::SRV {
                    priority: bp,
                    weight: bw,
                    port: bport,
                    target: bt,
                },
            ) => ap == bp && aw == bw && aport == bport && domain_equal(at, bt),
            (RData::PTR(a), RData::PTR(b)) | (RData::CNAME(a), RData::CNAME(b)) => {
                domain_equal(a, b)
            }
            (RData::HINFO { cpu: ac, os: ao }, RData::HINFO { cpu: bc, os: bo }) => {
                ac == bc && ao == bo
            }
            (RData::TXT(a), RData::TXT(b)) => a == b,
            (RData::A(a), RData::A(b)) => a == b,
            (RData::AAAA(a), RData::AAAA(b)) => a == b,
            (RData::Generic(a), RData::Generic(b)) => a == b,
            (a, b) => panic!(
                "payload comparison across record types: {:?} vs {:?}",
                a.record_type(),
                b.record_type()
            ),
        }
    }

    /// Upper bound for the wire size of the RDATA.
    pub fn estimate_size(&self) -> usize {
        match self {
            RData::PTR(name) | RData::CNAME(name) => name.len() + 1,
            RData::SRV { target, .. } => 6 + target.len() + 1,
            RData::HINFO { cpu, os } => os.len() + 1 + cpu.len() + 1,
            RData::TXT(list) => list.serialized_len(),
            RData::A(_) => 4,
            RData::AAAA(_) => 16,
            RData::Generic(data) => data.len(),
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::AAAA(addr) => write!(f, "{}", addr),
            RData::PTR(name) | RData::CNAME(name) => f.write_str(name),
            RData::TXT(list) => write!(f, "{}", list),
            RData::HINFO { cpu, os } => write!(f, "\"{}\" \"{}\"", cpu, os),
            RData::SRV {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{} {} {} {}", priority, weight, port, target),
            RData::Generic(_) => f.write_str("<unparsable>"),
        }
    }
}
