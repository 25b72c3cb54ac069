use super::RecordsConfig;
use crate::dns_record::{Key, RData, Record, RecordType};
use crate::name::{escapes_in_range, normalize_name};
use crate::{DomainError, StringList};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

/// A record as written in the `[[zone]]` array of the configuration file.
///
/// Only the fields relevant to `record_type` are read:
///
/// | type         | fields                                 |
/// |--------------|----------------------------------------|
/// | A, AAAA      | `address`                              |
/// | CNAME, PTR   | `target`                               |
/// | HINFO        | `cpu`, `os`                            |
/// | TXT          | `txt`                                  |
/// | SRV          | `priority`, `weight`, `port`, `target` |
/// | anything else| `data` (base64 RDATA)                  |
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(default)]
    pub ttl: Option<u32>,

    #[serde(default)]
    pub cache_flush: Option<bool>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub cpu: Option<String>,

    #[serde(default)]
    pub os: Option<String>,

    #[serde(default)]
    pub priority: Option<u16>,

    #[serde(default)]
    pub weight: Option<u16>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub txt: Vec<String>,

    #[serde(default)]
    pub data: Option<String>,
}

impl RecordEntry {
    pub fn parsed_type(&self) -> Result<RecordType, DomainError> {
        self.record_type.parse()
    }

    pub fn to_record(&self, defaults: &RecordsConfig) -> Result<Record, DomainError> {
        if !escapes_in_range(&self.name) || normalize_name(&self.name).is_empty() {
            return Err(DomainError::InvalidDomainName(self.name.clone()));
        }

        let record_type = self.parsed_type()?;
        if record_type.is_any() {
            return Err(self.invalid("type ANY is only valid in queries"));
        }

        let mut class = defaults.class();
        if let Some(flush) = self.cache_flush {
            class = if flush {
                class.with_cache_flush()
            } else {
                class.without_cache_flush()
            };
        }

        debug!(name = %self.name, record_type = %record_type, "Building record from zone entry");

        let key = Key::new(&self.name, class, record_type);
        let data = self.rdata(record_type)?;
        let ttl = self.ttl.unwrap_or(defaults.default_ttl);

        Ok(Record::with_data(&key, data).with_ttl(ttl))
    }

    fn rdata(&self, record_type: RecordType) -> Result<RData, DomainError> {
        let data = match RecordType::from_u16(record_type.to_u16()) {
            RecordType::A => {
                let address = self.required(&self.address, "address")?;
                RData::A(
                    address
                        .parse::<Ipv4Addr>()
                        .map_err(|_| DomainError::InvalidIpAddress(address.to_string()))?,
                )
            }
            RecordType::AAAA => {
                let address = self.required(&self.address, "address")?;
                RData::AAAA(
                    address
                        .parse::<Ipv6Addr>()
                        .map_err(|_| DomainError::InvalidIpAddress(address.to_string()))?,
                )
            }
            RecordType::CNAME => RData::CNAME(self.target_name()?),
            RecordType::PTR => RData::PTR(self.target_name()?),
            RecordType::HINFO => RData::HINFO {
                cpu: self.required(&self.cpu, "cpu")?.to_string(),
                os: self.required(&self.os, "os")?.to_string(),
            },
            RecordType::TXT => RData::TXT(StringList::from_strs(&self.txt)),
            RecordType::SRV => RData::SRV {
                priority: self.priority.unwrap_or(0),
                weight: self.weight.unwrap_or(0),
                port: *self.required(&self.port, "port")?,
                target: self.target_name()?,
            },
            RecordType::NS | RecordType::ANY | RecordType::Unknown(_) => {
                let bytes = match &self.data {
                    Some(encoded) => STANDARD
                        .decode(encoded)
                        .map_err(|e| self.invalid(&format!("data is not base64: {}", e)))?,
                    None => Vec::new(),
                };
                RData::Generic(bytes)
            }
        };

        Ok(data)
    }

    fn target_name(&self) -> Result<String, DomainError> {
        let target = self.required(&self.target, "target")?;
        if !escapes_in_range(target) {
            return Err(self.invalid("target has a decimal escape above 255"));
        }
        let target = normalize_name(target);
        if target.is_empty() {
            return Err(self.invalid("target must not be empty"));
        }
        Ok(target)
    }

    fn required<'a, T>(&self, field: &'a Option<T>, what: &str) -> Result<&'a T, DomainError> {
        field
            .as_ref()
            .ok_or_else(|| self.invalid(&format!("missing field `{}`", what)))
    }

    fn invalid(&self, reason: &str) -> DomainError {
        DomainError::InvalidRecord {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}
