use crate::dns_record::{RecordClass, DEFAULT_TTL};
use serde::{Deserialize, Serialize};

/// Defaults applied to records built from the `[[zone]]` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Set the mDNS cache-flush bit on every record's class.
    #[serde(default)]
    pub cache_flush: bool,
}

impl RecordsConfig {
    pub fn class(&self) -> RecordClass {
        if self.cache_flush {
            RecordClass::IN.with_cache_flush()
        } else {
            RecordClass::IN
        }
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            cache_flush: false,
        }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}
