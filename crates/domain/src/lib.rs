//! Ferrous mDNS Domain Layer
//!
//! Resource-record model shared by the packet codec, the record cache and
//! the responder: keys, records, equality, canonical ordering, size
//! estimation and rendering.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod name;
pub mod string_list;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, RecordEntry, RecordsConfig};
pub use dns_record::{
    lexicographical_compare, Key, RData, Record, RecordClass, RecordType, DEFAULT_TTL,
};
pub use errors::DomainError;
pub use string_list::StringList;
