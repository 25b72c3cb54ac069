use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid record class: {0}")]
    InvalidRecordClass(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid record {name}: {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error("Invalid TXT data: {0}")]
    InvalidTxtData(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
