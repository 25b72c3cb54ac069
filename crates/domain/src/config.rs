pub mod errors;
pub mod logging;
pub mod records;
pub mod root;
pub mod zone;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::RecordsConfig;
pub use root::{CliOverrides, Config};
pub use zone::RecordEntry;
