pub mod compare;
mod key;
mod rdata;
mod record;
mod record_class;
mod record_type;

pub use compare::lexicographical_compare;
pub use key::Key;
pub use rdata::RData;
pub use record::{Record, DEFAULT_TTL};
pub use record_class::RecordClass;
pub use record_type::RecordType;
