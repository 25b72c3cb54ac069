use super::compare::lexicographical_compare;
use super::{Key, RData, RecordClass, RecordType};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// TTL given to records created without an explicit one, in seconds.
pub const DEFAULT_TTL: u32 = 120 * 60;

/// A resource record: a [`Key`], a TTL and a payload matching the key's type.
///
/// `Record` is a shared handle to an immutable value. Changing a record means
/// building a new one, e.g. with [`Record::with_ttl`].
#[derive(Clone)]
pub struct Record(Arc<RecordInner>);

struct RecordInner {
    key: Key,
    ttl: u32,
    data: RData,
}

impl Record {
    /// Creates a record with a zeroed payload and the default TTL.
    ///
    /// # Panics
    ///
    /// Panics if `key` is a pattern key.
    pub fn new(key: &Key) -> Self {
        let data = RData::empty(key.record_type());
        Self::with_data(key, data)
    }

    /// Shorthand for building the key and the record in one step.
    pub fn new_full(name: &str, class: RecordClass, record_type: RecordType) -> Self {
        let key = Key::new(name, class, record_type);
        Self::new(&key)
    }

    /// # Panics
    ///
    /// Panics if `key` is a pattern key or `data` does not belong to the
    /// key's type.
    pub fn with_data(key: &Key, data: RData) -> Self {
        assert!(!key.is_pattern(), "a pattern key cannot identify a record");
        assert!(
            data.fits(key.record_type()),
            "payload {:?} does not match record type {}",
            data.record_type(),
            key.record_type()
        );

        Self(Arc::new(RecordInner {
            key: key.clone(),
            ttl: DEFAULT_TTL,
            data,
        }))
    }

    pub fn key(&self) -> &Key {
        &self.0.key
    }

    pub fn ttl(&self) -> u32 {
        self.0.ttl
    }

    pub fn data(&self) -> &RData {
        &self.0.data
    }

    /// A TTL of zero announces that the record is going away.
    pub fn is_goodbye(&self) -> bool {
        self.0.ttl == 0
    }

    /// Deep copy: the payload is duplicated, the key is shared.
    pub fn copy(&self) -> Self {
        Self(Arc::new(RecordInner {
            key: self.0.key.clone(),
            ttl: self.0.ttl,
            data: self.0.data.clone(),
        }))
    }

    pub fn with_ttl(&self, ttl: u32) -> Self {
        Self(Arc::new(RecordInner {
            key: self.0.key.clone(),
            ttl,
            data: self.0.data.clone(),
        }))
    }

    /// Same key and payload; the TTL is ignored.
    pub fn equal_no_ttl(&self, other: &Record) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        self.key() == other.key() && self.data().rdata_equal(other.data())
    }

    /// Canonical ordering used for conflict resolution between records.
    pub fn lexicographical_cmp(&self, other: &Record) -> Ordering {
        lexicographical_compare(self, other)
    }

    /// Upper bound for the record's wire size: key, TTL and RDLENGTH fields,
    /// and the payload.
    pub fn estimate_size(&self) -> usize {
        self.key().estimate_size() + 4 + 2 + self.data().estimate_size()
    }

    pub fn ptr_eq(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this record.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ; ttl={}", self.key(), self.data(), self.ttl())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("key", self.key())
            .field("ttl", &self.ttl())
            .field("data", self.data())
            .finish()
    }
}
