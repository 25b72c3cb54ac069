use super::{RecordClass, RecordType};
use crate::name::{domain_equal, domain_hash, normalize_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Identity of a resource record: name, class and type.
///
/// `Key` is a shared handle; cloning it takes another reference to the same
/// immutable key. A key whose type is `ANY` is a *pattern* and may only be
/// used to match concrete keys, never as the key of a [`Record`].
///
/// [`Record`]: super::Record
#[derive(Clone)]
pub struct Key(Arc<KeyInner>);

struct KeyInner {
    name: String,
    class: RecordClass,
    record_type: RecordType,
}

impl Key {
    /// Creates a key, normalizing `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: &str, class: RecordClass, record_type: RecordType) -> Self {
        assert!(!name.is_empty(), "key name must not be empty");

        Self(Arc::new(KeyInner {
            name: normalize_name(name),
            class,
            record_type,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn class(&self) -> RecordClass {
        self.0.class
    }

    pub fn record_type(&self) -> RecordType {
        self.0.record_type
    }

    pub fn is_pattern(&self) -> bool {
        self.0.record_type.is_any()
    }

    /// Matches `self` as a query pattern against the concrete key `key`.
    ///
    /// Names and classes must be equal; the types must be equal unless this
    /// key is an `ANY` pattern.
    ///
    /// # Panics
    ///
    /// Panics if `key` is itself a pattern.
    pub fn pattern_match(&self, key: &Key) -> bool {
        assert!(!key.is_pattern(), "cannot match against a pattern key");

        if self.ptr_eq(key) {
            return true;
        }

        domain_equal(self.name(), key.name())
            && (self.record_type() == key.record_type() || self.is_pattern())
            && self.class() == key.class()
    }

    /// Additive hash of name, type and class.
    ///
    /// Collisions across type and class are easy to produce; the only
    /// guarantee is that equal keys hash equal.
    pub fn hash_code(&self) -> u32 {
        domain_hash(self.name())
            .wrapping_add(u32::from(self.record_type().to_u16()))
            .wrapping_add(u32::from(self.class().as_u16()))
    }

    /// Upper bound for the wire size of the name plus the class and type
    /// fields.
    pub fn estimate_size(&self) -> usize {
        self.name().len() + 1 + 4
    }

    pub fn ptr_eq(&self, other: &Key) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this key.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        domain_equal(self.name(), other.name())
            && self.record_type() == other.record_type()
            && self.class() == other.class()
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name(), self.class(), self.record_type())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name())
            .field("class", &self.class())
            .field("record_type", &self.record_type())
            .finish()
    }
}
