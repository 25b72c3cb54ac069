use crate::DomainError;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Longest string a TXT character-string can carry on the wire.
pub const MAX_STRING_LEN: usize = 255;

/// Ordered list of byte strings carried by a TXT record.
///
/// The canonical byte form is the RDATA of the TXT record: every string is
/// written as a length byte followed by its content. An empty list is encoded
/// as a single empty string (one zero byte), as mDNS requires, so a list
/// holding only one empty string is the same value as the empty list.
#[derive(Debug, Clone, Default)]
pub struct StringList {
    items: Vec<Vec<u8>>,
}

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_strs<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for s in strings {
            list.add(s.as_ref());
        }
        list
    }

    pub fn add(&mut self, s: &str) {
        self.add_bytes(s.as_bytes());
    }

    /// Appends a string, truncating it to [`MAX_STRING_LEN`] bytes.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(MAX_STRING_LEN);
        self.items.push(bytes[..len].to_vec());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.items.iter().map(Vec::as_slice)
    }

    fn canonical(&self) -> &[Vec<u8>] {
        match self.items.as_slice() {
            [only] if only.is_empty() => &[],
            items => items,
        }
    }

    pub fn serialized_len(&self) -> usize {
        if self.items.is_empty() {
            return 1;
        }
        self.items.iter().map(|s| 1 + s.len()).sum()
    }

    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        if self.items.is_empty() {
            out.push(0);
            return;
        }
        for s in &self.items {
            out.push(s.len() as u8);
            out.extend_from_slice(s);
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        self.serialize_into(&mut out);
        out
    }

    /// Parses the canonical byte form produced by [`StringList::to_bytes`].
    ///
    /// A lone zero byte yields the empty list.
    pub fn parse(data: &[u8]) -> Result<Self, DomainError> {
        if data == [0] {
            return Ok(Self::new());
        }

        let mut list = Self::new();
        let mut rest = data;
        while let Some((&len, tail)) = rest.split_first() {
            let len = usize::from(len);
            if tail.len() < len {
                return Err(DomainError::InvalidTxtData(format!(
                    "string of length {} truncated to {} bytes",
                    len,
                    tail.len()
                )));
            }
            list.items.push(tail[..len].to_vec());
            rest = &tail[len..];
        }
        Ok(list)
    }
}

impl PartialEq for StringList {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for StringList {}

impl Hash for StringList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "\"{}\"", String::from_utf8_lossy(s))?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_strs(iter)
    }
}
