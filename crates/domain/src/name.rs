//! Domain name helpers: label escaping, normalization, case-insensitive
//! equality and hashing.
//!
//! Names are kept in their textual, escaped form (`my\.host.local`). A label
//! may contain any byte; `.` and `\` are escaped with a backslash and bytes
//! outside the printable range use the `\DDD` decimal form.

use std::fmt::Write as _;

/// Reads the next label from `name`, returning its unescaped bytes and the
/// remainder of the name after the separating dot.
///
/// Returns `None` once the name is exhausted. A `\DDD` escape above 255 is
/// not a decimal escape: only its first digit is taken as escaped, so `\256`
/// reads as the text `256`. Use [`escapes_in_range`] to reject such names.
pub fn unescape_label(name: &str) -> Option<(Vec<u8>, &str)> {
    if name.is_empty() {
        return None;
    }

    let bytes = name.as_bytes();
    let mut label = Vec::with_capacity(bytes.len().min(63));
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'.' => return Some((label, &name[i + 1..])),
            b'\\' if i + 1 < bytes.len() => {
                if let Some(value) = decimal_escape(&bytes[i + 1..]) {
                    label.push(value);
                    i += 4;
                } else {
                    label.push(bytes[i + 1]);
                    i += 2;
                }
            }
            b => {
                label.push(b);
                i += 1;
            }
        }
    }

    Some((label, ""))
}

fn decimal_escape(rest: &[u8]) -> Option<u8> {
    if rest.len() < 3 || !rest[..3].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = rest[..3]
        .iter()
        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
    u8::try_from(value).ok()
}

/// Whether every three-digit `\DDD` escape in `name` fits in a byte.
pub fn escapes_in_range(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        let rest = &bytes[i + 1..];
        if rest.len() >= 3 && rest[..3].iter().all(u8::is_ascii_digit) {
            if decimal_escape(rest).is_none() {
                return false;
            }
            i += 4;
        } else {
            i += 2;
        }
    }

    true
}

/// Escapes a raw label so it can be embedded in a textual domain name.
pub fn escape_label(label: &[u8]) -> String {
    let utf8 = std::str::from_utf8(label).is_ok();
    let mut out = String::with_capacity(label.len());

    for (i, &b) in label.iter().enumerate() {
        match b {
            b'.' | b'\\' => {
                out.push('\\');
                out.push(b as char);
            }
            0x00..=0x1f | 0x7f => {
                let _ = write!(out, "\\{:03}", b);
            }
            0x80..=0xff if !utf8 => {
                let _ = write!(out, "\\{:03}", b);
            }
            0x80..=0xff => {
                // Copy the whole UTF-8 sequence once, at its leading byte.
                if b & 0xc0 != 0x80 {
                    let len = utf8_sequence_len(b);
                    if let Ok(s) = std::str::from_utf8(&label[i..i + len]) {
                        out.push_str(s);
                    }
                }
            }
            _ => out.push(b as char),
        }
    }

    out
}

fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}

/// Iterates over the unescaped labels of a textual domain name.
pub struct Labels<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Labels<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        let (label, rest) = unescape_label(self.rest)?;
        self.rest = rest;
        Some(label)
    }
}

pub fn labels(name: &str) -> Labels<'_> {
    Labels { rest: name }
}

/// Brings a domain name into canonical textual form: every label is
/// re-escaped, empty labels and the trailing dot are dropped. Case is kept.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for label in labels(name).filter(|l| !l.is_empty()) {
        if !out.is_empty() {
            out.push('.');
        }
        out.push_str(&escape_label(&label));
    }

    out
}

/// Compares two names label by label, ignoring ASCII case.
pub fn domain_equal(a: &str, b: &str) -> bool {
    let mut a = labels(a);
    let mut b = labels(b);

    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => continue,
            _ => return false,
        }
    }
}

/// Hashes a name consistently with [`domain_equal`].
pub fn domain_hash(name: &str) -> u32 {
    labels(name).fold(0u32, |hash, label| {
        let hash = hash.wrapping_mul(31).wrapping_add(label.len() as u32);
        label.iter().fold(hash, |h, b| {
            h.wrapping_mul(31).wrapping_add(u32::from(b.to_ascii_lowercase()))
        })
    })
}
