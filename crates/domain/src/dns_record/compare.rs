//! Canonical ordering of records.
//!
//! Records are ordered by class, then type, then payload. Names inside the
//! payload are compared label by label (length first, then content), TXT data
//! and opaque payloads by their bytes.

use super::{RData, Record};
use crate::name::unescape_label;
use std::cmp::Ordering;

pub fn lexicographical_compare(a: &Record, b: &Record) -> Ordering {
    if a.ptr_eq(b) {
        return Ordering::Equal;
    }

    let (ak, bk) = (a.key(), b.key());

    ak.class()
        .cmp(&bk.class())
        .then_with(|| ak.record_type().cmp(&bk.record_type()))
        .then_with(|| rdata_cmp(a.data(), b.data()))
}

fn rdata_cmp(a: &RData, b: &RData) -> Ordering {
    match (a, b) {
        (RData::PTR(a), RData::PTR(b)) | (RData::CNAME(a), RData::CNAME(b)) => {
            lexicographical_domain_cmp(a, b)
        }
        (
            RData::SRV {
                priority: ap,
                weight: aw,
                port: aport,
                target: at,
            },
            RData::SRV {
                priority: bp,
                weight: bw,
                port: bport,
                target: bt,
            },
        ) => ap
            .cmp(bp)
            .then_with(|| aw.cmp(bw))
            .then_with(|| aport.cmp(bport))
            .then_with(|| lexicographical_domain_cmp(at, bt)),
        (RData::HINFO { cpu: ac, os: ao }, RData::HINFO { cpu: bc, os: bo }) => {
            length_first_cmp(ac.as_bytes(), bc.as_bytes())
                .then_with(|| length_first_cmp(ao.as_bytes(), bo.as_bytes()))
        }
        (RData::TXT(a), RData::TXT(b)) => lexicographical_memcmp(&a.to_bytes(), &b.to_bytes()),
        (RData::A(a), RData::A(b)) => a.octets().cmp(&b.octets()),
        (RData::AAAA(a), RData::AAAA(b)) => a.octets().cmp(&b.octets()),
        (RData::Generic(a), RData::Generic(b)) => lexicographical_memcmp(a, b),
        (a, b) => panic!(
            "canonical comparison across record types: {:?} vs {:?}",
            a.record_type(),
            b.record_type()
        ),
    }
}

fn length_first_cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares two names label by label. A shorter label sorts first; a name
/// that runs out of labels sorts before one that still has some.
pub fn lexicographical_domain_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a, b);

    loop {
        match (unescape_label(a), unescape_label(b)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((la, ra)), Some((lb, rb))) => {
                let ord = length_first_cmp(&la, &lb);
                if ord != Ordering::Equal {
                    return ord;
                }
                a = ra;
                b = rb;
            }
        }
    }
}

/// Byte-wise comparison of the common prefix. When one buffer is a strict
/// prefix of the other, the shorter buffer sorts *after* the longer one.
pub fn lexicographical_memcmp(a: &[u8], b: &[u8]) -> Ordering {
    let common = a.len().min(b.len());

    match a[..common].cmp(&b[..common]) {
        Ordering::Equal if a.len() == b.len() => Ordering::Equal,
        Ordering::Equal if a.len() == common => Ordering::Greater,
        Ordering::Equal => Ordering::Less,
        ord => ord,
    }
}
