use ferrous_mdns_domain::dns_record::compare::{lexicographical_domain_cmp, lexicographical_memcmp};
use ferrous_mdns_domain::{lexicographical_compare, RData, Record, RecordClass, RecordType};
use std::cmp::Ordering;

mod helpers;
use helpers::*;

#[test]
fn test_identical_records_compare_equal() {
    let record = txt_record(&["a=1"]);
    assert_eq!(lexicographical_compare(&record, &record.clone()), Ordering::Equal);
}

#[test]
fn test_class_orders_before_type() {
    let flush = RecordBuilder::new(RecordType::A)
        .class(RecordClass::IN.with_cache_flush())
        .build();
    let plain_txt = RecordBuilder::new(RecordType::TXT).build();

    assert_eq!(plain_txt.lexicographical_cmp(&flush), Ordering::Less);
    assert_eq!(flush.lexicographical_cmp(&plain_txt), Ordering::Greater);
}

#[test]
fn test_type_orders_numerically() {
    let a = RecordBuilder::new(RecordType::A).build();
    let aaaa = RecordBuilder::new(RecordType::AAAA).build();
    let srv = RecordBuilder::new(RecordType::SRV).build();

    assert_eq!(a.lexicographical_cmp(&aaaa), Ordering::Less);
    assert_eq!(srv.lexicographical_cmp(&aaaa), Ordering::Greater);
}

#[test]
fn test_ptr_shorter_label_sorts_first() {
    let short = ptr_record("a.example");
    let long = ptr_record("ab.example");

    assert_eq!(short.lexicographical_cmp(&long), Ordering::Less);
    assert_eq!(long.lexicographical_cmp(&short), Ordering::Greater);
}

#[test]
fn test_domain_cmp_is_per_label_not_global() {
    // Plain string comparison would put "b.zz" after "bb.a".
    assert_eq!(lexicographical_domain_cmp("b.zz", "bb.a"), Ordering::Less);
    assert_eq!(lexicographical_domain_cmp("ab.x", "b.x"), Ordering::Greater);
    assert_eq!(lexicographical_domain_cmp("a.x", "b.x"), Ordering::Less);
}

#[test]
fn test_domain_cmp_exhausted_name_sorts_first() {
    assert_eq!(lexicographical_domain_cmp("web", "web.local"), Ordering::Less);
    assert_eq!(lexicographical_domain_cmp("web.local", "web"), Ordering::Greater);
    assert_eq!(lexicographical_domain_cmp("web.local", "web.local"), Ordering::Equal);
}

#[test]
fn test_domain_cmp_unescapes_labels() {
    assert_eq!(lexicographical_domain_cmp("a\\.b.local", "a\\046b.local"), Ordering::Equal);
    assert_eq!(lexicographical_domain_cmp("a\\.b.local", "abc.local"), Ordering::Less);
}

#[test]
fn test_srv_orders_priority_weight_port() {
    let first = srv_record(1, 5, 80, "web.local");
    let second = srv_record(1, 5, 443, "web.local");
    let third = srv_record(2, 0, 1, "web.local");

    assert_eq!(first.lexicographical_cmp(&second), Ordering::Less);
    assert_eq!(second.lexicographical_cmp(&third), Ordering::Less);
    assert_eq!(first.lexicographical_cmp(&third), Ordering::Less);
    assert_eq!(third.lexicographical_cmp(&first), Ordering::Greater);
}

#[test]
fn test_srv_zero_field_is_not_treated_as_equal() {
    let zero = srv_record(0, 0, 80, "web.local");
    let one = srv_record(1, 0, 80, "web.local");

    assert_eq!(zero.lexicographical_cmp(&one), Ordering::Less);
    assert_eq!(one.lexicographical_cmp(&zero), Ordering::Greater);
}

#[test]
fn test_srv_falls_back_to_target() {
    let a = srv_record(0, 0, 80, "a.local");
    let b = srv_record(0, 0, 80, "ab.local");

    assert_eq!(a.lexicographical_cmp(&b), Ordering::Less);
}

#[test]
fn test_hinfo_compares_length_then_content() {
    assert_eq!(
        hinfo_record("x86", "Linux").lexicographical_cmp(&hinfo_record("arm64", "Linux")),
        Ordering::Less
    );
    assert_eq!(
        hinfo_record("arm", "Linux").lexicographical_cmp(&hinfo_record("x86", "Linux")),
        Ordering::Less
    );
    assert_eq!(
        hinfo_record("x86", "Linux").lexicographical_cmp(&hinfo_record("x86", "BSD")),
        Ordering::Greater
    );
    assert_eq!(
        hinfo_record("x86", "Linux").lexicographical_cmp(&hinfo_record("x86", "Linux")),
        Ordering::Equal
    );
}

#[test]
fn test_txt_compares_both_lists() {
    let a = txt_record(&["a"]);
    let b = txt_record(&["b"]);

    assert_eq!(a.lexicographical_cmp(&b), Ordering::Less);
    assert_eq!(b.lexicographical_cmp(&a), Ordering::Greater);
    assert_eq!(a.lexicographical_cmp(&txt_record(&["a"])), Ordering::Equal);
}

#[test]
fn test_txt_prefix_list_sorts_after_longer_list() {
    let short = txt_record(&["ab"]);
    let long = txt_record(&["ab", "c"]);

    assert_eq!(short.lexicographical_cmp(&long), Ordering::Greater);
    assert_eq!(long.lexicographical_cmp(&short), Ordering::Less);
}

#[test]
fn test_empty_txt_forms_compare_equal() {
    let empty = txt_record(&[]);
    let single_empty = txt_record(&[""]);

    assert_eq!(empty.lexicographical_cmp(&single_empty), Ordering::Equal);
    assert!(empty.equal_no_ttl(&single_empty));
}

#[test]
fn test_address_records_compare_bytes() {
    assert_eq!(
        a_record("host.local", "10.0.0.2").lexicographical_cmp(&a_record("host.local", "10.0.0.10")),
        Ordering::Less
    );
    assert_eq!(
        aaaa_record("host.local", "fe80::2").lexicographical_cmp(&aaaa_record("host.local", "fe80::1")),
        Ordering::Greater
    );
}

#[test]
fn test_generic_shorter_prefix_sorts_greater() {
    let short = generic_record(99, &[1, 2]);
    let long = generic_record(99, &[1, 2, 3]);

    assert_eq!(short.lexicographical_cmp(&long), Ordering::Greater);
    assert_eq!(long.lexicographical_cmp(&short), Ordering::Less);
    assert_eq!(
        generic_record(99, &[1, 3]).lexicographical_cmp(&long),
        Ordering::Greater
    );
}

#[test]
fn test_memcmp_orientation() {
    assert_eq!(lexicographical_memcmp(b"", b""), Ordering::Equal);
    assert_eq!(lexicographical_memcmp(b"", b"a"), Ordering::Greater);
    assert_eq!(lexicographical_memcmp(b"a", b""), Ordering::Less);
    assert_eq!(lexicographical_memcmp(b"ab", b"b"), Ordering::Less);
}

#[test]
fn test_ordering_ignores_ttl() {
    let a = ptr_record("web.local").with_ttl(0);
    let b = ptr_record("web.local").with_ttl(4500);

    assert_eq!(a.lexicographical_cmp(&b), Ordering::Equal);
    assert!(a.equal_no_ttl(&b));
}

fn sample() -> Vec<Record> {
    vec![
        srv_record(2, 0, 1, "web.local"),
        ptr_record("ab.example"),
        txt_record(&["ab", "c"]),
        hinfo_record("x86", "Linux"),
        a_record("host.local", "10.0.0.1"),
        generic_record(99, &[1, 2]),
        srv_record(1, 5, 80, "web.local"),
        txt_record(&["ab"]),
        txt_record(&[]),
        txt_record(&[""]),
        ptr_record("a.example"),
        a_record("host.local", "10.0.0.2"),
        generic_record(99, &[1, 2, 3]),
        RecordBuilder::new(RecordType::CNAME)
            .data(RData::CNAME("web.local".to_string()))
            .build(),
    ]
}

#[test]
fn test_compare_is_antisymmetric() {
    let records = sample();
    for a in &records {
        for b in &records {
            assert_eq!(a.lexicographical_cmp(b), b.lexicographical_cmp(a).reverse());
        }
    }
}

#[test]
fn test_compare_is_transitive() {
    let records = sample();
    for a in &records {
        for b in &records {
            for c in &records {
                if a.lexicographical_cmp(b) == Ordering::Less
                    && b.lexicographical_cmp(c) == Ordering::Less
                {
                    assert_eq!(a.lexicographical_cmp(c), Ordering::Less);
                }
            }
        }
    }
}

#[test]
fn test_compare_equal_implies_equal_no_ttl() {
    let records = sample();
    let copies: Vec<Record> = records.iter().map(|r| r.copy().with_ttl(1)).collect();

    for a in &records {
        for b in &copies {
            if a.lexicographical_cmp(b) == Ordering::Equal {
                assert!(a.equal_no_ttl(b), "{} vs {}", a, b);
            }
        }
    }
}
