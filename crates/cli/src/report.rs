use ferrous_mdns_domain::Record;
use tracing::warn;

/// Renders one line per record with its estimated wire size.
///
/// With `sort` the records are listed in canonical order. Records that
/// repeat an earlier one (ignoring TTL) are reported and skipped.
pub fn render(records: &[Record], sort: bool) -> Vec<String> {
    let mut unique: Vec<&Record> = Vec::with_capacity(records.len());

    for record in records {
        if let Some(first) = unique.iter().find(|r| r.equal_no_ttl(record)) {
            warn!(record = %record, first_ttl = first.ttl(), "Duplicate record ignored");
            continue;
        }
        unique.push(record);
    }

    if sort {
        unique.sort_by(|a, b| a.lexicographical_cmp(b));
    }

    unique
        .into_iter()
        .map(|r| format!("{}\t({} bytes)", r, r.estimate_size()))
        .collect()
}
