//! Name handling for validation records and zone candidates.

/// Label prepended to a domain to form its dns-01 validation record name.
pub const ACME_CHALLENGE_LABEL: &str = "_acme-challenge";

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Strips the trailing root dot, if any.
pub fn normalize_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Builds `_acme-challenge.<domain>`.
///
/// Wildcard domains validate on their base name, so `*.example.com`
/// yields `_acme-challenge.example.com`.
pub fn challenge_record_name(domain: &str) -> String {
    let domain = normalize_name(domain);
    let domain = domain.strip_prefix("*.").unwrap_or(domain);
    format!("{ACME_CHALLENGE_LABEL}.{domain}")
}

/// Proper suffixes of `record_name`, most specific first.
///
/// `_acme-challenge.sub.example.com` yields `sub.example.com`,
/// `example.com`, `com`. The name itself and the root are never included.
pub fn zone_candidates(record_name: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut rest = normalize_name(record_name);
    while let Some(pos) = rest.find('.') {
        rest = &rest[pos + 1..];
        if rest.is_empty() {
            break;
        }
        candidates.push(rest.to_string());
    }
    candidates
}

/// Basic hostname syntax check applied to zone candidates.
///
/// Labels are 1-63 characters of `[A-Za-z0-9-]` without a leading or
/// trailing hyphen; the whole name is at most 253 characters.
pub fn is_valid_domain_name(name: &str) -> bool {
    let name = normalize_name(name);
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

/// Host label of `record_name` relative to `zone`.
///
/// Returns `None` unless `zone` is a proper suffix of `record_name`.
pub fn relative_host(record_name: &str, zone: &str) -> Option<String> {
    let record_name = normalize_name(record_name);
    let zone = normalize_name(zone);
    if record_name.len() <= zone.len() + 1 {
        return None;
    }
    let split = record_name.len() - zone.len();
    if !record_name.is_char_boundary(split) {
        return None;
    }
    let (host, suffix) = record_name.split_at(split);
    let host = host.strip_suffix('.')?;
    (suffix.eq_ignore_ascii_case(zone) && !host.is_empty()).then(|| host.to_string())
}
