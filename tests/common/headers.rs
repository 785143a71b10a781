use byway_cors_rs::Headers;
use byway_cors_rs::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

/// `Vary` entries in emission order, read the way the policy merges them:
/// comma separated, trimmed, blanks dropped, first spelling wins.
pub fn vary_values(headers: &Headers) -> Vec<&str> {
    let mut entries: Vec<&str> = Vec::new();
    let Some(value) = header_value(headers, header::VARY) else {
        return entries;
    };

    for entry in value.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        if !entries.iter().any(|seen| seen.eq_ignore_ascii_case(entry)) {
            entries.push(entry);
        }
    }
    entries
}
