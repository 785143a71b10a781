use crate::constants::header;
use indexmap::IndexMap;

/// Response headers produced by the policy, in the order they were added.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value.into());
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .map(|existing| split_list(existing).map(str::to_string).collect())
            .unwrap_or_default();

        entries.extend(split_list(&value.into()).map(str::to_string));

        if entries.is_empty() {
            self.headers.shift_remove(header::VARY);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.headers
            .insert(header::VARY.to_string(), deduped.join(", "));
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
