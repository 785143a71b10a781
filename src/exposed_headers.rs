use std::collections::HashSet;
use std::ops::Deref;

/// Response headers scripts on an allowed admin frontend may read
/// (`Access-Control-Expose-Headers`).
///
/// There is no wildcard form: with credentials enabled a browser treats `*`
/// as a literal header name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    /// Builds the list, trimming whitespace, dropping blanks and removing
    /// case-insensitive duplicates. The first spelling wins.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped = Vec::new();

        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        Self { values: deduped }
    }

    /// Header-ready value, or `None` when nothing is exposed.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }
}

impl Deref for ExposedHeaders {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
