//! The origin gate: exact-match admission of a request `Origin` against the
//! configured admin frontends.

use std::fmt;

/// Ordered set of origins admitted by the gate.
///
/// Empty and absent configuration values never make it into the list, so an
/// unset frontend can not accidentally admit a request that sends `Origin: `.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    origins: Vec<String>,
}

impl AllowList {
    /// Builds the list from configured values, dropping absent and empty entries
    /// while keeping the relative order of the rest.
    pub fn from_configured<I, S>(configured: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            origins: configured
                .into_iter()
                .flatten()
                .map(Into::into)
                .filter(|origin: &String| !origin.is_empty())
                .collect(),
        }
    }

    /// Case-sensitive, verbatim membership test.
    pub fn contains(&self, candidate: &str) -> bool {
        !candidate.is_empty() && self.origins.iter().any(|origin| origin == candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.origins.join(", "))
    }
}

/// Pure form of the gate decision.
///
/// Returns `true` iff `candidate` is non-empty and equals one of the non-empty
/// `configured` values byte for byte. No scheme, case or trailing-slash
/// normalization is applied.
pub fn is_allowed<I, S>(candidate: Option<&str>, configured: I) -> bool
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let Some(candidate) = candidate.filter(|value| !value.is_empty()) else {
        return false;
    };

    configured.into_iter().flatten().any(|origin| {
        let origin = origin.as_ref();
        !origin.is_empty() && origin == candidate
    })
}

/// Stateless origin admission with diagnostic logging.
///
/// The gate only reads its [`AllowList`], so one instance can be shared by every
/// request task.
#[derive(Debug, Clone, Default)]
pub struct OriginGate {
    allow_list: AllowList,
}

impl OriginGate {
    pub fn new(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Decision without side effects.
    pub fn is_allowed(&self, candidate: Option<&str>) -> bool {
        candidate.is_some_and(|origin| self.allow_list.contains(origin))
    }

    /// Decision plus the two per-request log lines.
    pub fn evaluate(&self, candidate: Option<&str>) -> bool {
        let origin = candidate.unwrap_or_default();
        tracing::info!("CORS Request from origin: {origin}");

        let allowed = self.is_allowed(candidate);
        tracing::info!("Origin allowed: {allowed}");

        allowed
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
