use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowList;
use crate::util::{is_header_value_safe, is_http_token};
use thiserror::Error;

/// Tunables of the admin CORS policy.
///
/// Credentials, any request header and any method are always granted to an
/// allowed origin and are not configurable here.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub exposed_headers: ExposedHeaders,
    /// Seconds a browser may cache a preflight answer.
    pub max_age: Option<u64>,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            exposed_headers: ExposedHeaders::default(),
            max_age: None,
            options_success_status: 204,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "allowed origin \"*\" can not be combined with credentials; configure the admin frontend origins explicitly"
    )]
    WildcardOrigin,
    #[error("allowed origin {origin:?} contains characters that are not valid in a header value")]
    InvalidOriginValue { origin: String },
    #[error("exposed header {name:?} is not a valid header name")]
    InvalidExposedHeader { name: String },
    #[error("preflight success status {status} must be in the 2xx range")]
    InvalidSuccessStatus { status: u16 },
}

impl CorsOptions {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if !(200..300).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus {
                status: self.options_success_status,
            });
        }

        if let Some(name) = self
            .exposed_headers
            .iter()
            .find(|name| name.as_str() == "*" || !is_http_token(name))
        {
            return Err(ValidationError::InvalidExposedHeader {
                name: name.to_string(),
            });
        }

        Ok(())
    }
}

/// Rejects allow-list entries that can never be reflected safely and warns about
/// entries a browser will never send.
pub(crate) fn validate_allow_list(allow_list: &AllowList) -> Result<(), ValidationError> {
    for origin in allow_list.iter() {
        if origin == "*" {
            return Err(ValidationError::WildcardOrigin);
        }
        if !is_header_value_safe(origin) {
            return Err(ValidationError::InvalidOriginValue {
                origin: origin.to_string(),
            });
        }
        if !looks_like_serialized_origin(origin) {
            tracing::warn!(
                origin,
                "allowed origin is not of the form scheme://host[:port] and will never match a browser Origin header"
            );
        }
    }

    Ok(())
}

fn looks_like_serialized_origin(origin: &str) -> bool {
    match origin.split_once("://") {
        Some((scheme, authority)) => {
            !scheme.is_empty() && !authority.is_empty() && !authority.contains('/')
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
