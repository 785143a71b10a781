use crate::headers::Headers;

/// What the HTTP layer should do with a request after the policy has looked at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Answer the preflight immediately with `status` and `headers`.
    PreflightAccepted { headers: Headers, status: u16 },
    /// Answer the preflight immediately, without any permission headers.
    PreflightRejected { headers: Headers, status: u16 },
    /// Run the request, then add `headers` to the response.
    SimpleAccepted { headers: Headers },
    /// Run the request anyway; the browser withholds the response from the page.
    SimpleRejected { headers: Headers },
    /// No `Origin` header: not a CORS request.
    NotApplicable,
}

impl CorsDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(
            self,
            CorsDecision::PreflightAccepted { .. } | CorsDecision::SimpleAccepted { .. }
        )
    }

    pub fn headers(&self) -> Option<&Headers> {
        match self {
            CorsDecision::PreflightAccepted { headers, .. }
            | CorsDecision::PreflightRejected { headers, .. }
            | CorsDecision::SimpleAccepted { headers }
            | CorsDecision::SimpleRejected { headers } => Some(headers),
            CorsDecision::NotApplicable => None,
        }
    }
}
