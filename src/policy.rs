use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError, validate_allow_list};
use crate::origin::OriginGate;
use crate::result::CorsDecision;

/// Credentialed CORS policy for the admin frontends.
///
/// An origin admitted by the [`OriginGate`] gets its own value reflected in
/// `Access-Control-Allow-Origin`, credentials, and whatever method and headers
/// the preflight asks for. Every other origin only gets `Vary: Origin`.
///
/// Install it ahead of routing and authentication so preflights are answered
/// before either sees them.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    gate: OriginGate,
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(gate: OriginGate, options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        validate_allow_list(gate.allow_list())?;
        Ok(Self { gate, options })
    }

    pub fn gate(&self) -> &OriginGate {
        &self.gate
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        // A present but empty `Origin` header still goes through the gate.
        let Some(origin) = request.origin else {
            return CorsDecision::NotApplicable;
        };

        let allowed = self.gate.evaluate(Some(origin));

        if request.is_preflight() {
            self.process_preflight(request, origin, allowed)
        } else {
            self.process_simple(origin, allowed)
        }
    }

    fn process_preflight(
        &self,
        request: &RequestContext<'_>,
        origin: &str,
        allowed: bool,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let status = self.options.options_success_status;

        if !allowed {
            return CorsDecision::PreflightRejected {
                headers: builder.build_disallowed_headers().into_headers(),
                status,
            };
        }

        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_headers(origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header(request));
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_max_age_header());

        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
            status,
        }
    }

    fn process_simple(&self, origin: &str, allowed: bool) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);

        if !allowed {
            return CorsDecision::SimpleRejected {
                headers: builder.build_disallowed_headers().into_headers(),
            };
        }

        let mut headers = HeaderCollection::new();
        headers.extend(builder.build_origin_headers(origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
