use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::util::{is_http_token, token_list};

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Reflects the admitted origin. The allow-list is per-origin, so the answer
    /// always varies by `Origin`.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.add_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_disallowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.add_vary(header::ORIGIN);
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        headers
    }

    /// Any method is allowed; with credentials `*` is taken literally by
    /// browsers, so the requested method is echoed instead.
    pub(crate) fn build_methods_header(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        if let Some(method) = request
            .access_control_request_method
            .map(str::trim)
            .filter(|method| is_http_token(method))
        {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, method);
        }
        headers
    }

    /// Any header is allowed; the requested header names are echoed back.
    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        let requested = request
            .access_control_request_headers
            .map(token_list)
            .unwrap_or_default();
        if !requested.is_empty() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.join(","));
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.options.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(seconds) = self.options.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
