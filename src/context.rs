/// Borrowed view of the request inputs the CORS policy looks at.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(crate::constants::method::OPTIONS)
            && self
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }
}
