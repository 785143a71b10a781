use byway_cors_rs::config::FrontendOrigins;
use byway_cors_rs::constants::method;
use byway_cors_rs::{CorsDecision, CorsOptions, CorsPolicy, ExposedHeaders, OriginGate, RequestContext};

pub const ADMIN_HOSTED: &str = "https://admin.example.com";
pub const ADMIN_LOCAL: &str = "http://localhost:4200";

#[derive(Default)]
pub struct PolicyBuilder {
    admin_hosted: Option<String>,
    admin_local: Option<String>,
    exposed_headers: Option<ExposedHeaders>,
    max_age: Option<u64>,
    options_success_status: Option<u16>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admin_hosted(mut self, origin: impl Into<String>) -> Self {
        self.admin_hosted = Some(origin.into());
        self
    }

    pub fn admin_local(mut self, origin: impl Into<String>) -> Self {
        self.admin_local = Some(origin.into());
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn options_success_status(mut self, status: u16) -> Self {
        self.options_success_status = Some(status);
        self
    }

    pub fn frontend_origins(&self) -> FrontendOrigins {
        FrontendOrigins {
            admin_hosted: self.admin_hosted.clone(),
            admin_local: self.admin_local.clone(),
        }
    }

    pub fn build(self) -> CorsPolicy {
        let CorsOptions {
            exposed_headers: default_exposed_headers,
            max_age: default_max_age,
            options_success_status: default_status,
        } = CorsOptions::default();

        let gate = OriginGate::new(self.frontend_origins().allow_list());

        CorsPolicy::new(
            gate,
            CorsOptions {
                exposed_headers: self.exposed_headers.unwrap_or(default_exposed_headers),
                max_age: self.max_age.or(default_max_age),
                options_success_status: self.options_success_status.unwrap_or(default_status),
            },
        )
        .expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        policy.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, policy: &CorsPolicy) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        policy.check(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn admin_policy() -> CorsPolicy {
    policy().admin_hosted(ADMIN_HOSTED).admin_local(ADMIN_LOCAL).build()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
