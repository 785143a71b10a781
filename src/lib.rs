pub mod config;
pub mod constants;
mod context;
pub mod error;
mod exposed_headers;
mod header_builder;
mod headers;
pub mod logging;
mod options;
mod origin;
mod policy;
mod result;
pub mod server;
mod util;

pub use context::RequestContext;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowList, OriginGate, is_allowed};
pub use policy::CorsPolicy;
pub use result::CorsDecision;
