pub mod metrics;
pub mod security_headers;
pub mod status;
pub mod tracing;

pub use self::metrics::metrics_middleware;
pub use self::security_headers::security_headers_middleware;
pub use self::status::{not_found_fallback, panic_response, status_taxonomy_middleware};
pub use self::tracing::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
