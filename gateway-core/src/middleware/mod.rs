pub mod cors;
pub mod tracing;

pub use cors::permissive_cors;
pub use self::tracing::{REQUEST_ID_HEADER, http_trace_layer, request_id_middleware};
