//! HTTP surface for hosting the binding as a sidecar

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::build_router;
