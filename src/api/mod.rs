//! HTTP API layer

mod cors;
mod handlers;
mod routes;

pub use routes::create_router;
