//! Network layer: typed errors, the JSON HTTP client, endpoint wrappers,
//! and the wire types they exchange.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
