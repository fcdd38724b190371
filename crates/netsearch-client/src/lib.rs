//! netsearch client — talks to the network search API.
//!
//! `SearchSession` is the entry point: it builds queries, enforces one
//! submission at a time, normalizes the response and keeps the last outcome
//! (or error) for display. The API itself sits behind `SearchBackend`.

pub mod backend;
pub mod http;
pub mod session;

pub use backend::SearchBackend;
pub use http::HttpBackend;
pub use session::{SearchOutcome, SearchSession};
