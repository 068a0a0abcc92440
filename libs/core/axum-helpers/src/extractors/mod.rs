//! Extractors that turn rejections into plain-text 400 responses.
//!
//! Axum's stock `Json` rejects with 415/422 depending on the failure; the
//! functions contract treats every malformed body as invalid input.

pub mod json_body;
pub mod query_params;

pub use json_body::JsonBody;
pub use query_params::QueryParams;
