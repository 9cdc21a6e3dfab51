//! HTTP transport layer for backend calls.

mod error;
mod http;
mod reqwest;
pub mod endpoints;

pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use reqwest::ReqwestTransport;
