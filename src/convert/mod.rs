//! Pure shape conversion between the OpenAI and Gemini embedding APIs.
//!
//! `EmbeddingPayload` is decided once per request and drives both directions,
//! so the single/batch choice cannot drift between the outbound call and the
//! response that is built from it.

mod payload;
mod request;
mod response;
mod tokens;

pub use payload::EmbeddingPayload;
pub use request::to_backend_request;
pub use response::to_openai_response;
pub use tokens::estimate_tokens;
