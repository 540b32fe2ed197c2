//! HTTP boundary of the placement portal: the authentication backend
//! client and the generative-text client. Both implement traits from
//! `portal-core`, so everything above this crate can run against fakes.

mod auth_client;
mod gemini;

pub use auth_client::{HttpAuthGateway, NoToken, TokenProvider};
pub use gemini::GeminiClient;
