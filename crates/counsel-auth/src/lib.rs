//! # counsel-auth
//!
//! Client-side authentication plumbing: decoding the claims the backend
//! embeds in its bearer tokens, gating commands on required roles, and
//! persisting the raw token between runs.
//!
//! The client never verifies token signatures — it has no secret, and
//! the backend re-validates every request anyway. Decoding here exists
//! purely to read the role claims and the caller's numeric id.

pub mod claims;
pub mod decoder;
pub mod gate;
pub mod token_cache;

pub use claims::Claims;
pub use decoder::decode_claims;
pub use gate::{AccessDecision, AccessGate};
pub use token_cache::TokenCache;
