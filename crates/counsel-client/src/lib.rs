//! # counsel-client
//!
//! HTTP client for the counseling REST backend. The [`api`] module
//! defines the trait seams ([`api::CounselApi`], [`api::AdminApi`])
//! the service layer and CLI consume; [`http::HttpCounselApi`] is the
//! reqwest-backed implementation that attaches the cached bearer token
//! and turns a 401 into a forced logout.

pub mod api;
pub mod dto;
pub mod http;

pub use api::{AdminApi, CounselApi};
pub use http::HttpCounselApi;
