//! Helper functions used across the crate.
//!
//! - [`forwarded`] - Request origin extraction from `Host` and `X-Forwarded-*` headers

pub mod forwarded;
