//! Axum integration.
//!
//! - [`extract`] - Request extractors for [`crate::domain::QueryParams`] and [`crate::links::BaseUri`]

pub mod extract;
