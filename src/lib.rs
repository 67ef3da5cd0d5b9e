//! # School Locator Backend
//!
//! A small REST service that stores school records in a relational table and
//! lists them ordered by great-circle distance from a caller-supplied
//! coordinate.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain types shared between the HTTP and persistence layers
//! - [`geo`]: Haversine distance computation and distance ranking
//! - [`db`]: Repository pattern, storage backends, and the service layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Storage backends are selected by feature: `local-repo` provides an
//! in-memory store for development and tests, `postgres-repo` a Diesel-backed
//! Postgres store for production.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

pub mod geo;

#[cfg(feature = "http-server")]
pub mod http;
