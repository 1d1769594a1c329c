//! HTTP handler modules for the algoviz API.
//!
//! Each sub-module implements thin handlers that parse requests, delegate to
//! [`service`](crate::service) or the metadata store, and return JSON
//! responses. No business logic lives in handlers.

pub mod algorithms;
pub mod health;
pub mod traces;
