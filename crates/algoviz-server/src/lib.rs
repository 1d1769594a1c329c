//! HTTP/JSON gateway for the algoviz trace engine.
//!
//! Exposes the linear search, bubble sort and N-Queens executors plus the
//! algorithm metadata lookup over a small REST API. This crate contains the
//! configuration, API schema types, error handling, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
