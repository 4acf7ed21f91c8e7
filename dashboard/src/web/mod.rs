//! HTTP layer

pub mod handlers;
