//! HTTP service handlers.

pub mod order_service;
