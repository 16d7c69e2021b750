//! HTTP API: server, routing, and request/response mapping for COD order
//! risk predictions.

pub mod app;
