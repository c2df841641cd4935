//! Inbound adapters translating external requests into record service calls.
//!
//! HTTP handlers live under [`http`]; framework details stay at this edge.

pub mod http;
