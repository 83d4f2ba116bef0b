//! # simscan API
//!
//! HTTP surface of the simscan engine. Exposes the compare, scan and
//! topics operations plus a health probe, all as JSON over REST.

pub mod rest;

pub use rest::RestApi;
