//! Core domain model for dramlog.
//!
//! This crate defines the tasting record data model, the text
//! normalization functions, the bottle identity resolver, and the
//! pure aggregation layer that turns flat tasting rows into per-bottle
//! summaries. It performs no I/O: loaders live in `dramlog-store`.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod error;
pub mod identity;
pub mod model;
pub mod normalize;

pub use error::{Error, Result};
