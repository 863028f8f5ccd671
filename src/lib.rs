#![deny(unsafe_code, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Composable future-aware value piping utilities.

pub mod awaitable;
pub mod error;
pub mod pipe;
pub mod transform;
