#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[macro_use]
extern crate tracing;

mod engine;
mod error;

pub use engine::decode;
pub use error::{DecodeError, DecodeErrorKind, DecodeResult};
