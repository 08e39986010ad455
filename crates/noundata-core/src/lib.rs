#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod cursor;
pub mod emit;
pub mod value;

pub use cursor::{CursorError, DualCursor, Region};
pub use emit::Emitter;
pub use value::{Guid, Quaternion, Value, Vector2, Vector3};
