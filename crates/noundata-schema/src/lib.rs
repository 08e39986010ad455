#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[macro_use]
extern crate tracing;

mod builtin;
mod catalog;
mod router;
mod structs;
mod types;

pub use catalog::{Catalog, SchemaError, StructBuilder};
pub use router::{FileBinding, ResolvedBinding, VersionedBinding};
pub use structs::{Member, StructDef};
pub use types::{TypeDef, TypeKind};
