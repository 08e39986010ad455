use crate::value::Value;

/// Passive sink for the ordered event stream produced by a decode.
///
/// All methods default to no-ops so an implementation only overrides what it
/// renders. The decoder never calls an emitter concurrently within one
/// decode, and an implementation must tolerate a stream that stops after any
/// event when the decode aborts; open nodes and arrays are always closed
/// before the abort surfaces.
pub trait Emitter {
    fn begin_document(&mut self) {}
    fn end_document(&mut self) {}

    fn begin_node(&mut self, _name: &str) {}
    fn end_node(&mut self) {}

    fn begin_array(&mut self, _name: &str) {}
    fn end_array(&mut self) {}

    fn begin_array_entry(&mut self) {}
    fn end_array_entry(&mut self) {}

    /// One typed name/value event.
    fn value(&mut self, _name: &str, _value: Value<'_>) {}
}

/// Emitter that discards every event. Useful for validation-only decodes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEmitter;

impl Emitter for NullEmitter {}
