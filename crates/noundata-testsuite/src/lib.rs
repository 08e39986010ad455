// No need to be as strict as in production libraries
#![allow(clippy::unwrap_used)]

use noundata_core::{Emitter, Value};
use noundata_schema::{Catalog, TypeKind};

/// Emitter that records the event stream as indented lines, for snapshot
/// assertions.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    lines: Vec<String>,
    depth: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of recorded events whose line starts with `prefix`, ignoring
    /// indentation.
    pub fn count(&self, prefix: &str) -> usize {
        self.lines
            .iter()
            .filter(|line| line.trim_start().starts_with(prefix))
            .count()
    }

    pub fn render(&self) -> String {
        let mut rendered = self.lines.join("\n");
        if !rendered.is_empty() {
            rendered.push('\n');
        }
        rendered
    }

    fn push(&mut self, line: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", "  ".repeat(self.depth), line.as_ref()));
    }
}

impl Emitter for EventLog {
    fn begin_document(&mut self) {
        self.push("begin_document");
        self.depth += 1;
    }

    fn end_document(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push("end_document");
    }

    fn begin_node(&mut self, name: &str) {
        self.push(format!("begin_node({name})"));
        self.depth += 1;
    }

    fn end_node(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push("end_node");
    }

    fn begin_array(&mut self, name: &str) {
        self.push(format!("begin_array({name})"));
        self.depth += 1;
    }

    fn end_array(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push("end_array");
    }

    fn begin_array_entry(&mut self) {
        self.push("begin_array_entry");
        self.depth += 1;
    }

    fn end_array_entry(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push("end_array_entry");
    }

    fn value(&mut self, name: &str, value: Value<'_>) {
        self.push(format!("value({name}, {value})"));
    }
}

/// Builds primary+secondary fixture buffers by patching little-endian values
/// at absolute offsets, mirroring the layout rules the decoder reads by.
#[derive(Clone, Debug, Default)]
pub struct RecordBuilder {
    bytes: Vec<u8>,
}

macro_rules! impl_put {
    ($($name:ident: $ty:ty),+ $(,)?) => {
        $(
            pub fn $name(&mut self, offset: usize, value: $ty) -> &mut Self {
                self.put_bytes(offset, &value.to_le_bytes())
            }
        )+
    };
}

impl RecordBuilder {
    /// A zero-filled buffer of `len` bytes; it grows as needed.
    pub fn with_len(len: usize) -> Self {
        Self { bytes: vec![0; len] }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn put_bytes(&mut self, offset: usize, bytes: &[u8]) -> &mut Self {
        let end = offset + bytes.len();
        if end > self.bytes.len() {
            self.bytes.resize(end, 0);
        }
        self.bytes[offset..end].copy_from_slice(bytes);
        self
    }

    impl_put! {
        put_u8: u8,
        put_u16: u16,
        put_u32: u32,
        put_u64: u64,
        put_i16: i16,
        put_i32: i32,
        put_i64: i64,
        put_f32: f32,
    }

    /// Write a NUL-terminated string at an absolute offset.
    pub fn put_str(&mut self, offset: usize, text: &str) -> &mut Self {
        self.put_bytes(offset, text.as_bytes());
        self.put_u8(offset + text.len(), 0)
    }

    /// Append a NUL-terminated string at the current end of the buffer and
    /// return the offset it landed at.
    pub fn append_str(&mut self, text: &str) -> usize {
        let offset = self.bytes.len();
        self.put_str(offset, text);
        offset
    }

    pub fn build(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Register the primitive types every test schema starts from, with the
/// builtin names and sizes.
pub fn base_types(catalog: &mut Catalog) {
    catalog.add_type("bool", TypeKind::Bool, 1);
    catalog.add_type("int", TypeKind::Int, 4);
    catalog.add_type("int16_t", TypeKind::Int16, 2);
    catalog.add_type("int64_t", TypeKind::Int64, 8);
    catalog.add_type("uint8_t", TypeKind::UInt8, 1);
    catalog.add_type("uint16_t", TypeKind::UInt16, 2);
    catalog.add_type("uint32_t", TypeKind::UInt32, 4);
    catalog.add_type("uint64_t", TypeKind::UInt64, 8);
    catalog.add_type("float", TypeKind::Float, 4);
    catalog.add_type("guid", TypeKind::Guid, 16);
    catalog.add_type("cSPVector2", TypeKind::Vector2, 8);
    catalog.add_type("cSPVector3", TypeKind::Vector3, 12);
    catalog.add_type("cSPVector4", TypeKind::Quaternion, 16);
    catalog.add_type("cLocalizedAssetString", TypeKind::LocalizedAssetString, 4);
    catalog.add_type("char", TypeKind::Char, 1);
    catalog.add_type("char*", TypeKind::CharPtr, 4);
    catalog.add_type("key", TypeKind::Key, 4);
    catalog.add_type("asset", TypeKind::Asset, 4);
    catalog.add_type("cKeyAsset", TypeKind::KeyAsset, 16);
    catalog.add_type("nullable", TypeKind::Nullable, 4);
    catalog.add_type("array", TypeKind::Array, 4);
    catalog.add_type("enum", TypeKind::Enum, 4);
}

/// The phase schema used across the decoder tests: one `Phase` root with a
/// `cGambitDefinition` array, bound to the `.Phase` extension.
pub fn phase_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    base_types(&mut catalog);

    catalog
        .add_struct("cGambitDefinition", 52)
        .field("condition", "key", 12)
        .field("ability", "key", 36)
        .field("randomizeCooldown", "bool", 48);

    catalog
        .add_struct("Phase", 68)
        .array("gambit", "cGambitDefinition", 0)
        .field("phaseType", "enum", 4)
        .field("startNode", "bool", 12);

    catalog.register_file_type(".Phase", &["Phase"], 68);
    catalog
}

/// A door-like schema exercising nullables: `Widget` holds an optional
/// `doorDef`, which itself holds optional `cNewGfxState` sub-records.
pub fn widget_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    base_types(&mut catalog);

    catalog
        .add_struct("cNewGfxState", 40)
        .field("prefab", "asset", 0)
        .field("model", "key", 16)
        .field("animation", "key", 32);

    catalog
        .add_struct("doorDef", 24)
        .nullable("graphicsState_open", "cNewGfxState", 0)
        .nullable("graphicsState_closed", "cNewGfxState", 8)
        .field("clickToOpen", "bool", 16)
        .field("initialState", "enum", 20);

    catalog
        .add_struct("Widget", 8)
        .nullable("doorDef", "doorDef", 0)
        .field("kind", "enum", 4);

    catalog.register_file_type(".Widget", &["Widget"], 8);
    catalog
}
