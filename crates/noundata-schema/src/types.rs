/// Every kind of value a schema member can decode as.
///
/// The first group are primitives with a fixed wire footprint; `Nullable`,
/// `Array` and `Struct` are derived kinds whose definitions carry a target
/// type name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKind {
    Bool,
    Int,
    Int16,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Guid,
    Vector2,
    Vector3,
    Quaternion,
    LocalizedAssetString,
    Char,
    CharPtr,
    Key,
    Asset,
    KeyAsset,
    Enum,
    Nullable,
    Array,
    Struct,
}

/// An interned named type.
#[derive(Clone, Debug)]
pub struct TypeDef {
    name: String,
    kind: TypeKind,
    size: usize,
    target: Option<String>,
}

impl TypeDef {
    pub(crate) fn new(name: impl Into<String>, kind: TypeKind, size: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
            target: None,
        }
    }

    pub(crate) fn with_target(
        name: impl Into<String>,
        kind: TypeKind,
        size: usize,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
            target: Some(target.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The bytes a cursor advances when reading this type in the primary
    /// region. For `Nullable` and `Array` this is the 4-byte handle; for
    /// `Struct` it is the struct's declared fixed size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Target type name for derived kinds.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
