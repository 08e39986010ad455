use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::router::{self, FileBinding, ResolvedBinding, VersionedBinding};
use crate::structs::{Member, StructDef};
use crate::types::{TypeDef, TypeKind};

/// Error raised by [`Catalog::validate`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("struct `{parent}` member `{member}` references unknown type `{type_name}`")]
    UnknownMemberType {
        parent: String,
        member: String,
        type_name: String,
    },
    #[error("struct `{parent}` array `{member}` references unknown element type `{element}`")]
    UnknownElementType {
        parent: String,
        member: String,
        element: String,
    },
    #[error("type `{type_name}` references unknown struct `{target}`")]
    UnknownTarget { type_name: String, target: String },
    #[error("file binding `{key}` references unknown root struct `{root}`")]
    UnknownRoot { key: String, root: String },
    #[error("struct `{name}` participates in a definition cycle")]
    Cycle { name: String },
}

/// The process-wide schema: interned types, struct definitions and file
/// bindings, plus the configured game version used for binding selection.
///
/// Built once at initialization, then shared immutably; a decode only ever
/// borrows it.
#[derive(Clone, Debug)]
pub struct Catalog {
    types: HashMap<String, TypeDef>,
    structs: HashMap<String, StructDef>,
    extensions: HashMap<String, FileBinding>,
    file_names: HashMap<String, FileBinding>,
    game_version: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// An empty catalog with the default game version. Most callers want
    /// [`Catalog::builtin`] instead.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            structs: HashMap::new(),
            extensions: HashMap::new(),
            file_names: HashMap::new(),
            game_version: "5.3.0.103".to_owned(),
        }
    }

    pub fn game_version(&self) -> &str {
        &self.game_version
    }

    pub fn set_game_version(&mut self, version: impl Into<String>) {
        self.game_version = version.into();
    }

    /// Intern a primitive type. Re-registration under the same name is
    /// idempotent: the first definition is kept.
    pub fn add_type(&mut self, name: &str, kind: TypeKind, size: usize) {
        self.intern(TypeDef::new(name, kind, size));
    }

    /// Intern a derived type carrying a target-type reference.
    pub fn add_type_with_target(&mut self, name: &str, kind: TypeKind, size: usize, target: &str) {
        self.intern(TypeDef::with_target(name, kind, size, target));
    }

    /// Intern `array:E` for element type `E`.
    pub fn add_array_type(&mut self, element: &str, size: usize) {
        self.intern(TypeDef::with_target(
            format!("array:{element}"),
            TypeKind::Array,
            size,
            element,
        ));
    }

    /// Intern `nullable:T` (a 4-byte handle) for target struct `T`.
    pub fn register_nullable(&mut self, target: &str) {
        self.intern(TypeDef::with_target(
            format!("nullable:{target}"),
            TypeKind::Nullable,
            4,
            target,
        ));
    }

    fn intern(&mut self, def: TypeDef) {
        if let Entry::Vacant(entry) = self.types.entry(def.name().to_owned()) {
            debug!("Catalog::add_type({}, {} bytes)", def.name(), def.size());
            entry.insert(def);
        }
    }

    /// Define a struct and return a builder for its members. Also interns
    /// `struct:name` (sized) and `nullable:name` derived types. Redefining a
    /// struct replaces its previous definition.
    pub fn add_struct(&mut self, name: &str, fixed_size: usize) -> StructBuilder<'_> {
        debug!("Catalog::add_struct({name}, {fixed_size} bytes)");

        self.structs.insert(
            name.to_owned(),
            StructDef {
                name: name.to_owned(),
                fixed_size,
                members: Vec::new(),
            },
        );
        self.add_type_with_target(&format!("struct:{name}"), TypeKind::Struct, fixed_size, name);
        self.register_nullable(name);

        StructBuilder {
            catalog: self,
            name: name.to_owned(),
        }
    }

    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn struct_def(&self, name: &str) -> Option<&StructDef> {
        self.structs.get(name)
    }

    /// Bind a filename extension (leading dot, matched case-insensitively).
    pub fn register_file_type(&mut self, extension: &str, roots: &[&str], secondary_start: usize) {
        debug!("Catalog::register_file_type({extension}, {roots:?}, {secondary_start})");
        self.extensions.insert(
            extension.to_ascii_lowercase(),
            FileBinding::plain(to_owned_vec(roots), secondary_start),
        );
    }

    pub fn register_file_type_versioned(&mut self, extension: &str, versions: Vec<VersionedBinding>) {
        debug!("Catalog::register_file_type({extension}, {} versions)", versions.len());
        self.extensions
            .insert(extension.to_ascii_lowercase(), FileBinding::versioned(versions));
    }

    /// Bind an exact basename (matched case-insensitively).
    pub fn register_file_name(&mut self, file_name: &str, roots: &[&str], secondary_start: usize) {
        debug!("Catalog::register_file_name({file_name}, {roots:?}, {secondary_start})");
        self.file_names.insert(
            file_name.to_ascii_lowercase(),
            FileBinding::plain(to_owned_vec(roots), secondary_start),
        );
    }

    pub fn register_file_name_versioned(&mut self, file_name: &str, versions: Vec<VersionedBinding>) {
        debug!("Catalog::register_file_name({file_name}, {} versions)", versions.len());
        self.file_names
            .insert(file_name.to_ascii_lowercase(), FileBinding::versioned(versions));
    }

    /// Resolve a logical filename to its binding for the current game
    /// version: extension match first, exact basename second.
    pub fn resolve(&self, filename: &str) -> Option<ResolvedBinding<'_>> {
        let by_extension = router::extension(filename)
            .map(|ext| ext.to_ascii_lowercase())
            .and_then(|ext| self.extensions.get(&ext));

        by_extension
            .or_else(|| self.file_names.get(&router::basename(filename).to_ascii_lowercase()))
            .map(|binding| binding.for_version(&self.game_version))
    }

    /// Human-readable, sorted listing of every registered binding.
    pub fn registered_file_types(&self) -> Vec<String> {
        fn describe(key: &str, binding: &FileBinding) -> String {
            let roots: Vec<&str> = binding.all_roots().collect();
            if roots.is_empty() {
                key.to_owned()
            } else {
                format!("{key} ({})", roots.join(", "))
            }
        }

        let mut listing: Vec<String> = self
            .extensions
            .iter()
            .map(|(ext, binding)| describe(ext, binding))
            .chain(
                self.file_names
                    .iter()
                    .map(|(name, binding)| format!("{} [exact]", describe(name, binding))),
            )
            .collect();
        listing.sort();
        listing
    }

    /// Check that the schema graph is closed and acyclic: every member type
    /// resolves, every derived-type target exists, every binding root is a
    /// defined struct, and no struct reaches itself.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for def in self.structs.values() {
            for member in def.members() {
                self.validate_member(def, member)?;
            }
        }

        let bindings = self
            .extensions
            .iter()
            .chain(self.file_names.iter())
            .flat_map(|(key, binding)| binding.all_roots().map(move |root| (key.as_str(), root)));

        let mut settled = HashSet::new();
        for (key, root) in bindings {
            if !self.structs.contains_key(root) {
                return Err(SchemaError::UnknownRoot {
                    key: key.to_owned(),
                    root: root.to_owned(),
                });
            }
            self.check_cycles(root, &mut settled, &mut Vec::new())?;
        }

        Ok(())
    }

    fn validate_member(&self, parent: &StructDef, member: &Member) -> Result<(), SchemaError> {
        if member.type_name() == "array" {
            let element = member.element_type().unwrap_or_default();
            if !element.is_empty()
                && self.type_def(element).is_none()
                && self.struct_def(element).is_none()
            {
                return Err(SchemaError::UnknownElementType {
                    parent: parent.name().to_owned(),
                    member: member.name().to_owned(),
                    element: element.to_owned(),
                });
            }
            return Ok(());
        }

        let Some(ty) = self.type_def(member.type_name()) else {
            return Err(SchemaError::UnknownMemberType {
                parent: parent.name().to_owned(),
                member: member.name().to_owned(),
                type_name: member.type_name().to_owned(),
            });
        };

        if let Some(target) = ty.target() {
            if matches!(ty.kind(), TypeKind::Nullable | TypeKind::Struct)
                && self.struct_def(target).is_none()
            {
                return Err(SchemaError::UnknownTarget {
                    type_name: ty.name().to_owned(),
                    target: target.to_owned(),
                });
            }
        }

        Ok(())
    }

    /// Depth-first search over struct-to-struct edges (inline structs,
    /// nullable targets, array elements).
    fn check_cycles<'a>(
        &'a self,
        name: &'a str,
        settled: &mut HashSet<&'a str>,
        in_progress: &mut Vec<&'a str>,
    ) -> Result<(), SchemaError> {
        if settled.contains(name) {
            return Ok(());
        }
        if in_progress.contains(&name) {
            return Err(SchemaError::Cycle { name: name.to_owned() });
        }

        let Some(def) = self.structs.get(name) else {
            return Ok(());
        };

        in_progress.push(name);
        for member in def.members() {
            if let Some(element) = member.element_type() {
                if self.structs.contains_key(element) {
                    self.check_cycles(element, settled, in_progress)?;
                }
            } else if let Some(target) = self.type_def(member.type_name()).and_then(TypeDef::target) {
                self.check_cycles(target, settled, in_progress)?;
            }
        }
        in_progress.pop();
        settled.insert(def.name());

        Ok(())
    }
}

fn to_owned_vec(roots: &[&str]) -> Vec<String> {
    roots.iter().map(|&r| r.to_owned()).collect()
}

/// Appends members to a struct registered via [`Catalog::add_struct`].
///
/// Offsets are bytes from the start of the struct's fixed image. In debug
/// builds a member whose declared footprint does not fit a non-zero fixed
/// size panics: that is schema-authoring misuse, not a runtime condition.
pub struct StructBuilder<'a> {
    catalog: &'a mut Catalog,
    name: String,
}

impl StructBuilder<'_> {
    /// Scalar member read in the primary region.
    pub fn field(self, name: &str, type_name: &str, offset: usize) -> Self {
        self.push(Member {
            name: name.to_owned(),
            type_name: type_name.to_owned(),
            offset,
            use_secondary: false,
            element_type: None,
            has_custom_name: false,
            count_offset: 0,
        })
    }

    /// Scalar member addressed absolutely rather than relative to the
    /// enclosing struct's base.
    pub fn field_secondary(self, name: &str, type_name: &str, offset: usize) -> Self {
        self.push(Member {
            name: name.to_owned(),
            type_name: type_name.to_owned(),
            offset,
            use_secondary: true,
            element_type: None,
            has_custom_name: false,
            count_offset: 0,
        })
    }

    /// Array member: presence word at `offset`, count right after it.
    pub fn array(self, name: &str, element_type: &str, offset: usize) -> Self {
        self.array_with_count_offset(name, element_type, offset, 0)
    }

    /// Array member whose 32-bit count sits `count_offset` bytes past the
    /// member's offset within the enclosing nullable payload.
    pub fn array_with_count_offset(
        self,
        name: &str,
        element_type: &str,
        offset: usize,
        count_offset: usize,
    ) -> Self {
        self.push(Member {
            name: name.to_owned(),
            type_name: "array".to_owned(),
            offset,
            use_secondary: false,
            element_type: Some(element_type.to_owned()),
            has_custom_name: false,
            count_offset,
        })
    }

    /// Inline sub-struct laid out at `offset`; the member's name is the
    /// sub-struct name and its fields flatten into the parent.
    pub fn embed(self, struct_name: &str, offset: usize) -> Self {
        self.push(Member {
            name: struct_name.to_owned(),
            type_name: format!("struct:{struct_name}"),
            offset,
            use_secondary: false,
            element_type: None,
            has_custom_name: false,
            count_offset: 0,
        })
    }

    /// Inline sub-struct emitted as a named node.
    pub fn named(self, name: &str, struct_name: &str, offset: usize) -> Self {
        self.push(Member {
            name: name.to_owned(),
            type_name: format!("struct:{struct_name}"),
            offset,
            use_secondary: false,
            element_type: None,
            has_custom_name: true,
            count_offset: 0,
        })
    }

    /// Optional sub-struct: 4-byte handle at `offset`, payload in the
    /// secondary region when present.
    pub fn nullable(self, name: &str, target: &str, offset: usize) -> Self {
        self.push(Member {
            name: name.to_owned(),
            type_name: format!("nullable:{target}"),
            offset,
            use_secondary: false,
            element_type: None,
            has_custom_name: name != target,
            count_offset: 0,
        })
    }

    fn push(self, member: Member) -> Self {
        #[cfg(debug_assertions)]
        self.assert_fits(&member);

        self.catalog
            .structs
            .get_mut(&self.name)
            .expect("struct registered by add_struct")
            .members
            .push(member);
        self
    }

    #[cfg(debug_assertions)]
    fn assert_fits(&self, member: &Member) {
        let fixed_size = self
            .catalog
            .structs
            .get(&self.name)
            .map(|def| def.fixed_size)
            .unwrap_or_default();
        if fixed_size == 0 || member.use_secondary {
            return;
        }

        let footprint = if member.type_name == "array" {
            4
        } else {
            match self.catalog.type_def(&member.type_name) {
                Some(ty) => ty.size(),
                None => return,
            }
        };
        if footprint == 0 {
            return;
        }

        debug_assert!(
            member.offset + footprint <= fixed_size,
            "struct `{}` member `{}` at offset {} ({} bytes) exceeds fixed size {}",
            self.name,
            member.name,
            member.offset,
            footprint,
            fixed_size,
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog_with_primitives() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_type("bool", TypeKind::Bool, 1);
        catalog.add_type("uint32_t", TypeKind::UInt32, 4);
        catalog.add_type("key", TypeKind::Key, 4);
        catalog.add_type("array", TypeKind::Array, 4);
        catalog
    }

    #[test]
    fn type_registration_is_idempotent() {
        let mut catalog = Catalog::new();
        catalog.add_type("bool", TypeKind::Bool, 1);
        catalog.add_type("bool", TypeKind::UInt32, 4);

        let def = catalog.type_def("bool").unwrap();
        assert_eq!(def.kind(), TypeKind::Bool);
        assert_eq!(def.size(), 1);
    }

    #[test]
    fn add_struct_registers_derived_types() {
        let mut catalog = catalog_with_primitives();
        catalog.add_struct("doorDef", 24);

        let as_struct = catalog.type_def("struct:doorDef").unwrap();
        assert_eq!(as_struct.kind(), TypeKind::Struct);
        assert_eq!(as_struct.size(), 24);
        assert_eq!(as_struct.target(), Some("doorDef"));

        let as_nullable = catalog.type_def("nullable:doorDef").unwrap();
        assert_eq!(as_nullable.kind(), TypeKind::Nullable);
        assert_eq!(as_nullable.size(), 4);
    }

    #[test]
    fn array_type_interns_under_prefixed_name() {
        let mut catalog = catalog_with_primitives();
        catalog.add_array_type("uint32_t", 4);

        let def = catalog.type_def("array:uint32_t").unwrap();
        assert_eq!(def.kind(), TypeKind::Array);
        assert_eq!(def.target(), Some("uint32_t"));
    }

    #[test]
    fn duplicate_members_keep_declaration_order_and_latest_lookup() {
        let mut catalog = catalog_with_primitives();
        catalog
            .add_struct("Sample", 16)
            .field("flags", "uint32_t", 0)
            .field("flags", "key", 4)
            .field("done", "bool", 8);

        let def = catalog.struct_def("Sample").unwrap();
        let names: Vec<&str> = def.members().iter().map(Member::name).collect();
        assert_eq!(names, ["flags", "flags", "done"]);
        assert_eq!(def.member("flags").unwrap().type_name(), "key");
    }

    #[test]
    fn nullable_member_with_matching_name_is_not_custom_named() {
        let mut catalog = catalog_with_primitives();
        catalog.add_struct("doorDef", 24);
        catalog
            .add_struct("Noun", 0)
            .nullable("doorDef", "doorDef", 136)
            .nullable("frontDoor", "doorDef", 140);

        let def = catalog.struct_def("Noun").unwrap();
        assert!(!def.members()[0].has_custom_name());
        assert!(def.members()[1].has_custom_name());
        assert_eq!(def.members()[1].type_name(), "nullable:doorDef");
    }

    #[test]
    #[should_panic(expected = "exceeds fixed size")]
    fn member_past_fixed_size_panics_in_debug() {
        let mut catalog = catalog_with_primitives();
        catalog.add_struct("Tiny", 4).field("big", "uint32_t", 2);
    }

    #[test]
    fn validate_reports_unknown_member_type() {
        let mut catalog = catalog_with_primitives();
        catalog.add_struct("Sample", 0).field("x", "made_up", 0);

        assert!(matches!(
            catalog.validate(),
            Err(SchemaError::UnknownMemberType { type_name, .. }) if type_name == "made_up"
        ));
    }

    #[test]
    fn validate_reports_unknown_binding_root() {
        let mut catalog = catalog_with_primitives();
        catalog.register_file_type(".Ghost", &["Ghost"], 0);

        assert!(matches!(
            catalog.validate(),
            Err(SchemaError::UnknownRoot { root, .. }) if root == "Ghost"
        ));
    }

    #[test]
    fn validate_rejects_cycles() {
        let mut catalog = catalog_with_primitives();
        catalog.add_struct("A", 8);
        catalog.add_struct("B", 8).nullable("a", "A", 0);
        // Close the loop after B exists.
        catalog.add_struct("A", 8).nullable("b", "B", 0);
        catalog.register_file_type(".A", &["A"], 8);

        assert!(matches!(catalog.validate(), Err(SchemaError::Cycle { .. })));
    }

    #[test]
    fn validate_accepts_diamond_sharing() {
        let mut catalog = catalog_with_primitives();
        catalog.add_struct("Shared", 4).field("id", "uint32_t", 0);
        catalog.add_struct("Left", 8).nullable("shared", "Shared", 0);
        catalog.add_struct("Right", 8).nullable("shared", "Shared", 0);
        catalog
            .add_struct("Root", 16)
            .nullable("left", "Left", 0)
            .nullable("right", "Right", 4);
        catalog.register_file_type(".Root", &["Root"], 16);

        catalog.validate().unwrap();
    }

    #[test]
    fn registered_file_types_lists_roots_sorted() {
        let mut catalog = catalog_with_primitives();
        catalog.add_struct("Phase", 68);
        catalog.add_struct("Catalog", 0);
        catalog.register_file_type(".Phase", &["Phase"], 68);
        catalog.register_file_name("catalog_131", &["Catalog"], 8);

        assert_eq!(
            catalog.registered_file_types(),
            [".phase (Phase)", "catalog_131 (Catalog) [exact]"]
        );
    }
}
