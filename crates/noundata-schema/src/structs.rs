/// One member of a [`StructDef`], in declaration order.
#[derive(Clone, Debug)]
pub struct Member {
    pub(crate) name: String,
    pub(crate) type_name: String,
    pub(crate) offset: usize,
    pub(crate) use_secondary: bool,
    pub(crate) element_type: Option<String>,
    pub(crate) has_custom_name: bool,
    pub(crate) count_offset: usize,
}

impl Member {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Offset within the enclosing struct's fixed image, or an absolute
    /// offset when [`Member::use_secondary`] is set.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn use_secondary(&self) -> bool {
        self.use_secondary
    }

    /// Element type name for `array` members.
    pub fn element_type(&self) -> Option<&str> {
        self.element_type.as_deref()
    }

    pub fn has_custom_name(&self) -> bool {
        self.has_custom_name
    }

    /// When non-zero, the 32-bit element count of an array member is read at
    /// `nullable_base + offset + count_offset` instead of right after the
    /// presence word.
    pub fn count_offset(&self) -> usize {
        self.count_offset
    }
}

/// A named struct: a declared fixed size and an ordered member list.
///
/// Member declarations are append-only. Re-declaring a name keeps both
/// entries in iteration order; [`StructDef::member`] returns the latest.
#[derive(Clone, Debug)]
pub struct StructDef {
    pub(crate) name: String,
    pub(crate) fixed_size: usize,
    pub(crate) members: Vec<Member>,
}

impl StructDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bytes this struct occupies in the primary region. Zero when the
    /// struct is only ever decoded as a root and its extent is open-ended.
    pub fn fixed_size(&self) -> usize {
        self.fixed_size
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Look up a member by name; the latest declaration wins.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().rev().find(|m| m.name == name)
    }
}
