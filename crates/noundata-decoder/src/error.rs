use core::fmt;

use noundata_core::CursorError;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A terminal decode failure: the error kind plus the diagnostic context the
/// engine captured at the failure site (struct in progress and both cursor
/// offsets).
#[derive(Clone, Debug)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    struct_name: Option<String>,
    primary: usize,
    secondary: usize,
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum DecodeErrorKind {
    /// No extension or exact-name binding matches the input filename.
    UnknownBinding { filename: String },
    /// A member references a type absent from the registry.
    UnknownType { name: String },
    /// A nullable, struct member or array element references an unknown
    /// struct.
    UnknownStruct { name: String },
    /// A cursor read would exceed the buffer length.
    OutOfBounds {
        offset: usize,
        requested: usize,
        len: usize,
    },
    /// A string read reached end of buffer without a NUL terminator.
    InvalidString { offset: usize },
}

impl DecodeError {
    pub(crate) fn new(
        kind: DecodeErrorKind,
        struct_name: Option<&str>,
        primary: usize,
        secondary: usize,
    ) -> Self {
        Self {
            kind,
            struct_name: struct_name.map(str::to_owned),
            primary,
            secondary,
        }
    }

    pub(crate) fn unknown_binding(filename: &str) -> Self {
        Self {
            kind: DecodeErrorKind::UnknownBinding {
                filename: filename.to_owned(),
            },
            struct_name: None,
            primary: 0,
            secondary: 0,
        }
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// The struct being decoded when the failure occurred.
    pub fn struct_name(&self) -> Option<&str> {
        self.struct_name.as_deref()
    }

    pub fn primary(&self) -> usize {
        self.primary
    }

    pub fn secondary(&self) -> usize {
        self.secondary
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.struct_name {
            Some(name) => write!(
                f,
                "[{name}] {} (primary {}, secondary {})",
                self.kind, self.primary, self.secondary
            ),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for DecodeError {}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBinding { filename } => {
                write!(f, "no file binding matches `{filename}`")
            }
            Self::UnknownType { name } => write!(f, "unknown type `{name}`"),
            Self::UnknownStruct { name } => write!(f, "unknown struct `{name}`"),
            Self::OutOfBounds {
                offset,
                requested,
                len,
            } => write!(
                f,
                "read of {requested} bytes at offset {offset} crosses end of buffer ({len} bytes)"
            ),
            Self::InvalidString { offset } => {
                write!(f, "string at offset {offset} is not NUL-terminated before end of buffer")
            }
        }
    }
}

impl From<CursorError> for DecodeErrorKind {
    fn from(error: CursorError) -> Self {
        match error {
            CursorError::OutOfBounds {
                offset,
                requested,
                len,
            } => Self::OutOfBounds {
                offset,
                requested,
                len,
            },
            CursorError::UnterminatedString { offset } => Self::InvalidString { offset },
        }
    }
}
