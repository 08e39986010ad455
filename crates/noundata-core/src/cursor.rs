use core::fmt;

/// Which of the two wire regions an operation addresses.
///
/// The *primary* region holds fixed-size struct images; the *secondary*
/// region holds variable-length payloads (strings, array elements, nullable
/// bodies).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Region {
    Primary,
    Secondary,
}

/// Error indicating that a cursor operation could not be satisfied by the
/// underlying buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CursorError {
    /// A bounded read would cross the end of the buffer.
    OutOfBounds {
        offset: usize,
        requested: usize,
        len: usize,
    },
    /// A string read reached the end of the buffer without a NUL terminator.
    UnterminatedString { offset: usize },
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                offset,
                requested,
                len,
            } => write!(
                f,
                "read of {requested} bytes at offset {offset} crosses end of buffer ({len} bytes)"
            ),
            Self::UnterminatedString { offset } => {
                write!(f, "string at offset {offset} is not NUL-terminated before end of buffer")
            }
        }
    }
}

impl core::error::Error for CursorError {}

/// A cursor for reading a primary/secondary-split buffer.
///
/// Holds a read-only byte view and two independent offsets, one per
/// [`Region`]. All numeric reads are little-endian and bounds-checked;
/// setting an offset is unchecked and validity is enforced on the next read.
#[derive(Clone, Debug)]
pub struct DualCursor<'a> {
    bytes: &'a [u8],
    primary: usize,
    secondary: usize,
    display_secondary: Option<usize>,
}

macro_rules! impl_read_pair {
    ($primary:ident, $secondary:ident, $ty:ty) => {
        #[doc = concat!("Read a `", stringify!($ty), "` at the primary cursor and advance it.")]
        pub fn $primary(&mut self) -> Result<$ty, CursorError> {
            let value = <$ty>::from_le_bytes(self.take(self.primary)?);
            self.primary += core::mem::size_of::<$ty>();
            Ok(value)
        }

        #[doc = concat!("Read a `", stringify!($ty), "` at the secondary cursor and advance it.")]
        pub fn $secondary(&mut self) -> Result<$ty, CursorError> {
            let value = <$ty>::from_le_bytes(self.take(self.secondary)?);
            self.secondary += core::mem::size_of::<$ty>();
            Ok(value)
        }
    };
}

impl<'a> DualCursor<'a> {
    /// Create a cursor over `bytes` with both offsets at zero.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            primary: 0,
            secondary: 0,
            display_secondary: None,
        }
    }

    /// Total length of the underlying buffer.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Current primary offset.
    pub const fn primary(&self) -> usize {
        self.primary
    }

    /// Current secondary offset, honoring the display override when set.
    pub const fn secondary(&self) -> usize {
        match self.display_secondary {
            Some(display) => display,
            None => self.secondary,
        }
    }

    /// Current secondary offset, ignoring the display override.
    pub const fn real_secondary(&self) -> usize {
        self.secondary
    }

    pub fn set_primary(&mut self, offset: usize) {
        self.primary = offset;
    }

    pub fn set_secondary(&mut self, offset: usize) {
        self.secondary = offset;
    }

    /// Override the offset reported by [`DualCursor::secondary`] without
    /// moving the real secondary cursor.
    pub fn set_display_secondary(&mut self, offset: usize) {
        self.display_secondary = Some(offset);
    }

    pub fn clear_display_secondary(&mut self) {
        self.display_secondary = None;
    }

    pub fn advance_secondary(&mut self, bytes: usize) {
        self.secondary += bytes;
    }

    fn take<const N: usize>(&self, offset: usize) -> Result<[u8; N], CursorError> {
        match self.bytes.get(offset..offset + N) {
            Some(bytes) => Ok(bytes.try_into().expect("N-elements slice")),
            None => Err(CursorError::OutOfBounds {
                offset,
                requested: N,
                len: self.bytes.len(),
            }),
        }
    }

    impl_read_pair!(read_primary_u8, read_secondary_u8, u8);
    impl_read_pair!(read_primary_u16, read_secondary_u16, u16);
    impl_read_pair!(read_primary_u32, read_secondary_u32, u32);
    impl_read_pair!(read_primary_u64, read_secondary_u64, u64);
    impl_read_pair!(read_primary_i16, read_secondary_i16, i16);
    impl_read_pair!(read_primary_i32, read_secondary_i32, i32);
    impl_read_pair!(read_primary_i64, read_secondary_i64, i64);
    impl_read_pair!(read_primary_f32, read_secondary_f32, f32);

    /// Read a `u32` at an absolute offset without moving either cursor.
    pub fn read_at_u32(&self, offset: usize) -> Result<u32, CursorError> {
        Ok(u32::from_le_bytes(self.take(offset)?))
    }

    /// Read a NUL-terminated byte string at the given region's cursor,
    /// advancing that cursor past the terminator. The terminator is not part
    /// of the returned slice.
    pub fn read_str(&mut self, region: Region) -> Result<&'a [u8], CursorError> {
        let start = match region {
            Region::Primary => self.primary,
            Region::Secondary => self.secondary,
        };

        if start >= self.bytes.len() {
            return Err(CursorError::OutOfBounds {
                offset: start,
                requested: 1,
                len: self.bytes.len(),
            });
        }

        let rest = &self.bytes[start..];
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(CursorError::UnterminatedString { offset: start })?;

        let end = start + nul + 1;
        match region {
            Region::Primary => self.primary = end,
            Region::Secondary => self.secondary = end,
        }

        Ok(&rest[..nul])
    }
}
