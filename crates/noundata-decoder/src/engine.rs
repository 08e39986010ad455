use std::borrow::Cow;

use noundata_core::cursor::{CursorError, DualCursor, Region};
use noundata_core::emit::Emitter;
use noundata_core::value::{Guid, Quaternion, Value, Vector2, Vector3};
use noundata_schema::{Catalog, Member, TypeDef, TypeKind};

use crate::error::{DecodeError, DecodeErrorKind, DecodeResult};

/// Decode `bytes` as the resource named `filename`, driving `emitter` with
/// the ordered event stream.
///
/// The filename is only used for binding lookup; no I/O happens here. On
/// failure the stream is truncated after the failing member, but every
/// opened node, array and array entry has been closed.
pub fn decode<E: Emitter>(
    catalog: &Catalog,
    bytes: &[u8],
    filename: &str,
    emitter: &mut E,
) -> DecodeResult<()> {
    let Some(binding) = catalog.resolve(filename) else {
        return Err(DecodeError::unknown_binding(filename));
    };

    debug!(
        filename,
        roots = ?binding.roots,
        secondary_start = binding.secondary_start,
        "decode"
    );

    let mut decoder = Decoder {
        catalog,
        cursor: DualCursor::new(bytes),
        emitter,
        current_struct: None,
        depth: 0,
    };
    decoder.cursor.set_primary(0);
    decoder.cursor.set_secondary(binding.secondary_start);

    decoder.emitter.begin_document();
    let result = decoder.decode_roots(binding.roots);
    decoder.emitter.end_document();
    result
}

/// Addressing context for one level of recursion.
///
/// Passed by value so every flag and base offset is restored structurally
/// when a struct, array element or nullable completes.
#[derive(Clone, Copy, Debug, Default)]
struct Frame {
    /// Base offset member offsets are measured from, in the active region.
    base: usize,
    /// Member payloads live in the secondary region.
    secondary_mode: bool,
    /// Members are addressed relative to the element's own image.
    in_array_element: bool,
    /// Inside a nullable payload.
    in_nullable: bool,
    /// Secondary offset at which the enclosing nullable's payload begins.
    nullable_start: usize,
}

struct Decoder<'a, E: Emitter> {
    catalog: &'a Catalog,
    cursor: DualCursor<'a>,
    emitter: &'a mut E,
    current_struct: Option<&'a str>,
    depth: usize,
}

macro_rules! checked_read {
    ($($name:ident: $ty:ty),+ $(,)?) => {
        $(
            fn $name(&mut self) -> DecodeResult<$ty> {
                let result = self.cursor.$name();
                self.cursor_op(result)
            }
        )+
    };
}

impl<'a, E: Emitter> Decoder<'a, E> {
    fn decode_roots(&mut self, roots: &[String]) -> DecodeResult<()> {
        for root in roots {
            trace!(
                primary = self.cursor.primary(),
                secondary = self.cursor.real_secondary(),
                "decode_root({root})"
            );
            self.emitter.begin_node(&root.to_lowercase());
            let result = self.decode_struct(root, Frame::default());
            self.emitter.end_node();
            result?;
        }
        Ok(())
    }

    fn decode_struct(&mut self, name: &str, mut frame: Frame) -> DecodeResult<()> {
        let Some(def) = self.catalog.struct_def(name) else {
            return Err(self.fail(DecodeErrorKind::UnknownStruct { name: name.to_owned() }));
        };

        trace!(
            primary = self.cursor.primary(),
            secondary = self.cursor.secondary(),
            depth = self.depth,
            "decode_struct({name})"
        );

        let previous_struct = self.current_struct.replace(def.name());

        if frame.secondary_mode {
            frame.base = self.cursor.secondary();
            if !frame.in_array_element {
                // Reserve this struct's primary image in the secondary
                // region; nested payloads land after it.
                self.cursor.advance_secondary(def.fixed_size());
            }
        }

        self.depth += 1;
        let struct_start = self.cursor.primary();
        let mut result = Ok(());
        for member in def.members() {
            if frame.in_array_element {
                self.cursor.set_primary(struct_start);
            }
            if let Err(error) = self.decode_member(member, &frame) {
                result = Err(error);
                break;
            }
        }
        self.depth -= 1;

        self.current_struct = previous_struct;
        result
    }

    fn decode_member(&mut self, member: &Member, frame: &Frame) -> DecodeResult<()> {
        let Some(ty) = self.catalog.type_def(member.type_name()) else {
            return Err(self.fail(DecodeErrorKind::UnknownType {
                name: member.type_name().to_owned(),
            }));
        };

        let original_secondary = self.cursor.real_secondary();
        let elem_base = self.cursor.primary();

        if ty.kind() == TypeKind::Array {
            let element = member.element_type().or(ty.target()).unwrap_or_default();
            return self.decode_array(member, element, frame, elem_base, original_secondary);
        }

        self.cursor
            .set_primary(Self::member_position(member, frame, elem_base));

        match ty.kind() {
            TypeKind::Nullable => self.decode_nullable(member, ty, frame, original_secondary),
            TypeKind::Struct => self.decode_struct_member(member, ty, frame),
            _ => self.decode_scalar(ty, member.name()),
        }
    }

    /// Step A of the member protocol: where the member's scalar or 4-byte
    /// header is read from.
    fn member_position(member: &Member, frame: &Frame, elem_base: usize) -> usize {
        if frame.secondary_mode {
            if frame.in_array_element {
                elem_base + member.offset()
            } else if frame.in_nullable {
                frame.nullable_start + member.offset()
            } else {
                frame.base + member.offset()
            }
        } else if member.use_secondary() {
            member.offset()
        } else {
            frame.base + member.offset()
        }
    }

    fn decode_scalar(&mut self, ty: &TypeDef, name: &str) -> DecodeResult<()> {
        let value = match ty.kind() {
            TypeKind::Bool => Value::Bool(self.read_primary_u8()? != 0),
            TypeKind::Int => Value::Int(self.read_primary_i32()?),
            TypeKind::Int16 => Value::Int16(self.read_primary_i16()?),
            TypeKind::Int64 => Value::Int64(self.read_primary_i64()?),
            TypeKind::UInt8 => Value::UInt8(self.read_primary_u8()?),
            TypeKind::UInt16 => Value::UInt16(self.read_primary_u16()?),
            TypeKind::UInt32 => Value::UInt32(self.read_primary_u32()?),
            TypeKind::UInt64 => Value::UInt64(self.read_primary_u64()?),
            TypeKind::Float => Value::Float(self.read_primary_f32()?),
            TypeKind::Enum => Value::UInt32(self.read_primary_u32()?),
            TypeKind::Guid => Value::Guid(Guid {
                data1: self.read_primary_u32()?,
                data2: self.read_primary_u16()?,
                data3: self.read_primary_u16()?,
                data4: self.read_primary_u64()?,
            }),
            TypeKind::Vector2 => Value::Vector2(Vector2 {
                x: self.read_primary_f32()?,
                y: self.read_primary_f32()?,
            }),
            TypeKind::Vector3 => Value::Vector3(Vector3 {
                x: self.read_primary_f32()?,
                y: self.read_primary_f32()?,
                z: self.read_primary_f32()?,
            }),
            TypeKind::Quaternion => Value::Quaternion(Quaternion {
                w: self.read_primary_f32()?,
                x: self.read_primary_f32()?,
                y: self.read_primary_f32()?,
                z: self.read_primary_f32()?,
            }),
            TypeKind::Char => {
                let text = self.read_string(Region::Primary)?;
                // Empty and literal "0" inline strings are noise in the data
                // and are not emitted.
                if text.is_empty() || text == "0" {
                    return Ok(());
                }
                Value::Str(text)
            }
            TypeKind::CharPtr | TypeKind::Key | TypeKind::Asset | TypeKind::KeyAsset => {
                let handle = self.read_primary_u32()?;
                if handle == 0 {
                    return Ok(());
                }
                Value::Str(self.read_string(Region::Secondary)?)
            }
            TypeKind::LocalizedAssetString => {
                return self.decode_localized_string(name);
            }
            TypeKind::Nullable | TypeKind::Struct | TypeKind::Array => {
                // Dispatched before decode_scalar; reaching here means the
                // element type of a primitive array names a derived type.
                return Err(self.fail(DecodeErrorKind::UnknownType {
                    name: ty.name().to_owned(),
                }));
            }
        };

        trace!(
            primary = self.cursor.primary(),
            secondary = self.cursor.real_secondary(),
            "{name} = {value}"
        );
        self.emitter.value(name, value);
        Ok(())
    }

    /// Two consecutive handles: the text, and optionally a locale id.
    fn decode_localized_string(&mut self, name: &str) -> DecodeResult<()> {
        let text_handle = self.read_primary_u32()?;
        let id_handle = self.read_primary_u32()?;
        if text_handle == 0 {
            return Ok(());
        }

        let text = self.read_string(Region::Secondary)?;
        if id_handle != 0 {
            let id = self.read_string(Region::Secondary)?;
            self.emitter.begin_node(name);
            self.emitter.value("text", Value::Str(text));
            self.emitter.value("id", Value::Str(id));
            self.emitter.end_node();
        } else {
            self.emitter.value(name, Value::Str(text));
        }
        Ok(())
    }

    fn decode_struct_member(
        &mut self,
        member: &Member,
        ty: &TypeDef,
        frame: &Frame,
    ) -> DecodeResult<()> {
        let target = ty.target().unwrap_or_default();
        let inner = Frame {
            // The struct is laid out in place at the current primary
            // position.
            base: self.cursor.primary(),
            ..*frame
        };

        if member.has_custom_name() {
            self.emitter.begin_node(member.name());
            let result = self.decode_struct(target, inner);
            self.emitter.end_node();
            result
        } else {
            self.decode_struct(target, inner)
        }
    }

    fn decode_nullable(
        &mut self,
        member: &Member,
        ty: &TypeDef,
        frame: &Frame,
        original_secondary: usize,
    ) -> DecodeResult<()> {
        let saved_primary = self.cursor.primary();
        let presence = self.read_primary_u32()?;

        if presence == 0 {
            self.cursor.set_primary(saved_primary + 4);
            return Ok(());
        }

        let target = ty.target().unwrap_or_default();
        let Some(target_def) = self.catalog.struct_def(target) else {
            return Err(self.fail(DecodeErrorKind::UnknownStruct {
                name: target.to_owned(),
            }));
        };

        trace!(
            primary = self.cursor.primary(),
            secondary = self.cursor.real_secondary(),
            "decode_nullable({}, {target})",
            member.name()
        );

        let nullable_start = self.cursor.real_secondary();
        let inner = Frame {
            base: frame.base,
            secondary_mode: true,
            in_array_element: true,
            in_nullable: true,
            nullable_start,
        };

        // The payload is the struct's primary image at the secondary cursor;
        // reserve it so nested payloads land after it.
        self.cursor.set_primary(self.cursor.secondary());
        self.cursor.set_secondary(original_secondary + target_def.fixed_size());

        self.emitter.begin_node(member.name());
        let result = self.decode_struct(target, inner);
        self.emitter.end_node();

        self.cursor.set_primary(saved_primary + 4);
        result
    }

    fn decode_array(
        &mut self,
        member: &Member,
        element: &str,
        frame: &Frame,
        elem_base: usize,
        original_secondary: usize,
    ) -> DecodeResult<()> {
        let array_start = if frame.secondary_mode {
            if frame.in_array_element {
                elem_base + member.offset()
            } else if frame.in_nullable {
                frame.nullable_start + member.offset()
            } else {
                frame.base + member.offset()
            }
        } else if member.use_secondary() {
            member.offset()
        } else {
            frame.base + member.offset()
        };

        self.cursor.set_primary(array_start);
        let presence = self.read_primary_u32()?;
        if presence == 0 {
            return Ok(());
        }

        let count = if member.count_offset() > 0 {
            let at = frame.nullable_start + member.offset() + member.count_offset();
            let result = self.cursor.read_at_u32(at);
            self.cursor_op(result)?
        } else {
            self.read_primary_u32()?
        };

        trace!(
            primary = self.cursor.primary(),
            secondary = self.cursor.real_secondary(),
            "decode_array({}, {count})",
            member.name()
        );

        if let Some(elem_struct) = self.catalog.struct_def(element) {
            self.decode_struct_elements(member, elem_struct.name(), elem_struct.fixed_size(), count, frame, original_secondary)
        } else {
            self.decode_scalar_elements(member, element, count, frame, original_secondary)
        }
    }

    fn decode_struct_elements(
        &mut self,
        member: &Member,
        element: &str,
        elem_size: usize,
        count: u32,
        frame: &Frame,
        original_secondary: usize,
    ) -> DecodeResult<()> {
        let use_secondary = frame.secondary_mode || !frame.in_array_element;
        let mut elem_pos = if use_secondary {
            self.cursor.secondary()
        } else {
            self.cursor.primary()
        };
        if use_secondary {
            // Reserve the whole element block up front so payloads nested in
            // the elements serialize after it.
            self.cursor
                .set_secondary(original_secondary + elem_size * count as usize);
        }

        self.emitter.begin_array(member.name());
        self.depth += 1;
        let mut result = Ok(());
        for index in 0..count {
            trace!(depth = self.depth, "array_entry({}, [{index}])", member.name());
            self.emitter.begin_array_entry();
            self.cursor.set_primary(elem_pos);
            let inner = Frame {
                secondary_mode: frame.secondary_mode || use_secondary,
                in_array_element: true,
                ..*frame
            };
            let entry = self.decode_struct(element, inner);
            self.emitter.end_array_entry();
            if let Err(error) = entry {
                result = Err(error);
                break;
            }
            elem_pos += elem_size;
        }
        self.depth -= 1;
        self.emitter.end_array();
        result
    }

    fn decode_scalar_elements(
        &mut self,
        member: &Member,
        element: &str,
        count: u32,
        frame: &Frame,
        original_secondary: usize,
    ) -> DecodeResult<()> {
        let Some(elem_ty) = self.catalog.type_def(element) else {
            return Err(self.fail(DecodeErrorKind::UnknownStruct {
                name: element.to_owned(),
            }));
        };

        let elem_size = elem_ty.size();
        let use_secondary = !frame.secondary_mode && !frame.in_array_element;
        let mut elem_pos = if use_secondary {
            self.cursor.secondary()
        } else {
            self.cursor.primary()
        };
        if use_secondary {
            self.cursor
                .set_secondary(original_secondary + elem_size * count as usize);
        }

        self.emitter.begin_array(member.name());
        self.depth += 1;
        let mut result = Ok(());
        for _ in 0..count {
            self.cursor.set_primary(elem_pos);
            self.emitter.begin_array_entry();
            let entry = self.decode_scalar(elem_ty, "entry");
            self.emitter.end_array_entry();
            if let Err(error) = entry {
                result = Err(error);
                break;
            }
            elem_pos += elem_size;
        }
        self.depth -= 1;
        self.emitter.end_array();
        result
    }

    checked_read! {
        read_primary_u8: u8,
        read_primary_u16: u16,
        read_primary_u32: u32,
        read_primary_u64: u64,
        read_primary_i16: i16,
        read_primary_i32: i32,
        read_primary_i64: i64,
        read_primary_f32: f32,
    }

    fn read_string(&mut self, region: Region) -> DecodeResult<Cow<'a, str>> {
        let result = self.cursor.read_str(region);
        let bytes = self.cursor_op(result)?;
        Ok(String::from_utf8_lossy(bytes))
    }

    fn cursor_op<T>(&self, result: Result<T, CursorError>) -> DecodeResult<T> {
        result.map_err(|error| self.fail(error.into()))
    }

    /// Attach the diagnostic context captured at the failure site.
    fn fail(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(
            kind,
            self.current_struct,
            self.cursor.primary(),
            self.cursor.real_secondary(),
        )
    }
}
