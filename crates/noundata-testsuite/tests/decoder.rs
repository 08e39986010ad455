use expect_test::expect;
use noundata_decoder::{decode, DecodeErrorKind};
use noundata_schema::Catalog;
use noundata_testsuite::{base_types, phase_catalog, widget_catalog, EventLog, RecordBuilder};
use pretty_assertions::assert_eq;

fn one_gambit_buffer() -> RecordBuilder {
    let mut buffer = RecordBuilder::with_len(120);
    buffer
        .put_u32(0, 1) // gambit presence
        .put_u32(4, 1) // gambit count (shares the phaseType slot)
        .put_u32(80, 1) // condition handle, element-local offset 12
        .put_u8(116, 1); // randomizeCooldown, element-local offset 48
    buffer.append_str("onDeath");
    buffer
}

#[test]
fn empty_phase_emits_scalars_only() {
    let catalog = phase_catalog();
    let mut buffer = RecordBuilder::with_len(68);
    buffer.put_u32(4, 2).put_u8(12, 1);

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "creature_attack.Phase", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(phase)
            value(phaseType, 2)
            value(startNode, true)
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn phase_with_one_gambit_reads_elements_from_the_secondary_region() {
    let catalog = phase_catalog();
    let buffer = one_gambit_buffer();

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "creature_attack.Phase", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(phase)
            begin_array(gambit)
              begin_array_entry
                value(condition, onDeath)
                value(randomizeCooldown, true)
              end_array_entry
            end_array
            value(phaseType, 1)
            value(startNode, false)
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn array_entry_pairs_match_the_count() {
    let catalog = phase_catalog();
    let mut buffer = RecordBuilder::with_len(68 + 3 * 52);
    buffer.put_u32(0, 1).put_u32(4, 3);

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "creature_attack.Phase", &mut log).unwrap();

    assert_eq!(log.count("begin_array_entry"), 3);
    assert_eq!(log.count("end_array_entry"), 3);
}

#[test]
fn unknown_binding_fails_without_any_events() {
    let catalog = phase_catalog();

    let mut log = EventLog::new();
    let error = decode(&catalog, &[0; 8], "foo.Unknown", &mut log).unwrap_err();

    assert!(matches!(error.kind(), DecodeErrorKind::UnknownBinding { .. }));
    assert!(log.is_empty());
}

#[test]
fn truncated_string_aborts_with_a_balanced_stream() {
    let catalog = phase_catalog();
    let mut buffer = RecordBuilder::with_len(120);
    buffer
        .put_u32(0, 1)
        .put_u32(4, 1)
        .put_u32(80, 1)
        .put_bytes(120, b"onDe"); // no terminator before end of buffer

    let mut log = EventLog::new();
    let error = decode(&catalog, &buffer.build(), "creature_attack.Phase", &mut log).unwrap_err();

    assert!(matches!(
        error.kind(),
        DecodeErrorKind::InvalidString { offset: 120 }
    ));
    assert_eq!(error.struct_name(), Some("cGambitDefinition"));

    assert_eq!(log.count("begin_node("), log.count("end_node"));
    assert_eq!(log.count("begin_array_entry"), log.count("end_array_entry"));
    assert_eq!(log.count("begin_array("), log.count("end_array"));
    assert_eq!(log.count("value("), 0);
}

#[test]
fn absent_nullable_emits_nothing_and_skips_the_handle() {
    let catalog = widget_catalog();
    let mut buffer = RecordBuilder::with_len(8);
    buffer.put_u32(4, 7);

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "door.Widget", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(widget)
            value(kind, 7)
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn present_nullable_wraps_its_fields_in_a_node() {
    let catalog = widget_catalog();
    let mut buffer = RecordBuilder::with_len(32);
    buffer
        .put_u32(0, 1) // doorDef presence
        .put_u32(4, 5) // kind
        .put_u8(24, 1) // clickToOpen, payload-local offset 16
        .put_u32(28, 2); // initialState, payload-local offset 20

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "door.Widget", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(widget)
            begin_node(doorDef)
              value(clickToOpen, true)
              value(initialState, 2)
            end_node
            value(kind, 5)
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn nested_nullable_payloads_stack_in_the_secondary_region() {
    let catalog = widget_catalog();
    let mut buffer = RecordBuilder::with_len(72);
    buffer
        .put_u32(0, 1) // doorDef presence
        .put_u32(4, 5) // kind
        .put_u32(8, 1) // graphicsState_open presence, payload-local offset 0
        .put_u8(24, 1) // clickToOpen
        .put_u32(28, 2) // initialState
        .put_u32(32, 1); // prefab handle inside cNewGfxState payload
    buffer.append_str("fx/door_open.prefab");

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "door.Widget", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(widget)
            begin_node(doorDef)
              begin_node(graphicsState_open)
                value(prefab, fx/door_open.prefab)
              end_node
              value(clickToOpen, true)
              value(initialState, 2)
            end_node
            value(kind, 5)
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn sideband_count_offset_is_used_instead_of_the_inline_word() {
    let mut catalog = Catalog::new();
    base_types(&mut catalog);
    catalog
        .add_struct("Pair", 8)
        .field("a", "uint32_t", 0)
        .field("b", "uint32_t", 4);
    catalog
        .add_struct("Holder", 16)
        .array_with_count_offset("items", "Pair", 0, 8)
        .field("mode", "enum", 12);
    catalog
        .add_struct("Root", 8)
        .nullable("holder", "Holder", 0)
        .field("kind", "enum", 4);
    catalog.register_file_type(".Holder", &["Root"], 8);

    let mut buffer = RecordBuilder::with_len(40);
    buffer
        .put_u32(0, 1) // holder presence
        .put_u32(4, 9) // kind
        .put_u32(8, 1) // items presence, payload-local offset 0
        .put_u32(12, 0xEEEE_EEEE) // the word after the presence is not the count
        .put_u32(16, 2) // sideband count at nullable base + 0 + 8
        .put_u32(20, 4) // mode, payload-local offset 12
        .put_u32(24, 1)
        .put_u32(28, 2)
        .put_u32(32, 3)
        .put_u32(36, 4);

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "spawner.Holder", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(root)
            begin_node(holder)
              begin_array(items)
                begin_array_entry
                  value(a, 1)
                  value(b, 2)
                end_array_entry
                begin_array_entry
                  value(a, 3)
                  value(b, 4)
                end_array_entry
              end_array
              value(mode, 4)
            end_node
            value(kind, 9)
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn duplicate_member_declarations_both_decode_in_order() {
    let mut catalog = Catalog::new();
    base_types(&mut catalog);
    catalog
        .add_struct("Dup", 8)
        .field("flag", "enum", 0)
        .field("flag", "float", 0);
    catalog.register_file_type(".Dup", &["Dup"], 8);

    let mut buffer = RecordBuilder::with_len(8);
    buffer.put_u32(0, 3);

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "x.Dup", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(dup)
            value(flag, 3)
            value(flag, 0.00000)
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn every_primitive_kind_round_trips_through_the_mirror_layout() {
    let mut catalog = Catalog::new();
    base_types(&mut catalog);
    catalog
        .add_struct("Everything", 152)
        .field("enabled", "bool", 0)
        .field("temperature", "int", 4)
        .field("delta", "int16_t", 8)
        .field("timestamp", "int64_t", 12)
        .field("tint", "uint8_t", 20)
        .field("port", "uint16_t", 22)
        .field("mask", "uint32_t", 24)
        .field("refId", "uint64_t", 28)
        .field("scale", "float", 36)
        .field("id", "guid", 40)
        .field("anchor", "cSPVector2", 56)
        .field("position", "cSPVector3", 64)
        .field("rotation", "cSPVector4", 76)
        .field("tag", "char", 92)
        .field("label", "char*", 108)
        .field("onHit", "key", 112)
        .field("icon", "asset", 116)
        .field("gearKey", "cKeyAsset", 120)
        .field("title", "cLocalizedAssetString", 136)
        .field("greeting", "cLocalizedAssetString", 144);
    catalog.register_file_type(".Everything", &["Everything"], 152);

    let mut buffer = RecordBuilder::with_len(152);
    buffer
        .put_u8(0, 1)
        .put_i32(4, -40)
        .put_i16(8, -7)
        .put_i64(12, 1_700_000_000)
        .put_u8(20, 200)
        .put_u16(22, 8080)
        .put_u32(24, 0xFFFF)
        .put_u64(28, 1_234_567_890_123)
        .put_f32(36, 2.5)
        .put_u32(40, 0x0011_2233)
        .put_u16(44, 0x4455)
        .put_u16(46, 0x6677)
        .put_u64(48, 0x8899_AABB_CCDD_EEFF)
        .put_f32(56, 1.0)
        .put_f32(60, -1.0)
        .put_f32(64, 0.25)
        .put_f32(68, 0.5)
        .put_f32(72, 0.75)
        .put_f32(76, 1.0)
        .put_f32(80, 0.0)
        .put_f32(84, 0.0)
        .put_f32(88, 0.0)
        .put_str(92, "west")
        .put_u32(108, 1) // label
        .put_u32(112, 1) // onHit
        .put_u32(116, 0) // icon: absent
        .put_u32(120, 1) // gearKey
        .put_u32(136, 1) // title text, no id
        .put_u32(140, 0)
        .put_u32(144, 1) // greeting text + id
        .put_u32(148, 1);
    buffer.append_str("alpha");
    buffer.append_str("onDeath");
    buffer.append_str("gear_head");
    buffer.append_str("Hello");
    buffer.append_str("Welcome");
    buffer.append_str("GREETING_ID");

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "sample.Everything", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(everything)
            value(enabled, true)
            value(temperature, -40)
            value(delta, -7)
            value(timestamp, 1700000000)
            value(tint, 200)
            value(port, 8080)
            value(mask, 65535)
            value(refId, 1234567890123)
            value(scale, 2.50000)
            value(id, 00112233-4455-6677-8899-aabbccddeeff)
            value(anchor, x: 1.00000, y: -1.00000)
            value(position, x: 0.25000, y: 0.50000, z: 0.75000)
            value(rotation, w: 1.00000, x: 0.00000, y: 0.00000, z: 0.00000)
            value(tag, west)
            value(label, alpha)
            value(onHit, onDeath)
            value(gearKey, gear_head)
            value(title, Hello)
            begin_node(greeting)
              value(text, Welcome)
              value(id, GREETING_ID)
            end_node
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn inline_char_skips_empty_and_zero_strings() {
    let mut catalog = Catalog::new();
    base_types(&mut catalog);
    catalog
        .add_struct("Labels", 24)
        .field("first", "char", 0)
        .field("second", "char", 8)
        .field("third", "char", 16);
    catalog.register_file_type(".Labels", &["Labels"], 24);

    let mut buffer = RecordBuilder::with_len(24);
    buffer.put_str(0, "ok").put_str(8, "0").put_str(16, "");

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "x.Labels", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(labels)
            value(first, ok)
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn scalar_read_past_the_buffer_reports_offsets_and_struct() {
    let catalog = phase_catalog();

    let mut log = EventLog::new();
    let error = decode(&catalog, &[0; 8], "short.Phase", &mut log).unwrap_err();

    assert!(matches!(
        error.kind(),
        DecodeErrorKind::OutOfBounds {
            offset: 12,
            requested: 1,
            len: 8,
        }
    ));
    assert_eq!(error.struct_name(), Some("Phase"));
    assert_eq!(log.count("begin_node("), log.count("end_node"));
}

#[test]
fn unknown_root_struct_aborts_with_a_balanced_stream() {
    let mut catalog = Catalog::new();
    base_types(&mut catalog);
    catalog.register_file_type(".Ghost", &["Ghost"], 0);

    let mut log = EventLog::new();
    let error = decode(&catalog, &[0; 4], "a.Ghost", &mut log).unwrap_err();

    assert!(matches!(error.kind(), DecodeErrorKind::UnknownStruct { .. }));
    assert_eq!(log.count("begin_node("), log.count("end_node"));
    assert_eq!(log.count("begin_document"), 1);
    assert_eq!(log.count("end_document"), 1);
}

#[test]
fn unknown_member_type_aborts_the_decode() {
    let mut catalog = Catalog::new();
    base_types(&mut catalog);
    catalog.add_struct("Odd", 8).field("x", "mystery", 0);
    catalog.register_file_type(".Odd", &["Odd"], 8);

    let mut log = EventLog::new();
    let error = decode(&catalog, &[0; 8], "a.Odd", &mut log).unwrap_err();

    assert!(matches!(
        error.kind(),
        DecodeErrorKind::UnknownType { name } if name.as_str() == "mystery"
    ));
}

#[test]
fn repeated_decodes_are_deterministic() {
    let catalog = phase_catalog();
    let bytes = one_gambit_buffer().build();

    let mut first = EventLog::new();
    decode(&catalog, &bytes, "creature_attack.Phase", &mut first).unwrap();
    let mut second = EventLog::new();
    decode(&catalog, &bytes, "creature_attack.Phase", &mut second).unwrap();

    assert_eq!(first.render(), second.render());
}

#[test]
fn concurrent_decodes_share_one_catalog() {
    let catalog = phase_catalog();
    let bytes = one_gambit_buffer().build();

    let mut reference = EventLog::new();
    decode(&catalog, &bytes, "creature_attack.Phase", &mut reference).unwrap();
    let expected = reference.render();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut log = EventLog::new();
                    decode(&catalog, &bytes, "creature_attack.Phase", &mut log).unwrap();
                    log.render()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
