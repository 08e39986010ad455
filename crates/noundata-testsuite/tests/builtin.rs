use expect_test::expect;
use noundata_decoder::decode;
use noundata_schema::Catalog;
use noundata_testsuite::{EventLog, RecordBuilder};
use pretty_assertions::assert_eq;

#[test]
fn builtin_catalog_is_closed_and_acyclic() {
    Catalog::builtin().validate().unwrap();
}

#[test]
fn builtin_phase_matches_the_minimal_schema_layout() {
    let catalog = Catalog::builtin();
    let mut buffer = RecordBuilder::with_len(120);
    buffer
        .put_u32(0, 1) // gambit presence
        .put_u32(4, 1) // gambit count
        .put_u32(80, 1) // condition handle
        .put_u8(116, 1); // randomizeCooldown
    buffer.append_str("onDeath");

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
fn zeroed_noun_buffer_decodes_with_every_optional_absent() {
    let catalog = Catalog::builtin();
    let buffer = vec![0_u8; 480];

    let mut log = EventLog::new();
    decode(&catalog, &buffer, "grob.Noun", &mut log).unwrap();

    // Only the root opens a node: every nullable is absent, every handle is
    // zero, and inline sub-structs flatten into the parent.
    assert_eq!(log.count("begin_node("), 1);
    assert_eq!(log.count("end_node"), 1);
    assert_eq!(log.count("begin_array("), 0);
    let rendered = log.render();
    assert!(rendered.contains("value(nounType, 0)"));
    assert!(rendered.contains("value(isFixed, false)"));
    assert!(rendered.contains("value(graphicsScale, 0.00000)"));
}

#[test]
fn catalog_manifest_entries_decode_from_the_exact_filename_binding() {
    let catalog = Catalog::builtin();
    let mut buffer = RecordBuilder::with_len(48);
    buffer
        .put_u32(0, 1) // entries presence
        .put_u32(4, 1) // entries count
        .put_u32(8, 1) // assetNameWType handle, element-local offset 0
        .put_i64(16, 1_700_000_000) // compileTime
        .put_u32(24, 131) // version
        .put_u32(28, 77) // typeCrc
        .put_u32(32, 101); // dataCrc
    buffer.append_str("creature_editor.Noun");

    let mut log = EventLog::new();
    decode(&catalog, &buffer.build(), "catalog_131", &mut log).unwrap();

    expect![[r#"
        begin_document
          begin_node(catalog)
            begin_array(entries)
              begin_array_entry
                value(assetNameWType, creature_editor.Noun)
                value(compileTime, 1700000000)
                value(dataCrc, 101)
                value(typeCrc, 77)
                value(version, 131)
              end_array_entry
            end_array
          end_node
        end_document
    "#]]
    .assert_eq(&log.render());
}

#[test]
fn binding_listing_names_the_root_structs() {
    let catalog = Catalog::builtin();
    let listing = catalog.registered_file_types();

    assert!(listing.iter().any(|entry| entry == ".noun (Noun)"));
    assert!(listing.iter().any(|entry| entry == ".phase (Phase)"));
    assert!(listing.iter().any(|entry| entry == "catalog_131 (Catalog) [exact]"));
    let mut sorted = listing.clone();
    sorted.sort();
    assert_eq!(listing, sorted);
}
