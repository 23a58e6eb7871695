// Unit tests for the glyph registry and output helpers.
//
// The registry is fixed reference data; these tests pin its contents and
// order, and check truncate_chars against the multi-byte text it displays.

use resonant::glyphs::{find, registry};
use resonant::output::truncate_chars;

#[test]
fn registry_has_two_entries_in_order() {
    let records = registry();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "G:KZ-023");
    assert_eq!(records[1].id, "R:FE-001");
}

#[test]
fn koppa_variant_record() {
    let koppa = find("G:KZ-023").unwrap();
    assert_eq!(koppa.character, "ϟ");
    assert_eq!(koppa.name, "Greek Koppa variant");
    assert_eq!(koppa.origin, "Ancient Greek");
    assert_eq!(koppa.morphology.strokes, 3);
    assert_eq!(koppa.morphology.symmetry, "none");
    assert_eq!(koppa.notes, "Used in numeric contexts as 90 in isopsephy");
}

#[test]
fn fehu_record() {
    let fehu = find("R:FE-001").unwrap();
    assert_eq!(fehu.character, "ᚠ");
    assert_eq!(fehu.origin, "Elder Futhark");
    assert_eq!(fehu.morphology.symmetry, "vertical");
    assert_eq!(fehu.notes, "Rune for cattle, wealth");
}

#[test]
fn unknown_id_is_none() {
    assert!(find("X:XX-000").is_none());
    assert!(find("").is_none());
}

#[test]
fn ids_are_unique() {
    let records = registry();
    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn registry_json_shape() {
    let json = serde_json::to_value(registry()).unwrap();
    let fehu = &json[1];
    assert_eq!(fehu["id"], "R:FE-001");
    assert_eq!(fehu["char"], "ᚠ");
    assert_eq!(fehu["name"], "Fehu");
    assert_eq!(fehu["origin"], "Elder Futhark");
    assert_eq!(fehu["morphology"]["strokes"], 3);
    assert_eq!(fehu["morphology"]["symmetry"], "vertical");
    assert!(fehu.get("character").is_none());
}

// ============================================================
// truncate_chars: UTF-8 safety
// ============================================================

#[test]
fn truncate_short_text_unchanged() {
    assert_eq!(truncate_chars("Fehu", 10), "Fehu");
}

#[test]
fn truncate_exact_length_unchanged() {
    assert_eq!(truncate_chars("ᚠϟ", 2), "ᚠϟ");
}

#[test]
fn truncate_multibyte_text() {
    assert_eq!(truncate_chars("בראשית", 3), "ברא...");
    assert_eq!(truncate_chars("αβγδε", 2), "αβ...");
}

#[test]
fn truncate_to_zero() {
    assert_eq!(truncate_chars("abc", 0), "...");
}
