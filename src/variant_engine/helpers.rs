//! Small naming helpers shared by the shuffler, the renderer and the export
//! adapter.

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letter for a 0-based position: 0 → 'A', 1 → 'B', ...
///
/// Positions past 'Z' are a caller bug; option and variant counts are
/// bounded well below 26.
pub fn label_for(position: usize) -> char {
    assert!(position < ALPHABET.len(), "label position {position} past 'Z'");
    char::from(ALPHABET[position])
}

/// Display name of a variant by its 0-based index ("A" is the reference variant).
pub fn variant_name(variant_index: usize) -> String {
    label_for(variant_index).to_string()
}

/// Conventional export file name, e.g. `test_World_History_Variant_B.md`.
pub fn export_file_name(subject: &str, variant_name: &str, ext: &str) -> String {
    format!("test_{}_Variant_{}.{}", subject.replace(' ', "_"), variant_name, ext)
}

/// Fresh 8-character correlation tag printed in a rendered header.
pub fn short_test_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
