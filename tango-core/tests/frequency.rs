mod common;

use std::fs;

use tango_core::model::frequency::UNRANKED;
use tango_core::services::frequency;
use tango_core::TangoError;

const META_BANK: &str = r#"[
    ["は", "freq", {"value": 3, "displayValue": "3㋕"}],
    ["日本", "freq", {"reading": "にほん", "frequency": {"value": 120, "displayValue": "120"}}],
    ["は", "freq", {"value": 15000}],
    ["日本", "freq", {"reading": "にっぽん", "frequency": {"value": 4500}}],
    ["猫", "freq", {"reading": "ねこ", "frequency": {"value": 300}}]
]"#;

#[test]
fn converts_archive_and_caches_json() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("JPDB_v2.2_Frequency_Kana.json");
    common::write_archive(&dir.path().join("JPDB_v2.2_Frequency_Kana.zip"), META_BANK);

    let table = frequency::load(&json).unwrap();

    assert!(json.exists());
    assert_eq!(table.len(), 3);
    assert_eq!(table.min_frequency("は"), 3);
    assert_eq!(table.min_frequency("日本"), 120);
    assert_eq!(table.min_frequency("犬"), UNRANKED);

    // Second load reads the cache, even with the archive gone
    fs::remove_file(dir.path().join("JPDB_v2.2_Frequency_Kana.zip")).unwrap();
    assert_eq!(frequency::load(&json).unwrap(), table);
}

#[test]
fn conversion_is_byte_for_byte_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("freq.json");
    common::write_archive(&dir.path().join("freq.zip"), META_BANK);

    frequency::load(&json).unwrap();
    let first = fs::read(&json).unwrap();

    fs::remove_file(&json).unwrap();
    frequency::load(&json).unwrap();
    let second = fs::read(&json).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        r#"{"は":{"は":3},"日本":{"にっぽん":4500,"にほん":120},"猫":{"ねこ":300}}"#
    );
}

#[test]
fn missing_dictionary_and_archive() {
    let dir = tempfile::tempdir().unwrap();
    let err = frequency::load(&dir.path().join("freq.json")).unwrap_err();

    assert!(matches!(err, TangoError::MissingDictionary { .. }));
    assert!(!dir.path().join("freq.json").exists());
}

#[test]
fn archive_without_meta_bank() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("freq.zip");

    let file = fs::File::create(&archive).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("index.json", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.finish().unwrap();

    let err = frequency::load(&dir.path().join("freq.json")).unwrap_err();
    assert!(matches!(err, TangoError::ArchiveEntryMissing(_)));
}
