//! End-to-end tests for writing the level table to disk

use std::fs;

use lvinfo_core::{
    Error, JsonFileProvider, LevelsProvider, SongRecord, StaticProvider, Variant, WriteSummary,
    export,
};
use tempfile::TempDir;

struct FailingProvider;

impl LevelsProvider for FailingProvider {
    fn levels(&self) -> lvinfo_core::Result<Vec<SongRecord>> {
        Err(Error::Io(std::io::Error::other("levels unavailable")))
    }
}

fn table_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("intl_lv_info.csv")
}

#[test]
fn test_export_writes_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = table_path(&dir);
    let provider = StaticProvider::new(vec![
        SongRecord::new("Song1", Variant::Std, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        SongRecord::new("Song2", Variant::Dx, [0.0, f64::NAN, 7.0, -8.0, 0.0, 0.0]),
    ]);

    let summary = export(&provider, &path).unwrap();

    assert_eq!(summary, WriteSummary { written: 8, failed: 0 });
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Song1\tSTD\tBAS\t1\n\
         Song1\tSTD\tADV\t2\n\
         Song1\tSTD\tEXP\t3\n\
         Song1\tSTD\tMAS\t4\n\
         Song1\tSTD\tREM\t5\n\
         Song1\tSTD\tREM\t6\n\
         Song2\tDX\tEXP\t7\n\
         Song2\tDX\tMAS\t8\n"
    );
}

#[test]
fn test_export_no_songs_leaves_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = table_path(&dir);
    fs::write(&path, "Old\tSTD\tBAS\t3\n").unwrap();

    let summary = export(&StaticProvider::default(), &path).unwrap();

    assert_eq!(summary, WriteSummary::default());
    assert!(path.exists());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_export_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = table_path(&dir);
    fs::write(&path, "Old\tSTD\tBAS\t3\nOld\tSTD\tADV\t5\n").unwrap();

    let provider = StaticProvider::new(vec![SongRecord::new(
        "New",
        Variant::Dx,
        [0.0, 0.0, 0.0, 13.7, 0.0, 0.0],
    )]);
    export(&provider, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "New\tDX\tMAS\t13.7\n");
}

#[test]
fn test_export_provider_failure_after_truncate() {
    let dir = tempfile::tempdir().unwrap();
    let path = table_path(&dir);
    fs::write(&path, "Old\tSTD\tBAS\t3\n").unwrap();

    let result = export(&FailingProvider, &path);

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_export_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("intl_lv_info.csv");

    let result = export(&StaticProvider::default(), &path);

    assert!(matches!(result, Err(Error::OutputCreateFailed { .. })));
}

#[test]
fn test_export_from_json_document() {
    let dir = tempfile::tempdir().unwrap();
    let levels_path = dir.path().join("levels.json");
    fs::write(
        &levels_path,
        r#"[
            {"n": "Song1", "dx": 0, "lv": [1, 2, 3, 4, 5, 6]},
            {"n": "Song2", "dx": 1, "lv": [0, "?", 7, -8, 0, 0]},
            {"n": "Short", "dx": 1, "lv": ["11.5", null]}
        ]"#,
    )
    .unwrap();
    let path = table_path(&dir);

    let summary = export(&JsonFileProvider::new(&levels_path), &path).unwrap();

    assert_eq!(summary.written, 9);
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[6], "Song2\tDX\tEXP\t7");
    assert_eq!(lines[7], "Song2\tDX\tMAS\t8");
    assert_eq!(lines[8], "Short\tDX\tBAS\t11.5");
}

#[test]
fn test_export_coerces_loose_ratings() {
    let dir = tempfile::tempdir().unwrap();
    let levels_path = dir.path().join("levels.json");
    fs::write(
        &levels_path,
        r#"[{"n": "Loose", "dx": 1, "lv": [true, [5], "0x10", "Infinity", {}, ""]}]"#,
    )
    .unwrap();
    let path = table_path(&dir);

    let summary = export(&JsonFileProvider::new(&levels_path), &path).unwrap();

    assert_eq!(summary.written, 4);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Loose\tDX\tBAS\t1\n\
         Loose\tDX\tADV\t5\n\
         Loose\tDX\tEXP\t16\n\
         Loose\tDX\tMAS\tInfinity\n"
    );
}

#[test]
fn test_export_malformed_json_after_truncate() {
    let dir = tempfile::tempdir().unwrap();
    let levels_path = dir.path().join("levels.json");
    fs::write(&levels_path, r#"[{"dx": 1, "lv": [1]}]"#).unwrap();
    let path = table_path(&dir);

    let result = export(&JsonFileProvider::new(&levels_path), &path);

    assert!(matches!(result, Err(Error::Json(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
