use resconv::{
    ArtifactKind, ConvertOptions, DiagnosticKind, SourceDocument, WriteOutcome, convert,
    write_outputs,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="app_name">Shopping List</string>
    <string name="greeting">Hello, %1$s!</string>
    <string>broken entry</string>
    <string name="empty_cart">Your cart is <b>empty</b></string>

    <plurals name="num_items">
        <!-- Cart badge -->
        <item quantity="one">1 item</item>
        <item quantity="other">%d items</item>
    </plurals>

    <plurals name="pending_uploads">
    </plurals>
</resources>
"#;

fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("strings.xml");
    fs::write(&path, SAMPLE_XML).unwrap();
    path
}

#[test]
fn test_round_trip_single_string() {
    let source = SourceDocument::from_text(r#"<string name="greeting">Hello</string>"#);
    let conversion = convert(&source);
    assert_eq!(conversion.outputs[0].contents, r#"greeting = "Hello";"#);
}

#[test]
fn test_round_trip_num_items_plurals() {
    let source = SourceDocument::from_text(
        r#"<plurals name="num_items"><item quantity="one">1 item</item><item quantity="other">%d items</item></plurals>"#,
    );
    let conversion = convert(&source);
    let plist = &conversion.outputs[1].contents;

    let compact: String = plist.lines().map(str::trim).collect();
    assert!(compact.contains(
        "<key>num_items</key><dict><key>NSStringLocalizedFormatKey</key><string>%#@COUNT@</string><key>COUNT</key><dict>"
    ));
    let one = compact.find("<key>one</key><string>1 item</string>").unwrap();
    let other = compact
        .find("<key>other</key><string>%d items</string>")
        .unwrap();
    assert!(one < other);
}

#[test]
fn test_convert_file_to_directory() {
    let temp_dir = TempDir::new().unwrap();
    let source_path = write_source(temp_dir.path());
    let out_dir = temp_dir.path().join("en.lproj");
    fs::create_dir(&out_dir).unwrap();

    let source = SourceDocument::load(&source_path).unwrap();
    let conversion = convert(&source);
    let outcomes = write_outputs(
        &conversion,
        &out_dir,
        &ConvertOptions::default(),
        &mut |_: &Path| -> bool { panic!("nothing exists yet") },
    )
    .unwrap();

    assert_eq!(
        outcomes,
        vec![
            WriteOutcome::Written(out_dir.join("Localizable.strings")),
            WriteOutcome::Written(out_dir.join("Localizable.stringsdict")),
        ]
    );

    let strings = fs::read_to_string(out_dir.join("Localizable.strings")).unwrap();
    assert_eq!(
        strings,
        "app_name = \"Shopping List\";\ngreeting = \"Hello, %1$s!\";\nempty_cart = \"Your cart is <b>empty</b>\";"
    );

    let plist = fs::read_to_string(out_dir.join("Localizable.stringsdict")).unwrap();
    assert!(plist.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist"));
    assert!(plist.contains("                <!-- Cart badge -->\n                <key>one</key>\n"));
    assert!(plist.contains("<key>pending_uploads</key>"));

    assert_eq!(conversion.diagnostics.len(), 1);
    assert_eq!(
        conversion.diagnostics.count(DiagnosticKind::SkippedString),
        1
    );
}

#[test]
fn test_forced_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let source_path = write_source(temp_dir.path());
    let out_dir = temp_dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    let options = ConvertOptions {
        force_overwrite: true,
    };

    let run = || {
        let source = SourceDocument::load(&source_path).unwrap();
        write_outputs(&convert(&source), &out_dir, &options, &mut |_: &Path| false).unwrap();
        (
            fs::read(out_dir.join("Localizable.strings")).unwrap(),
            fs::read(out_dir.join("Localizable.stringsdict")).unwrap(),
        )
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn test_existing_destinations_ask_once_each_and_skip() {
    let temp_dir = TempDir::new().unwrap();
    let source_path = write_source(temp_dir.path());
    let out_dir = temp_dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    fs::write(out_dir.join("Localizable.strings"), "keep me").unwrap();
    fs::write(out_dir.join("Localizable.stringsdict"), "keep me too").unwrap();

    let mut asked: Vec<PathBuf> = Vec::new();
    let source = SourceDocument::load(&source_path).unwrap();
    let outcomes = write_outputs(
        &convert(&source),
        &out_dir,
        &ConvertOptions::default(),
        &mut |path: &Path| {
            asked.push(path.to_path_buf());
            false
        },
    )
    .unwrap();

    assert_eq!(
        asked,
        vec![
            out_dir.join("Localizable.strings"),
            out_dir.join("Localizable.stringsdict"),
        ]
    );
    assert!(outcomes.iter().all(|o| !o.is_written()));
    assert_eq!(
        fs::read_to_string(out_dir.join("Localizable.strings")).unwrap(),
        "keep me"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("Localizable.stringsdict")).unwrap(),
        "keep me too"
    );
}

#[test]
fn test_declining_one_artifact_still_writes_the_other() {
    let temp_dir = TempDir::new().unwrap();
    let source_path = write_source(temp_dir.path());
    let out_dir = temp_dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    fs::write(out_dir.join("Localizable.strings"), "keep me").unwrap();

    let mut asked = 0;
    let source = SourceDocument::load(&source_path).unwrap();
    let outcomes = write_outputs(
        &convert(&source),
        &out_dir,
        &ConvertOptions::default(),
        &mut |_: &Path| {
            asked += 1;
            false
        },
    )
    .unwrap();

    assert_eq!(asked, 1);
    assert_eq!(
        outcomes[0],
        WriteOutcome::Skipped(out_dir.join(ArtifactKind::StringsTable.file_name()))
    );
    assert!(outcomes[1].is_written());
    assert!(
        fs::read_to_string(out_dir.join("Localizable.stringsdict"))
            .unwrap()
            .contains("<key>num_items</key>")
    );
}

#[test]
fn test_missing_destination_fails_after_conversion() {
    let temp_dir = TempDir::new().unwrap();
    let source = SourceDocument::from_text(r#"<string name="a">A</string>"#);

    let result = write_outputs(
        &convert(&source),
        temp_dir.path().join("does-not-exist"),
        &ConvertOptions::default(),
        &mut |_: &Path| true,
    );

    assert!(result.is_err());
}
