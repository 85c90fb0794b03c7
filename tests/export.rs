use discord_md_export::process;
use discord_md_export::utils::ExportConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_input(dir: &Path, json: &str) -> ExportConfig {
    let input = dir.join("chat.json");
    fs::write(&input, json).unwrap();
    let mut config = ExportConfig::new(&input);
    config.output_dir = dir.join("out");
    config
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

const TWO_MONTHS: &str = r#"{"messages":[
    {"timestamp":"2024-01-05T10:15:30.000+00:00","content":"hello","attachments":[],"embeds":[]},
    {"timestamp":"2024-01-05T10:15:45.000+00:00","content":"same minute","attachments":[],"embeds":[]},
    {"timestamp":"2024-01-31T23:59:00.000+00:00","content":"line one\nline two","attachments":[],"embeds":[]},
    {"timestamp":"2024-02-01T00:00:05.000+00:00","content":"february","attachments":[],"embeds":[]}
]}"#;

#[test]
fn single_message_unsplit() {
    let dir = TempDir::new().unwrap();
    let config = write_input(
        dir.path(),
        r#"{"messages":[{"timestamp":"2024-01-05T10:15:30.000+00:00","content":"hello","attachments":[],"embeds":[]}]}"#,
    );

    let summary = process::run(&config).unwrap();

    assert_eq!(summary.messages, 1);
    assert_eq!(summary.files, vec![dir.path().join("out").join(".md")]);
    assert_eq!(read(&summary.files[0]), "- 2024-01-05 10:15:30\n  - hello\n");
}

#[test]
fn same_minute_messages_share_heading() {
    let dir = TempDir::new().unwrap();
    let config = write_input(dir.path(), TWO_MONTHS);

    let summary = process::run(&config).unwrap();

    assert_eq!(
        read(&summary.files[0]),
        "- 2024-01-05 10:15:30\n  - hello\n  - same minute\n\
         - 2024-01-31 23:59:00\n  - line one\n    line two\n\
         - 2024-02-01 00:00:05\n  - february\n"
    );
}

#[test]
fn split_by_month_writes_one_file_per_month() {
    let dir = TempDir::new().unwrap();
    let mut config = write_input(dir.path(), TWO_MONTHS);
    config.split_by_month = true;
    config.file_prefix = "general-".into();

    let summary = process::run(&config).unwrap();

    let out = dir.path().join("out");
    assert_eq!(
        summary.files,
        vec![out.join("general-2024-01.md"), out.join("general-2024-02.md")]
    );
    assert_eq!(
        read(out.join("general-2024-01.md")),
        "- 2024-01-05 10:15:30\n  - hello\n  - same minute\n\
         - 2024-01-31 23:59:00\n  - line one\n    line two\n"
    );
    assert_eq!(
        read(out.join("general-2024-02.md")),
        "- 2024-02-01 00:00:05\n  - february\n"
    );
}

#[test]
fn unsplit_output_is_concatenation_of_split_output() {
    let dir = TempDir::new().unwrap();
    let mut config = write_input(dir.path(), TWO_MONTHS);

    config.split_by_month = true;
    config.output_dir = dir.path().join("split");
    let split = process::run(&config).unwrap();

    config.split_by_month = false;
    config.output_dir = dir.path().join("whole");
    let whole = process::run(&config).unwrap();

    let concatenated: String = split.files.iter().map(read).collect();
    assert_eq!(read(&whole.files[0]), concatenated);
}

#[test]
fn empty_and_missing_assets_are_skipped() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("probe");
    fs::create_dir(&assets).unwrap();
    fs::write(assets.join("full.png"), b"not empty").unwrap();
    fs::write(assets.join("empty.png"), b"").unwrap();

    let mut config = write_input(
        dir.path(),
        r#"{"messages":[{"timestamp":"2024-01-05T10:15:30.000+00:00","content":"pics",
            "attachments":[
                {"fileName":"full.png","url":"BEFORE/full.png"},
                {"fileName":"empty.png","url":"BEFORE/empty.png"},
                {"fileName":"gone.png","url":"BEFORE/gone.png"}
            ],
            "embeds":[{"title":"Cool","url":"http://x","thumbnail":{"url":"BEFORE/empty.png"}}]}]}"#,
    );
    config.folder_before = "BEFORE".into();
    config.folder_after = "../assets".into();
    config.folder_during = Some(assets.display().to_string());

    let summary = process::run(&config).unwrap();

    assert_eq!(summary.empty_assets, 3);
    assert_eq!(
        read(&summary.files[0]),
        "- 2024-01-05 10:15:30\n  - pics\n    ![full.png](../assets/full.png)\n    **[Cool](http://x)**\n"
    );
}

#[test]
fn existing_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = write_input(
        dir.path(),
        r#"{"messages":[{"timestamp":"2024-01-05T10:15:30.000+00:00","content":"new"}]}"#,
    );
    fs::create_dir_all(&config.output_dir).unwrap();
    fs::write(config.output_dir.join(".md"), "stale content that is longer").unwrap();

    let summary = process::run(&config).unwrap();

    assert_eq!(read(&summary.files[0]), "- 2024-01-05 10:15:30\n  - new\n");
}

#[test]
fn empty_export() {
    let dir = TempDir::new().unwrap();
    let mut config = write_input(dir.path(), r#"{"messages":[]}"#);

    let summary = process::run(&config).unwrap();
    assert_eq!(summary.files.len(), 1);
    assert_eq!(read(&summary.files[0]), "");

    config.split_by_month = true;
    config.output_dir = dir.path().join("split");
    let summary = process::run(&config).unwrap();
    assert!(summary.files.is_empty());
    assert!(config.output_dir.is_dir());
}

#[test]
fn malformed_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = write_input(dir.path(), "{ not json");

    assert!(process::run(&config).is_err());
    assert!(!config.output_dir.exists());
}
