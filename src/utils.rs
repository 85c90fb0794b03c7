use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Resolved settings for one conversion run. Defaults are applied by
/// [`ExportConfig::new`]; `main` overlays whatever flags or variables were set.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub split_by_month: bool,
    /// Folder name embedded in attachment urls by the exporter.
    pub folder_before: String,
    /// Replacement folder written into the Markdown links.
    pub folder_after: String,
    /// Folder where the assets can be found on disk right now. Enables the
    /// emptiness probe when set.
    pub folder_during: Option<String>,
}

pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const DEFAULT_FOLDER_AFTER: &str = "../assets";

impl ExportConfig {
    /// Build a config with the documented defaults for everything but the input.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        let input_path = input_path.into();
        Self {
            folder_before: default_folder_before(&input_path),
            input_path,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: String::new(),
            split_by_month: false,
            folder_after: DEFAULT_FOLDER_AFTER.to_string(),
            folder_during: None,
        }
    }

    /// Rewrite an asset url so it points at the relocated asset folder.
    pub fn local_url(&self, url: &str) -> String {
        local_url(url, &self.folder_before, &self.folder_after)
    }
}

/// DiscordChatExporter stores media next to the export as `<export file>_Files`.
pub fn default_folder_before(input_path: &std::path::Path) -> String {
    format!("{}_Files", input_path.display())
}

/// Replace the first `before` with `after`, then turn the first backslash into
/// a forward slash. Both replacements are single-shot.
pub fn local_url(url: &str, before: &str, after: &str) -> String {
    url.replacen(before, after, 1).replacen('\\', "/", 1)
}

// ---------------------------------------------------------------------------
// Timestamp keys
//
// Exports carry timestamps like `2024-01-05T10:15:30.000+00:00`. The keys are
// cut out textually so that whatever offset the exporter wrote is preserved.
// ---------------------------------------------------------------------------

static MONTH_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[0-9]+T.*").expect("valid month regex"));
static MINUTE_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":[0-9]+\.[0-9]+.[0-9]+:[0-9]+$").expect("valid minute regex")
});
static SUBSECOND_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\..*").expect("valid second regex"));

/// `2024-01-05T10:15:30.000+00:00` -> `2024-01`
pub fn month_key(timestamp: &str) -> String {
    MONTH_TAIL.replace(timestamp, "").into_owned()
}

/// `2024-01-05T10:15:30.000+00:00` -> `2024-01-05T10:15`
pub fn minute_key(timestamp: &str) -> String {
    MINUTE_TAIL.replace(timestamp, "").into_owned()
}

/// `2024-01-05T10:15:30.000+00:00` -> `2024-01-05 10:15:30`
pub fn second_key(timestamp: &str) -> String {
    SUBSECOND_TAIL.replace(timestamp, "").replacen('T', " ", 1)
}
