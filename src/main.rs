use clap::Parser;
use discord_md_export::process;
use discord_md_export::utils::{self, ExportConfig};
use eyre::{Result, eyre};
use std::path::PathBuf;
use tracing::info;

/// Convert a Discord chat export (JSON) into minute-grouped Markdown.
///
/// Every option can be given as an environment variable instead of a flag.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Chat export JSON file.
    #[arg(long, env = "INPUT_JSON_FILE_NAME", value_name = "PATH")]
    input: Option<String>,

    /// Directory the Markdown files are written to.
    #[arg(long, env = "OUTPUT_FOLDER_NAME", value_name = "DIR")]
    output_dir: Option<String>,

    /// Prepended to every output file name.
    #[arg(long, env = "OUTPUT_FILE_NAME_PREFIX", value_name = "PREFIX")]
    prefix: Option<String>,

    /// Write one file per month. Any non-empty value turns splitting on.
    #[arg(
        long,
        env = "OUTPUT_SPLIT_BY_MONTH",
        value_name = "FLAG",
        num_args = 0..=1,
        default_missing_value = "1"
    )]
    split_by_month: Option<String>,

    /// Folder name in attachment urls to replace.
    /// Defaults to `<input>_Files`.
    #[arg(long, env = "FOLDER_NAME_BEFORE", value_name = "NAME")]
    folder_before: Option<String>,

    /// Folder name written into the Markdown links.
    /// Defaults to `../assets`.
    #[arg(long, env = "FOLDER_NAME_AFTER", value_name = "NAME")]
    folder_after: Option<String>,

    /// Folder holding the assets on disk, used to skip empty or missing files.
    #[arg(long, env = "FOLDER_NAME_DURING", value_name = "PATH")]
    folder_during: Option<String>,
}

/// Empty values behave like unset ones.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn build_config(cli: Cli) -> Result<ExportConfig> {
    let input_path =
        non_empty(cli.input).ok_or_else(|| eyre!("INPUT_JSON_FILE_NAME is not set"))?;

    let mut config = ExportConfig::new(input_path);
    if let Some(dir) = non_empty(cli.output_dir) {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(prefix) = non_empty(cli.prefix) {
        config.file_prefix = prefix;
    }
    config.split_by_month = non_empty(cli.split_by_month).is_some();
    config.folder_before = non_empty(cli.folder_before)
        .unwrap_or_else(|| utils::default_folder_before(&config.input_path));
    if let Some(after) = non_empty(cli.folder_after) {
        config.folder_after = after;
    }
    config.folder_during = non_empty(cli.folder_during);
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(Cli::parse())?;

    info!("INPUT_JSON_FILE_NAME is {}", config.input_path.display());
    info!("OUTPUT_FOLDER_NAME is {}", config.output_dir.display());
    info!("OUTPUT_FILE_NAME_PREFIX is {}", config.file_prefix);
    info!("OUTPUT_SPLIT_BY_MONTH is {}", config.split_by_month);
    info!("FOLDER_NAME_BEFORE is {}", config.folder_before);
    info!("FOLDER_NAME_AFTER is {}", config.folder_after);
    info!(
        "FOLDER_NAME_DURING is {}",
        config.folder_during.as_deref().unwrap_or("<unset>")
    );

    process::run(&config)?;
    Ok(())
}
