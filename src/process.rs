use crate::exporter;
use crate::grouping::{self, TimedBlock};
use crate::importer;
use crate::probe::EmptinessProbe;
use crate::utils::ExportConfig;
use eyre::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// What a finished run produced.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub messages: usize,
    pub files: Vec<PathBuf>,
    pub empty_assets: usize,
}

/// Convert the export at `config.input_path` into Markdown files under
/// `config.output_dir`. The input is fully parsed before anything is written.
pub fn run(config: &ExportConfig) -> Result<ExportSummary> {
    let messages = importer::load_messages(&config.input_path)?;

    let mut probe = EmptinessProbe::new(&config.folder_before, config.folder_during.clone());
    let blocks: Vec<TimedBlock> = messages
        .iter()
        .map(|message| exporter::render_message(message, config, &mut probe))
        .collect();

    let groups = grouping::group_blocks(blocks, config.split_by_month);

    fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let mut files = Vec::with_capacity(groups.len());
    for group in &groups {
        let path = config.output_dir.join(exporter::file_name(config, group));
        info!("Writing {}", path.display());

        let md_file = File::create(&path)
            .wrap_err_with(|| format!("Failed to create: {}", path.display()))?;
        let mut writer = BufWriter::new(md_file);
        exporter::write_markdown(&mut writer, group)
            .wrap_err_with(|| format!("Failed to write: {}", path.display()))?;
        writer.flush().wrap_err("Failed to flush markdown file")?;
        files.push(path);
    }

    let summary = ExportSummary {
        messages: messages.len(),
        files,
        empty_assets: probe.empty_count(),
    };
    info!(
        "Done. {} messages, {} file(s) written, {} empty or missing asset(s) skipped.",
        summary.messages,
        summary.files.len(),
        summary.empty_assets
    );
    Ok(summary)
}
