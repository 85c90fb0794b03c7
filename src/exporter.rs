use crate::grouping::{FileGroup, TimedBlock};
use crate::importer::{Embed, Message};
use crate::probe::EmptinessProbe;
use crate::utils::{ExportConfig, second_key};
use std::io::Write;

/// Flatten a message into one Markdown block.
///
/// Pieces are emitted in this order: content, attachments, then per embed
/// title, description, thumbnail, images and footer. Assets the probe
/// reports as empty are dropped.
pub fn render_message(
    message: &Message,
    config: &ExportConfig,
    probe: &mut EmptinessProbe,
) -> TimedBlock {
    let mut pieces: Vec<String> = vec![message.content.clone()];

    for attachment in &message.attachments {
        if probe.is_empty(&attachment.url) {
            continue;
        }
        pieces.push(format!(
            "![{}]({})",
            attachment.file_name,
            config.local_url(&attachment.url)
        ));
    }

    for embed in &message.embeds {
        render_embed(embed, config, probe, &mut pieces);
    }

    TimedBlock {
        timestamp: message.timestamp.clone(),
        block: pieces.join("\n"),
    }
}

fn render_embed(
    embed: &Embed,
    config: &ExportConfig,
    probe: &mut EmptinessProbe,
    pieces: &mut Vec<String>,
) {
    let title = embed.title.as_deref().unwrap_or_default();
    match non_empty(&embed.url) {
        Some(url) => pieces.push(format!("**[{}]({})**", title, url)),
        None => pieces.push(format!("**{}**", title)),
    }

    if let Some(description) = non_empty(&embed.description) {
        pieces.push(description.to_string());
    }

    if let Some(thumbnail) = &embed.thumbnail
        && !probe.is_empty(&thumbnail.url)
    {
        pieces.push(format!("![thumbnail]({})", config.local_url(&thumbnail.url)));
    }

    for image in embed.images.iter().flatten() {
        if probe.is_empty(&image.url) {
            continue;
        }
        pieces.push(format!("![image]({})", config.local_url(&image.url)));
    }

    if let Some(footer) = &embed.footer
        && let Some(text) = non_empty(&footer.text)
    {
        let mut text = text.to_string();
        if let Some(icon_url) = non_empty(&footer.icon_url) {
            text.push_str(&format!("![icon]({})", config.local_url(icon_url)));
        }
        pieces.push(text);
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Write one output file: a top-level item per minute group headed by the
/// first message's time, each message nested below it.
pub fn write_markdown<W: Write>(writer: &mut W, group: &FileGroup) -> std::io::Result<()> {
    for minute in &group.minutes {
        let Some(first) = minute.first() else {
            continue;
        };
        writeln!(writer, "- {}", second_key(&first.timestamp))?;
        for timed in minute {
            writeln!(writer, "  - {}", timed.block.replace('\n', "\n    "))?;
        }
    }
    Ok(())
}

/// Output file name for a group: `<prefix><month>.md`.
pub fn file_name(config: &ExportConfig, group: &FileGroup) -> String {
    format!("{}{}.md", config.file_prefix, group.month)
}
