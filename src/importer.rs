/// Type definitions for the Discord chat export JSON, as produced by
/// DiscordChatExporter's JSON format.
///
/// Only the fields the converter reads are modelled. Everything else in the
/// document (guild, channel, author, reactions, ...) is ignored by serde.
///
/// Document shape:
/// ```json
/// {
///   "messages": [
///     {
///       "timestamp": "2024-01-05T10:15:30.000+00:00",
///       "content": "hello",
///       "attachments": [{ "fileName": "a.png", "url": "chat.json_Files\\a.png" }],
///       "embeds": [{ "title": "Cool", "url": "http://x" }]
///     }
///   ]
/// }
/// ```
use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

/// The whole export file. Only `messages` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatExport {
    pub messages: Vec<Message>,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// One chat message.
///
/// `timestamp` is kept as the raw string: the grouping keys are cut out of it
/// textually, never reparsed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub embeds: Vec<Embed>,
}

/// An uploaded file. `url` points into the exporter's `<input>_Files` folder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Embeds
// ---------------------------------------------------------------------------

/// A rich embed (link preview, bot card, ...). Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Embed {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<EmbedImage>,
    #[serde(default)]
    pub images: Option<Vec<EmbedImage>>,
    #[serde(default)]
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedFooter {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read and parse the export file, returning its messages in file order.
pub fn load_messages(path: &Path) -> Result<Vec<Message>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read input: {}", path.display()))?;
    parse_messages(&raw).wrap_err_with(|| format!("Failed to parse input: {}", path.display()))
}

/// Parse an export document already held in memory.
pub fn parse_messages(raw: &str) -> Result<Vec<Message>> {
    let export: ChatExport = serde_json::from_str(raw).wrap_err("Invalid chat export JSON")?;
    Ok(export.messages)
}
