//! # discord-md-export
//!
//! A CLI tool that turns a Discord chat export (DiscordChatExporter's JSON format)
//! into Markdown outlines for archiving and note-taking apps.
//!
//! ## What it does
//!
//! Every message is flattened into one Markdown block: its text, its attachments
//! as image links, and its embeds (title, description, thumbnail, images, footer).
//! Messages sent within the same clock minute are merged under a single bullet
//! headed by the first message's time, and the whole log is written to one file,
//! or one file per month.
//!
//! Attachment links are rewritten from the exporter's `<export>_Files` folder to
//! a relocated asset folder. If the assets are reachable on disk, zero-byte and
//! missing files can be detected and their links dropped.
//!
//! ## Usage
//!
//! ```sh
//! # Everything into out/.md
//! INPUT_JSON_FILE_NAME=general.json discord-md-export
//!
//! # One file per month, skipping dead media
//! INPUT_JSON_FILE_NAME=general.json OUTPUT_SPLIT_BY_MONTH=1 \
//!     OUTPUT_FILE_NAME_PREFIX=general- FOLDER_NAME_DURING=/mnt/export/general.json_Files \
//!     discord-md-export
//! ```
//!
//! Each variable also has a matching flag, see `--help`.

pub mod exporter;
pub mod grouping;
pub mod importer;
pub mod probe;
pub mod process;
pub mod utils;
