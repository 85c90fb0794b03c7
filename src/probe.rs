use std::fs;
use tracing::warn;

/// Checks whether a referenced asset actually has content on disk.
///
/// Discord exports frequently contain zero-byte or missing media files. When a
/// probe folder is configured, every asset url is mapped into it and stat'ed;
/// empty and unreadable files are reported so the caller can drop the link.
/// Without a probe folder every asset is assumed present.
#[derive(Debug)]
pub struct EmptinessProbe {
    folder_before: String,
    folder_during: Option<String>,
    empty_count: usize,
}

impl EmptinessProbe {
    pub fn new(folder_before: impl Into<String>, folder_during: Option<String>) -> Self {
        Self {
            folder_before: folder_before.into(),
            folder_during,
            empty_count: 0,
        }
    }

    /// A probe that never touches the filesystem.
    pub fn disabled() -> Self {
        Self::new(String::new(), None)
    }

    /// Number of empty or missing files seen so far.
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// `true` if the asset behind `url` is zero bytes long or cannot be stat'ed.
    pub fn is_empty(&mut self, url: &str) -> bool {
        let Some(during) = self.folder_during.as_deref() else {
            return false;
        };
        let file_name = url.replacen(&self.folder_before, during, 1);

        match fs::metadata(&file_name) {
            Ok(meta) => {
                let is_empty = meta.len() == 0;
                if is_empty {
                    self.empty_count += 1;
                    warn!("{} File is empty: {}", self.empty_count, file_name);
                }
                is_empty
            }
            Err(e) => {
                self.empty_count += 1;
                warn!("{} {} {} Missing file?", self.empty_count, e, file_name);
                true
            }
        }
    }
}
