use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Local directory holding uploaded resumes.
///
/// Every save writes a new file: `<uuid>_<sanitized original name>`, so two
/// identical uploads never overwrite each other.
#[derive(Debug, Clone)]
pub struct ResumeStorage {
    root: PathBuf,
}

impl ResumeStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `data` under the storage root and returns the full path.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self
            .root
            .join(format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name)));
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }
}

/// Keeps only the final path component and replaces anything outside
/// `[A-Za-z0-9._-]` so client names cannot escape the storage root.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "resume".to_string()
    } else {
        cleaned
    }
}
