//! Event image path resolution.

use std::path::PathBuf;

use uuid::Uuid;

use eventhub_core::config::media::MediaConfig;
use eventhub_core::error::AppError;

/// Maps an event and filename to a static file path under the configured
/// image root. Purely path construction: no existence check and no
/// access control.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    /// Root directory of event images.
    root: PathBuf,
}

impl ImageResolver {
    /// Creates a new resolver from media configuration.
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            root: PathBuf::from(&config.image_root),
        }
    }

    /// Resolves `<root>/<event id>/<filename>`.
    ///
    /// Filenames carrying path separators or parent-directory components
    /// are rejected so a crafted name cannot escape the image root.
    pub fn resolve(&self, event_id: Uuid, filename: &str) -> Result<PathBuf, AppError> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(AppError::not_found("Image not found"));
        }

        Ok(self.root.join(event_id.to_string()).join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ImageResolver {
        ImageResolver::new(&MediaConfig {
            image_root: "EventImage".to_string(),
        })
    }

    #[test]
    fn test_resolve_builds_nested_path() {
        let id = Uuid::nil();
        let path = resolver().resolve(id, "cover.jpg").unwrap();
        assert_eq!(path, PathBuf::from(format!("EventImage/{id}/cover.jpg")));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let id = Uuid::nil();
        assert!(resolver().resolve(id, "../secret.txt").is_err());
        assert!(resolver().resolve(id, "a/b.jpg").is_err());
        assert!(resolver().resolve(id, "a\\b.jpg").is_err());
        assert!(resolver().resolve(id, "").is_err());
    }
}
