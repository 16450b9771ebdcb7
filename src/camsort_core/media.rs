use std::path::Path;

/// Kind of media file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Image file extensions (lowercase). These carry embedded EXIF.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "heic", "heif", "tif", "tiff"];

/// Video file extensions (lowercase). Metadata comes from the container.
const VIDEO_EXTENSIONS: &[&str] = &["mov", "mp4"];

/// Detect the media kind of a file from its extension.
pub fn detect_media_kind(path: &Path) -> Option<MediaKind> {
    let ext = path.extension().and_then(|e| e.to_str())?.to_lowercase();

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Some(MediaKind::Image);
    }

    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        return Some(MediaKind::Video);
    }

    None
}
