pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod metadata;
pub mod organize;
pub mod rename;
pub mod scan;

pub use cli::{Cli, Mode};
pub use config::Config;
pub use error::CamsortError;
pub use media::{MediaKind, detect_media_kind};
pub use metadata::{MediaMetadata, extract_metadata};
pub use organize::{OrganizeStats, organize_by_brand, organize_by_date};
pub use rename::normalize_names;
pub use scan::enumerate_candidates;
