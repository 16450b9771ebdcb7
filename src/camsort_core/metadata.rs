use crate::camsort_core::error::Result;
use crate::camsort_core::media::{MediaKind, detect_media_kind};
use exif::{In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Date format used in EXIF data.
const EXIF_DATE_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]:[month]:[day] [hour]:[minute]:[second]");

/// Seconds between the MP4/QuickTime epoch (1904-01-01) and the Unix epoch.
const SECONDS_FROM_1904_TO_1970: i64 = 2_082_844_800;

/// Metadata extracted from a media file. All fields are optional; videos
/// never carry a make or model.
#[derive(Debug, Clone, Default)]
pub struct MediaMetadata {
    pub make: Option<String>,
    pub model: Option<String>,
    pub captured_at: Option<PrimitiveDateTime>,
}

/// Extract metadata from a media file, dispatching on its kind.
///
/// Returns `Ok(None)` when the file is not a supported media kind or its
/// metadata cannot be decoded; decode failures are logged, never fatal.
/// Only failing to open the file surfaces as an error.
pub fn extract_metadata(path: &Path) -> Result<Option<MediaMetadata>> {
    match detect_media_kind(path) {
        Some(MediaKind::Image) => read_image_metadata(path),
        Some(MediaKind::Video) => read_video_metadata(path),
        None => {
            log::debug!("Unsupported file kind: {}", path.display());
            Ok(None)
        }
    }
}

/// Decode the embedded EXIF segment of an image.
fn read_image_metadata(path: &Path) -> Result<Option<MediaMetadata>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(e) => {
            log::warn!("No EXIF data in {}: {}", path.display(), e);
            return Ok(None);
        }
    };

    let captured_at = ascii_field(&exif, Tag::DateTimeOriginal)
        .or_else(|| ascii_field(&exif, Tag::DateTimeDigitized))
        .or_else(|| ascii_field(&exif, Tag::DateTime))
        .and_then(|s| parse_exif_datetime(&s));

    Ok(Some(MediaMetadata {
        make: ascii_field(&exif, Tag::Make),
        model: ascii_field(&exif, Tag::Model),
        captured_at,
    }))
}

/// Probe an MP4/QuickTime container. Only a creation timestamp is available.
fn read_video_metadata(path: &Path) -> Result<Option<MediaMetadata>> {
    let mut file = File::open(path)?;

    let context = match mp4parse::read_mp4(&mut file) {
        Ok(context) => context,
        Err(e) => {
            log::warn!("Cannot probe container of {}: {:?}", path.display(), e);
            return Ok(None);
        }
    };

    Ok(Some(MediaMetadata {
        make: None,
        model: None,
        captured_at: context.creation.and_then(|c| mp4_epoch_to_datetime(c.0)),
    }))
}

/// Read an ASCII EXIF field as a trimmed string.
fn ascii_field(exif: &exif::Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(values) => values.first().map(|bytes| {
            String::from_utf8_lossy(bytes)
                .trim_end_matches('\0')
                .trim()
                .to_string()
        }),
        _ => None,
    }
}

/// Parse an EXIF date string such as "2023:06:01 10:00:00".
fn parse_exif_datetime(s: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(s.trim(), EXIF_DATE_FORMAT).ok()
}

/// Convert seconds since the MP4 epoch into a calendar date-time.
fn mp4_epoch_to_datetime(seconds: u64) -> Option<PrimitiveDateTime> {
    let unix = i64::try_from(seconds).ok()? - SECONDS_FROM_1904_TO_1970;
    let dt = OffsetDateTime::from_unix_timestamp(unix).ok()?;
    Some(PrimitiveDateTime::new(dt.date(), dt.time()))
}
