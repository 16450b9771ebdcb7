use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn camsort() -> Command {
    Command::cargo_bin("camsort").unwrap()
}

/// Write a minimal little-endian TIFF whose EXIF block carries a camera
/// make, model, and original capture date-time. kamadak-exif decodes it the
/// same way it decodes a camera file, so tests need no binary fixtures.
pub fn write_exif_image(path: &Path, make: &str, model: &str, datetime: &str) {
    fs::write(path, build_tiff(make, model, datetime)).unwrap();
}

/// Layout: header, IFD0 (Make, Model, Exif-IFD pointer), Exif IFD
/// (DateTimeOriginal), then the out-of-line value area.
fn build_tiff(make: &str, model: &str, datetime: &str) -> Vec<u8> {
    const IFD0_OFFSET: u32 = 8;
    const IFD0_LEN: u32 = 2 + 3 * 12 + 4;
    const EXIF_IFD_OFFSET: u32 = IFD0_OFFSET + IFD0_LEN;
    const EXIF_IFD_LEN: u32 = 2 + 12 + 4;
    const VALUE_BASE: u32 = EXIF_IFD_OFFSET + EXIF_IFD_LEN;

    let mut values: Vec<u8> = Vec::new();

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&IFD0_OFFSET.to_le_bytes());

    // IFD0: Make (0x010F), Model (0x0110), Exif IFD pointer (0x8769)
    out.extend_from_slice(&3u16.to_le_bytes());
    out.extend_from_slice(&ascii_entry(0x010F, make, &mut values, VALUE_BASE));
    out.extend_from_slice(&ascii_entry(0x0110, model, &mut values, VALUE_BASE));
    out.extend_from_slice(&long_entry(0x8769, EXIF_IFD_OFFSET));
    out.extend_from_slice(&0u32.to_le_bytes());

    // Exif IFD: DateTimeOriginal (0x9003)
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&ascii_entry(0x9003, datetime, &mut values, VALUE_BASE));
    out.extend_from_slice(&0u32.to_le_bytes());

    assert_eq!(out.len() as u32, VALUE_BASE);
    out.extend_from_slice(&values);
    out
}

/// ASCII (type 2) IFD entry. Values longer than four bytes go to the value
/// area at `value_base`, padded to keep offsets on a word boundary.
fn ascii_entry(tag: u16, text: &str, values: &mut Vec<u8>, value_base: u32) -> [u8; 12] {
    let mut data = text.as_bytes().to_vec();
    data.push(0);

    let mut entry = [0u8; 12];
    entry[0..2].copy_from_slice(&tag.to_le_bytes());
    entry[2..4].copy_from_slice(&2u16.to_le_bytes());
    entry[4..8].copy_from_slice(&(data.len() as u32).to_le_bytes());

    if data.len() <= 4 {
        entry[8..8 + data.len()].copy_from_slice(&data);
    } else {
        let offset = value_base + values.len() as u32;
        entry[8..12].copy_from_slice(&offset.to_le_bytes());
        values.extend_from_slice(&data);
        if data.len() % 2 == 1 {
            values.push(0);
        }
    }

    entry
}

/// LONG (type 4) IFD entry with an inline value.
fn long_entry(tag: u16, value: u32) -> [u8; 12] {
    let mut entry = [0u8; 12];
    entry[0..2].copy_from_slice(&tag.to_le_bytes());
    entry[2..4].copy_from_slice(&4u16.to_le_bytes());
    entry[4..8].copy_from_slice(&1u32.to_le_bytes());
    entry[8..12].copy_from_slice(&value.to_le_bytes());
    entry
}
