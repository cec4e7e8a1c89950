//! 眼底カメラが書き込むEXIFから撮影日時を読む

use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 優先順。撮影時刻 → デジタル化時刻 → 最終更新時刻
const DATE_TAGS: [Tag; 3] = [Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];

/// 撮影日時。EXIFが無い・読めない画像では None
pub fn capture_date(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let exif = match Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(exif) => exif,
        Err(e) => {
            log::debug!("EXIFなし: {} ({})", path.display(), e);
            return None;
        }
    };

    DATE_TAGS
        .iter()
        .find_map(|&tag| exif.get_field(tag, In::PRIMARY))
        .map(|field| field.display_value().to_string())
}
