mod exif;

pub use self::exif::capture_date;

use crate::error::{RetinaError, Result};
use retina_common::ImageReference;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub captured_at: Option<String>,
    /// ヘッダから読めた画像サイズ（読めない形式はNone）
    pub dimensions: Option<(u32, u32)>,
}

impl ImageInfo {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
            captured_at: capture_date(path),
            dimensions: image::image_dimensions(path).ok(),
        }
    }

    /// 解析結果に載せる参照情報（ハッシュ付き）
    pub fn reference(&self) -> ImageReference {
        let mut reference = ImageReference::from_path(&self.path);
        reference.digest = compute_file_hash(&self.path).ok();
        reference.captured_at = self.captured_at.clone();
        reference
    }
}

/// PNG/JPEG/BMP/TIFF（大文字小文字を区別しない）
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tif", "tiff"];

pub fn is_image_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(RetinaError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if is_image {
            images.push(ImageInfo::from_path(path));
        }
    }

    // ファイル名でソート（同名はパスで）
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name).then_with(|| a.path.cmp(&b.path)));

    Ok(images)
}

/// ファイル内容のSHA-256（16進）
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("png"));
        assert!(is_image_extension("Tiff"));
        assert!(is_image_extension("bmp"));
        assert!(!is_image_extension("txt"));
        assert!(!is_image_extension("pdf"));
        assert!(!is_image_extension("gif"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(RetinaError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_with_images() {
        let temp_dir = std::env::temp_dir().join("retina-screen-test-images");
        fs::create_dir_all(&temp_dir).unwrap();

        File::create(temp_dir.join("test1.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("test2.JPG")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("test3.tif")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("readme.txt")).unwrap().write_all(b"text").unwrap();

        let result = scan_folder(&temp_dir, false).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].file_name, "test1.jpg");
        assert_eq!(result[1].file_name, "test2.JPG");
        assert_eq!(result[2].file_name, "test3.tif");
        // ダミーファイルにEXIFはなく、画像としても読めない
        assert!(result[0].captured_at.is_none());
        assert!(result[0].dimensions.is_none());

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_compute_file_hash() {
        let temp_dir = std::env::temp_dir().join("retina-screen-test-hash");
        fs::create_dir_all(&temp_dir).unwrap();
        let path = temp_dir.join("abc.bin");
        fs::write(&path, b"abc").unwrap();

        let hash = compute_file_hash(&path).unwrap();
        assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");

        fs::remove_dir_all(&temp_dir).ok();
    }
}
