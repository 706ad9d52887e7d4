//! Client-side image "processing" for the converter and compressor tools.
//!
//! Both tools are deliberate simulations: a fixed delay stands in for
//! processing and the output bytes are the source bytes. The compressor
//! estimates the output size from the quality slider instead of re-encoding.

use std::path::Path;
use std::time::Duration;

use super::error::{Error, Result};

/// Simulated processing time for both tools.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Largest accepted input file.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Extensions accepted by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp"];

pub const QUALITY_RANGE: std::ops::RangeInclusive<u8> = 10..=100;
pub const QUALITY_STEP: u8 = 5;
pub const DEFAULT_QUALITY: u8 = 80;

/// Output formats offered by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum OutputFormat {
    #[default]
    #[strum(to_string = "JPEG")]
    Jpeg,
    #[strum(to_string = "PNG")]
    Png,
    #[strum(to_string = "WEBP")]
    Webp,
    #[strum(to_string = "GIF")]
    Gif,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }
}

/// Checks that a picked file looks like an image and is within the size cap.
pub fn validate_input(path: &Path, size: u64) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match ext {
        Some(e) if IMAGE_EXTENSIONS.contains(&e.as_str()) => {}
        _ => {
            return Err(Error::validation(
                "file",
                "select an image file (png, jpg, jpeg, gif, webp, svg, bmp)",
            ));
        }
    }
    if size > MAX_FILE_SIZE {
        return Err(Error::validation("file", "image must be 5 MB or smaller"));
    }
    Ok(())
}

/// Output filename for a converted image: original stem, new extension.
pub fn converted_name(path: &Path, format: OutputFormat) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("converted");
    format!("{stem}.{}", format.extension())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub original_size: u64,
    pub compressed_size: u64,
    pub savings_percent: f64,
}

/// Estimates the compressed size from the quality slider: the model assumes
/// 40% of the file is irreducible and the rest scales linearly with quality.
pub fn estimate_compression(original_size: u64, quality: u8) -> Result<CompressionStats> {
    if !QUALITY_RANGE.contains(&quality) {
        return Err(Error::validation("quality", "must be between 10 and 100"));
    }
    if original_size == 0 {
        return Err(Error::validation("file", "file is empty"));
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let compressed_size =
        (original_size as f64 * (0.4 + 0.6 * f64::from(quality) / 100.0)).floor() as u64;
    #[allow(clippy::cast_precision_loss)]
    let savings_percent =
        (original_size - compressed_size) as f64 / original_size as f64 * 100.0;

    Ok(CompressionStats {
        original_size,
        compressed_size,
        savings_percent,
    })
}

/// Humanizes a byte count: `812 bytes`, `45.3 KB`, `1.20 MB`.
pub fn format_file_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let b = bytes as f64;
    if bytes < 1024 {
        format!("{bytes} bytes")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", b / 1024.0)
    } else {
        format!("{:.2} MB", b / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_accepts_images() {
        for ext in IMAGE_EXTENSIONS {
            let path = PathBuf::from(format!("photo.{ext}"));
            assert!(validate_input(&path, 1024).is_ok(), "rejected {ext}");
        }
        assert!(validate_input(&PathBuf::from("photo.PNG"), 1024).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_images() {
        assert!(validate_input(&PathBuf::from("doc.pdf"), 1024).is_err());
        assert!(validate_input(&PathBuf::from("noext"), 1024).is_err());
    }

    #[test]
    fn test_validate_rejects_oversized() {
        assert!(validate_input(&PathBuf::from("big.png"), MAX_FILE_SIZE + 1).is_err());
        assert!(validate_input(&PathBuf::from("ok.png"), MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_converted_name() {
        assert_eq!(
            converted_name(&PathBuf::from("/tmp/holiday.png"), OutputFormat::Webp),
            "holiday.webp"
        );
        assert_eq!(
            converted_name(&PathBuf::from("pic.jpeg"), OutputFormat::Jpeg),
            "pic.jpg"
        );
    }

    #[test]
    fn test_compression_estimate() {
        // quality 80 keeps 40% + 48% = 88% of the original
        let stats = estimate_compression(1_000_000, 80).unwrap();
        assert_eq!(stats.compressed_size, 880_000);
        assert!((stats.savings_percent - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_compression_bounds() {
        let low = estimate_compression(1000, 10).unwrap();
        assert_eq!(low.compressed_size, 460);
        let high = estimate_compression(1000, 100).unwrap();
        assert_eq!(high.compressed_size, 1000);
        assert_eq!(high.savings_percent, 0.0);
    }

    #[test]
    fn test_compression_rejects_bad_inputs() {
        assert!(estimate_compression(1000, 5).is_err());
        assert!(estimate_compression(0, 80).is_err());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(812), "812 bytes");
        assert_eq!(format_file_size(46_387), "45.3 KB");
        assert_eq!(format_file_size(1_258_291), "1.20 MB");
    }
}
