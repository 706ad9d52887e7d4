//! QR image requests against the public api.qrserver.com endpoint.

use reqwest::Url;

use super::error::{Error, Result};

const ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
const MARGIN: u32 = 10;

pub const SIZE_RANGE: std::ops::RangeInclusive<u32> = 100..=500;
pub const SIZE_STEP: u32 = 50;
pub const DEFAULT_SIZE: u32 = 200;

/// How the raw input is turned into a QR payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum QrContent {
    #[default]
    Text,
    Url,
    Email,
    Phone,
}

impl QrContent {
    /// Adds the scheme prefix the content type implies. URLs keep an
    /// existing `http`/`https` scheme untouched.
    pub fn payload(self, raw: &str) -> String {
        match self {
            Self::Text => raw.to_string(),
            Self::Url => {
                if raw.starts_with("http") {
                    raw.to_string()
                } else {
                    format!("https://{raw}")
                }
            }
            Self::Email => format!("mailto:{raw}"),
            Self::Phone => format!("tel:{raw}"),
        }
    }
}

/// Validated request parameters for one QR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    pub content: QrContent,
    pub data: String,
    pub size: u32,
    /// Foreground, 6 hex digits without `#`.
    pub color: String,
    /// Background, 6 hex digits without `#`.
    pub bg_color: String,
}

fn check_hex_color(field: &'static str, raw: &str) -> Result<String> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(hex.to_lowercase())
    } else {
        Err(Error::validation(field, "must be a 6-digit hex color"))
    }
}

impl QrRequest {
    pub fn new(
        content: QrContent,
        raw_data: &str,
        size: u32,
        color: &str,
        bg_color: &str,
    ) -> Result<Self> {
        if raw_data.trim().is_empty() {
            return Err(Error::validation("content", "cannot be empty"));
        }
        if !SIZE_RANGE.contains(&size) || size % SIZE_STEP != 0 {
            return Err(Error::validation(
                "size",
                "must be between 100 and 500 in steps of 50",
            ));
        }

        Ok(Self {
            content,
            data: content.payload(raw_data.trim()),
            size,
            color: check_hex_color("foreground color", color)?,
            bg_color: check_hex_color("background color", bg_color)?,
        })
    }

    /// The image URL, with the payload percent-encoded by the URL builder.
    pub fn image_url(&self) -> Result<Url> {
        let size = format!("{0}x{0}", self.size);
        Url::parse_with_params(
            ENDPOINT,
            &[
                ("size", size.as_str()),
                ("data", self.data.as_str()),
                ("color", self.color.as_str()),
                ("bgcolor", self.bg_color.as_str()),
                ("margin", &MARGIN.to_string()),
            ],
        )
        .map_err(|e| Error::Qr(format!("failed to build request URL: {e}")))
    }
}

/// Downloads the generated PNG.
pub async fn fetch_png(url: Url) -> Result<Vec<u8>> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| Error::Qr(format!("request failed: {e}")))?;
    if !response.status().is_success() {
        return Err(Error::Qr(format!(
            "server returned {}",
            response.status()
        )));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Qr(format!("failed to read image: {e}")))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_prefixes() {
        assert_eq!(QrContent::Text.payload("hello"), "hello");
        assert_eq!(QrContent::Url.payload("example.com"), "https://example.com");
        assert_eq!(QrContent::Url.payload("http://example.com"), "http://example.com");
        assert_eq!(QrContent::Url.payload("https://example.com"), "https://example.com");
        assert_eq!(QrContent::Email.payload("a@b.com"), "mailto:a@b.com");
        assert_eq!(QrContent::Phone.payload("+1555"), "tel:+1555");
    }

    #[test]
    fn test_request_url() {
        let req = QrRequest::new(QrContent::Text, "hello world", 200, "000000", "ffffff").unwrap();
        let url = req.image_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=hello+world&color=000000&bgcolor=ffffff&margin=10"
        );
    }

    #[test]
    fn test_hash_prefix_stripped() {
        let req = QrRequest::new(QrContent::Text, "x", 100, "#1A2B3C", "#FFFFFF").unwrap();
        assert_eq!(req.color, "1a2b3c");
        assert_eq!(req.bg_color, "ffffff");
    }

    #[test]
    fn test_rejects_bad_colors() {
        assert!(QrRequest::new(QrContent::Text, "x", 200, "fff", "ffffff").is_err());
        assert!(QrRequest::new(QrContent::Text, "x", 200, "zzzzzz", "ffffff").is_err());
        assert!(QrRequest::new(QrContent::Text, "x", 200, "000000", "#12345").is_err());
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(QrRequest::new(QrContent::Text, "x", 50, "000000", "ffffff").is_err());
        assert!(QrRequest::new(QrContent::Text, "x", 550, "000000", "ffffff").is_err());
        assert!(QrRequest::new(QrContent::Text, "x", 225, "000000", "ffffff").is_err());
    }

    #[test]
    fn test_rejects_empty_content() {
        assert!(QrRequest::new(QrContent::Text, "   ", 200, "000000", "ffffff").is_err());
    }

    #[test]
    fn test_payload_percent_encoding() {
        let req = QrRequest::new(QrContent::Email, "a+b@c.com", 300, "000000", "ffffff").unwrap();
        let url = req.image_url().unwrap();
        assert!(url.as_str().contains("data=mailto%3Aa%2Bb%40c.com"));
    }
}
