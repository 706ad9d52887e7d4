//! Per-tool form state.
//!
//! Every tool keeps its inputs as raw strings (or slider values) and its
//! last computed result side by side, so switching tools never loses
//! work-in-progress and the view layer stays a pure function of state.

use std::path::PathBuf;

use crate::core::dates::{AgeBreakdown, DateSpan};
use crate::core::finance::{EcommerceProfit, EmiBreakdown, GstBreakdown, PercentMode, ProfitLoss};
use crate::core::generate::PasswordOptions;
use crate::core::geometry::Shape;
use crate::core::images::{CompressionStats, OutputFormat};
use crate::core::qr::QrContent;
use crate::core::text::TextStats;
use crate::core::{finance, images, qr};

/// Keypad calculator: live expression plus the last evaluation outcome.
#[derive(Debug, Default)]
pub struct CalculatorForm {
    pub expression: String,
    pub result: Option<String>,
    /// Inline error shown under the display (bad syntax, division by zero).
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct PercentForm {
    pub mode: PercentMode,
    pub value_a: String,
    pub value_b: String,
    pub result: Option<String>,
}

#[derive(Debug)]
pub struct GstForm {
    pub amount: String,
    pub rate: f64,
    /// When set, the entered amount already includes GST (extraction mode).
    pub inclusive: bool,
    pub result: Option<GstBreakdown>,
}

impl Default for GstForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            rate: finance::DEFAULT_GST_RATE,
            inclusive: false,
            result: None,
        }
    }
}

/// EMI inputs are sliders, so the result is recomputed on every change
/// instead of waiting for a submit button.
#[derive(Debug)]
pub struct EmiForm {
    pub principal: f64,
    pub annual_rate: f64,
    pub tenure_months: u32,
    pub result: Option<EmiBreakdown>,
}

impl Default for EmiForm {
    fn default() -> Self {
        Self {
            principal: 1_000_000.0,
            annual_rate: 10.0,
            tenure_months: 60,
            result: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct AgeForm {
    pub birth_date: String,
    pub result: Option<AgeBreakdown>,
}

#[derive(Debug, Default)]
pub struct DateDiffForm {
    pub start_date: String,
    pub end_date: String,
    pub result: Option<DateSpan>,
}

#[derive(Debug, Default)]
pub struct ProfitLossForm {
    pub cost_price: String,
    pub selling_price: String,
    pub result: Option<ProfitLoss>,
}

/// Area calculator. `dim_a`/`dim_b` map to width/length, radius/unused,
/// or base/height depending on the selected shape.
#[derive(Debug, Default)]
pub struct AreaForm {
    pub shape: Shape,
    pub dim_a: String,
    pub dim_b: String,
    pub result: Option<f64>,
}

#[derive(Debug, Default)]
pub struct EcommerceForm {
    pub selling_price: String,
    pub product_cost: String,
    pub shipping_cost: String,
    pub fee_percent: String,
    pub tax_percent: String,
    pub result: Option<EcommerceProfit>,
}

#[derive(Debug, Default)]
pub struct EmailForm {
    pub first_name: String,
    pub last_name: String,
    pub extra: String,
    pub domain: String,
    pub include_numbers: bool,
    pub results: Vec<String>,
}

#[derive(Debug, Default)]
pub struct PasswordForm {
    pub options: PasswordOptions,
    pub output: Option<String>,
}

#[derive(Debug)]
pub struct QrForm {
    pub content: QrContent,
    pub data: String,
    pub size: u32,
    pub color: String,
    pub bg_color: String,
    /// Raw PNG bytes of the last generated code, kept for saving to disk.
    pub png: Option<Vec<u8>>,
    /// Decoded handle for on-screen display, built once per fetch.
    pub handle: Option<iced::widget::image::Handle>,
    pub fetching: bool,
}

impl Default for QrForm {
    fn default() -> Self {
        Self {
            content: QrContent::default(),
            data: String::new(),
            size: qr::DEFAULT_SIZE,
            color: "000000".to_string(),
            bg_color: "ffffff".to_string(),
            png: None,
            handle: None,
            fetching: false,
        }
    }
}

/// A file chosen through the native picker, with its on-disk size.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Debug, Default)]
pub struct ConverterForm {
    pub picked: Option<PickedFile>,
    pub format: OutputFormat,
    pub working: bool,
    /// File name of the finished conversion.
    pub converted: Option<String>,
}

#[derive(Debug)]
pub struct CompressorForm {
    pub picked: Option<PickedFile>,
    pub quality: u8,
    pub working: bool,
    pub stats: Option<CompressionStats>,
}

impl Default for CompressorForm {
    fn default() -> Self {
        Self {
            picked: None,
            quality: images::DEFAULT_QUALITY,
            working: false,
            stats: None,
        }
    }
}

/// Word counter keeps the editor buffer and the stats derived from it.
/// Stats are recomputed on every edit; `analyze` is linear in the text.
#[derive(Default)]
pub struct WordCountForm {
    pub content: iced::widget::text_editor::Content,
    pub stats: TextStats,
}
