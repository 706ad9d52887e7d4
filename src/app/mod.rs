//! Application state and event handling.
//!
//! The GUI follows the Elm architecture: [`State`] owns everything, every
//! interaction is a [`Message`], and `update` dispatches to the handler
//! modules which mutate state and return follow-up [`Task`]s.

pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod ui_components;
pub mod view;

use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::widget::text_editor;
use iced::{Element, Subscription, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::core::catalog::{self, ToolInfo};
use crate::core::finance::PercentMode;
use crate::core::geometry::Shape;
use crate::core::images::{CompressionStats, OutputFormat};
use crate::core::qr::QrContent;
use crate::theme::{AppTheme, ThemeChoice};

use forms::{
    AgeForm, AreaForm, CalculatorForm, CompressorForm, ConverterForm, DateDiffForm, EcommerceForm,
    EmailForm, EmiForm, GstForm, PasswordForm, PercentForm, ProfitLossForm, QrForm, WordCountForm,
};

/// Which screen fills the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Settings,
    Tool(&'static ToolInfo),
}

/// Transient notification shown at the top-right of the window.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub severity: BannerSeverity,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSeverity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub enum Message {
    // === Navigation & chrome ===
    ToolSelected(&'static str),
    GoHome,
    OpenSettings,
    ToolSearchChanged(String),
    ThemeSelected(ThemeChoice),
    DismissBanner(usize),
    PruneBanners,
    ConfigSaved(Option<String>),
    CopyText(String),
    EventOccurred(iced::Event),

    // === Calculator ===
    CalcInput(char),
    CalcExpressionChanged(String),
    CalcEvaluate,
    CalcClear,
    CalcBackspace,

    // === Percentage ===
    PercentModeSelected(PercentMode),
    PercentValueAChanged(String),
    PercentValueBChanged(String),
    PercentCompute,

    // === GST ===
    GstAmountChanged(String),
    GstRateSelected(f64),
    GstInclusiveToggled(bool),
    GstCompute,

    // === EMI ===
    EmiPrincipalChanged(f64),
    EmiRateChanged(f64),
    EmiTenureChanged(u32),

    // === Profit / loss ===
    PlCostChanged(String),
    PlSellingChanged(String),
    PlCompute,

    // === E-commerce profit ===
    EcomSellingChanged(String),
    EcomCostChanged(String),
    EcomShippingChanged(String),
    EcomFeeChanged(String),
    EcomTaxChanged(String),
    EcomCompute,

    // === Area ===
    AreaShapeSelected(Shape),
    AreaDimAChanged(String),
    AreaDimBChanged(String),
    AreaCompute,

    // === Age ===
    AgeBirthDateChanged(String),
    AgeCompute,

    // === Date difference ===
    DiffStartChanged(String),
    DiffEndChanged(String),
    DiffCompute,

    // === Email variations ===
    EmailFirstChanged(String),
    EmailLastChanged(String),
    EmailExtraChanged(String),
    EmailDomainSelected(String),
    EmailNumbersToggled(bool),
    EmailGenerate,

    // === Password ===
    PasswordLengthChanged(u8),
    PasswordUppercaseToggled(bool),
    PasswordLowercaseToggled(bool),
    PasswordDigitsToggled(bool),
    PasswordSymbolsToggled(bool),
    PasswordGenerate,

    // === QR code ===
    QrContentSelected(QrContent),
    QrDataChanged(String),
    QrSizeChanged(u32),
    QrColorChanged(String),
    QrBgColorChanged(String),
    QrGenerate,
    QrFetched(Result<Vec<u8>, String>),
    QrSavePressed,
    QrSaveLocationPicked(Option<PathBuf>),
    QrSaved(Option<String>),

    // === Image converter ===
    ConvertPickFile,
    ConvertFilePicked(Option<(PathBuf, u64)>),
    ConvertFormatSelected(OutputFormat),
    ConvertPressed,
    ConvertFinished,

    // === Image compressor ===
    CompressPickFile,
    CompressFilePicked(Option<(PathBuf, u64)>),
    CompressQualityChanged(u8),
    CompressPressed,
    CompressFinished(CompressionStats),

    // === Word counter ===
    WordEditorAction(text_editor::Action),
    WordClear,
}

pub struct State {
    pub screen: Screen,
    pub theme: AppTheme,
    pub theme_choice: ThemeChoice,
    pub config: AppConfig,
    pub tool_search: String,
    pub banners: Vec<Banner>,

    pub calculator: CalculatorForm,
    pub percent: PercentForm,
    pub gst: GstForm,
    pub emi: EmiForm,
    pub age: AgeForm,
    pub date_diff: DateDiffForm,
    pub profit_loss: ProfitLossForm,
    pub area: AreaForm,
    pub ecommerce: EcommerceForm,
    pub email: EmailForm,
    pub password: PasswordForm,
    pub qr: QrForm,
    pub converter: ConverterForm,
    pub compressor: CompressorForm,
    pub word_count: WordCountForm,
}

impl State {
    pub fn new() -> (Self, Task<Message>) {
        let config = crate::config::load_config_blocking();
        let theme_choice = config.theme_choice;

        let screen = config
            .last_tool
            .as_deref()
            .and_then(catalog::find_tool)
            .map_or(Screen::Home, Screen::Tool);

        let password = PasswordForm {
            options: crate::core::generate::PasswordOptions {
                length: config.password_length,
                uppercase: config.password_uppercase,
                lowercase: config.password_lowercase,
                digits: config.password_digits,
                symbols: config.password_symbols,
            },
            output: None,
        };

        let email = EmailForm {
            domain: config.email_domain.clone(),
            ..EmailForm::default()
        };

        let state = Self {
            screen,
            theme: theme_choice.to_theme(),
            theme_choice,
            config,
            tool_search: String::new(),
            banners: Vec::new(),
            calculator: CalculatorForm::default(),
            percent: PercentForm::default(),
            gst: GstForm::default(),
            emi: EmiForm::default(),
            age: AgeForm::default(),
            date_diff: DateDiffForm::default(),
            profit_loss: ProfitLossForm::default(),
            area: AreaForm::default(),
            ecommerce: EcommerceForm::default(),
            email,
            password,
            qr: QrForm::default(),
            converter: ConverterForm::default(),
            compressor: CompressorForm::default(),
            word_count: WordCountForm::default(),
        };

        (state, Task::none())
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![iced::event::listen().map(Message::EventOccurred)];

        // Only tick while there is something to expire.
        if !self.banners.is_empty() {
            subs.push(iced::time::every(Duration::from_secs(1)).map(|_| Message::PruneBanners));
        }

        Subscription::batch(subs)
    }

    /// The tool currently open, if any.
    pub fn active_tool(&self) -> Option<&'static ToolInfo> {
        match self.screen {
            Screen::Tool(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn push_banner(
        &mut self,
        message: impl Into<String>,
        severity: BannerSeverity,
        seconds: u64,
    ) {
        self.banners.push(Banner {
            message: message.into(),
            severity,
            expires_at: Instant::now() + Duration::from_secs(seconds),
        });
    }

    pub fn prune_expired_banners(&mut self) {
        let now = Instant::now();
        self.banners.retain(|b| b.expires_at > now);
    }

    #[allow(clippy::too_many_lines)]
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Navigation & chrome
            Message::ToolSelected(id) => handlers::handle_tool_selected(self, id),
            Message::GoHome => handlers::handle_go_home(self),
            Message::OpenSettings => handlers::handle_open_settings(self),
            Message::ToolSearchChanged(query) => handlers::handle_tool_search_changed(self, query),
            Message::ThemeSelected(choice) => handlers::handle_theme_selected(self, choice),
            Message::DismissBanner(index) => handlers::handle_dismiss_banner(self, index),
            Message::PruneBanners => handlers::handle_prune_banners(self),
            Message::ConfigSaved(error) => handlers::handle_config_saved(self, error),
            Message::CopyText(text) => handlers::handle_copy_text(self, text),
            Message::EventOccurred(event) => handlers::handle_event(self, &event),

            // Calculator
            Message::CalcInput(ch) => handlers::handle_calc_input(self, ch),
            Message::CalcExpressionChanged(expr) => {
                handlers::handle_calc_expression_changed(self, expr)
            }
            Message::CalcEvaluate => handlers::handle_calc_evaluate(self),
            Message::CalcClear => handlers::handle_calc_clear(self),
            Message::CalcBackspace => handlers::handle_calc_backspace(self),

            // Percentage
            Message::PercentModeSelected(mode) => {
                handlers::handle_percent_mode_selected(self, mode)
            }
            Message::PercentValueAChanged(v) => handlers::handle_percent_value_a_changed(self, v),
            Message::PercentValueBChanged(v) => handlers::handle_percent_value_b_changed(self, v),
            Message::PercentCompute => handlers::handle_percent_compute(self),

            // GST
            Message::GstAmountChanged(v) => handlers::handle_gst_amount_changed(self, v),
            Message::GstRateSelected(rate) => handlers::handle_gst_rate_selected(self, rate),
            Message::GstInclusiveToggled(on) => handlers::handle_gst_inclusive_toggled(self, on),
            Message::GstCompute => handlers::handle_gst_compute(self),

            // EMI
            Message::EmiPrincipalChanged(v) => handlers::handle_emi_principal_changed(self, v),
            Message::EmiRateChanged(v) => handlers::handle_emi_rate_changed(self, v),
            Message::EmiTenureChanged(v) => handlers::handle_emi_tenure_changed(self, v),

            // Profit / loss
            Message::PlCostChanged(v) => handlers::handle_pl_cost_changed(self, v),
            Message::PlSellingChanged(v) => handlers::handle_pl_selling_changed(self, v),
            Message::PlCompute => handlers::handle_pl_compute(self),

            // E-commerce profit
            Message::EcomSellingChanged(v) => handlers::handle_ecom_selling_changed(self, v),
            Message::EcomCostChanged(v) => handlers::handle_ecom_cost_changed(self, v),
            Message::EcomShippingChanged(v) => handlers::handle_ecom_shipping_changed(self, v),
            Message::EcomFeeChanged(v) => handlers::handle_ecom_fee_changed(self, v),
            Message::EcomTaxChanged(v) => handlers::handle_ecom_tax_changed(self, v),
            Message::EcomCompute => handlers::handle_ecom_compute(self),

            // Area
            Message::AreaShapeSelected(shape) => handlers::handle_area_shape_selected(self, shape),
            Message::AreaDimAChanged(v) => handlers::handle_area_dim_a_changed(self, v),
            Message::AreaDimBChanged(v) => handlers::handle_area_dim_b_changed(self, v),
            Message::AreaCompute => handlers::handle_area_compute(self),

            // Age
            Message::AgeBirthDateChanged(v) => handlers::handle_age_birth_date_changed(self, v),
            Message::AgeCompute => handlers::handle_age_compute(self),

            // Date difference
            Message::DiffStartChanged(v) => handlers::handle_diff_start_changed(self, v),
            Message::DiffEndChanged(v) => handlers::handle_diff_end_changed(self, v),
            Message::DiffCompute => handlers::handle_diff_compute(self),

            // Email variations
            Message::EmailFirstChanged(v) => handlers::handle_email_first_changed(self, v),
            Message::EmailLastChanged(v) => handlers::handle_email_last_changed(self, v),
            Message::EmailExtraChanged(v) => handlers::handle_email_extra_changed(self, v),
            Message::EmailDomainSelected(domain) => {
                handlers::handle_email_domain_selected(self, domain)
            }
            Message::EmailNumbersToggled(on) => handlers::handle_email_numbers_toggled(self, on),
            Message::EmailGenerate => handlers::handle_email_generate(self),

            // Password
            Message::PasswordLengthChanged(len) => {
                handlers::handle_password_length_changed(self, len)
            }
            Message::PasswordUppercaseToggled(on) => {
                handlers::handle_password_class_toggled(self, handlers::PasswordClass::Upper, on)
            }
            Message::PasswordLowercaseToggled(on) => {
                handlers::handle_password_class_toggled(self, handlers::PasswordClass::Lower, on)
            }
            Message::PasswordDigitsToggled(on) => {
                handlers::handle_password_class_toggled(self, handlers::PasswordClass::Digits, on)
            }
            Message::PasswordSymbolsToggled(on) => {
                handlers::handle_password_class_toggled(self, handlers::PasswordClass::Symbols, on)
            }
            Message::PasswordGenerate => handlers::handle_password_generate(self),

            // QR code
            Message::QrContentSelected(content) => {
                handlers::handle_qr_content_selected(self, content)
            }
            Message::QrDataChanged(v) => handlers::handle_qr_data_changed(self, v),
            Message::QrSizeChanged(size) => handlers::handle_qr_size_changed(self, size),
            Message::QrColorChanged(v) => handlers::handle_qr_color_changed(self, v),
            Message::QrBgColorChanged(v) => handlers::handle_qr_bg_color_changed(self, v),
            Message::QrGenerate => handlers::handle_qr_generate(self),
            Message::QrFetched(result) => handlers::handle_qr_fetched(self, result),
            Message::QrSavePressed => handlers::handle_qr_save_pressed(self),
            Message::QrSaveLocationPicked(path) => {
                handlers::handle_qr_save_location_picked(self, path)
            }
            Message::QrSaved(error) => handlers::handle_qr_saved(self, error),

            // Image converter
            Message::ConvertPickFile => handlers::handle_convert_pick_file(self),
            Message::ConvertFilePicked(picked) => {
                handlers::handle_convert_file_picked(self, picked)
            }
            Message::ConvertFormatSelected(format) => {
                handlers::handle_convert_format_selected(self, format)
            }
            Message::ConvertPressed => handlers::handle_convert_pressed(self),
            Message::ConvertFinished => handlers::handle_convert_finished(self),

            // Image compressor
            Message::CompressPickFile => handlers::handle_compress_pick_file(self),
            Message::CompressFilePicked(picked) => {
                handlers::handle_compress_file_picked(self, picked)
            }
            Message::CompressQualityChanged(q) => {
                handlers::handle_compress_quality_changed(self, q)
            }
            Message::CompressPressed => handlers::handle_compress_pressed(self),
            Message::CompressFinished(stats) => handlers::handle_compress_finished(self, stats),

            // Word counter
            Message::WordEditorAction(action) => handlers::handle_word_editor_action(self, action),
            Message::WordClear => handlers::handle_word_clear(self),
        }
    }
}

/// Maps a raw window event to app behavior. Escape backs out to the home
/// screen; while the calculator is open the keyboard doubles as a keypad.
pub(crate) fn map_key_event(state: &State, event: &iced::Event) -> Option<Message> {
    let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };

    match key.as_ref() {
        Key::Named(Named::Escape) if state.screen != Screen::Home => Some(Message::GoHome),
        _ if state.active_tool().map(|t| t.id) == Some("calculator") => match key.as_ref() {
            Key::Named(Named::Enter) => Some(Message::CalcEvaluate),
            Key::Named(Named::Backspace) => Some(Message::CalcBackspace),
            Key::Character(c) => {
                let ch = c.chars().next()?;
                if ch.is_ascii_digit() || "+-*/().".contains(ch) {
                    Some(Message::CalcInput(ch))
                } else {
                    None
                }
            }
            _ => None,
        },
        _ => None,
    }
}

/// Persists the current config in the background. Failures surface as a
/// banner through [`Message::ConfigSaved`].
pub(crate) fn save_config_task(state: &State) -> Task<Message> {
    let config = state.config.clone();
    Task::perform(
        async move {
            crate::config::save_config(&config)
                .await
                .err()
                .map(|e| e.to_string())
        },
        Message::ConfigSaved,
    )
}
