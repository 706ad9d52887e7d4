//! Integration tests for Handy
//!
//! These exercise the public library surface the way the GUI handlers and
//! the CLI do: catalog lookups, tool math end to end, and input parsing.

#![allow(clippy::uninlined_format_args)]

use handy::core::{catalog, dates, expr, finance, generate, geometry, images, qr, text};
use handy::validators;
use chrono::NaiveDate;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn catalog_ids_resolve_back_to_themselves() {
    for tool in catalog::TOOLS {
        let found = catalog::find_tool(tool.id).expect("tool must be findable by id");
        assert_eq!(found.name, tool.name);
    }
}

#[test]
fn catalog_covers_every_category() {
    use catalog::ToolCategory::{Calculators, Dates, Finance, Generators, Media, Text};
    for category in [Calculators, Finance, Dates, Generators, Media, Text] {
        assert!(
            catalog::TOOLS.iter().any(|t| t.category == category),
            "no tool in {category:?}"
        );
    }
}

#[test]
fn calculator_full_expression_flow() {
    // As typed from the keypad, including precedence and parens.
    assert_eq!(expr::format_value(expr::evaluate("2+3*4").unwrap()), "14");
    assert_eq!(expr::format_value(expr::evaluate("(2+3)*4").unwrap()), "20");
    assert_eq!(expr::format_value(expr::evaluate("10/4").unwrap()), "2.5");
    assert!(expr::evaluate("1/0").is_err());
    assert!(expr::evaluate("2+*3").is_err());
}

#[test]
fn emi_matches_closed_form() {
    // 10L at 10% for 60 months: r = 0.10/12, standard annuity formula.
    let breakdown = finance::emi(1_000_000.0, 10.0, 60).unwrap();
    let r: f64 = 0.10 / 12.0;
    let expected = 1_000_000.0 * r * (1.0 + r).powi(60) / ((1.0 + r).powi(60) - 1.0);
    assert!((breakdown.emi - expected).abs() < 1.0);
    assert!((breakdown.total_payment - breakdown.emi * 60.0).abs() < 1.0);
    assert!(
        (breakdown.total_interest - (breakdown.total_payment - 1_000_000.0)).abs() < 1.0
    );
}

#[test]
fn gst_add_then_remove_is_consistent() {
    let added = finance::gst_add(1000.0, 18.0).unwrap();
    assert!((added.total - 1180.0).abs() < 1e-9);

    let removed = finance::gst_remove(added.total, 18.0).unwrap();
    assert!((removed.net - 1000.0).abs() < 1e-6);
    assert!((removed.gst - added.gst).abs() < 1e-6);
}

#[test]
fn profit_loss_end_to_end() {
    let profit = finance::profit_loss(100.0, 150.0).unwrap();
    assert!(profit.is_profit);
    assert!((profit.amount - 50.0).abs() < 1e-9);
    assert!((profit.percent - 50.0).abs() < 1e-9);

    let loss = finance::profit_loss(200.0, 150.0).unwrap();
    assert!(!loss.is_profit);
    assert!((loss.amount - 50.0).abs() < 1e-9);
}

#[test]
fn ecommerce_profit_accounts_for_every_cost() {
    let result = finance::ecommerce_profit(1000.0, 400.0, 50.0, 10.0, 18.0).unwrap();
    assert!((result.marketplace_fee - 100.0).abs() < 1e-9);
    assert!((result.tax - 180.0).abs() < 1e-9);
    assert!((result.total_cost - 730.0).abs() < 1e-9);
    assert!((result.profit - 270.0).abs() < 1e-9);
    assert!((result.margin_percent - 27.0).abs() < 1e-9);
}

#[test]
fn format_inr_groups_indian_style() {
    assert_eq!(finance::format_inr(1_234_567.0), "₹12,34,567.00");
    assert_eq!(finance::format_inr(999.5), "₹999.50");
}

#[test]
fn age_breakdown_on_known_dates() {
    let breakdown = dates::age_on(date(1990, 6, 15), date(2024, 6, 14)).unwrap();
    assert_eq!(breakdown.years, 33);
    assert_eq!(breakdown.months, 11);
    assert!(breakdown.is_adult);
    assert_eq!(breakdown.next_birthday, date(2024, 6, 15));
    assert_eq!(breakdown.days_to_birthday, 1);
}

#[test]
fn date_difference_units_agree() {
    let span = dates::date_difference(date(2023, 1, 1), date(2024, 1, 1)).unwrap();
    assert_eq!(span.days, 365);
    assert_eq!(span.weeks, 52);
    assert_eq!(span.hours, 365 * 24);
    assert_eq!(span.years, 1);
}

#[test]
fn geometry_areas() {
    assert!((geometry::rectangle_area(3.0, 4.0).unwrap() - 12.0).abs() < 1e-9);
    assert!(
        (geometry::circle_area(2.0).unwrap() - 4.0 * std::f64::consts::PI).abs() < 1e-9
    );
    assert!((geometry::triangle_area(6.0, 4.0).unwrap() - 12.0).abs() < 1e-9);
    assert!(geometry::circle_area(0.0).is_err());
}

#[test]
fn word_counter_stats() {
    let stats = text::analyze("Hello world. This is a test!\n\nSecond paragraph here.");
    assert_eq!(stats.words, 9);
    assert_eq!(stats.sentences, 3);
    assert_eq!(stats.paragraphs, 2);
}

#[test]
fn email_variations_respect_domain() {
    let inputs = generate::EmailInputs {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        extra: String::new(),
        domain: "outlook.com".to_string(),
        include_numbers: false,
    };
    let results = generate::email_variations(&inputs, 2026).unwrap();
    assert!(!results.is_empty());
    for address in &results {
        assert!(address.ends_with("@outlook.com"), "bad address: {address}");
        let local = address.split('@').next().unwrap();
        assert!(local
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '_'));
    }
}

#[test]
fn qr_request_builds_api_url() {
    let request = qr::QrRequest::new(qr::QrContent::Url, "example.com", 250, "000000", "ffffff")
        .unwrap();
    let url = request.image_url().unwrap();
    assert_eq!(url.host_str(), Some("api.qrserver.com"));
    let query = url.query().unwrap_or_default();
    assert!(query.contains("250x250"));
}

#[test]
fn qr_rejects_bad_inputs() {
    assert!(qr::QrRequest::new(qr::QrContent::Text, "", 200, "000000", "ffffff").is_err());
    assert!(qr::QrRequest::new(qr::QrContent::Text, "hi", 200, "red", "ffffff").is_err());
    assert!(qr::QrRequest::new(qr::QrContent::Text, "hi", 9999, "000000", "ffffff").is_err());
}

#[test]
fn image_pipeline_validates_then_estimates() {
    let path = std::path::Path::new("photo.jpg");
    images::validate_input(path, 1_000_000).unwrap();

    let stats = images::estimate_compression(1_000_000, 50).unwrap();
    assert!(stats.compressed_size < 1_000_000);
    assert!(stats.savings_percent > 0.0);

    assert_eq!(
        images::converted_name(path, images::OutputFormat::Png),
        "photo.png"
    );
}

#[test]
fn validators_parse_shared_formats() {
    assert!(validators::parse_positive("amount", "12.5").is_ok());
    assert!(validators::parse_positive("amount", "-1").is_err());
    assert!(validators::parse_positive("amount", "abc").is_err());
    assert!(validators::parse_date("date", "2024-02-29").is_ok());
    assert!(validators::parse_date("date", "2023-02-29").is_err());
}

proptest! {
    #[test]
    fn password_always_matches_requested_length(length in 4u8..=30) {
        let options = generate::PasswordOptions {
            length,
            ..Default::default()
        };
        let pwd = generate::password(&options).unwrap();
        prop_assert_eq!(pwd.chars().count(), usize::from(length));
    }

    #[test]
    fn password_draws_only_from_enabled_classes(length in 8u8..=30) {
        let options = generate::PasswordOptions {
            length,
            uppercase: false,
            lowercase: true,
            digits: true,
            symbols: false,
        };
        let pwd = generate::password(&options).unwrap();
        prop_assert!(pwd
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn gst_remove_inverts_gst_add(amount in 1.0f64..1e7, rate_idx in 1usize..6) {
        let rate = finance::GST_RATES[rate_idx];
        let added = finance::gst_add(amount, rate).unwrap();
        let removed = finance::gst_remove(added.total, rate).unwrap();
        prop_assert!((removed.net - amount).abs() < 1e-4);
    }

    #[test]
    fn date_difference_never_negative(offset in 0i64..20_000) {
        let start = date(1970, 1, 1);
        let end = start + chrono::Duration::days(offset);
        let span = dates::date_difference(start, end).unwrap();
        prop_assert!(span.days >= 0);
        prop_assert_eq!(span.days, offset);
    }
}
