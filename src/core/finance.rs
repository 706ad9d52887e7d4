//! Money math behind the percentage, GST, EMI, profit/loss, and e-commerce
//! tools. Every function validates its scalars and returns a display-ready
//! record; nothing here touches widget state.

use serde::Serialize;

use super::error::{Error, Result};

/// GST slab rates offered by the rate picker, in percent.
pub const GST_RATES: &[f64] = &[0.0, 3.0, 5.0, 12.0, 18.0, 28.0];

/// Default GST rate (percent).
pub const DEFAULT_GST_RATE: f64 = 18.0;

/// EMI input ranges (mirroring the slider bounds).
pub const PRINCIPAL_RANGE: std::ops::RangeInclusive<f64> = 10_000.0..=10_000_000.0;
pub const RATE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=30.0;
pub const TENURE_RANGE: std::ops::RangeInclusive<u32> = 6..=360;

/// The three percentage-tool modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum PercentMode {
    /// "What is P% of V?"
    #[default]
    #[strum(to_string = "% of a value")]
    PercentOf,
    /// "X is what % of Y?"
    #[strum(to_string = "X is what % of Y")]
    WhatPercent,
    /// "V is P% of what?"
    #[strum(to_string = "reverse %")]
    ReversePercent,
}

/// Computes `percent% of value`.
pub fn percent_of(percent: f64, value: f64) -> f64 {
    value * percent / 100.0
}

/// Computes what percent `part` is of `total`. Zero totals are rejected.
pub fn what_percent(part: f64, total: f64) -> Result<f64> {
    if total == 0.0 {
        return Err(Error::validation("total", "cannot be zero"));
    }
    Ok(part / total * 100.0)
}

/// Computes the base value of which `value` is `percent%`.
pub fn reverse_percent(value: f64, percent: f64) -> Result<f64> {
    if percent == 0.0 {
        return Err(Error::validation("percentage", "cannot be zero"));
    }
    Ok(value / percent * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GstBreakdown {
    /// Amount excluding tax.
    pub net: f64,
    /// Tax portion.
    pub gst: f64,
    /// Amount including tax.
    pub total: f64,
}

/// Adds GST at `rate` percent on top of a tax-exclusive `amount`.
pub fn gst_add(amount: f64, rate: f64) -> Result<GstBreakdown> {
    check_gst_inputs(amount, rate)?;
    let gst = amount * rate / 100.0;
    Ok(GstBreakdown {
        net: amount,
        gst,
        total: amount + gst,
    })
}

/// Extracts GST at `rate` percent from a tax-inclusive `amount`.
pub fn gst_remove(amount: f64, rate: f64) -> Result<GstBreakdown> {
    check_gst_inputs(amount, rate)?;
    let net = amount / (1.0 + rate / 100.0);
    Ok(GstBreakdown {
        net,
        gst: amount - net,
        total: amount,
    })
}

fn check_gst_inputs(amount: f64, rate: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::validation("amount", "must be greater than zero"));
    }
    if !(0.0..=100.0).contains(&rate) {
        return Err(Error::validation("rate", "must be between 0 and 100"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmiBreakdown {
    /// Fixed monthly installment.
    pub emi: f64,
    /// Installment times tenure.
    pub total_payment: f64,
    /// Total payment minus principal.
    pub total_interest: f64,
    pub principal: f64,
    pub tenure_months: u32,
}

impl EmiBreakdown {
    /// Principal share of the total payment, in [0, 1]. Drives the
    /// principal/interest split bar.
    pub fn principal_fraction(&self) -> f32 {
        if self.total_payment <= 0.0 {
            return 0.0;
        }
        #[allow(clippy::cast_possible_truncation)]
        let f = (self.principal / self.total_payment) as f32;
        f.clamp(0.0, 1.0)
    }
}

/// Standard annuity installment: `E = P·r·(1+r)^n / ((1+r)^n − 1)` with the
/// monthly rate derived from the annual percentage.
pub fn emi(principal: f64, annual_rate_percent: f64, tenure_months: u32) -> Result<EmiBreakdown> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(Error::validation("principal", "must be greater than zero"));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent <= 0.0 {
        return Err(Error::validation("interest rate", "must be greater than zero"));
    }
    if tenure_months == 0 {
        return Err(Error::validation("tenure", "must be at least one month"));
    }

    let r = annual_rate_percent / 12.0 / 100.0;
    let n = f64::from(tenure_months);
    let factor = (1.0 + r).powf(n);
    let emi = principal * r * factor / (factor - 1.0);
    let total_payment = emi * n;

    Ok(EmiBreakdown {
        emi,
        total_payment,
        total_interest: total_payment - principal,
        principal,
        tenure_months,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitLoss {
    /// Absolute difference between selling and cost price.
    pub amount: f64,
    /// Difference relative to cost price, in percent.
    pub percent: f64,
    pub is_profit: bool,
}

impl ProfitLoss {
    pub fn advisory(&self) -> &'static str {
        if self.amount == 0.0 {
            "Break-even: you sold at exactly the cost price."
        } else if self.is_profit {
            "You made a profit on this sale."
        } else {
            "You made a loss on this sale."
        }
    }
}

/// Profit or loss from cost and selling price. Cost must be positive.
pub fn profit_loss(cost_price: f64, selling_price: f64) -> Result<ProfitLoss> {
    if !cost_price.is_finite() || cost_price <= 0.0 {
        return Err(Error::validation("cost price", "must be greater than zero"));
    }
    if !selling_price.is_finite() || selling_price < 0.0 {
        return Err(Error::validation("selling price", "cannot be negative"));
    }

    let diff = selling_price - cost_price;
    Ok(ProfitLoss {
        amount: diff.abs(),
        percent: diff.abs() / cost_price * 100.0,
        is_profit: diff >= 0.0,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EcommerceProfit {
    pub revenue: f64,
    pub marketplace_fee: f64,
    pub tax: f64,
    pub total_cost: f64,
    pub profit: f64,
    /// Profit as a fraction of revenue, in percent.
    pub margin_percent: f64,
    /// Profit as a fraction of total cost, in percent.
    pub roi_percent: f64,
}

impl EcommerceProfit {
    pub fn advisory(&self) -> &'static str {
        if self.profit < 0.0 {
            "Selling at a loss. Raise the price or cut costs."
        } else if self.margin_percent < 10.0 {
            "Thin margin. Small fee changes can wipe out the profit."
        } else if self.margin_percent < 25.0 {
            "Healthy margin for most marketplace categories."
        } else {
            "Excellent margin."
        }
    }
}

/// Net profit for a marketplace sale. Fee and tax percentages apply to the
/// selling price (revenue). All inputs must be non-negative and the selling
/// price positive.
pub fn ecommerce_profit(
    selling_price: f64,
    product_cost: f64,
    shipping_cost: f64,
    fee_percent: f64,
    tax_percent: f64,
) -> Result<EcommerceProfit> {
    if !selling_price.is_finite() || selling_price <= 0.0 {
        return Err(Error::validation("selling price", "must be greater than zero"));
    }
    for (name, v) in [
        ("product cost", product_cost),
        ("shipping cost", shipping_cost),
        ("marketplace fee", fee_percent),
        ("tax", tax_percent),
    ] {
        if !v.is_finite() || v < 0.0 {
            return Err(Error::validation(name, "cannot be negative"));
        }
    }

    let revenue = selling_price;
    let marketplace_fee = revenue * fee_percent / 100.0;
    let tax = revenue * tax_percent / 100.0;
    let total_cost = product_cost + shipping_cost + marketplace_fee + tax;
    let profit = revenue - total_cost;
    let roi_percent = if total_cost > 0.0 {
        profit / total_cost * 100.0
    } else {
        0.0
    };

    Ok(EcommerceProfit {
        revenue,
        marketplace_fee,
        tax,
        total_cost,
        profit,
        margin_percent: profit / revenue * 100.0,
        roi_percent,
    })
}

/// Formats an amount with Indian digit grouping and a rupee sign:
/// `1234567.5` → `₹12,34,567.50`. The last three integer digits form one
/// group, every pair above them another.
pub fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rounded.as_str(), "00"),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_percent_of() {
        assert!(close(percent_of(15.0, 200.0), 30.0));
        assert!(close(percent_of(0.0, 200.0), 0.0));
    }

    #[test]
    fn test_what_percent() {
        assert!(close(what_percent(30.0, 200.0).unwrap(), 15.0));
        assert!(what_percent(1.0, 0.0).is_err());
    }

    #[test]
    fn test_reverse_percent() {
        assert!(close(reverse_percent(30.0, 15.0).unwrap(), 200.0));
        assert!(reverse_percent(30.0, 0.0).is_err());
    }

    #[test]
    fn test_gst_add_default_rate() {
        let b = gst_add(1000.0, 18.0).unwrap();
        assert!(close(b.gst, 180.0));
        assert!(close(b.total, 1180.0));
        assert!(close(b.net, 1000.0));
    }

    #[test]
    fn test_gst_remove_inverts_add() {
        let added = gst_add(2500.0, 12.0).unwrap();
        let removed = gst_remove(added.total, 12.0).unwrap();
        assert!(close(removed.net, 2500.0));
        assert!(close(removed.gst, added.gst));
    }

    #[test]
    fn test_gst_rejects_bad_inputs() {
        assert!(gst_add(0.0, 18.0).is_err());
        assert!(gst_add(-5.0, 18.0).is_err());
        assert!(gst_add(100.0, 150.0).is_err());
    }

    #[test]
    fn test_emi_known_values() {
        // 10 lakh at 10% over 60 months is the tool's default scenario.
        let b = emi(1_000_000.0, 10.0, 60).unwrap();
        assert!((b.emi - 21_247.0).abs() < 1.0, "emi = {}", b.emi);
        assert!(close(b.total_payment, b.emi * 60.0));
        assert!(close(b.total_interest, b.total_payment - 1_000_000.0));
    }

    #[test]
    fn test_emi_rejects_non_positive() {
        assert!(emi(0.0, 10.0, 60).is_err());
        assert!(emi(100_000.0, 0.0, 60).is_err());
        assert!(emi(100_000.0, 10.0, 0).is_err());
    }

    #[test]
    fn test_emi_principal_fraction_bounds() {
        let b = emi(500_000.0, 12.0, 120).unwrap();
        let f = b.principal_fraction();
        assert!(f > 0.0 && f < 1.0);
    }

    #[test]
    fn test_profit_loss() {
        let p = profit_loss(100.0, 130.0).unwrap();
        assert!(p.is_profit);
        assert!(close(p.amount, 30.0));
        assert!(close(p.percent, 30.0));

        let l = profit_loss(200.0, 150.0).unwrap();
        assert!(!l.is_profit);
        assert!(close(l.amount, 50.0));
        assert!(close(l.percent, 25.0));
    }

    #[test]
    fn test_profit_loss_break_even() {
        let b = profit_loss(100.0, 100.0).unwrap();
        assert!(close(b.amount, 0.0));
        assert!(b.advisory().contains("Break-even"));
    }

    #[test]
    fn test_profit_loss_requires_positive_cost() {
        assert!(profit_loss(0.0, 50.0).is_err());
        assert!(profit_loss(-10.0, 50.0).is_err());
    }

    #[test]
    fn test_ecommerce_profit() {
        let e = ecommerce_profit(1000.0, 400.0, 50.0, 10.0, 5.0).unwrap();
        assert!(close(e.marketplace_fee, 100.0));
        assert!(close(e.tax, 50.0));
        assert!(close(e.total_cost, 600.0));
        assert!(close(e.profit, 400.0));
        assert!(close(e.margin_percent, 40.0));
        assert!(close(e.roi_percent, 400.0 / 600.0 * 100.0));
    }

    #[test]
    fn test_ecommerce_rejects_negative() {
        assert!(ecommerce_profit(1000.0, -1.0, 0.0, 0.0, 0.0).is_err());
        assert!(ecommerce_profit(0.0, 0.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(100_000.0), "₹1,00,000.00");
        assert_eq!(format_inr(1_234_567.5), "₹12,34,567.50");
        assert_eq!(format_inr(-21_247.04), "-₹21,247.04");
    }

    proptest! {
        #[test]
        fn prop_percent_round_trip(value in 0.01f64..1e9, percent in 0.01f64..1000.0) {
            let part = percent_of(percent, value);
            let back = what_percent(part, value).unwrap();
            prop_assert!((back - percent).abs() < 1e-6 * percent.max(1.0));
        }

        #[test]
        fn prop_gst_remove_inverts_add(amount in 0.01f64..1e9, idx in 1usize..6) {
            let rate = GST_RATES[idx];
            let added = gst_add(amount, rate).unwrap();
            let removed = gst_remove(added.total, rate).unwrap();
            prop_assert!((removed.net - amount).abs() < 1e-6 * amount.max(1.0));
        }

        #[test]
        fn prop_emi_total_exceeds_principal(
            principal in 10_000.0f64..10_000_000.0,
            rate in 1.0f64..30.0,
            months in 6u32..360,
        ) {
            let b = emi(principal, rate, months).unwrap();
            prop_assert!(b.emi > 0.0);
            prop_assert!(b.total_payment > principal);
            prop_assert!(b.total_interest > 0.0);
        }
    }
}
