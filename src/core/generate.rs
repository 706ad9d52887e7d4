//! Random generators: passwords and email-address suggestions.

use rand::Rng;

use super::error::{Error, Result};

pub const PASSWORD_LENGTH_RANGE: std::ops::RangeInclusive<u8> = 4..=30;
pub const DEFAULT_PASSWORD_LENGTH: u8 = 12;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// Domains offered by the email-suggestion picker.
pub const EMAIL_DOMAINS: &[&str] = &["gmail.com", "outlook.com", "yahoo.com"];

/// Which character classes a generated password draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: u8,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl PasswordOptions {
    fn charset(&self) -> String {
        let mut set = String::new();
        if self.uppercase {
            set.push_str(UPPERCASE);
        }
        if self.lowercase {
            set.push_str(LOWERCASE);
        }
        if self.digits {
            set.push_str(DIGITS);
        }
        if self.symbols {
            set.push_str(SYMBOLS);
        }
        set
    }
}

/// Generates a password by uniform draws from the enabled classes.
pub fn password(options: &PasswordOptions) -> Result<String> {
    if !PASSWORD_LENGTH_RANGE.contains(&options.length) {
        return Err(Error::validation(
            "length",
            format!(
                "must be between {} and {}",
                PASSWORD_LENGTH_RANGE.start(),
                PASSWORD_LENGTH_RANGE.end()
            ),
        ));
    }
    let charset: Vec<char> = options.charset().chars().collect();
    if charset.is_empty() {
        return Err(Error::validation(
            "character types",
            "select at least one character type",
        ));
    }

    let mut rng = rand::rng();
    Ok((0..options.length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect())
}

/// Password strength bands derived from the heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    #[strum(to_string = "Very Strong")]
    VeryStrong,
}

/// Scores a password: length milestones, character-class coverage, and
/// character diversity, 0-7.
pub fn strength_score(pwd: &str) -> u8 {
    let chars: Vec<char> = pwd.chars().collect();
    let mut score = 0u8;

    if chars.len() >= 8 {
        score += 1;
    }
    if chars.len() >= 12 {
        score += 1;
    }
    if chars.iter().any(char::is_ascii_uppercase) {
        score += 1;
    }
    if chars.iter().any(char::is_ascii_lowercase) {
        score += 1;
    }
    if chars.iter().any(char::is_ascii_digit) {
        score += 1;
    }
    if chars.iter().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let unique: std::collections::HashSet<char> = chars.iter().copied().collect();
    #[allow(clippy::cast_precision_loss)]
    if !chars.is_empty() && unique.len() as f64 > chars.len() as f64 * 0.6 {
        score += 1;
    }

    score
}

pub fn strength(pwd: &str) -> Strength {
    match strength_score(pwd) {
        7.. => Strength::VeryStrong,
        5..=6 => Strength::Strong,
        3..=4 => Strength::Moderate,
        _ => Strength::Weak,
    }
}

/// Inputs to the email-suggestion generator.
#[derive(Debug, Clone, Default)]
pub struct EmailInputs {
    pub first_name: String,
    pub last_name: String,
    pub extra: String,
    pub domain: String,
    pub include_numbers: bool,
}

fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn two_digit(rng: &mut impl Rng) -> u8 {
    rng.random_range(10..100)
}

/// Builds username suggestions from the normalized name parts: joined,
/// dotted, underscored, initial forms, swapped order, optional random
/// two-digit numbers, extra-token combos, and a current-year suffix.
/// Duplicates are dropped, first occurrence wins.
pub fn email_variations(inputs: &EmailInputs, current_year: i32) -> Result<Vec<String>> {
    let first = normalize(&inputs.first_name);
    let last = normalize(&inputs.last_name);
    let extra = normalize(&inputs.extra);
    if first.is_empty() && last.is_empty() {
        return Err(Error::validation(
            "name",
            "enter at least a first or last name",
        ));
    }

    let mut rng = rand::rng();
    let n1 = two_digit(&mut rng);
    let n2 = two_digit(&mut rng);
    let domain = &inputs.domain;
    let numbers = inputs.include_numbers;

    let mut emails: Vec<String> = Vec::new();
    let mut push = |local: String| emails.push(format!("{local}@{domain}"));

    if !first.is_empty() && !last.is_empty() {
        push(format!("{first}{last}"));
        push(format!("{first}.{last}"));
        push(format!("{first}_{last}"));
        if let Some(l0) = last.chars().next() {
            push(format!("{first}{l0}"));
        }
        if let Some(f0) = first.chars().next() {
            push(format!("{f0}{last}"));
        }
        if numbers {
            push(format!("{first}{last}{n1}"));
            push(format!("{first}.{last}{n2}"));
            push(format!("{first}{n1}{last}"));
            push(format!("{first}{n2}"));
        }
        push(format!("{last}{first}"));
        push(format!("{last}.{first}"));
        push(format!("{last}_{first}"));
        if numbers {
            push(format!("{last}{first}{n1}"));
            push(format!("{last}{n2}"));
        }
        if !extra.is_empty() {
            push(format!("{first}{last}{extra}"));
            push(format!("{first}.{last}.{extra}"));
            push(format!("{first}{extra}"));
            if numbers {
                push(format!("{first}{extra}{n1}"));
                push(format!("{first}{last}{n2}{extra}"));
            }
        }
    } else if !first.is_empty() {
        push(first.clone());
        if numbers {
            push(format!("{first}{n1}"));
            push(format!("{first}{n2}"));
            push(format!("{first}_{n1}"));
        }
        if !extra.is_empty() {
            push(format!("{first}{extra}"));
            push(format!("{first}.{extra}"));
            push(format!("{first}_{extra}"));
            if numbers {
                push(format!("{first}{extra}{n1}"));
                push(format!("{first}{n2}.{extra}"));
            }
        }
    } else {
        push(last.clone());
        if numbers {
            push(format!("{last}{n1}"));
            push(format!("{last}{n2}"));
        }
        if !extra.is_empty() {
            push(format!("{last}{extra}"));
            push(format!("{last}.{extra}"));
            push(format!("{last}_{extra}"));
            if numbers {
                push(format!("{last}{extra}{n1}"));
                push(format!("{last}{n2}{extra}"));
            }
        }
    }

    // Year suffixes only for name parts that actually exist, so a blank
    // first name never produces a bare "2025@domain".
    if !first.is_empty() || !last.is_empty() {
        push(format!("{first}{last}{current_year}"));
    }
    if !first.is_empty() {
        push(format!("{first}{current_year}"));
    }

    let mut seen = std::collections::HashSet::new();
    emails.retain(|e| seen.insert(e.clone()));
    Ok(emails)
}
