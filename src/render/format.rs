//! Display formatting for record values.
//!
//! Absent values always render as [`PLACEHOLDER`]. Worth fields are in
//! thousand-units of a billion (`1_000_000` is `$1000.0 Billion`), GDP in
//! base currency units.

pub const PLACEHOLDER: &str = "N/A";

const WORTH_PER_BILLION: f64 = 1_000.0;
const UNITS_PER_TRILLION: f64 = 1_000_000_000_000.0;

/// Text value, or the placeholder when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Whole numbers print without decimals, anything else as given.
pub fn number(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// `number` followed by a unit, e.g. `78.9 years`.
pub fn number_with_unit(value: Option<f64>, unit: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(_) => format!("{} {}", number(value), unit),
        None => PLACEHOLDER.to_string(),
    }
}

/// Percentage as sent by the service, e.g. `36.6%`.
pub fn percent(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(_) => format!("{}%", number(value)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Fixed one-decimal value, e.g. an average age.
pub fn one_decimal(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.1}", v),
        None => PLACEHOLDER.to_string(),
    }
}

fn billions(worth: f64) -> String {
    format!("{:.1}", worth / WORTH_PER_BILLION)
}

/// `$1000.0 Billion`
pub fn worth_long(worth: Option<f64>) -> String {
    match worth.filter(|v| v.is_finite()) {
        Some(v) => format!("${} Billion", billions(v)),
        None => PLACEHOLDER.to_string(),
    }
}

/// `$5.0B`
pub fn worth_short(worth: Option<f64>) -> String {
    match worth.filter(|v| v.is_finite()) {
        Some(v) => format!("${}B", billions(v)),
        None => PLACEHOLDER.to_string(),
    }
}

/// `$21.43T`. A GDP of zero is treated as unknown.
pub fn trillions(gdp: Option<f64>) -> String {
    match gdp.filter(|v| v.is_finite() && *v != 0.0) {
        Some(v) => format!("${:.2}T", v / UNITS_PER_TRILLION),
        None => PLACEHOLDER.to_string(),
    }
}

/// Rounded integer with thousands separators, e.g. `1,000,000`.
pub fn grouped(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => group_digits(v.round() as i64),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn yes_no(flag: Option<bool>) -> String {
    match flag {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => PLACEHOLDER.to_string(),
    }
}
