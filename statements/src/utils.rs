use crate::error::ParseError;
use crate::model::{Amount, Currency};
use chrono::NaiveDate;

pub(crate) fn parse_currency(raw: &str) -> Currency {
    let s = raw.trim();
    let lower = s.to_lowercase();

    match lower.as_str() {
        "pesos" | "peso" | "uyu" | "$" => Currency::Pesos,
        "dolares" | "dólares" | "usd" | "u$s" => Currency::Dolares,

        // everything else stays as-is:
        _ => Currency::Other(s.to_string()),
    }
}

/// Lenient decimal parse for the 15-character report amount segments.
///
/// Header and balance rows carry arbitrary text in these positions and
/// are filtered out later by description, so anything unparseable is 0.
/// This tolerance is specific to the fixed-width report; the card
/// parser never goes through here.
pub(crate) fn parse_report_amount(raw: &str) -> Amount {
    parse_decimal(raw).unwrap_or(0)
}

/// Exact decimal parse into minor units.
///
/// Accepts zero-padded integers ("000000000000100"), dot or comma
/// decimal separators, at most two fractional digits and an optional
/// leading minus.
pub(crate) fn parse_decimal(raw: &str) -> Option<Amount> {
    let mut cleaned = raw.trim().replace(' ', "");

    if cleaned.contains(',') {
        if cleaned.contains('.') {
            cleaned = cleaned.replace(',', "");
        } else {
            cleaned = cleaned.replace(',', ".");
        }
    }

    if cleaned.is_empty() {
        return None;
    }

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    if digits.is_empty() {
        return None;
    }

    let mut split = digits.split('.');
    // digits is not empty, the first chunk always exists
    let int_part = split.next()?;
    let dec_part = split.next().unwrap_or("");
    if split.next().is_some() {
        // more than one decimal point
        return None;
    }

    let int_part: Amount = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    let dec_minor: Amount = match dec_part.len() {
        0 => 0,
        1 => dec_part.parse::<Amount>().ok()? * 10,
        2 => dec_part.parse().ok()?,
        _ => return None,
    };

    let minor = int_part * 100 + dec_minor;
    Some(if negative { -minor } else { minor })
}

/// Converts a major-unit JSON number to minor units.
///
/// Exact for every two-decimal currency value within the i64 cent
/// range; the round() absorbs the binary representation error.
pub(crate) fn minor_units(major: f64) -> Amount {
    (major * 100.0).round() as Amount
}

/// Date segment of the fixed-width report: `YYYYMMDD`.
pub(crate) fn parse_report_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let s = raw.trim();
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .map_err(|_| ParseError::UnparseableDate(format!("invalid report date: '{s}'")))
}

/// Renders minor units as a plain decimal, trailing zeros trimmed but
/// keeping at least one fractional digit: 10000 -> "100.0",
/// 10050 -> "100.5", 10055 -> "100.55".
pub(crate) fn format_amount(minor: Amount) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    let units = abs / 100;
    let cents = abs % 100;

    if cents == 0 {
        format!("{sign}{units}.0")
    } else if cents % 10 == 0 {
        format!("{sign}{units}.{}", cents / 10)
    } else {
        format!("{sign}{units}.{cents:02}")
    }
}
