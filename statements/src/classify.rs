use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::account::RawAccountLine;
use crate::card::serde_models::{Fecha, Movimiento};
use crate::error::ParseError;
use crate::model::{Installment, Transaction};
use crate::utils::{minor_units, parse_report_amount, parse_report_date};

/// Report rows that are table headers or carry-forward balance
/// markers, not movements. Anchored, case-sensitive.
static ACCOUNT_NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(CONCEPTO|SALDO INICIAL|SALDO FINAL)$").unwrap());

/// The previous month's rolled-forward balance on card statements.
/// Case-sensitive on purpose: the bank also books genuine payment
/// receipts under `RECIBO DE PAGO`, and only the mixed-case form is
/// the balance marker. Known upstream ambiguity, kept as-is.
static CARD_NOISE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Recibo de Pago$").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// `tipo` tag marking an installment-plan charge.
const PLAN_PAGOS: &str = "Plan Pagos";

/// Trims and collapses whitespace runs to a single space.
pub(crate) fn normalize_description(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned()
}

fn card_date(fecha: &Fecha) -> Result<NaiveDate, ParseError> {
    NaiveDate::from_ymd_opt(fecha.year, fecha.month_of_year, fecha.day_of_month).ok_or_else(|| {
        ParseError::UnparseableDate(format!(
            "invalid movement date: {}-{}-{}",
            fecha.year, fecha.month_of_year, fecha.day_of_month
        ))
    })
}

/// Converts one report line, or `None` when the line is a header,
/// a balance marker or a pending (future-dated) row.
///
/// The description check runs first: noise rows carry text instead of
/// a date in the date segment and must never reach the date parser.
fn account_transaction(
    line: &RawAccountLine,
    today: NaiveDate,
) -> Result<Option<Transaction>, ParseError> {
    let description = normalize_description(&line.description);

    if ACCOUNT_NOISE_RE.is_match(&description) {
        return Ok(None);
    }

    let date = parse_report_date(&line.date)?;
    if date > today {
        return Ok(None);
    }

    // field order carries the sign convention: outflows negative
    let amount = parse_report_amount(&line.credit) - parse_report_amount(&line.debit);

    Ok(Some(Transaction::new(date, amount, description, None)))
}

/// Converts one card movement, or `None` when it is the carried
/// balance marker or a pending row.
fn card_transaction(
    movimiento: &Movimiento,
    today: NaiveDate,
) -> Result<Option<Transaction>, ParseError> {
    let description = normalize_description(&movimiento.nombre_comercio);

    if CARD_NOISE_RE.is_match(&description) {
        return Ok(None);
    }

    let date = card_date(&movimiento.fecha)?;
    if date > today {
        return Ok(None);
    }

    // charges arrive positive; flip so money leaving the card is negative
    let amount = -minor_units(movimiento.importe);

    let installment = if movimiento.tipo == PLAN_PAGOS {
        match (movimiento.nro_cuota, movimiento.cant_cuotas) {
            (Some(number), Some(count)) => Some(Installment { number, count }),
            _ => {
                return Err(ParseError::MalformedPayload(format!(
                    "'{PLAN_PAGOS}' movement without nroCuota/cantCuotas: {description}"
                )));
            }
        }
    } else {
        None
    };

    Ok(Some(Transaction::new(date, amount, description, installment)))
}

/// Classifies fixed-width report lines into canonical transactions,
/// preserving input order. Pure: same input, same output.
pub fn classify_account(
    lines: &[RawAccountLine],
    today: NaiveDate,
) -> Result<Vec<Transaction>, ParseError> {
    let mut transactions = Vec::with_capacity(lines.len());

    for line in lines {
        if let Some(tx) = account_transaction(line, today)? {
            transactions.push(tx);
        }
    }

    Ok(transactions)
}

/// Classifies card movements (already filtered to one currency) into
/// canonical transactions, preserving input order.
pub fn classify_card(
    movimientos: &[&Movimiento],
    today: NaiveDate,
) -> Result<Vec<Transaction>, ParseError> {
    let mut transactions = Vec::with_capacity(movimientos.len());

    for movimiento in movimientos {
        if let Some(tx) = card_transaction(movimiento, today)? {
            transactions.push(tx);
        }
    }

    Ok(transactions)
}
