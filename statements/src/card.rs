pub mod serde_models;

use std::io::{BufReader, Read};

use chrono::NaiveDate;

use crate::classify;
use crate::error::ParseError;
use crate::model::{Currency, Transaction};
use serde_models::*;

/// Raw data of one credit-card movement payload.
///
/// For parsing use [`CardData::parse`], then turn the movements into
/// canonical transactions with [`CardData::transactions`].
///
/// Example:
/// ```rust,no_run
/// use std::io::Cursor;
/// use itau_statements::CardData;
/// # use itau_statements::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// let reader = Cursor::new(br#"{"itaulink_msg": {"data": {}}}"#);
/// let data = CardData::parse(reader)?;
/// #     Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CardData {
    /// all movements of the payload, both currencies, in wire order
    pub movimientos: Vec<Movimiento>,
}

impl CardData {
    /// Reads and deserializes the JSON payload into [`CardData`].
    ///
    /// The nested path `itaulink_msg.data.datos.datosMovimientos.movimientos`
    /// must exist and be a sequence, and every movement must carry its
    /// required fields; anything else is [`ParseError::MalformedPayload`].
    /// A movement is never silently skipped.
    pub fn parse<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut buf_reader = BufReader::new(reader);
        let mut json = String::new();
        buf_reader.read_to_string(&mut json)?;

        let file: ItaulinkFile = serde_json::from_str(&json)?;
        let movimientos = file.itaulink_msg.data.datos.datos_movimientos.movimientos;

        Ok(CardData { movimientos })
    }

    /// Classifies the raw movements into canonical transactions.
    ///
    /// Only movements whose `moneda` equals the wire code of `currency`
    /// are kept; there is no conversion between currencies. `today` is
    /// the conversion run date; later-dated movements are pending and
    /// never exported.
    pub fn transactions(
        &self,
        currency: &Currency,
        today: NaiveDate,
    ) -> Result<Vec<Transaction>, ParseError> {
        let selected: Vec<&Movimiento> = self
            .movimientos
            .iter()
            .filter(|m| m.moneda == currency.wire_code())
            .collect();

        classify::classify_card(&selected, today)
    }
}
