use std::io::{BufRead, BufReader, Read};

use chrono::NaiveDate;

use crate::classify;
use crate::error::ParseError;
use crate::model::Transaction;

/// Widths of the positional fields of one report line, in order.
/// The date segment is `YYYYMMDD`; everything after the second amount
/// segment is the free-text description.
const FIELD_WIDTHS: [usize; 6] = [7, 4, 8, 2, 15, 15];

/// Positional decomposition of one fixed-width report line.
///
/// Every field is kept as the raw string; dates and amounts are
/// converted during classification, so header and balance rows never
/// break the split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccountLine {
    /// leading 7-character code
    pub code: String,
    /// secondary 4-character code
    pub subcode: String,
    /// 8-character posting date segment
    pub date: String,
    /// 2-character movement-kind segment
    pub kind: String,
    /// 15-character credit amount segment
    pub credit: String,
    /// 15-character debit amount segment
    pub debit: String,
    /// remainder of the line: free-text description
    pub description: String,
}

impl RawAccountLine {
    /// Splits one line (newline already stripped) into the positional
    /// fields. No field is delimiter-separated; a line shorter than the
    /// cumulative widths yields empty trailing fields rather than
    /// failing.
    pub fn from_line(line: &str) -> Self {
        let chars: Vec<char> = line.chars().collect();
        let len = chars.len();
        let mut pos = 0usize;

        let mut take = |width: usize| -> String {
            let start = pos.min(len);
            let end = (pos + width).min(len);
            pos += width;
            chars[start..end].iter().collect()
        };

        let code = take(FIELD_WIDTHS[0]);
        let subcode = take(FIELD_WIDTHS[1]);
        let date = take(FIELD_WIDTHS[2]);
        let kind = take(FIELD_WIDTHS[3]);
        let credit = take(FIELD_WIDTHS[4]);
        let debit = take(FIELD_WIDTHS[5]);

        let description: String = chars[pos.min(len)..].iter().collect();

        RawAccountLine {
            code,
            subcode,
            date,
            kind,
            credit,
            debit,
            description,
        }
    }
}

/// Raw data of one fixed-width deposit-account report.
///
/// For parsing use [`AccountData::parse`], then turn the lines into
/// canonical transactions with [`AccountData::transactions`].
///
/// Example:
/// ```rust,no_run
/// use std::io::Cursor;
/// use itau_statements::AccountData;
/// # use itau_statements::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// let reader = Cursor::new(b"...one report line...");
/// let data = AccountData::parse(reader)?;
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AccountData {
    /// All report lines in file order, headers and balances included
    pub lines: Vec<RawAccountLine>,
}

impl AccountData {
    /// Reads a newline-delimited report into [`AccountData`].
    ///
    /// All-whitespace lines are skipped; every other line is split
    /// positionally. Returns [`ParseError`] only for read failures.
    pub fn parse<R: Read>(reader: R) -> Result<Self, ParseError> {
        let buf_reader = BufReader::new(reader);
        let mut lines = Vec::new();

        for line_result in buf_reader.lines() {
            let line = line_result?;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                continue;
            }

            lines.push(RawAccountLine::from_line(line));
        }

        Ok(AccountData { lines })
    }

    /// Classifies the raw lines into canonical transactions.
    ///
    /// `today` is the conversion run date; rows dated after it are
    /// pending and never exported.
    pub fn transactions(&self, today: NaiveDate) -> Result<Vec<Transaction>, ParseError> {
        classify::classify_account(&self.lines, today)
    }
}
