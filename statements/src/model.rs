use chrono::NaiveDate;
use std::fmt;

/// Signed monetary amount in minor units ("cents").
///
/// Negative means money leaving the account or card. Amounts stay in
/// integer cents end to end, so repeated small movements never drift.
pub type Amount = i64;

/// Currencies the bank reports card movements in.
///
/// Important:
/// with [`Currency::Other`] the filter only keeps movements whose
/// `moneda` equals the stored string verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    /// Uruguayan peso, `"Pesos"` on the wire
    Pesos,
    /// US dollar, `"Dolares"` on the wire
    Dolares,

    /// Unsupported currency, kept as the raw string
    Other(String),
}

impl Currency {
    /// The exact `moneda` value the card payload uses for this currency.
    pub fn wire_code(&self) -> &str {
        match self {
            Currency::Pesos => "Pesos",
            Currency::Dolares => "Dolares",
            Currency::Other(s) => s,
        }
    }
}

impl From<&str> for Currency {
    fn from(raw: &str) -> Self {
        crate::utils::parse_currency(raw)
    }
}

/// Position of one charge inside a credit-card installment plan.
///
/// Both fields always travel together: a transaction either belongs to
/// a plan (position and total count known) or it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installment {
    /// 1-based index of this charge within the plan (`nroCuota`)
    pub number: u32,
    /// total number of charges in the plan (`cantCuotas`)
    pub count: u32,
}

/// Central structure of the library: one exportable movement.
///
/// Both raw formats converge on this record after classification.
/// The exporters only ever see this type and cannot tell which format
/// produced a given transaction.
///
/// Example:
/// ```no_run
/// # use itau_statements::{AccountData, ParseError, export};
/// # use std::io;
/// # fn main() -> Result<(), ParseError> {
/// # let reader = io::Cursor::new(b"");
/// let data = AccountData::parse(reader)?;
/// let transactions = data.transactions(chrono::Local::now().date_naive())?;
///
/// let stdout = io::stdout();
/// let writer = stdout.lock();
///
/// export::write_csv(&transactions, writer)?;
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// posting date, never after the conversion's run date
    pub date: NaiveDate,
    /// signed amount in minor units, outflows negative
    pub amount: Amount,
    /// trimmed description, whitespace runs collapsed
    pub description: String,
    /// installment metadata, present only for `Plan Pagos` card charges
    pub installment: Option<Installment>,
}

impl Transaction {
    /// Go to [`Transaction`]
    pub fn new(
        date: NaiveDate,
        amount: Amount,
        description: String,
        installment: Option<Installment>,
    ) -> Self {
        Transaction {
            date,
            amount,
            description,
            installment,
        }
    }
}

impl fmt::Display for Installment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.number, self.count)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let installment_str = self
            .installment
            .map(|i| i.to_string())
            .unwrap_or_default();

        write!(
            f,
            "{:<10} {:>15} {:>5} {}",
            self.date, self.amount, installment_str, self.description,
        )
    }
}
