pub mod error;
pub mod model;
pub mod account;
pub mod card;
pub mod classify;
pub mod export;

mod utils;

pub use crate::account::{AccountData, RawAccountLine};
pub use crate::card::CardData;
pub use crate::error::ParseError;
pub use crate::export::{write_csv, write_ynab_csv};
pub use crate::model::{Amount, Currency, Installment, Transaction};
