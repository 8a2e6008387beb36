use std::io::Write;

use csv::WriterBuilder;

use crate::error::ParseError;
use crate::model::Transaction;
use crate::utils::format_amount;

/// Writes the plain ledger CSV: `Date,Amount,Description`.
///
/// Every transaction becomes exactly one row, in input order; nothing
/// is dropped or reordered here, filtering already happened during
/// classification.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), ParseError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(["Date", "Amount", "Description"])?;

    for tx in transactions {
        wtr.write_record([
            tx.date.format("%Y-%m-%d").to_string(),
            format_amount(tx.amount),
            tx.description.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the budgeting-tool import CSV:
/// `Date,Payee,Category,Memo,Outflow,Inflow`.
///
/// Outflow and Inflow are mutually exclusive per row; installment
/// charges get a ` N/M` memo suffix so the plan position survives the
/// import. Category is always left empty, the budgeting tool assigns
/// its own.
pub fn write_ynab_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), ParseError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(["Date", "Payee", "Category", "Memo", "Outflow", "Inflow"])?;

    for tx in transactions {
        let memo = match tx.installment {
            Some(plan) => format!("{} {plan}", tx.description),
            None => tx.description.clone(),
        };

        let (outflow, inflow) = if tx.amount < 0 {
            (format_amount(-tx.amount), "0".to_string())
        } else if tx.amount > 0 {
            ("0".to_string(), format_amount(tx.amount))
        } else {
            ("0".to_string(), "0".to_string())
        };

        wtr.write_record([
            tx.date.format("%Y-%m-%d").to_string(),
            tx.description.clone(),
            String::new(),
            memo,
            outflow,
            inflow,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Installment;
    use chrono::NaiveDate;

    fn tx(
        date: (i32, u32, u32),
        amount: i64,
        description: &str,
        installment: Option<Installment>,
    ) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            amount,
            description: description.to_string(),
            installment,
        }
    }

    fn render<F>(transactions: &[Transaction], write: F) -> String
    where
        F: FnOnce(&[Transaction], &mut Vec<u8>) -> Result<(), ParseError>,
    {
        let mut buf: Vec<u8> = Vec::new();
        write(transactions, &mut buf).expect("export failed");
        String::from_utf8(buf).expect("export produced non-utf8 output")
    }

    #[test]
    fn plain_csv_renders_the_documented_row() {
        let txs = vec![tx((2024, 1, 15), 10_000, "PAYMENT RECEIVED", None)];

        let out = render(&txs, |t, w| write_csv(t, w));

        assert_eq!(out, "Date,Amount,Description\n2024-01-15,100.0,PAYMENT RECEIVED\n");
    }

    #[test]
    fn plain_csv_keeps_input_order_and_signs() {
        let txs = vec![
            tx((2024, 1, 16), -25_075, "CARD PAYMENT", None),
            tx((2024, 1, 15), 10_000, "DEPOSIT", None),
        ];

        let out = render(&txs, |t, w| write_csv(t, w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "2024-01-16,-250.75,CARD PAYMENT");
        assert_eq!(lines[2], "2024-01-15,100.0,DEPOSIT");
    }

    #[test]
    fn ynab_csv_renders_the_documented_row() {
        let txs = vec![tx((2024, 2, 10), -50_000, "SUPERMARKET", None)];

        let out = render(&txs, |t, w| write_ynab_csv(t, w));

        assert_eq!(
            out,
            "Date,Payee,Category,Memo,Outflow,Inflow\n2024-02-10,SUPERMARKET,,SUPERMARKET,500.0,0\n"
        );
    }

    #[test]
    fn ynab_csv_puts_positive_amounts_in_inflow() {
        let txs = vec![tx((2024, 2, 15), 100_000, "RECIBO DE PAGO", None)];

        let out = render(&txs, |t, w| write_ynab_csv(t, w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "2024-02-15,RECIBO DE PAGO,,RECIBO DE PAGO,0,1000.0");
    }

    #[test]
    fn ynab_csv_outflow_and_inflow_are_never_both_nonzero() {
        let txs = vec![
            tx((2024, 2, 10), -50_000, "SUPERMARKET", None),
            tx((2024, 2, 11), 7, "INTEREST", None),
            tx((2024, 2, 12), 0, "ZERO ADJUSTMENT", None),
        ];

        let out = render(&txs, |t, w| write_ynab_csv(t, w));

        for row in out.lines().skip(1) {
            let cols: Vec<&str> = row.split(',').collect();
            let outflow = cols[4];
            let inflow = cols[5];

            assert!(
                outflow == "0" || inflow == "0",
                "row has both outflow and inflow: {row}"
            );
        }
    }

    #[test]
    fn ynab_csv_appends_the_installment_suffix() {
        let txs = vec![
            tx(
                (2024, 2, 11),
                -12_050,
                "APPLIANCE STORE",
                Some(Installment {
                    number: 3,
                    count: 12,
                }),
            ),
            tx((2024, 2, 12), -8_000, "BAKERY", None),
        ];

        let out = render(&txs, |t, w| write_ynab_csv(t, w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[1],
            "2024-02-11,APPLIANCE STORE,,APPLIANCE STORE 3/12,120.5,0"
        );
        assert_eq!(lines[2], "2024-02-12,BAKERY,,BAKERY,80.0,0");
    }

    #[test]
    fn csv_fields_with_commas_are_quoted() {
        let txs = vec![tx((2024, 1, 15), -1_000, "SHOP, DOWNTOWN", None)];

        let out = render(&txs, |t, w| write_csv(t, w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "2024-01-15,-10.0,\"SHOP, DOWNTOWN\"");
    }
}
