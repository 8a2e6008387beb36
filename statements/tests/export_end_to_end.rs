//! End-to-end checks: one raw payload in, one exact CSV text out.

use chrono::NaiveDate;
use itau_statements::{AccountData, CardData, Currency, export};
use std::io::Cursor;

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn fixed_width_line_to_plain_csv_row() {
    let line = [
        "1234567",
        "0001",
        "20240115",
        "01",
        "000000000000100",
        "000000000000000",
        "PAYMENT RECEIVED",
    ]
    .concat();

    let data = AccountData::parse(Cursor::new(line)).expect("failed to parse report line");
    let transactions = data.transactions(run_date()).expect("failed to classify");

    assert_eq!(transactions.len(), 1);
    assert_eq!(
        transactions[0].date,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
    assert_eq!(transactions[0].amount, 10_000);
    assert_eq!(transactions[0].description, "PAYMENT RECEIVED");

    let mut buf: Vec<u8> = Vec::new();
    export::write_csv(&transactions, &mut buf).expect("failed to write plain CSV");

    let out = String::from_utf8(buf).expect("plain CSV is not utf-8");
    assert_eq!(
        out,
        "Date,Amount,Description\n2024-01-15,100.0,PAYMENT RECEIVED\n"
    );
}

#[test]
fn card_movement_to_budgeting_csv_row() {
    let json = r#"{
        "itaulink_msg": {
            "data": {
                "datos": {
                    "datosMovimientos": {
                        "movimientos": [
                            {
                                "moneda": "Pesos",
                                "fecha": {"year": 2024, "monthOfYear": 2, "dayOfMonth": 10},
                                "importe": 500.00,
                                "nombreComercio": "SUPERMARKET",
                                "tipo": "Compra"
                            }
                        ]
                    }
                }
            }
        }
    }"#;

    let data = CardData::parse(json.as_bytes()).expect("failed to parse card payload");
    let transactions = data
        .transactions(&Currency::Pesos, run_date())
        .expect("failed to classify");

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, -50_000);

    let mut buf: Vec<u8> = Vec::new();
    export::write_ynab_csv(&transactions, &mut buf).expect("failed to write budgeting CSV");

    let out = String::from_utf8(buf).expect("budgeting CSV is not utf-8");
    assert_eq!(
        out,
        "Date,Payee,Category,Memo,Outflow,Inflow\n2024-02-10,SUPERMARKET,,SUPERMARKET,500.0,0\n"
    );
}

#[test]
fn one_transaction_sequence_feeds_both_exporters() {
    let json = r#"{
        "itaulink_msg": {
            "data": {
                "datos": {
                    "datosMovimientos": {
                        "movimientos": [
                            {
                                "moneda": "Pesos",
                                "fecha": {"year": 2024, "monthOfYear": 2, "dayOfMonth": 11},
                                "importe": 120.50,
                                "nombreComercio": "APPLIANCE STORE",
                                "tipo": "Plan Pagos",
                                "nroCuota": 3,
                                "cantCuotas": 12
                            }
                        ]
                    }
                }
            }
        }
    }"#;

    let data = CardData::parse(json.as_bytes()).expect("failed to parse card payload");
    let transactions = data
        .transactions(&Currency::Pesos, run_date())
        .expect("failed to classify");

    let mut plain: Vec<u8> = Vec::new();
    export::write_csv(&transactions, &mut plain).expect("failed to write plain CSV");
    let mut budgeting: Vec<u8> = Vec::new();
    export::write_ynab_csv(&transactions, &mut budgeting).expect("failed to write budgeting CSV");

    let plain = String::from_utf8(plain).expect("plain CSV is not utf-8");
    let budgeting = String::from_utf8(budgeting).expect("budgeting CSV is not utf-8");

    // same record, two dialects: the installment only shows in the memo
    assert_eq!(
        plain,
        "Date,Amount,Description\n2024-02-11,-120.5,APPLIANCE STORE\n"
    );
    assert_eq!(
        budgeting,
        "Date,Payee,Category,Memo,Outflow,Inflow\n\
         2024-02-11,APPLIANCE STORE,,APPLIANCE STORE 3/12,120.5,0\n"
    );
}
