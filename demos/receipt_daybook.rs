use tally_daybook::core::*;
use tally_daybook::report;
use tally_daybook::tally;

fn main() {
    let xml = include_str!("../tests/fixtures/receipts.xml");
    let doc = tally::parse_document(xml).expect("well-formed export");

    let config = DaybookConfigBuilder::new()
        .voucher_type("Receipt")
        .build()
        .expect("valid config");
    let (rows, stats) = extract_with(&doc, &config).expect("valid vouchers");

    println!(
        "{} of {} vouchers exported, {} rows",
        stats.vouchers_exported,
        stats.vouchers_seen,
        rows.len()
    );
    println!();
    print!("{}", report::to_csv(&rows));
}
