#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are fine, panics are bugs.
    let Ok(xml) = tally_daybook::tally::decode_bytes(data) else {
        return;
    };
    if let Ok(doc) = tally_daybook::tally::parse_document(&xml) {
        let _ = tally_daybook::extract(&doc);
    }
});
