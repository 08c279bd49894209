//! Fuzz target for search page decoding and export.
//!
//! This fuzzer feeds arbitrary byte sequences to the search page decoder and
//! pushes anything that decodes through repair, projection, and CSV output,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrycsv::csv_out::{to_csv_string, Separator};
use scrycsv::repair::repair_image_uris;
use scrycsv::search::SearchPage;
use scrycsv::table::{project, ExportSpec};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(mut page) = SearchPage::from_json_slice(data) else {
        return;
    };

    let _ = repair_image_uris(&mut page.data);
    let table = project(&page.data, &ExportSpec::All);
    let _ = to_csv_string(&table, Separator::SEMICOLON);
});
