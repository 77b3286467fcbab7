#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the bag document entry point.
///
/// Arbitrary UTF-8 goes through document parsing and club normalization;
/// anything that parses is graded too.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(bag) = clubfit::parse_bag_str(s) {
            let _ = clubfit::grade_bag(bag.as_slice(), None);
        }
    }
});
