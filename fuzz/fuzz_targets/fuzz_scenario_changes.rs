#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz change-list parsing and simulation against a small fixed bag.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(changes) = clubfit::scenario::parse_changes_str(s) else {
        return;
    };
    let bag = vec![
        clubfit::Club::new("Driver").with_id("d"),
        clubfit::Club::new("7-Iron").with_id("i7"),
    ];
    let _ = clubfit::simulate(&bag, &changes);
});
