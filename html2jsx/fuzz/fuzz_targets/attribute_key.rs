#![no_main]

//! Attribute key fuzzer.
//!
//! Builds hyphen-heavy names and checks them against the key rules.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Part {
    Word(String),
    Hyphen,
    Aria,
}

fuzz_target!(|parts: Vec<Part>| {
    let mut key = String::new();
    for part in &parts {
        match part {
            Part::Word(w) => key.push_str(w),
            Part::Hyphen => key.push('-'),
            Part::Aria => key.push_str("aria-"),
        }
    }

    let result = html2jsx::convert_attribute_key(&key);

    if key.starts_with("aria-") {
        assert_eq!(result.as_deref(), Ok(key.as_str()));
        return;
    }
    if key == "class" {
        assert_eq!(result.as_deref(), Ok("className"));
        return;
    }

    let hyphens = key.matches('-').count();
    match result {
        Ok(out) => {
            assert!(hyphens <= 1, "{key:?} has {hyphens} hyphens but converted");
            assert!(!out.contains('-'), "{key:?} -> {out:?} kept a hyphen");
        }
        Err(e) => assert!(hyphens >= 2, "{key:?} rejected: {e}"),
    }
});
