#![no_main]

//! Whole-pipeline fuzzer.
//!
//! Conversion must never panic, and the read chunk size must never change
//! the output.

use arbitrary::Arbitrary;
use html2jsx::ConvertOptions;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    html: Vec<u8>,
    chunk_size: u8,
    strict: bool,
}

fuzz_target!(|input: Input| {
    let mut base = ConvertOptions::new();
    if input.strict {
        base = base.strict();
    }
    let chunked = base.clone().with_chunk_size(input.chunk_size as usize);

    let mut expected = Vec::new();
    let whole = html2jsx::convert_with_options(&input.html[..], &mut expected, &base);

    let mut got = Vec::new();
    let split = html2jsx::convert_with_options(&input.html[..], &mut got, &chunked);

    if whole.is_ok() && split.is_ok() && expected != got {
        panic!(
            "chunk size {} changed the output\ninput: {:?}\nwhole: {:?}\nsplit: {:?}",
            input.chunk_size,
            String::from_utf8_lossy(&input.html),
            String::from_utf8_lossy(&expected),
            String::from_utf8_lossy(&got),
        );
    }
});
