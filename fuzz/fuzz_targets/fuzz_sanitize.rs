#![no_main]
use libfuzzer_sys::fuzz_target;
use sql_sanitizer::sanitize;

fuzz_target!(|data: &[u8]| {
    // `sanitize` takes `&str`; lossily repair arbitrary bytes rather than
    // rejecting invalid UTF-8, so the fuzzer still reaches the scanner on
    // every input instead of bottoming out at the decode step.
    let input = String::from_utf8_lossy(data);
    let _ = sanitize(&input);
});
