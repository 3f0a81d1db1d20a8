#![no_main]

use libfuzzer_sys::fuzz_target;
use unscramble::compute_signature;

fuzz_target!(|data: &str| {
    // Any input hashes without panicking, and reversing it keeps the signature
    let sig = compute_signature(data);
    let reversed: String = data.chars().rev().collect();
    assert_eq!(sig, compute_signature(&reversed));
});
