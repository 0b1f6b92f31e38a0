#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Bytes give plenty of duplicates, pairs of them a wider value range.
    let mut v = data.to_vec();
    sort_engine::sort(&mut v);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));

    let mut v = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect::<Vec<_>>();
    let mut expected = v.clone();
    expected.sort_unstable();

    sort_engine::sort(&mut v);
    assert_eq!(v, expected);
});
