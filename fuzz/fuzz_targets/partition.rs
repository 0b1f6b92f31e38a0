#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&index_byte, values)) = data.split_first() else {
        return;
    };

    let mut v = values.to_vec();
    let index = index_byte as usize;

    match sort_engine::partition(&mut v, index) {
        Ok((before, nth, after)) => {
            assert!(before.iter().all(|x| *x <= *nth));
            assert!(after.iter().all(|x| *x >= *nth));
        }
        Err(_) => assert!(index >= values.len()),
    }
});
