#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::BufReader;
use wordcloud_rs::{count_in_place, count_streamed};

fuzz_target!(|data: &[u8]| {
    // Both strategies must agree on every corpus, whatever the read chunking
    let Some((&chunk, corpus)) = data.split_first() else {
        return;
    };
    let reader = BufReader::with_capacity(usize::from(chunk).max(1), corpus);
    let streamed = count_streamed(reader, 3, corpus.len() as u64).unwrap();

    let mut buf = corpus.to_vec();
    let mapped = count_in_place(&mut buf, 3);

    assert_eq!(mapped.len(), streamed.len(), "distinct word counts differ");
    assert_eq!(mapped.total(), streamed.total(), "total word counts differ");
    for (word, count) in mapped.iter() {
        assert_eq!(streamed.get(*word), Some(count), "count mismatch for {:?}", word);
    }
});
