#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcloud_rs::{STOP_WORDS, WordTokenizer};

fuzz_target!(|data: &[u8]| {
    // First byte picks the minimum length, the rest is the corpus
    let Some((&min, corpus)) = data.split_first() else {
        return;
    };
    let min_length = usize::from(min % 16);

    let mut buf = corpus.to_vec();
    let mut total = 0;
    for word in WordTokenizer::new(&mut buf, min_length) {
        assert!(word.len() > min_length, "word too short: {:?}", word);
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase() || b == b'\''),
            "not folded: {:?}",
            word
        );
        assert!(!STOP_WORDS.contains(word), "stop word emitted: {:?}", word);
        total += word.len();
    }
    assert!(total <= corpus.len());

    // Folding touches nothing but A-Z
    assert_eq!(buf, corpus.to_ascii_lowercase());
});
