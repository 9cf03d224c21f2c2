#![no_main]

use libfuzzer_sys::fuzz_target;
use wordcloud_rs::{Corpus, Params, WordCloudError, html_for_corpus};

fuzz_target!(|data: &[u8]| {
    // Whole pipeline over arbitrary bytes: a well-formed page or a clean
    // EmptySelection, never a panic
    let params = Params {
        min_length: 1,
        max_words: 20,
        seed: Some(0),
        ..Params::default()
    };
    let mut corpus = Corpus::from_bytes(data.to_vec());
    match html_for_corpus(&mut corpus, "fuzz", &params) {
        Ok(html) => {
            assert!(html.ends_with("</body></html>\n"));
            let spans = html.matches("<span ").count();
            assert!((1..=20).contains(&spans));
        }
        Err(WordCloudError::EmptySelection) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
});
