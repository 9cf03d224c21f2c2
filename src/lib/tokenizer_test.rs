#[cfg(test)]
pub mod tests {
    use crate::tokenizer::{STOP_WORDS, StreamTokenizer, WordTokenizer, is_letter, to_lower};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use rstest_reuse;
    use rstest_reuse::*;
    use std::io::BufReader;

    fn in_place_words(input: &[u8], min_length: usize) -> Vec<String> {
        let mut buf = input.to_vec();
        WordTokenizer::new(&mut buf, min_length)
            .map(str::to_owned)
            .collect()
    }

    fn streamed_words(input: &[u8], min_length: usize, chunk: usize) -> Vec<String> {
        let reader = BufReader::with_capacity(chunk, input);
        StreamTokenizer::new(reader, min_length)
            .collect::<std::io::Result<Vec<_>>>()
            .unwrap()
    }

    /// Split on non-letters, lowercase, filter. Written without the tokenizer
    /// helpers so the two can be checked against each other.
    fn reference_words(input: &[u8], min_length: usize) -> Vec<String> {
        input
            .split(|b| !(b.is_ascii_alphabetic() || *b == b'\''))
            .filter(|w| !w.is_empty())
            .map(|w| String::from_utf8(w.to_ascii_lowercase()).unwrap())
            .filter(|w| w.len() > min_length && !STOP_WORDS.contains(w.as_str()))
            .collect()
    }

    #[rstest]
    #[case::upper_a(b'A', true)]
    #[case::upper_z(b'Z', true)]
    #[case::lower_a(b'a', true)]
    #[case::lower_z(b'z', true)]
    #[case::apostrophe(b'\'', true)]
    #[case::before_upper(b'@', false)]
    #[case::after_upper(b'[', false)]
    #[case::backtick(b'`', false)]
    #[case::open_brace(b'{', false)]
    #[case::digit(b'7', false)]
    #[case::space(b' ', false)]
    #[case::high_byte(0xC3, false)]
    fn test_is_letter(#[case] byte: u8, #[case] expected: bool) {
        assert_eq!(is_letter(byte), expected, "byte: {:#04x}", byte);
    }

    #[rstest]
    #[case::upper(b'Q', b'q')]
    #[case::lower(b'q', b'q')]
    #[case::apostrophe(b'\'', b'\'')]
    #[case::digit(b'1', b'1')]
    #[case::high_byte(0xC9, 0xC9)]
    fn test_to_lower(#[case] byte: u8, #[case] expected: u8) {
        assert_eq!(to_lower(byte), expected);
    }

    // Template: tokenization cases shared by both tokenizers
    #[template]
    #[rstest]
    #[case::empty("", 0, &[])]
    #[case::only_non_letters("123 ,.;\n\t-", 0, &[])]
    #[case::single_word("hello", 0, &["hello"])]
    #[case::mixed_case_folded("HeLLo WORLD", 0, &["hello", "world"])]
    #[case::apostrophes_kept("don't CAN'T", 0, &["don't", "can't"])]
    #[case::digits_split_words("abc123def", 0, &["abc", "def"])]
    #[case::punctuation_split("well-known,word.", 0, &["well", "known", "word"])]
    #[case::non_ascii_splits("caf\u{e9} na\u{ef}ve", 0, &["caf", "na", "ve"])]
    #[case::exactly_min_length_dropped("abcdef abcdefg", 6, &["abcdefg"])]
    #[case::single_letter_at_min("a bb", 1, &["bb"])]
    #[case::stop_words_dropped(
        "Gutenberg COPYRIGHT electronic Distributed copies literature",
        0,
        &["literature"]
    )]
    #[case::stop_word_prefix_kept("gutenbergs copyrighted", 0, &["gutenbergs", "copyrighted"])]
    #[case::leading_and_trailing_noise("  ...Wherefore!  ", 0, &["wherefore"])]
    #[case::cats_and_dogs("Cats cats CATS dogs", 2, &["cats", "cats", "cats", "dogs"])]
    pub fn tokenizer_cases(
        #[case] input: &str,
        #[case] min_length: usize,
        #[case] expected: &[&str],
    ) {
    }

    #[apply(tokenizer_cases)]
    fn test_word_tokenizer(input: &str, min_length: usize, expected: &[&str]) {
        assert_eq!(in_place_words(input.as_bytes(), min_length), expected);
    }

    // Tiny buffers force words to straddle reader chunks
    #[apply(tokenizer_cases)]
    fn test_stream_tokenizer(input: &str, min_length: usize, expected: &[&str]) {
        for chunk in [1, 2, 3, 8, 64] {
            assert_eq!(
                streamed_words(input.as_bytes(), min_length, chunk),
                expected,
                "chunk size {}",
                chunk
            );
        }
    }

    #[test]
    fn test_folds_buffer_in_place() {
        let mut buf = b"The QUICK Brown-Fox 42".to_vec();
        let words: Vec<&str> = WordTokenizer::new(&mut buf, 0).collect();
        assert_eq!(words, ["the", "quick", "brown", "fox"]);
        assert_eq!(buf, b"the quick brown-fox 42");
    }

    #[test]
    fn test_folds_dropped_words_too() {
        let mut buf = b"AB GUTENBERG".to_vec();
        assert_eq!(WordTokenizer::new(&mut buf, 2).count(), 0);
        assert_eq!(buf, b"ab gutenberg");
    }

    #[test]
    fn test_rescan_sees_folded_text() {
        let mut buf = b"Hamlet HAMLET".to_vec();
        assert_eq!(WordTokenizer::new(&mut buf, 0).count(), 2);
        let again: Vec<&str> = WordTokenizer::new(&mut buf, 0).collect();
        assert_eq!(again, ["hamlet", "hamlet"]);
        assert_eq!(buf, b"hamlet hamlet");
    }

    #[test]
    fn test_word_unchanged_across_advances() {
        let mut buf = b"First SECOND Third FOURTH".to_vec();
        let mut tokenizer = WordTokenizer::new(&mut buf, 0);
        let first = tokenizer.next().unwrap();
        let second = tokenizer.next().unwrap();
        let rest: Vec<&str> = tokenizer.by_ref().collect();
        assert_eq!(first, "first");
        assert_eq!(second, "second");
        assert_eq!(rest, ["third", "fourth"]);
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.remaining(), 0);
    }

    #[test]
    fn test_words_borrow_from_buffer() {
        let mut buf = b"  zero copy".to_vec();
        let range = buf.as_ptr_range();
        for word in WordTokenizer::new(&mut buf, 0) {
            assert!(range.contains(&word.as_ptr()));
        }
    }

    #[test]
    fn test_stream_tokenizer_propagates_read_error() {
        struct Failing;
        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }
        let mut tokenizer = StreamTokenizer::new(BufReader::new(Failing), 0);
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert!(tokenizer.next().is_none());
    }

    // ====================================================================
    // Property-Based Tests (PropTest)
    // ====================================================================

    fn corpus() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            proptest::collection::vec(any::<u8>(), 0..512),
            "[a-zA-Z' ,.\n0-9]{0,512}".prop_map(String::into_bytes),
            proptest::collection::vec(
                prop_oneof![
                    Just("Gutenberg ".to_string()),
                    Just("copies ".to_string()),
                    "[A-Za-z']{1,12}[ .;]",
                ],
                0..64
            )
            .prop_map(|words| words.concat().into_bytes()),
        ]
    }

    proptest! {
        #[test]
        fn prop_words_are_lowercase_letters(input in corpus(), min_length in 0usize..10) {
            for word in in_place_words(&input, min_length) {
                prop_assert!(word.bytes().all(|b| b.is_ascii_lowercase() || b == b'\''), "{:?}", word);
                prop_assert!(word.len() > min_length);
                prop_assert!(!STOP_WORDS.contains(word.as_str()));
            }
        }

        #[test]
        fn prop_in_place_matches_reference(input in corpus(), min_length in 0usize..10) {
            prop_assert_eq!(in_place_words(&input, min_length), reference_words(&input, min_length));
        }

        #[test]
        fn prop_stream_matches_in_place(input in corpus(), min_length in 0usize..10, chunk in 1usize..32) {
            prop_assert_eq!(
                streamed_words(&input, min_length, chunk),
                in_place_words(&input, min_length)
            );
        }

        #[test]
        fn prop_fold_only_touches_uppercase(input in corpus()) {
            let mut buf = input.clone();
            let _ = WordTokenizer::new(&mut buf, 0).count();
            prop_assert_eq!(buf, input.to_ascii_lowercase());
        }
    }
}
