//! Word tokenizers.
//!
//! A word is a maximal run of ASCII letters and apostrophes. Words are
//! case-folded to lowercase, then dropped when they are too short or on the
//! stop list. [`WordTokenizer`] does this in place over a mutable buffer;
//! [`StreamTokenizer`] does it over a reader, producing owned words.

use std::collections::HashSet;
use std::io::{self, BufRead};
use std::iter::FusedIterator;
use std::sync::LazyLock;

/// Words never counted, whatever their frequency.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["electronic", "distributed", "copies", "copyright", "gutenberg"]
        .into_iter()
        .collect()
});

#[inline(always)]
pub fn is_letter(byte: u8) -> bool {
    (b'A'..=b'Z').contains(&byte) || (b'a'..=b'z').contains(&byte) || byte == b'\''
}

/// Lowercase A-Z; every other byte passes through.
#[inline(always)]
pub fn to_lower(byte: u8) -> u8 {
    if (b'A'..=b'Z').contains(&byte) {
        byte - b'A' + b'a'
    } else {
        byte
    }
}

#[inline]
fn keep(word: &str, min_length: usize) -> bool {
    word.len() > min_length && !STOP_WORDS.contains(word)
}

/// Single-pass tokenizer over a mutable byte span.
///
/// Each call to `next` skips non-letters, folds the following run of letters
/// to lowercase *in the buffer itself*, and yields it if it passes the
/// filters. The tokenizer holds the exclusive borrow of the span for its
/// whole lifetime, so nobody can observe the buffer half-folded, and once
/// consumed the span only contains lowercase text. Build a new tokenizer over
/// an unmodified copy to scan again.
///
/// Yielded words are disjoint sub-slices of the span, split off with
/// `split_at_mut`, so they stay valid (and unchanged) while the scan goes on.
pub struct WordTokenizer<'a> {
    rest: &'a mut [u8],
    min_length: usize,
}

impl<'a> WordTokenizer<'a> {
    pub fn new(payload: &'a mut [u8], min_length: usize) -> Self {
        Self {
            rest: payload,
            min_length,
        }
    }

    /// Bytes not scanned yet.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}

impl<'a> Iterator for WordTokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let buf = std::mem::take(&mut self.rest);
            let start = buf.iter().position(|&b| is_letter(b))?;
            let (_, tail) = buf.split_at_mut(start);

            let mut len = 0;
            while len < tail.len() && is_letter(tail[len]) {
                tail[len] = to_lower(tail[len]);
                len += 1;
            }
            let (word, rest) = tail.split_at_mut(len);
            self.rest = rest;

            let word: &'a [u8] = word;
            debug_assert!(word.iter().all(|&b| is_letter(b)));
            // SAFETY: every byte passed `is_letter`, so the slice is ASCII.
            let word = unsafe { std::str::from_utf8_unchecked(word) };
            if keep(word, self.min_length) {
                return Some(word);
            }
        }
    }
}

impl FusedIterator for WordTokenizer<'_> {}

/// Tokenizer over a buffered reader, yielding owned words.
///
/// Applies the same classification and filters as [`WordTokenizer`] but
/// never needs the whole corpus in memory.
pub struct StreamTokenizer<R> {
    reader: R,
    word: Vec<u8>,
    min_length: usize,
    done: bool,
}

impl<R: BufRead> StreamTokenizer<R> {
    pub fn new(reader: R, min_length: usize) -> Self {
        Self {
            reader,
            word: Vec::with_capacity(32),
            min_length,
            done: false,
        }
    }

    /// Fill `self.word` with the next raw run of letters. Returns false at EOF
    /// with no word pending. Runs may span several reader chunks.
    fn read_run(&mut self) -> io::Result<bool> {
        self.word.clear();
        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if chunk.is_empty() {
                return Ok(!self.word.is_empty());
            }

            let mut used = 0;
            if self.word.is_empty() {
                match chunk.iter().position(|&b| is_letter(b)) {
                    Some(start) => used = start,
                    None => {
                        let n = chunk.len();
                        self.reader.consume(n);
                        continue;
                    }
                }
            }

            let run = chunk[used..].iter().take_while(|&&b| is_letter(b)).count();
            self.word
                .extend(chunk[used..used + run].iter().map(|&b| to_lower(b)));
            used += run;
            let ended = used < chunk.len();
            self.reader.consume(used);
            if ended {
                return Ok(true);
            }
        }
    }
}

impl<R: BufRead> Iterator for StreamTokenizer<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.read_run() {
                Ok(true) => {
                    // SAFETY: only bytes passing `is_letter` were collected.
                    let word = unsafe { std::str::from_utf8_unchecked(&self.word) };
                    if keep(word, self.min_length) {
                        return Some(Ok(word.to_owned()));
                    }
                }
                Ok(false) => self.done = true,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl<R: BufRead> FusedIterator for StreamTokenizer<R> {}
