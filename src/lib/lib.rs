// Library interface for wordcloud-rs
// Counts word frequencies in a text corpus and renders the top words as an
// HTML word cloud.

pub mod byte_source;
pub mod error;
pub mod frequency;
pub mod render;
pub mod tokenizer;
#[cfg(test)]
mod tokenizer_test;
pub mod top_n;

pub use byte_source::Corpus;
pub use error::{Result, WordCloudError};
pub use frequency::FrequencyTable;
pub use render::{RenderOptions, render_html};
pub use tokenizer::{STOP_WORDS, StreamTokenizer, WordTokenizer};
pub use top_n::select_top;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One word with its occurrence count.
pub type WordFreq<K> = (K, u32);

/// How the corpus is read and tokenized. Both produce identical counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Private memory map, tokenized and case-folded in place (zero-copy).
    #[default]
    MemoryMapped,
    /// Buffered reader, one owned string per word.
    Streaming,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::MemoryMapped => write!(f, "mmap"),
            Strategy::Streaming => write!(f, "stream"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mmap" => Ok(Strategy::MemoryMapped),
            "stream" => Ok(Strategy::Streaming),
            other => Err(format!("unknown strategy '{other}' (expected mmap or stream)")),
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// Words of this length or shorter are dropped.
    pub min_length: usize,
    /// How many words to render.
    pub max_words: usize,
    pub max_font: u32,
    pub min_font: u32,
    /// Seed for colors and layout order; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub strategy: Strategy,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            min_length: 6,
            max_words: 100,
            max_font: 200,
            min_font: 40,
            seed: None,
            strategy: Strategy::default(),
        }
    }
}

impl Params {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            min_font: self.min_font,
            max_font: self.max_font,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Count the words of an in-place tokenized buffer. Keys borrow from `data`.
#[tracing::instrument(skip(data), fields(bytes = data.len()))]
pub fn count_in_place(data: &mut [u8], min_length: usize) -> FrequencyTable<&str> {
    let mut freqs = FrequencyTable::for_corpus_size(data.len() as u64);
    freqs.extend(WordTokenizer::new(data, min_length));
    tracing::debug!(unique = freqs.len(), "words counted");
    freqs
}

/// Count the words read from `reader`, sizing the table for `size_hint` bytes.
#[tracing::instrument(skip(reader))]
pub fn count_streamed<R: BufRead>(
    reader: R,
    min_length: usize,
    size_hint: u64,
) -> std::io::Result<FrequencyTable<String>> {
    let mut freqs = FrequencyTable::for_corpus_size(size_hint);
    for word in StreamTokenizer::new(reader, min_length) {
        freqs.record(word?);
    }
    tracing::debug!(unique = freqs.len(), "words counted");
    Ok(freqs)
}

/// Select and render the top words of a finished table.
fn finish<K>(freqs: FrequencyTable<K>, source: &str, params: &Params) -> Result<String>
where
    K: AsRef<str> + Eq + std::hash::Hash,
{
    let mut top = select_top(freqs.into_entries(), params.max_words)?;
    let mut rng = params.rng();
    render_html(&mut top, source, params.render_options(), &mut rng)
}

/// Run the whole pipeline over an already acquired corpus.
///
/// Folds the corpus to lowercase as a side effect.
pub fn html_for_corpus(corpus: &mut Corpus, source: &str, params: &Params) -> Result<String> {
    let freqs = count_in_place(corpus.data_mut(), params.min_length);
    finish(freqs, source, params)
}

/// Read the corpus at `path` and return its word cloud as an HTML document.
#[tracing::instrument(skip(path, params), fields(path = %path.display(), strategy = %params.strategy))]
pub fn generate_html(path: &Path, params: &Params) -> Result<String> {
    let name = path.display().to_string();
    match params.strategy {
        Strategy::MemoryMapped => {
            let mut corpus = Corpus::map(path)?;
            html_for_corpus(&mut corpus, &name, params)
        }
        Strategy::Streaming => {
            let file = File::open(path).map_err(|source| WordCloudError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            let size = file
                .metadata()
                .map_err(|source| WordCloudError::Size {
                    path: path.to_path_buf(),
                    source,
                })?
                .len();
            let freqs = count_streamed(BufReader::new(file), params.min_length, size).map_err(
                |source| WordCloudError::Read {
                    path: path.to_path_buf(),
                    source,
                },
            )?;
            finish(freqs, &name, params)
        }
    }
}
