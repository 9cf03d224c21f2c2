//! HTML word cloud rendering.

use crate::error::{Result, WordCloudError};
use crate::top_n::count_range;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::fmt::Write as _;

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0, shrink-to-fit=yes">
        <title>Word Frequencies</title>
    </head>
<body>"#;

const HTML_FOOTER: &str = "</body></html>\n";

/// Rough size of one serialized span tag, for reserving the output.
const APPROX_TAG_BYTES: usize = 150;

/// An RGB color, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Each channel drawn independently and uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.r#gen(),
            g: rng.r#gen(),
            b: rng.r#gen(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Linear map from word count to font size in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    min_freq: u32,
    min_font: u32,
    max_font: u32,
    /// `None` when every count is the same.
    px_per_count: Option<f64>,
}

impl FontScale {
    pub fn new(min_freq: u32, max_freq: u32, min_font: u32, max_font: u32) -> Result<Self> {
        if min_font > max_font {
            return Err(WordCloudError::InvalidFontRange {
                min: min_font,
                max: max_font,
            });
        }
        let px_per_count = (max_freq > min_freq)
            .then(|| f64::from(max_font - min_font) / f64::from(max_freq - min_freq));
        if px_per_count.is_none() {
            tracing::debug!(freq = min_freq, "all counts equal, using minimum font size");
        }
        Ok(Self {
            min_freq,
            min_font,
            max_font,
            px_per_count,
        })
    }

    pub fn is_degenerate(&self) -> bool {
        self.px_per_count.is_none()
    }

    pub fn font_size(&self, count: u32) -> u32 {
        let Some(scale) = self.px_per_count else {
            return self.min_font;
        };
        let delta = f64::from(count.saturating_sub(self.min_freq));
        let px = (delta * scale + f64::from(self.min_font)).round();
        (px as u32).clamp(self.min_font, self.max_font)
    }
}

/// Visual form of one selected word.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanTag<'w> {
    pub word: &'w str,
    pub count: u32,
    pub font_size: u32,
    pub color: Color,
}

impl fmt::Display for SpanTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<span style="font-size: {}px; color: {};" title="The word '{}' occurs {} times">{}</span>"#,
            self.font_size, self.color, self.word, self.count, self.word
        )
    }
}

/// Font size bounds in px.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub min_font: u32,
    pub max_font: u32,
}

/// Shuffle `entries` and serialize them as an HTML word cloud.
///
/// `source` names the corpus in the heading. Fails with `EmptySelection` on
/// an empty slice rather than produce a document with no range to scale.
#[tracing::instrument(skip(entries, rng), fields(words = entries.len()))]
pub fn render_html<K, R>(
    entries: &mut [(K, u32)],
    source: &str,
    options: RenderOptions,
    rng: &mut R,
) -> Result<String>
where
    K: AsRef<str>,
    R: Rng + ?Sized,
{
    let (min_freq, max_freq) = count_range(entries).ok_or(WordCloudError::EmptySelection)?;
    let scale = FontScale::new(min_freq, max_freq, options.min_font, options.max_font)?;

    // Hash-table order differs between runs; start the shuffle from a fixed
    // order so a seeded rng always yields the same page.
    entries.sort_unstable_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));
    entries.shuffle(rng);

    let mut html = String::with_capacity(
        HTML_HEADER.len() + HTML_FOOTER.len() + 100 + entries.len() * APPROX_TAG_BYTES,
    );
    html.push_str(HTML_HEADER);
    // Writing to a String cannot fail.
    let _ = write!(
        html,
        "<h1>The {} most frequent words in {}</h1>",
        entries.len(),
        escape_html(source)
    );
    for (word, count) in entries.iter() {
        let tag = SpanTag {
            word: word.as_ref(),
            count: *count,
            font_size: scale.font_size(*count),
            color: Color::random(rng),
        };
        let _ = writeln!(html, "{tag}");
    }
    html.push_str(HTML_FOOTER);

    Ok(html)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
