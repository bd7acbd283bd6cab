//! Recursive separator-based text splitting.
//!
//! Splits a transcript into bounded-size chunks along a priority-ordered
//! separator list. The splitter tries the first separator that occurs in the
//! text, recurses with the remaining separators for pieces that are still too
//! large, and greedily merges small pieces back together. The empty-string
//! terminal separator splits into single characters, so chunking always
//! terminates.
//!
//! Separators are never dropped: each occurrence stays glued to the front of
//! the piece that follows it. With zero overlap, concatenating the chunks in
//! order reproduces the input exactly.

use crate::defaults;
use std::collections::VecDeque;

/// Recursive character splitter with a configurable separator priority.
///
/// Sizes are measured in characters, not bytes. The default configuration
/// targets Japanese transcripts (paragraph break, line break, `。`, `、`,
/// space, character fallback) with 1000-character chunks and no overlap.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    max_chunk_chars: usize,
    overlap_chars: usize,
    separators: Vec<String>,
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(
            defaults::MAX_CHUNK_CHARS,
            defaults::CHUNK_OVERLAP_CHARS,
            defaults::SEPARATOR_PRIORITY
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split `text` on `separator`, keeping each separator occurrence glued to
/// the front of the piece that follows it. The empty separator splits into
/// single characters. Empty pieces are dropped.
fn split_keeping_separator(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }

    let mut pieces = Vec::new();
    for (i, part) in text.split(separator).enumerate() {
        if i == 0 {
            if !part.is_empty() {
                pieces.push(part.to_string());
            }
        } else {
            let mut piece = String::with_capacity(separator.len() + part.len());
            piece.push_str(separator);
            piece.push_str(part);
            pieces.push(piece);
        }
    }
    pieces
}

impl TextSplitter {
    pub fn new(max_chunk_chars: usize, overlap_chars: usize, separators: Vec<String>) -> Self {
        Self {
            max_chunk_chars,
            overlap_chars,
            separators,
        }
    }

    pub fn max_chunk_chars(&self) -> usize {
        self.max_chunk_chars
    }

    pub fn overlap_chars(&self) -> usize {
        self.overlap_chars
    }

    /// Split `text` into chunks of at most `max_chunk_chars` characters.
    ///
    /// Chunks come back in textual order. The bound can only be exceeded
    /// when a piece is indivisible under the finest configured separator,
    /// which cannot happen while the empty-string fallback is present.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        self.split_recursive(text, &self.separators, &mut chunks);
        chunks
    }

    fn split_recursive(&self, text: &str, separators: &[String], out: &mut Vec<String>) {
        // Pick the first separator that occurs in the text; fall back to the
        // last one. The separators after the chosen one handle recursion.
        let mut separator: &str = separators.last().map(String::as_str).unwrap_or("");
        let mut remaining: &[String] = &[];
        for (i, sep) in separators.iter().enumerate() {
            if sep.is_empty() {
                separator = "";
                remaining = &[];
                break;
            }
            if text.contains(sep.as_str()) {
                separator = sep;
                remaining = &separators[i + 1..];
                break;
            }
        }

        let mut good: Vec<String> = Vec::new();
        for piece in split_keeping_separator(text, separator) {
            if char_len(&piece) < self.max_chunk_chars {
                good.push(piece);
            } else {
                if !good.is_empty() {
                    self.merge_pieces(std::mem::take(&mut good), out);
                }
                if remaining.is_empty() {
                    // Indivisible under the finest separator: emitted oversized.
                    out.push(piece);
                } else {
                    self.split_recursive(&piece, remaining, out);
                }
            }
        }
        if !good.is_empty() {
            self.merge_pieces(good, out);
        }
    }

    /// Greedily pack pieces (each under the chunk budget) into chunks of at
    /// most `max_chunk_chars`, joined with nothing between them. When
    /// overlap is configured, the tail pieces of an emitted chunk seed the
    /// next one, up to `overlap_chars` characters.
    fn merge_pieces(&self, pieces: Vec<String>, out: &mut Vec<String>) {
        let mut current: VecDeque<String> = VecDeque::new();
        let mut total = 0usize;

        for piece in pieces {
            let piece_len = char_len(&piece);
            if total + piece_len > self.max_chunk_chars && !current.is_empty() {
                out.push(current.iter().map(String::as_str).collect());
                while total > self.overlap_chars
                    || (total + piece_len > self.max_chunk_chars && total > 0)
                {
                    let front_len = current
                        .pop_front()
                        .map(|front| char_len(&front))
                        .unwrap_or(0);
                    total -= front_len;
                }
            }
            total += piece_len;
            current.push_back(piece);
        }
        if !current.is_empty() {
            out.push(current.iter().map(String::as_str).collect());
        }
    }
}
