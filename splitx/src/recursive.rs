use super::{ChunkerError, DEFAULT_OVERLAP, DEFAULT_SEPARATORS, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Where a matched separator ends up after splitting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeparatorPlacement {
    /// Attach the separator to the start of the following piece.
    #[default]
    Start,

    /// Attach the separator to the end of the preceding piece.
    End,

    /// Drop the separator and put it back between merged pieces.
    Discard,
}

/// Splits text recursively by a prioritised list of separators.
///
/// The first separator found in the input is used to split it into pieces.
/// Pieces shorter than `size` are kept, longer pieces are split again with the
/// separators following the one that was used. Kept pieces are then greedily
/// merged into chunks of at most `size` characters, each chunk starting with
/// up to `overlap` characters of whole pieces carried over from the previous one.
///
/// All lengths are counted in `char`s.
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    size: usize,
    overlap: usize,
    separators: Vec<String>,
    placement: SeparatorPlacement,
    trim: bool,
}

impl RecursiveSplitter {
    /// Create a new `RecursiveSplitter`.
    ///
    /// Errors if `size` is 0, if `overlap` is not less than `size`, or if
    /// `separators` does not end with the empty separator.
    pub fn new<S: Into<String>>(
        size: usize,
        overlap: usize,
        separators: impl IntoIterator<Item = S>,
    ) -> Result<Self, ChunkerError> {
        let separators = separators.into_iter().map(Into::into).collect::<Vec<_>>();

        if size == 0 {
            return Err(ChunkerError::Config(
                "size must be greater than 0".to_string(),
            ));
        }

        if overlap >= size {
            return Err(ChunkerError::Config(format!(
                "overlap ({overlap}) must be less than size ({size})"
            )));
        }

        match separators.last() {
            None => {
                return Err(ChunkerError::Config(
                    "at least one separator is required".to_string(),
                ))
            }
            Some(last) if !last.is_empty() => {
                return Err(ChunkerError::Config(
                    "the last separator must be the empty string".to_string(),
                ))
            }
            Some(_) => {}
        }

        Ok(Self {
            size,
            overlap,
            separators,
            placement: SeparatorPlacement::default(),
            trim: true,
        })
    }

    pub fn keep_separator(mut self, placement: SeparatorPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Whether to strip surrounding whitespace from every chunk. On by default.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    pub fn split(&self, input: &str) -> Vec<String> {
        let mut chunks = vec![];

        self.split_recursive(input, &self.separators, &mut chunks);

        debug!(
            "Chunked {} chunks, avg chunk size: {}",
            chunks.len(),
            if chunks.is_empty() {
                0
            } else {
                chunks.iter().map(|c| c.chars().count()).sum::<usize>() / chunks.len()
            }
        );

        chunks
    }

    /// Split `input` with the first separator from `separators` that occurs in it
    /// and push the merged results to `chunks`.
    ///
    /// Pieces that are still too large get another round with the remaining separators.
    /// Any pieces accumulated before a large one are merged first so the
    /// chunks keep the order of the input.
    fn split_recursive(&self, input: &str, separators: &[String], chunks: &mut Vec<String>) {
        let Some(idx) = separators
            .iter()
            .position(|sep| sep.is_empty() || input.contains(sep.as_str()))
        else {
            self.push_chunk(input, chunks);
            return;
        };

        let separator = separators[idx].as_str();
        let rest = &separators[idx + 1..];

        let joiner = match self.placement {
            SeparatorPlacement::Discard => separator,
            SeparatorPlacement::Start | SeparatorPlacement::End => "",
        };

        let mut accepted = vec![];

        for piece in self.split_on(input, separator) {
            let len = piece.chars().count();

            if len < self.size {
                accepted.push((piece, len));
                continue;
            }

            if !accepted.is_empty() {
                self.merge(&accepted, joiner, chunks);
                accepted.clear();
            }

            if rest.is_empty() {
                self.push_chunk(piece, chunks);
            } else {
                self.split_recursive(piece, rest, chunks);
            }
        }

        if !accepted.is_empty() {
            self.merge(&accepted, joiner, chunks);
        }
    }

    fn split_on<'a>(&self, input: &'a str, separator: &str) -> Vec<&'a str> {
        if separator.is_empty() {
            return input
                .char_indices()
                .map(|(i, ch)| &input[i..i + ch.len_utf8()])
                .collect();
        }

        let pieces = match self.placement {
            SeparatorPlacement::Start => {
                let mut pieces = vec![];
                let mut start = 0;
                for (idx, _) in input.match_indices(separator) {
                    pieces.push(&input[start..idx]);
                    start = idx;
                }
                pieces.push(&input[start..]);
                pieces
            }
            SeparatorPlacement::End => input.split_inclusive(separator).collect(),
            SeparatorPlacement::Discard => input.split(separator).collect(),
        };

        pieces.into_iter().filter(|p| !p.is_empty()).collect()
    }

    /// Greedily merge `pieces` into chunks.
    ///
    /// When the next piece does not fit, the current buffer becomes a chunk and
    /// pieces are dropped from its front until at most `overlap` characters remain
    /// and the next piece fits. What is left is the start of the next chunk.
    fn merge(&self, pieces: &[(&str, usize)], joiner: &str, chunks: &mut Vec<String>) {
        let joiner_len = joiner.chars().count();

        let mut buffer: VecDeque<(&str, usize)> = VecDeque::new();
        let mut total = 0;

        // Joiner length added in front of the next piece.
        let joined = |buffer_len: usize| if buffer_len == 0 { 0 } else { joiner_len };

        for &(piece, len) in pieces {
            if total + len + joined(buffer.len()) > self.size && !buffer.is_empty() {
                self.push_chunk(&join(&buffer, joiner), chunks);

                while total > self.overlap
                    || (total > 0 && total + len + joined(buffer.len()) > self.size)
                {
                    let Some((_, front)) = buffer.pop_front() else {
                        break;
                    };
                    total -= front + joined(buffer.len());
                }
            }

            total += len + joined(buffer.len());
            buffer.push_back((piece, len));
        }

        if !buffer.is_empty() {
            self.push_chunk(&join(&buffer, joiner), chunks);
        }
    }

    fn push_chunk(&self, chunk: &str, chunks: &mut Vec<String>) {
        let chunk = if self.trim { chunk.trim() } else { chunk };
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
    }
}

impl Default for RecursiveSplitter {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            overlap: DEFAULT_OVERLAP,
            separators: DEFAULT_SEPARATORS.iter().map(ToString::to_string).collect(),
            placement: SeparatorPlacement::default(),
            trim: true,
        }
    }
}

fn join(buffer: &VecDeque<(&str, usize)>, joiner: &str) -> String {
    buffer
        .iter()
        .map(|(piece, _)| *piece)
        .collect::<Vec<_>>()
        .join(joiner)
}
