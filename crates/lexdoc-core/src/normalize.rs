//! Text normalization pipeline.
//!
//! A pure function from an [`Algorithm`] selector and raw text to
//! transformed text. Documents run it once at construction; the store and
//! similarity code only ever see its output.
//!
//! | Algorithm | Output |
//! |-----------|--------|
//! | [`Algorithm::Clean`] | lowercased words, noise characters and stop words removed, one line per non-blank input line |
//! | [`Algorithm::CleanLines`] | all whitespace runs collapsed to one space |
//! | [`Algorithm::CleanSpaces`] | all whitespace removed |
//! | [`Algorithm::Java`] | Java source with comments removed |
//!
//! No algorithm emits more characters than it receives, which keeps
//! [`Document::useful_text_ratio`](crate::document::Document::useful_text_ratio)
//! within `[0, 1]`.
//!
//! # Example
//!
//! ```rust
//! use lexdoc_core::normalize::{transform, Algorithm};
//!
//! let cleaned = transform(Algorithm::Clean, "A happy house, is a beautiful house!");
//! assert_eq!(cleaned, "happy house beautiful house");
//! ```

/// Selects one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Generic noise stripping.
    Clean,
    /// Line-level whitespace collapsing, used for term splitting.
    CleanLines,
    /// Whitespace-only removal, used for the density metric.
    CleanSpaces,
    /// Java syntax-noise stripping (comments and Javadoc).
    Java,
}

/// Function words dropped by [`Algorithm::Clean`] (English and Portuguese).
///
/// Java keywords are kept out of this list so source documents keep them.
const STOP_WORDS: &[&str] = &[
    "a", "am", "an", "and", "ao", "aos", "are", "as", "at", "be", "been", "but", "by", "com",
    "da", "das", "de", "dos", "e", "em", "from", "in", "into", "is", "it", "its", "na", "nas",
    "no", "nos", "o", "of", "on", "or", "os", "ou", "para", "por", "que", "se", "that", "the",
    "to", "um", "uma", "umas", "uns", "was", "were", "with", "é",
];

/// Apply one normalization pass to `text`.
pub fn transform(algorithm: Algorithm, text: &str) -> String {
    match algorithm {
        Algorithm::Clean => clean(text),
        Algorithm::CleanLines => text.split_whitespace().collect::<Vec<_>>().join(" "),
        Algorithm::CleanSpaces => text.chars().filter(|c| !c.is_whitespace()).collect(),
        Algorithm::Java => strip_java(text),
    }
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

fn clean(text: &str) -> String {
    text.lines()
        .filter_map(|line| {
            let folded: String = line.chars().map(fold_char).collect();
            let words: Vec<&str> = folded
                .split_whitespace()
                .filter(|w| !is_stop_word(w))
                .collect();
            if words.is_empty() {
                None
            } else {
                Some(words.join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lowercase word characters, blank out everything else that is not whitespace.
///
/// Lowercasing is skipped for the few characters whose lowercase form is
/// longer than one `char`.
fn fold_char(c: char) -> char {
    if c.is_alphanumeric() || c == '_' {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => c,
        }
    } else if c.is_whitespace() {
        c
    } else {
        ' '
    }
}

fn strip_java(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) | ('\'', _) => {
                out.push(c);
                let mut escaped = false;
                for lc in chars.by_ref() {
                    out.push(lc);
                    if escaped {
                        escaped = false;
                    } else if lc == '\\' {
                        escaped = true;
                    } else if lc == c || lc == '\n' {
                        break;
                    }
                }
            }
            ('/', Some('/')) => {
                // Keep the newline so line structure survives.
                while let Some(&lc) = chars.peek() {
                    if lc == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for bc in chars.by_ref() {
                    if prev == '*' && bc == '/' {
                        break;
                    }
                    prev = bc;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}
