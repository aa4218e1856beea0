//! Line wrapping by character count
//!
//! Two policies share one entry point:
//! - Character: break between any two characters, keeping closing Japanese
//!   punctuation on the preceding line (may overflow by one character)
//! - Word: break between whitespace-delimited words, splitting words that
//!   are longer than the width into hard chunks
//!
//! Width is a plain character count; every `char` is one unit.

use crate::core::error::Txt2SvgError;

/// Default maximum characters per output line
pub const DEFAULT_LINE_WIDTH: usize = 25;

/// Characters that must never open a line in character mode
const FORBIDDEN_LINE_START: &[char] = &['。', '、', '？', '！'];

/// Wrapping policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Character-granular, for scripts without word spacing (CJK)
    #[default]
    Character,
    /// Word-granular with a character-level fallback for long words
    Word,
}

impl std::str::FromStr for WrapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "char" => Ok(WrapMode::Character),
            "word" => Ok(WrapMode::Word),
            _ => Err(format!("Unknown wrap mode: {}", s)),
        }
    }
}

impl std::fmt::Display for WrapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WrapMode::Character => write!(f, "char"),
            WrapMode::Word => write!(f, "word"),
        }
    }
}

/// Check if a character is closing punctuation that may not start a line
#[inline]
pub fn is_forbidden_line_start(c: char) -> bool {
    FORBIDDEN_LINE_START.contains(&c)
}

/// A validated width + mode pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper {
    width: usize,
    mode: WrapMode,
}

impl Wrapper {
    /// Create a wrapper, rejecting a zero width
    pub fn new(width: usize, mode: WrapMode) -> Result<Self, Txt2SvgError> {
        if width == 0 {
            return Err(Txt2SvgError::InvalidWidth(width));
        }
        Ok(Self { width, mode })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mode(&self) -> WrapMode {
        self.mode
    }

    /// Wrap text and join the output lines with `\n`
    pub fn wrap(&self, text: &str) -> String {
        self.wrap_lines(text).join("\n")
    }

    /// Wrap every logical line of `text`, preserving their order
    pub fn wrap_lines(&self, text: &str) -> Vec<String> {
        text.split('\n')
            .flat_map(|line| self.wrap_line(line))
            .collect()
    }

    /// Wrap a single logical line.
    ///
    /// A blank line yields exactly one empty line; anything else yields at
    /// least one non-empty line.
    pub fn wrap_line(&self, line: &str) -> Vec<String> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            return vec![String::new()];
        }

        let mut out = Vec::new();
        match self.mode {
            WrapMode::Character => self.wrap_chars(line, &mut out),
            WrapMode::Word => self.wrap_words(line, &mut out),
        }
        out
    }

    fn wrap_chars(&self, line: &str, out: &mut Vec<String>) {
        let mut current = String::new();
        let mut current_len = 0usize;

        for c in line.chars() {
            if current_len == 0 && c == ' ' {
                continue;
            }

            if current_len < self.width {
                current.push(c);
                current_len += 1;
            } else if c == ' ' {
                // Break point on a full line; the next character decides
                continue;
            } else if is_forbidden_line_start(c) {
                // Overflow by one rather than open the next line with it
                current.push(c);
                out.push(std::mem::take(&mut current));
                current_len = 0;
            } else {
                if current_len > 0 {
                    out.push(std::mem::take(&mut current));
                }
                current.push(c);
                current_len = 1;
            }
        }

        if current_len > 0 {
            out.push(current);
        }
    }

    fn wrap_words(&self, line: &str, out: &mut Vec<String>) {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let joined_len = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };

            if joined_len <= self.width {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = joined_len;
                continue;
            }

            if current_len > 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }

            if word_len <= self.width {
                current.push_str(word);
                current_len = word_len;
                continue;
            }

            // Word longer than the line: hard chunks, last one carries forward
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(self.width).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    out.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
        }

        if current_len > 0 {
            out.push(current);
        }
    }
}
