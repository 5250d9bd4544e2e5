//! Bounded buffer of typed characters shown on the status line

use crate::consts::INPUT_CAPACITY;

/// Typed characters, never more than `INPUT_CAPACITY`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    chars: Vec<char>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            chars: Vec::with_capacity(INPUT_CAPACITY),
        }
    }

    /// Append characters one at a time while there is room.
    /// Anything past capacity is dropped silently.
    pub fn append<I>(&mut self, new_chars: I)
    where
        I: IntoIterator<Item = char>,
    {
        for ch in new_chars {
            if self.chars.len() >= INPUT_CAPACITY {
                break;
            }
            self.chars.push(ch);
        }
    }

    /// Remove the last character, if any
    pub fn delete_last(&mut self) {
        self.chars.pop();
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}
