use std::time::Duration;

pub const TYPE_SPEED: Duration = Duration::from_millis(80);
pub const DELETE_SPEED: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Types each word one character at a time, holds it, deletes it, and moves
/// on to the next word forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    len: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word: 0,
            len: 0,
            phase: Phase::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or_default()
    }

    /// The currently visible prefix of the current word.
    pub fn text(&self) -> &'static str {
        let word = self.current();
        match word.char_indices().nth(self.len) {
            Some((i, _)) => &word[..i],
            None => word,
        }
    }

    /// Advances one step and returns how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        if self.words.is_empty() {
            return TYPE_SPEED;
        }
        let word_len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                self.len = (self.len + 1).min(word_len);
                if self.len == word_len {
                    self.phase = Phase::Deleting;
                    HOLD_DELAY
                } else {
                    TYPE_SPEED
                }
            }
            Phase::Deleting => {
                self.len = self.len.saturating_sub(1);
                if self.len == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    TYPE_SPEED
                } else {
                    DELETE_SPEED
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WORDS: &[&str] = &["ab", "c"];

    #[test]
    fn test_full_cycle() {
        let mut tw = Typewriter::new(WORDS);
        assert_eq!(tw.text(), "");

        let steps = (0..8)
            .map(|_| {
                let delay = tw.tick();
                (tw.text(), delay)
            })
            .collect::<Vec<_>>();

        assert_eq!(
            steps,
            vec![
                ("a", TYPE_SPEED),
                ("ab", HOLD_DELAY),
                ("a", DELETE_SPEED),
                ("", TYPE_SPEED),
                ("c", HOLD_DELAY),
                ("", TYPE_SPEED),
                ("a", TYPE_SPEED),
                ("ab", HOLD_DELAY),
            ]
        );
    }

    #[test]
    fn test_multibyte_words() {
        static WORDS: &[&str] = &["→é"];
        let mut tw = Typewriter::new(WORDS);
        tw.tick();
        assert_eq!(tw.text(), "→");
        tw.tick();
        assert_eq!(tw.text(), "→é");
    }

    #[test]
    fn test_no_words() {
        let mut tw = Typewriter::new(&[]);
        assert_eq!(tw.tick(), TYPE_SPEED);
        assert_eq!(tw.text(), "");
    }
}
