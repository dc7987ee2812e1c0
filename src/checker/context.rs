use crate::CheckError;

/// A word from the input: 1-based line, 0-based column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub line: usize,
    pub column: usize,
}

/// One position in the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Word(Token),
    /// Padding pushed after the last real token so it can reach the center.
    Sentinel,
}

/// Sliding window of `2 * radius + 1` tokens over the input.
///
/// The centered slot lags the newest insertion by `radius`, so it is the word
/// under review while the slots around it provide reporting context.
#[derive(Debug)]
pub struct ContextWindow {
    slots: Vec<Option<Slot>>,
    radius: usize,
    inserted: usize,
}

impl ContextWindow {
    pub fn new(radius: usize) -> Result<Self, CheckError> {
        if radius < 1 {
            return Err(CheckError::InvalidRadius(radius));
        }

        Ok(Self {
            slots: vec![None; 2 * radius + 1],
            radius,
            inserted: 0,
        })
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn add(&mut self, word: impl Into<String>, line: usize, column: usize) {
        self.push(Slot::Word(Token {
            word: word.into(),
            line,
            column,
        }));
    }

    pub fn add_sentinel(&mut self) {
        self.push(Slot::Sentinel);
    }

    fn push(&mut self, slot: Slot) {
        let index = self.inserted % self.slots.len();
        self.slots[index] = Some(slot);
        self.inserted += 1;
    }

    /// The slot inserted `radius` insertions before the newest one, or `None`
    /// until `radius + 1` insertions have happened.
    pub fn centered(&self) -> Option<&Slot> {
        if self.inserted <= self.radius {
            return None;
        }

        let index = (self.inserted - 1 - self.radius) % self.slots.len();
        self.slots[index].as_ref()
    }

    /// Live words from oldest to newest, space separated.
    pub fn snapshot(&self) -> String {
        let capacity = self.slots.len();
        let oldest = self.inserted % capacity;

        (0..capacity)
            .filter_map(|offset| match &self.slots[(oldest + offset) % capacity] {
                Some(Slot::Word(token)) if !token.word.is_empty() => Some(token.word.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_word(window: &ContextWindow) -> Option<&str> {
        match window.centered() {
            Some(Slot::Word(token)) => Some(token.word.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_zero_radius_rejected() {
        assert!(matches!(
            ContextWindow::new(0),
            Err(CheckError::InvalidRadius(0))
        ));
    }

    #[test]
    fn test_centered_unavailable_until_radius_plus_one() {
        let mut window = ContextWindow::new(2).unwrap();
        window.add("one", 1, 1);
        assert!(window.centered().is_none());
        window.add("two", 1, 5);
        assert!(window.centered().is_none());

        window.add("three", 1, 9);
        assert_eq!(
            window.centered(),
            Some(&Slot::Word(Token {
                word: "one".to_string(),
                line: 1,
                column: 1,
            }))
        );
    }

    #[test]
    fn test_centered_follows_stream_after_wrapping() {
        let mut window = ContextWindow::new(1).unwrap();
        let words = ["a", "b", "c", "d", "e", "f", "g"];
        for (i, word) in words.iter().enumerate() {
            window.add(*word, 1, i + 1);
            if i >= 1 {
                assert_eq!(centered_word(&window), Some(words[i - 1]));
            }
        }
    }

    #[test]
    fn test_snapshot_oldest_to_newest() {
        let mut window = ContextWindow::new(1).unwrap();
        assert_eq!(window.snapshot(), "");

        window.add("the", 1, 1);
        window.add("cst", 1, 5);
        assert_eq!(window.snapshot(), "the cst");

        window.add("sat", 1, 9);
        assert_eq!(window.snapshot(), "the cst sat");

        window.add("down", 2, 1);
        assert_eq!(window.snapshot(), "cst sat down");
    }

    #[test]
    fn test_sentinels_reach_center_and_are_hidden() {
        let mut window = ContextWindow::new(2).unwrap();
        window.add("only", 1, 1);

        window.add_sentinel();
        assert!(window.centered().is_none());
        window.add_sentinel();
        assert_eq!(centered_word(&window), Some("only"));
        assert_eq!(window.snapshot(), "only");

        window.add_sentinel();
        assert_eq!(window.centered(), Some(&Slot::Sentinel));
    }
}
