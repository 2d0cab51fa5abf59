//! Display names for the two marks.

use crate::Mark;

/// One display name per mark. Names are free text and never used as keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Names for X and O.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Name shown for `mark`.
    pub fn get(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Editable name buffer for `mark`.
    pub fn get_mut(&mut self, mark: Mark) -> &mut String {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("Player X", "Player O")
    }
}
