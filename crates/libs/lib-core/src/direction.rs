//! # Transition Direction
//!
//! Which way a step change slides on screen. Purely cosmetic: the wizard
//! records it after every step change, and nothing in the form logic reads it.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a move from `from` to `to`, by the sign of `to - from`.
    ///
    /// Returns `None` when the index does not change.
    ///
    /// ```rust
    /// use lib_core::Direction;
    ///
    /// assert_eq!(Direction::between(1, 2), Some(Direction::Forward));
    /// assert_eq!(Direction::between(2, 1), Some(Direction::Backward));
    /// assert_eq!(Direction::between(3, 3), None);
    /// ```
    pub fn between(from: usize, to: usize) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Direction::Forward),
            std::cmp::Ordering::Less => Some(Direction::Backward),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Lowercase name, used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}
