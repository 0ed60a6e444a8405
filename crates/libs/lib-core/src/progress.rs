//! # Progress Indicator
//!
//! Maps `(current, total)` to one [`Segment`] per step.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Completed,
    Active,
    Pending,
}

impl Segment {
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Completed => "completed",
            Segment::Active => "active",
            Segment::Pending => "pending",
        }
    }
}

/// Segment states for a progress row of `total` steps.
///
/// Indexes below `current` are completed, `current` itself is active and the
/// rest are pending. A `current` at or past `total` marks every segment
/// completed.
pub fn segments(current: usize, total: usize) -> Vec<Segment> {
    (0..total)
        .map(|index| match index.cmp(&current) {
            std::cmp::Ordering::Less => Segment::Completed,
            std::cmp::Ordering::Equal => Segment::Active,
            std::cmp::Ordering::Greater => Segment::Pending,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_step() {
        assert_eq!(
            segments(2, 4),
            vec![Segment::Completed, Segment::Completed, Segment::Active, Segment::Pending]
        );
    }

    #[test]
    fn test_first_and_last_step() {
        assert_eq!(
            segments(0, 4),
            vec![Segment::Active, Segment::Pending, Segment::Pending, Segment::Pending]
        );
        assert_eq!(segments(3, 4).last(), Some(&Segment::Active));
    }

    #[test]
    fn test_edge_sizes() {
        assert!(segments(0, 0).is_empty());
        assert_eq!(segments(5, 2), vec![Segment::Completed, Segment::Completed]);
    }
}
