use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Physical line counts for one file or a set of files.
///
/// Every line lands in exactly one bucket, so `total()` is always the sum
/// of the three counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineCounts {
    pub blank: usize,
    pub comment: usize,
    pub code: usize,
}

impl LineCounts {
    #[must_use]
    pub const fn new(blank: usize, comment: usize, code: usize) -> Self {
        Self {
            blank,
            comment,
            code,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.blank + self.comment + self.code
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.blank += other.blank;
        self.comment += other.comment;
        self.code += other.code;
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for LineCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for LineCounts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
