use crate::Error;
use std::num::NonZeroUsize;

/// Controls how much of the search tree [`solve`](crate::solve) explores.
///
/// The default value asks for every solution.
///
/// # Examples
///
/// ```
/// use matrix_covers::SolveOptions;
///
/// assert_eq!(SolveOptions::default().max_solutions(), None);
/// assert_eq!(SolveOptions::with_max_solutions(0), SolveOptions::all());
///
/// let first_two = SolveOptions::with_max_solutions(2);
/// assert_eq!(first_two.max_solutions().map(|n| n.get()), Some(2));
///
/// // Counts coming from signed sources are checked.
/// assert!(SolveOptions::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SolveOptions {
    /// The number of solutions after which the search stops, or [`None`]
    /// if the search tree must be explored exhaustively.
    max_solutions: Option<NonZeroUsize>,
}

impl SolveOptions {
    /// Returns options that ask for all solutions.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            max_solutions: None,
        }
    }

    /// Returns options that stop the search as soon as `max_solutions`
    /// solutions have been found. A value of 0 means that there is no cap.
    #[must_use]
    pub const fn with_max_solutions(max_solutions: usize) -> Self {
        Self {
            max_solutions: NonZeroUsize::new(max_solutions),
        }
    }

    /// Returns the solution cap, if any.
    #[must_use]
    pub const fn max_solutions(&self) -> Option<NonZeroUsize> {
        self.max_solutions
    }

    /// Returns whether `found` solutions are enough to stop the search.
    pub(crate) fn is_satisfied_by(&self, found: usize) -> bool {
        self.max_solutions.is_some_and(|max| found >= max.get())
    }
}

impl TryFrom<i64> for SolveOptions {
    type Error = Error;

    fn try_from(max_solutions: i64) -> Result<Self, Self::Error> {
        usize::try_from(max_solutions)
            .map(Self::with_max_solutions)
            .map_err(|_| Error::InvalidOptions { max_solutions })
    }
}
