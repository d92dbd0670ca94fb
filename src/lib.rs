//! This crate provides an implementation of D. E. Knuth's algorithm for
//! solving the exact cover problem on a 0/1 matrix.
//!
//! Suppose we're given a matrix $A$ of 0s and 1s; the _exact cover_ problem
//! is to find a set of rows of $A$ containing exactly one 1 in each column.
//! In other words, if the columns stand for constraints and every row is a
//! candidate choice that satisfies some of them, we want a selection of
//! choices that satisfies every constraint exactly once. Puzzles such as
//! Sudoku, polyomino tiling and the $n$ queens problem are easily encoded
//! in this form.
//!
//! Knuth proposed a method that visits all exact covers in the paper
//! "Dancing Links", [arXiv:cs/0011047][dl] [cs.DS] (2000), whose title refers
//! to a clever yet simple technique for deleting and restoring the nodes of
//! a doubly linked list. His backtracking scheme, called _Algorithm X_,
//! keeps one circular list per column and one per row, and employs this
//! "waltzing" of links to remove a column together with every row that
//! conflicts with it, and to put them back in place when backtracking.
//! The column with the fewest remaining 1s is always branched on first.
//! [For further information, see Section 7.2.2.1 of [_The Art of Computer Programming_ **4B** (2022)][taocp4b],
//! Part 2, 65–70.]
//!
//! The [`solve`] function is the entry point of this crate. It builds the
//! linked structure of the matrix, runs Algorithm X on it, and returns the
//! positions of the rows in every solution, optionally stopping after a
//! given number of solutions (see [`SolveOptions`]). The search is iterative,
//! so very wide matrices do not exhaust the call stack.
//!
//! Progress is reported through the [`log`] facade at the `debug` and `trace`
//! levels; this crate never installs a logger.
//!
//! Also, the `demos` directory contains programs that apply [`solve`] to
//! some classic problems:
//! - `domino_tiling.rs` counts the ways to pack dominoes into a board.
//! - `langford_pairs.rs` finds all [Langford pairings] of $2n$ numbers.
//!
//! [dl]: https://arxiv.org/pdf/cs/0011047.pdf
//! [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4
//! [`log`]: https://docs.rs/log
//! [Langford pairings]: https://en.wikipedia.org/wiki/Langford_pairing

mod cell;
mod error;
mod indices;
mod matrix;
mod options;
mod search;

pub use cell::Cell;
pub use error::{Error, ShapeError};
pub use options::SolveOptions;

use log::{debug, trace};
use matrix::Links;
use search::Solver;
use std::ops::ControlFlow;

/// Finds the exact covers of a 0/1 matrix.
///
/// Each element of `matrix` is a row, and every row must have the same
/// number of entries; an entry is a 1 of the matrix if it is
/// [present](`Cell::is_present`). A solution is a list of row positions
/// such that the chosen rows, summed entrywise, give a row of 1s. The rows
/// of a solution appear in the order in which the search chose them, which
/// need not be ascending.
///
/// The search visits every solution unless `options` sets a cap, in which
/// case it stops as soon as that many solutions have been found. The result
/// is empty if the matrix has no exact cover; in particular, this happens
/// whenever some column has no 1s. A matrix whose rows are all empty
/// sequences has exactly one solution, the empty set of rows.
///
/// # Errors
///
/// Returns [`Error::InvalidMatrixShape`] if `matrix` has no rows, or if some
/// row does not have as many entries as the first one. The matrix is
/// checked before the search begins, which cannot fail.
///
/// # Examples
///
/// Rows 1, 3 and 5 of the following matrix cover each of its 7 columns
/// exactly once, and there is no other way to do so:
///
/// ```
/// use matrix_covers::{solve, SolveOptions};
///
/// let matrix = [
///     [1, 0, 0, 1, 0, 0, 1],
///     [1, 0, 0, 1, 0, 0, 0],
///     [0, 0, 0, 1, 1, 0, 1],
///     [0, 0, 1, 0, 1, 1, 0],
///     [0, 1, 1, 0, 0, 1, 1],
///     [0, 1, 0, 0, 0, 0, 1],
/// ];
/// let solutions = solve(&matrix, SolveOptions::default())?;
/// assert_eq!(solutions, [[1, 3, 5]]);
/// # Ok::<(), matrix_covers::Error>(())
/// ```
///
/// Here's a matrix with many solutions, of which we only want the first two.
/// The entries can be of any type that implements [`Cell`]:
///
/// ```
/// use matrix_covers::{solve, SolveOptions};
///
/// let matrix = vec![
///     vec![true, false],
///     vec![false, true],
///     vec![true, true],
///     vec![true, false],
/// ];
/// let solutions = solve(&matrix, SolveOptions::with_max_solutions(2))?;
/// assert_eq!(solutions.len(), 2);
///
/// // Ragged matrices are rejected.
/// let ragged = vec![vec![1, 0], vec![1]];
/// assert!(solve(&ragged, SolveOptions::default()).is_err());
/// # Ok::<(), matrix_covers::Error>(())
/// ```
pub fn solve<R, T>(matrix: &[R], options: SolveOptions) -> Result<Vec<Vec<usize>>, Error>
where
    R: AsRef<[T]>,
    T: Cell,
{
    let links = Links::from_rows(matrix)?;
    debug!(
        "solving exact cover of {} rows, {} columns and {} nonzero entries",
        links.row_count(),
        links.column_count(),
        links.data_node_count()
    );

    let mut solutions: Vec<Vec<usize>> = Vec::new();
    let mut solver = Solver::new(links);
    let flow = solver.solve(|solution| {
        trace!(
            "found solution #{} with {} rows",
            solutions.len() + 1,
            solution.row_count()
        );
        solutions.push(solution.rows().collect());
        if options.is_satisfied_by(solutions.len()) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    debug!(
        "found {} solutions with {} updates",
        solutions.len(),
        solver.updates()
    );
    if flow.is_break() {
        debug!("stopped the search at the cap of {} solutions", solutions.len());
    }
    Ok(solutions)
}
