use crate::indices::{ColumnIndex, NodeIndex};
use crate::matrix::{Links, Node, ROOT};
use std::ops::ControlFlow;

/// Visits all exact covers of a 0/1 matrix by means of dancing links.
///
/// More precisely, this structure embodies an implementation of Algorithm X,
/// as presented by D. E. Knuth in the paper "Dancing links", [arXiv:cs/0011047][dl]
/// [cs.DS] (2000), and in Section 7.2.2.1 of [_TAOCP_ **4B**][taocp4b], part 2,
/// pages 65–70. The recursion of the original procedure is replaced by an
/// explicit stack of node pointers, so the depth of the search tree is bounded
/// only by the available memory.
///
/// [dl]: https://arxiv.org/pdf/cs/0011047.pdf
/// [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4
pub(crate) struct Solver {
    /// The toroidal structure of the matrix.
    links: Links,
    /// A stack of data node pointers used for backtracking. The node at
    /// position $l$ belongs to the row chosen at level $l$ of the search.
    pointers: Vec<NodeIndex>,
    /// The number of times a node was deleted from a vertical list.
    updates: u64,
}

impl Solver {
    /// Creates a solver for the exact cover problem on the given matrix.
    pub(crate) fn new(links: Links) -> Self {
        Self {
            links,
            pointers: Vec::new(),
            updates: 0,
        }
    }

    /// Returns the number of link updates performed so far. This is Knuth's
    /// measure of the running time of Algorithm X.
    pub(crate) fn updates(&self) -> u64 {
        self.updates
    }

    // Algorithm X routines.

    /// Marks a column as covered by deleting it from the list of columns
    /// remaining to be covered (the horizontal list), and by deleting all of
    /// the rows that intersect the column from the other vertical lists.
    fn cover(&mut self, column: ColumnIndex) {
        // Delete `column` from the horizontal list.
        let header = *self.links.header(column);
        debug_assert!(
            self.links.header(header.prev).next == column,
            "column {column:?} is already covered"
        );
        self.links.header_mut(header.prev).next = header.next;
        self.links.header_mut(header.next).prev = header.prev;

        // Hide all rows containing `column`, from top to bottom.
        let head = header.head;
        let mut row_ix = self.links.node(head).down;
        while row_ix != head {
            // Proceed through the rest of the row from left to right.
            let mut cur_ix = self.links.node(row_ix).right;
            while cur_ix != row_ix {
                let Node {
                    up,
                    down,
                    right,
                    column: other,
                    ..
                } = *self.links.node(cur_ix);
                self.links.node_mut(up).down = down;
                self.links.node_mut(down).up = up;
                let size = &mut self.links.header_mut(other).size;
                debug_assert!(*size > 0, "vertical list of {other:?} is already empty");
                *size -= 1;
                self.updates += 1;
                cur_ix = right;
            }
            row_ix = self.links.node(row_ix).down;
        }
    }

    /// Undoes the updates made by the last [covering](`Self::cover`)
    /// operation. The rows that intersect the column are put back into
    /// their vertical lists in the opposite order, from bottom to top and
    /// from right to left, and then the column rejoins the horizontal list.
    fn uncover(&mut self, column: ColumnIndex) {
        let header = *self.links.header(column);
        // Covers and uncovers must nest, so the neighbors of `column` still
        // point past it.
        debug_assert!(
            self.links.header(header.prev).next == header.next
                && self.links.header(header.next).prev == header.prev,
            "column {column:?} is not detached from the horizontal list"
        );
        let head = header.head;
        let mut row_ix = self.links.node(head).up;
        while row_ix != head {
            let mut cur_ix = self.links.node(row_ix).left;
            while cur_ix != row_ix {
                let Node {
                    up,
                    down,
                    left,
                    column: other,
                    ..
                } = *self.links.node(cur_ix);
                self.links.header_mut(other).size += 1;
                self.links.node_mut(up).down = cur_ix;
                self.links.node_mut(down).up = cur_ix;
                cur_ix = left;
            }
            row_ix = self.links.node(row_ix).up;
        }

        // Put back `column` into the horizontal list.
        self.links.header_mut(header.prev).next = column;
        self.links.header_mut(header.next).prev = column;
    }

    /// Given a data node of the row chosen to cover its column, covers the
    /// other columns of the row, cyclically from left to right.
    fn cover_rest_of_row(&mut self, ix: NodeIndex) {
        let mut cur_ix = self.links.node(ix).right;
        while cur_ix != ix {
            let node = *self.links.node(cur_ix);
            self.cover(node.column);
            cur_ix = node.right;
        }
    }

    /// Undoes the updates made by [`Self::cover_rest_of_row`], uncovering
    /// the other columns of the row cyclically from right to left.
    fn uncover_rest_of_row(&mut self, ix: NodeIndex) {
        let mut cur_ix = self.links.node(ix).left;
        while cur_ix != ix {
            let node = *self.links.node(cur_ix);
            self.uncover(node.column);
            cur_ix = node.left;
        }
    }

    /// Finds an active column whose vertical list is of minimum length; Knuth
    /// found that this "minimum remaining values" (MRV) heuristic tends to
    /// keep the search tree small. In case of equality, ties are broken by
    /// the position of the column within the horizontal list.
    ///
    /// Returns `None` if all columns have been covered.
    fn choose_column(&self) -> Option<ColumnIndex> {
        let mut min_size = usize::MAX;
        let mut min_ix = None;
        let mut cur_ix = self.links.root().next;
        while cur_ix != ROOT {
            let header = self.links.header(cur_ix);
            if header.size < min_size {
                // An empty column is surely the result.
                if header.size == 0 {
                    return Some(cur_ix);
                }
                min_size = header.size;
                min_ix = Some(cur_ix);
            }
            cur_ix = header.next;
        }
        min_ix
    }

    /// Calls a closure on each exact cover of the matrix.
    ///
    /// The solution process continues until the closure returns
    /// [`ControlFlow::Break`] or all solutions have been visited, whichever
    /// occurs first; the result tells which one happened. Either way, every
    /// covering is undone before this function returns, so the links are
    /// left exactly as they were built.
    pub(crate) fn solve<F>(&mut self, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(Solution<'_>) -> ControlFlow<()>,
    {
        'outer: loop {
            // Try to cover as many columns as possible, without backtracking.
            loop {
                // X3: Select a column $c$ that needs to be covered.
                if let Some(column) = self.choose_column() {
                    let head = self.links.header(column).head;
                    let row_ix = self.links.node(head).down;
                    if row_ix == head {
                        // X7: No row can cover $c$; backtrack. We only cover
                        //     a column once we know that some active row
                        //     intersects it, so there is nothing to undo.
                        break;
                    }
                    debug_assert!(
                        self.links.header(column).size > 0,
                        "nonempty vertical list of {column:?} has size 0"
                    );
                    // X4: Cover column $c$ using the first row $r$ in its
                    //     vertical list.
                    self.cover(column);
                    self.pointers.push(row_ix);
                    // X5: Cover the columns $\neq c$ of row $r$, cyclically
                    //     from left to right.
                    self.cover_rest_of_row(row_ix);
                } else {
                    // X2: All columns have been covered. Visit the solution
                    //     given by the nodes in `self.pointers` and leave the
                    //     current level.
                    let flow = visit(Solution { solver: self });
                    if flow.is_break() {
                        self.unwind();
                        return flow;
                    }
                    break;
                }
            }
            // X8: Leave the current level until we find a column that can be
            //     covered with another row.
            while let Some(row_ix) = self.pointers.pop() {
                // X6: Undo the covering done by step X5, cyclically from right
                //     to left.
                self.uncover_rest_of_row(row_ix);
                let node = *self.links.node(row_ix);
                if node.down != self.links.header(node.column).head {
                    // X5: Try to cover $c$ with the next row in its vertical
                    //     list.
                    self.pointers.push(node.down);
                    self.cover_rest_of_row(node.down);
                    continue 'outer;
                }
                // X7: We have tried all rows for $c$; backtrack.
                self.uncover(node.column);
            }
            // X8: We have explored the entire search tree; terminate.
            debug_assert!(self.pointers.is_empty());
            return ControlFlow::Continue(());
        }
    }

    /// Undoes every pending covering, in the reverse order from the one in
    /// which they were done.
    fn unwind(&mut self) {
        while let Some(row_ix) = self.pointers.pop() {
            self.uncover_rest_of_row(row_ix);
            let column = self.links.node(row_ix).column;
            self.uncover(column);
        }
        debug_assert!(self.pointers.is_empty());
    }

    /// Returns the links, e.g. to compare them with a pristine copy.
    #[cfg(test)]
    fn links(&self) -> &Links {
        &self.links
    }
}

/// An exact cover found by a [`Solver`], that is, the rows chosen at each
/// level of the search.
pub(crate) struct Solution<'s> {
    /// The solver that found the exact cover.
    solver: &'s Solver,
}

impl<'s> Solution<'s> {
    /// Returns the positions of the chosen rows in the input matrix,
    /// in the order in which the search added them.
    pub(crate) fn rows(&self) -> impl Iterator<Item = usize> + 's {
        let solver: &'s Solver = self.solver;
        solver
            .pointers
            .iter()
            .map(move |&ix| solver.links.node(ix).row)
    }

    /// Returns the number of rows in the solution.
    pub(crate) fn row_count(&self) -> usize {
        self.solver.pointers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The example matrix (5) from Knuth's paper "Dancing links".
    const KNUTH: [[u8; 7]; 6] = [
        [0, 0, 1, 0, 1, 1, 0],
        [1, 0, 0, 1, 0, 0, 1],
        [0, 1, 1, 0, 0, 1, 0],
        [1, 0, 0, 1, 0, 0, 0],
        [0, 1, 0, 0, 0, 0, 1],
        [0, 0, 0, 1, 1, 0, 1],
    ];

    fn solver_for<R: AsRef<[u8]>>(matrix: &[R]) -> Solver {
        Solver::new(Links::from_rows(matrix).unwrap())
    }

    /// Builds the matrix for packing dominoes into an $m\times n$ board.
    fn domino_matrix(m: usize, n: usize) -> Vec<Vec<u8>> {
        let mut rows = Vec::new();
        for x in 0..m {
            for y in 0..n {
                let mut pairs = Vec::new();
                if y + 1 < n {
                    pairs.push(x * n + y + 1);
                }
                if x + 1 < m {
                    pairs.push((x + 1) * n + y);
                }
                for other in pairs {
                    let mut row = vec![0; m * n];
                    row[x * n + y] = 1;
                    row[other] = 1;
                    rows.push(row);
                }
            }
        }
        rows
    }

    /// Walks the whole search tree with the cover primitives, checking the
    /// column sizes at every node. Returns the number of exact covers.
    fn count_checked(solver: &mut Solver) -> usize {
        assert!(solver.links().sizes_match());
        let Some(column) = solver.choose_column() else {
            return 1;
        };
        let head = solver.links().header(column).head;
        solver.cover(column);
        assert!(solver.links().sizes_match());
        let mut count = 0;
        let mut row_ix = solver.links().node(head).down;
        while row_ix != head {
            solver.cover_rest_of_row(row_ix);
            count += count_checked(solver);
            solver.uncover_rest_of_row(row_ix);
            assert!(solver.links().sizes_match());
            row_ix = solver.links().node(row_ix).down;
        }
        solver.uncover(column);
        assert!(solver.links().sizes_match());
        count
    }

    fn all_solutions(solver: &mut Solver) -> Vec<Vec<usize>> {
        let mut solutions = Vec::new();
        let flow = solver.solve(|solution| {
            solutions.push(solution.rows().collect());
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        solutions
    }

    #[test]
    fn cover_removes_conflicting_rows() {
        let mut solver = solver_for(&KNUTH);
        // Covering the first column hides rows 1 and 3 everywhere else.
        solver.cover(ColumnIndex::of_column(0));
        let links = solver.links();
        let active: Vec<_> = links.active_columns().iter().map(|c| c.get()).collect();
        assert_eq!(active, [2, 3, 4, 5, 6, 7]);
        assert_eq!(links.column_rows(ColumnIndex::of_column(3)), [5]);
        assert_eq!(links.header(ColumnIndex::of_column(3)).size, 1);
        assert_eq!(links.column_rows(ColumnIndex::of_column(6)), [4, 5]);
        assert_eq!(links.header(ColumnIndex::of_column(6)).size, 2);
        // The covered column keeps its own vertical list.
        assert_eq!(links.column_rows(ColumnIndex::of_column(0)), [1, 3]);
        assert_eq!(solver.updates(), 3);
    }

    #[test]
    fn uncover_restores_every_link() {
        let pristine = Links::from_rows(&KNUTH).unwrap();
        let mut solver = Solver::new(pristine.clone());
        solver.cover(ColumnIndex::of_column(3));
        solver.cover(ColumnIndex::of_column(0));
        solver.cover(ColumnIndex::of_column(6));
        assert_ne!(solver.links(), &pristine);
        solver.uncover(ColumnIndex::of_column(6));
        solver.uncover(ColumnIndex::of_column(0));
        solver.uncover(ColumnIndex::of_column(3));
        assert_eq!(solver.links(), &pristine);
    }

    #[test]
    fn covering_a_row_is_reversible() {
        let pristine = Links::from_rows(&KNUTH).unwrap();
        let mut solver = Solver::new(pristine.clone());
        // The second row has 1s in columns 0, 3 and 6.
        let head = solver.links().header(ColumnIndex::of_column(0)).head;
        let row_ix = solver.links().node(head).down;
        assert_eq!(solver.links().node(row_ix).row, 1);
        solver.cover(ColumnIndex::of_column(0));
        assert!(solver.links().sizes_match());
        solver.cover_rest_of_row(row_ix);
        assert!(solver.links().sizes_match());
        let active: Vec<_> = solver
            .links()
            .active_columns()
            .iter()
            .map(|c| c.get())
            .collect();
        assert_eq!(active, [2, 3, 5, 6]);
        solver.uncover_rest_of_row(row_ix);
        assert!(solver.links().sizes_match());
        solver.uncover(ColumnIndex::of_column(0));
        assert_eq!(solver.links(), &pristine);
    }

    #[test]
    fn sizes_stay_consistent_throughout_the_search() {
        let pristine = Links::from_rows(&KNUTH).unwrap();
        let mut solver = Solver::new(pristine.clone());
        assert_eq!(count_checked(&mut solver), 1);
        assert_eq!(solver.links(), &pristine);

        let matrix = domino_matrix(4, 4);
        let pristine = Links::from_rows(&matrix).unwrap();
        let mut solver = Solver::new(pristine.clone());
        assert_eq!(count_checked(&mut solver), 36);
        assert_eq!(solver.links(), &pristine);
        // The iterative search agrees with the checked walk.
        assert_eq!(all_solutions(&mut solver).len(), 36);
        assert_eq!(solver.links(), &pristine);
    }

    #[test]
    fn sizes_match_whenever_a_solution_is_visited() {
        let mut solver = solver_for(&KNUTH);
        let mut visited = 0;
        let flow = solver.solve(|solution| {
            assert!(solution.solver.links.sizes_match());
            visited += 1;
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        assert_eq!(visited, 1);
        assert!(solver.links().sizes_match());

        let mut solver = solver_for(&domino_matrix(2, 4));
        let mut visited = 0;
        let flow = solver.solve(|solution| {
            assert!(solution.solver.links.sizes_match());
            visited += 1;
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        assert_eq!(visited, 5);
        assert!(solver.links().sizes_match());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not detached")]
    fn uncovering_an_active_column_is_caught() {
        let mut solver = solver_for(&KNUTH);
        solver.uncover(ColumnIndex::of_column(2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is already covered")]
    fn covering_twice_is_caught() {
        let mut solver = solver_for(&KNUTH);
        solver.cover(ColumnIndex::of_column(4));
        solver.cover(ColumnIndex::of_column(4));
    }

    #[test]
    fn chooses_the_first_shortest_column() {
        let solver = solver_for(&KNUTH);
        // Columns 0, 1, 2, 4 and 5 all have two rows; the leftmost wins.
        assert_eq!(solver.choose_column(), Some(ColumnIndex::of_column(0)));

        let solver = solver_for(&[[1u8, 1, 1], [1, 0, 1], [0, 0, 1]]);
        assert_eq!(solver.choose_column(), Some(ColumnIndex::of_column(1)));
    }

    #[test]
    fn empty_column_short_circuits_the_choice() {
        let solver = solver_for(&[[1u8, 1, 0, 1], [1, 1, 0, 0]]);
        assert_eq!(solver.choose_column(), Some(ColumnIndex::of_column(2)));
    }

    #[test]
    fn no_column_left_to_choose() {
        let solver = solver_for::<[u8; 0]>(&[[]]);
        assert_eq!(solver.choose_column(), None);
    }

    #[test]
    fn knuth_example_has_a_unique_solution() {
        let mut solver = solver_for(&KNUTH);
        // Column 0 is chosen first and can only be covered by row 3 in the
        // end; then column 4 (via row 0) and column 1 (via row 4).
        assert_eq!(all_solutions(&mut solver), [[3, 0, 4]]);
    }

    #[test]
    fn search_restores_the_links() {
        let pristine = Links::from_rows(&KNUTH).unwrap();
        let mut solver = Solver::new(pristine.clone());
        all_solutions(&mut solver);
        assert_eq!(solver.links(), &pristine);
        assert!(solver.updates() > 0);
    }

    #[test]
    fn break_unwinds_pending_coverings() {
        // Every row covers both columns, so there are three solutions.
        let matrix = [[1, 1], [1, 1], [1, 1]];
        let pristine = Links::from_rows(&matrix).unwrap();
        let mut solver = Solver::new(pristine.clone());
        let mut visited = Vec::new();
        let flow = solver.solve(|solution| {
            assert_eq!(solution.row_count(), 1);
            visited.extend(solution.rows());
            ControlFlow::Break(())
        });
        assert!(flow.is_break());
        assert_eq!(visited, [0]);
        assert!(solver.pointers.is_empty());
        assert_eq!(solver.links(), &pristine);
    }

    #[test]
    fn enumerates_alternatives_in_vertical_order() {
        let matrix = [[1u8, 0], [0, 1], [1, 1], [1, 0]];
        let mut solver = solver_for(&matrix);
        // Column 1 is shorter, so it is branched on first.
        assert_eq!(all_solutions(&mut solver), [vec![1, 0], vec![1, 3], vec![2]]);
    }

    #[test]
    fn matrix_without_columns_is_covered_by_no_rows() {
        let mut solver = solver_for::<[u8; 0]>(&[[], []]);
        assert_eq!(all_solutions(&mut solver), [Vec::<usize>::new()]);
    }
}
