use crate::indices::{ColumnIndex, NodeIndex};
use crate::{Cell, ShapeError};

/// A column of the matrix, or the root of the list of active columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Header {
    /// The sentinel node that anchors the vertical list of this column.
    /// It is not a data cell, and its `row` field is meaningless.
    ///
    /// This field plays the role of Knuth's column object itself, whose
    /// `U` and `D` links delimit the column.
    pub(crate) head: NodeIndex,
    /// The number of data nodes in the vertical list of this column.
    ///
    /// This field corresponds to the `S` member in Knuth's data structure.
    ///
    /// # Invariant
    ///
    /// While the header is in the horizontal list, `size` equals the number
    /// of nodes reached by walking `down` from `head` until returning to it.
    /// Once the column is covered its size is frozen until it is uncovered.
    pub(crate) size: usize,
    /// The previous header in the (horizontal) list of active columns, in
    /// cyclic order. The contents of this variable are preserved when the
    /// header is removed from the list, which is what lets the covering of
    /// a column be undone.
    ///
    /// This field corresponds to the `L` pointer in Knuth's data structure.
    pub(crate) prev: ColumnIndex,
    /// The next header in the list of active columns, in cyclic order.
    /// (See `self.prev` for details.)
    ///
    /// This field corresponds to the `R` pointer in Knuth's data structure.
    ///
    /// # Invariant
    ///
    /// If the `next` link of the [root](`ROOT`) points to the root itself,
    /// then every column is covered.
    pub(crate) next: ColumnIndex,
}

/// A 1 of the matrix, represented as an internal node in the toroidal
/// structure of [`Links`]; or the sentinel at the top of a column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Node {
    /// The previous node in the vertical list of `column`.
    pub(crate) up: NodeIndex,
    /// The next node in the vertical list of `column`.
    pub(crate) down: NodeIndex,
    /// The previous node in the same row, in cyclic order.
    pub(crate) left: NodeIndex,
    /// The next node in the same row, in cyclic order.
    pub(crate) right: NodeIndex,
    /// The position of the originating row in the input matrix.
    pub(crate) row: usize,
    /// The header of the column that contains this node.
    ///
    /// This field corresponds to the `C` pointer in Knuth's data structure.
    pub(crate) column: ColumnIndex,
}

impl Node {
    /// Creates a node whose four links point to itself.
    fn singleton(ix: NodeIndex, row: usize, column: ColumnIndex) -> Self {
        Self {
            up: ix,
            down: ix,
            left: ix,
            right: ix,
            row,
            column,
        }
    }
}

/// The position of the special header in the `headers` table of [`Links`]
/// that serves as the head of the list of active columns; Knuth called this
/// the _root_ in the paper "Dancing links", [arXiv:cs/0011047][dl] [cs.DS]
/// (2000).
///
/// [dl]: https://arxiv.org/pdf/cs/0011047.pdf
pub(crate) const ROOT: ColumnIndex = ColumnIndex::new(0);

/// The row recorded in the sentinel nodes. No input row can have this
/// position, because a matrix holds fewer than [`usize::MAX`] rows.
const SENTINEL_ROW: usize = usize::MAX;

/// The sparse representation of a 0/1 matrix used by the search.
///
/// Every header and node lives in one of two arenas, and all links are
/// positions in these arenas. The structure is built once per call to
/// [`solve`](crate::solve), mutated in place while searching, and dropped
/// when the call returns.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Links {
    /// The root followed by one header per matrix column, in order.
    headers: Vec<Header>,
    /// The sentinels (one per header, at the same position) followed
    /// by the data nodes, in row-major order.
    nodes: Vec<Node>,
    /// The number of rows in the input matrix, including empty ones.
    rows: usize,
}

impl Links {
    /// Builds the toroidal structure of a rectangular matrix.
    ///
    /// The header of every column is appended to the horizontal list in
    /// matrix order. Then every 1 in position $(r,c)$ becomes a node that
    /// is appended to the vertical list of column $c$ and to the cyclic
    /// list of row $r$. Rows with no 1s contribute no nodes; they can never
    /// be part of a solution.
    ///
    /// Fails if the matrix has no rows, or if some row is longer or shorter
    /// than the first one.
    pub(crate) fn from_rows<R, T>(matrix: &[R]) -> Result<Self, ShapeError>
    where
        R: AsRef<[T]>,
        T: Cell,
    {
        let columns = matrix.first().ok_or(ShapeError::NoRows)?.as_ref().len();
        if let Some((row, found)) = matrix
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(ShapeError::RaggedRow {
                row,
                expected: columns,
                found,
            });
        }

        // Construct the horizontal list, with the root at position 0.
        let n = columns + 1;
        let headers = (0..n)
            .map(|ix| Header {
                head: NodeIndex::new(ix),
                size: 0,
                prev: ColumnIndex::new((ix + columns) % n),
                next: ColumnIndex::new((ix + 1) % n),
            })
            .collect();
        let nodes = (0..n)
            .map(|ix| {
                let column = ColumnIndex::new(ix);
                Node::singleton(NodeIndex::head_of(column), SENTINEL_ROW, column)
            })
            .collect();
        let mut links = Self {
            headers,
            nodes,
            rows: matrix.len(),
        };
        for (row, cells) in matrix.iter().enumerate() {
            links.append_row(row, cells.as_ref());
        }
        Ok(links)
    }

    /// Appends the 1s of a row to the vertical lists of their columns,
    /// and links them together into a cyclic list from left to right.
    fn append_row<T: Cell>(&mut self, row: usize, cells: &[T]) {
        let mut first: Option<NodeIndex> = None;
        for (col, _) in cells.iter().enumerate().filter(|(_, c)| c.is_present()) {
            let column = ColumnIndex::of_column(col);
            let ix = NodeIndex::new(self.nodes.len());
            let mut node = Node::singleton(ix, row, column);

            // Insert the node at the bottom of the vertical list.
            let head = self.header(column).head;
            let last = self.node(head).up;
            node.up = last;
            node.down = head;
            self.node_mut(last).down = ix;
            self.node_mut(head).up = ix;
            self.header_mut(column).size += 1;

            // Insert the node at the end of the row.
            if let Some(first) = first {
                let prev = self.node(first).left;
                node.left = prev;
                node.right = first;
                self.node_mut(prev).right = ix;
                self.node_mut(first).left = ix;
            } else {
                first = Some(ix);
            }
            self.nodes.push(node);
        }
    }

    /// Returns the number of rows in the input matrix.
    pub(crate) fn row_count(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in the input matrix.
    pub(crate) fn column_count(&self) -> usize {
        self.headers.len() - 1
    }

    /// Returns the number of 1s in the input matrix.
    pub(crate) fn data_node_count(&self) -> usize {
        self.nodes.len() - self.headers.len()
    }

    // Accessor methods.

    /// Returns a reference to the header at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn header(&self, ix: ColumnIndex) -> &Header {
        &self.headers[ix.get()]
    }

    /// Returns a mutable reference to the header at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn header_mut(&mut self, ix: ColumnIndex) -> &mut Header {
        &mut self.headers[ix.get()]
    }

    /// Returns a reference to the node at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn node(&self, ix: NodeIndex) -> &Node {
        &self.nodes[ix.get()]
    }

    /// Returns a mutable reference to the node at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub(crate) fn node_mut(&mut self, ix: NodeIndex) -> &mut Node {
        &mut self.nodes[ix.get()]
    }

    /// Returns a reference to the root of the list of active columns.
    pub(crate) fn root(&self) -> &Header {
        self.header(ROOT)
    }
}

#[cfg(test)]
impl Links {
    /// Returns the columns in the horizontal list, from left to right.
    pub(crate) fn active_columns(&self) -> Vec<ColumnIndex> {
        let mut result = Vec::new();
        let mut cur_ix = self.root().next;
        while cur_ix != ROOT {
            result.push(cur_ix);
            cur_ix = self.header(cur_ix).next;
        }
        result
    }

    /// Returns whether the `size` of every column in the horizontal list
    /// equals the length of its vertical list.
    pub(crate) fn sizes_match(&self) -> bool {
        self.active_columns()
            .into_iter()
            .all(|c| self.header(c).size == self.column_rows(c).len())
    }

    /// Returns the rows of the nodes in the vertical list of a column,
    /// from top to bottom.
    pub(crate) fn column_rows(&self, column: ColumnIndex) -> Vec<usize> {
        let head = self.header(column).head;
        let mut result = Vec::new();
        let mut cur_ix = self.node(head).down;
        while cur_ix != head {
            result.push(self.node(cur_ix).row);
            cur_ix = self.node(cur_ix).down;
        }
        result
    }

    /// Returns the zero-based matrix columns of the nodes in the cyclic
    /// row list that contains `ix`, starting from `ix` itself.
    pub(crate) fn row_columns(&self, ix: NodeIndex) -> Vec<usize> {
        let mut result = vec![self.node(ix).column.get() - 1];
        let mut cur_ix = self.node(ix).right;
        while cur_ix != ix {
            result.push(self.node(cur_ix).column.get() - 1);
            cur_ix = self.node(cur_ix).right;
        }
        result
    }
}
