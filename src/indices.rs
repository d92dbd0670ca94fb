/// The position of a column header in a sequential table.
///
/// See the `headers` arena in the [`Links`] structure for an example of
/// this construction. Index 0 always refers to the root, so the header of
/// the $j$th matrix column (counting from zero) has index $j+1$.
///
/// [`Links`]: `crate::matrix::Links`
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[repr(transparent)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the header index of the given zero-based matrix column.
    #[must_use]
    pub const fn of_column(column: usize) -> Self {
        Self(column + 1)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// The position of a node in a sequential table.
///
/// See the `nodes` arena in the [`Links`] structure for an example of
/// this construction. The first records of that table are the sentinels
/// that anchor the vertical lists, one per header; the sentinel of the
/// header with index $j$ is the node with index $j$. The data nodes follow.
///
/// [`Links`]: `crate::matrix::Links`
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[repr(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the index of the sentinel node owned by the given header.
    #[must_use]
    pub const fn head_of(header: ColumnIndex) -> Self {
        Self(header.get())
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}
