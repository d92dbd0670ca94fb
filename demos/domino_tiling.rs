//! This program determines in how many ways can dominoes fill an $m\times n$
//! board. We set up an exact cover matrix with one column for each of the
//! $mn$ cells, and one row for each of the $m(n-1)+n(m-1)$ placements of a
//! domino.
//!
//! P. W. Kasteleyn obtained a closed formula for the number of domino coverings
//! of an $m\times n$ rectangle \[_Physica_ **27** (1961), pp. 1209–1225].
//! Interested readers can learn more by working out exercise 7.51 in the second
//! edition of the book _Concrete Mathematics_ (Addison–Wesley, 1994) by R. Graham,
//! D. E. Knuth and O. Patashnik.
use matrix_covers::{solve, SolveOptions};

/// The number $m$ of rows of the board, also known as _ranks_.
const ROWS: usize = 6;

/// The number $n$ of columns of the board, also known as _files_.
const COLUMNS: usize = 6;

/// Returns the matrix column of the cell at rank `x` and file `y`.
fn cell(x: usize, y: usize) -> usize {
    x * COLUMNS + y
}

fn main() {
    env_logger::init();

    let mut matrix = Vec::new();
    let mut place = |a: usize, b: usize| {
        let mut row = vec![false; ROWS * COLUMNS];
        row[a] = true;
        row[b] = true;
        matrix.push(row);
    };
    // There's a row for each pair of adjacent cells. We start with the
    // $m(n-1)$ horizontal placements,
    for x in 0..ROWS {
        for y in 0..COLUMNS - 1 {
            place(cell(x, y), cell(x, y + 1));
        }
    }
    // and continue with the $n(m-1)$ vertical ones.
    for y in 0..COLUMNS {
        for x in 0..ROWS - 1 {
            place(cell(x, y), cell(x + 1, y));
        }
    }

    let solutions = match solve(&matrix, SolveOptions::default()) {
        Ok(solutions) => solutions,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.code());
            std::process::exit(1);
        }
    };
    println!(
        "{} domino tilings of a {ROWS}x{COLUMNS} board",
        solutions.len()
    );
    assert_eq!(solutions.len(), 6728);
}
