//! The following program finds all ways to put $2n$ numbers $\\{1,1,2,2,\dots,n,n\\}$
//! into $2n$ slots $s_1,\dots,s_{2n}$ so that there are exactly $i$ numbers
//! between the two appearances of $i$, for all $1\leq i\leq n$. This task is
//! known as _Langford's problem_, since it was first described by C. D. Langford
//! [[_The Mathematical Gazette_ 42 (October 1958), 228][mathgaz]]. Its encoding
//! as an exact cover problem is well explained in D. E. Knuth's book
//! [_The Art of Computer Programming_ 4B (2022)][taocp4b], Part 2, page 70.
//! His approach can be summarized as follows:
//!
//! Regard the $n$ values of $i$ and the $2n$ slots as the columns to be covered.
//! Then the rows of the matrix are $`i\;s_j\;s_k'$ for $1\leq i\leq n$,
//! $1\leq j<k\leq 2n$, and $k=i+j+1$. In this way the distance between slots
//! $s_j$ and $s_k$ for value $i$ is $k-j=i+1$, as desired.
//!
//! [mathgaz]: https://www.cambridge.org/core/journals/mathematical-gazette/article/abs/problem/557F7BBB739F5B3E0D152C270642B102
//! [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4

use matrix_covers::{solve, SolveOptions};

/// A Langford pair can exist only when $n$ is congruent to 0 or 3 modulo 4.
/// This is because the two entries of an odd number must either both go in
/// even or in odd positions, while the entries of an even number must fall
/// in positions of different parity. There are $\lfloor n/2\rfloor$ even
/// numbers in $\\{1,\dots,n\\}$, so $n-\lfloor n/2\rfloor=\lceil n/2\rceil$
/// positions of each parity remain available for the odd numbers. Since these
/// come in pairs that occupy positions of the same parity, $\lceil n/2\rceil$
/// must be an even number. This happens only if $n\equiv 0$ or $n\equiv 3$
/// (modulo 4).
const N: usize = 8;

/// A row of the matrix, together with the placement it stands for.
struct Placement {
    value: usize,
    first_slot: usize,
    second_slot: usize,
}

fn main() {
    env_logger::init();

    // Columns $0,\dots,n-1$ are the values; columns $n,\dots,3n-1$ the slots.
    let mut placements = Vec::new();
    for i in 1..=N {
        for j in 0..2 * N - i - 1 {
            placements.push(Placement {
                value: i,
                first_slot: j,
                second_slot: i + j + 1,
            });
        }
    }
    let matrix: Vec<Vec<u8>> = placements
        .iter()
        .map(|p| {
            let mut row = vec![0; 3 * N];
            row[p.value - 1] = 1;
            row[N + p.first_slot] = 1;
            row[N + p.second_slot] = 1;
            row
        })
        .collect();

    let solutions = match solve(&matrix, SolveOptions::default()) {
        Ok(solutions) => solutions,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.code());
            std::process::exit(1);
        }
    };
    for rows in &solutions {
        // Convert the set of rows into the corresponding sequence.
        let mut sequence = [0usize; 2 * N];
        for &r in rows {
            let p = &placements[r];
            sequence[p.first_slot] = p.value;
            sequence[p.second_slot] = p.value;
        }
        println!("{sequence:?}");
    }
    // Every sequence is found along with its reverse.
    assert_eq!(solutions.len(), 2 * 150);
}
