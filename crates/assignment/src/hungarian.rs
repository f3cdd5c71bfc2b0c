//! Kuhn-Munkres (Hungarian) minimum-cost perfect assignment.
//!
//! The reduced matrix is never materialised. It is represented by row
//! potentials `u` and column potentials `v`, with
//! `reduced(i, j) = cost(i, j) - u[i] - v[j] >= 0` throughout:
//!
//! 1. Row reduction sets `u[i]` to the row minimum, column reduction sets
//!    `v[j]` to the minimum of the row-reduced column.
//! 2. Each row in turn roots an alternating tree over zero cells. Columns
//!    reached by the tree are the covered lines; the rows of the tree are
//!    the uncovered rows. `slack[j]` keeps the smallest reduced cost seen in
//!    every uncovered column.
//! 3. When the tree cannot grow along a zero, `theta = min(slack)` is taken
//!    off every uncovered cell and added to every doubly covered cell. With
//!    potentials that is `u += theta` on tree rows and `v -= theta` on
//!    covered columns, which creates at least one new zero.
//! 4. Once the tree reaches a free column the path back to the root is
//!    flipped, growing the zero matching by one.
//!
//! After `dim` augmentations the covering needs `dim` lines and the zero
//! matching is perfect. Every phase adds at most `dim` columns to the tree
//! and each growth step is `O(dim)`, so the whole solve is `O(dim^3)`.
//!
//! Ties between equal slacks go to the lowest column index. That makes the
//! result deterministic for a given matrix, but which of several optimal
//! assignments is returned is otherwise unspecified.

use crate::matrix::CostMatrix;

/// Column assigned to each row of `matrix`, a perfect assignment of minimum
/// total cost. `matrix` is only read.
pub fn min_cost_assignment(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.dim();
    if n == 0 {
        return Vec::new();
    }

    // Rows and columns are 1-based below; column slot 0 is the virtual root
    // every alternating tree hangs from, and row 0 means "free".
    let mut u = vec![0.0_f64; n + 1];
    let mut v = vec![0.0_f64; n + 1];

    for i in 0..n {
        u[i + 1] = matrix
            .row(i)
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
    }
    for j in 0..n {
        v[j + 1] = (0..n)
            .map(|i| matrix.get(i, j) - u[i + 1])
            .fold(f64::INFINITY, f64::min);
    }

    let mut row_of = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];
    let mut slack = vec![f64::INFINITY; n + 1];
    let mut covered = vec![false; n + 1];

    for root in 1..=n {
        row_of[0] = root;
        let mut j0 = 0usize;
        slack.fill(f64::INFINITY);
        covered.fill(false);

        // Grow the tree until it reaches an unassigned column.
        loop {
            covered[j0] = true;
            let i0 = row_of[j0];
            let mut theta = f64::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=n {
                if covered[j] {
                    continue;
                }
                let reduced = matrix.get(i0 - 1, j - 1) - u[i0] - v[j];
                if reduced < slack[j] {
                    slack[j] = reduced;
                    way[j] = j0;
                }
                if slack[j] < theta {
                    theta = slack[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if covered[j] {
                    u[row_of[j]] += theta;
                    v[j] -= theta;
                } else {
                    slack[j] -= theta;
                }
            }

            j0 = j1;
            if row_of[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        while j0 != 0 {
            let prev = way[j0];
            row_of[j0] = row_of[prev];
            j0 = prev;
        }
    }

    let mut col_of_row = vec![0usize; n];
    for j in 1..=n {
        col_of_row[row_of[j] - 1] = j - 1;
    }
    col_of_row
}
