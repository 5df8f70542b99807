/*!
# Packed Triangular Counter Matrix

Both the tabu matrix and the move-frequency matrix (§3, §4.4) are instances
of the same data structure: a packed lower-triangular array addressed by
`(i, j)` with `i > j >= 0`. Packing only the triangle matches the move
domain (`1 <= j < i <= D - 2`) and halves the memory next to a full
`dim × dim` table.

The tabu role uses `set`/`applies`: `set` bumps a monotonically increasing
`current_max` counter and stamps the cell with it, so tenure decay ("has
this cell been set within the last `threshold` `set` calls?") is a single
comparison rather than a scan. The frequency role uses `inc`/`get`: a plain
non-decreasing visit count per move, with `get_minimum` scanning only the
triangular domain `j < i` — a prior variant of this search scanned the full
`j in [1, dim)` range here, which let diversification consider nonsensical
`(i, j)` pairs with `j >= i`.
*/

/// A packed lower-triangular counter matrix over `(i, j)` with `i > j >= 0`.
#[derive(Debug)]
pub struct SemiMatrix {
    dim: usize,
    cells: Vec<i64>,
    current_max: i64,
    threshold: i64,
}

impl SemiMatrix {
    /// Creates a matrix sized for indices in `[0, dim)` with the given tabu
    /// tenure / reset floor.
    pub fn new(dim: usize, threshold: i64) -> Self {
        let cells = vec![0; Self::packed_len(dim)];
        Self {
            dim,
            cells,
            current_max: threshold,
            threshold,
        }
    }

    fn packed_len(dim: usize) -> usize {
        dim.saturating_sub(1) * dim / 2
    }

    fn normalize(i: usize, j: usize) -> (usize, usize) {
        if j > i { (j, i) } else { (i, j) }
    }

    fn cell_index(&self, i: usize, j: usize) -> usize {
        let (i, j) = Self::normalize(i, j);
        debug_assert!(i < self.dim, "index {i} out of range for dim {}", self.dim);
        debug_assert!(j < i, "cell ({i}, {j}) is not in the lower triangle");
        i * (i - 1) / 2 + j
    }

    /// Stamps `(i, j)` as just used: bumps `current_max` and writes it into
    /// the cell. Used by the tabu role.
    pub fn set(&mut self, i: usize, j: usize) {
        self.current_max += 1;
        let idx = self.cell_index(i, j);
        self.cells[idx] = self.current_max;
    }

    /// True iff `(i, j)` was `set` within the last `threshold` `set` calls.
    pub fn applies(&self, i: usize, j: usize) -> bool {
        let idx = self.cell_index(i, j);
        self.cells[idx] > self.current_max - self.threshold
    }

    /// Increments the visit count for `(i, j)`. Used by the frequency role.
    pub fn inc(&mut self, i: usize, j: usize) {
        let idx = self.cell_index(i, j);
        self.cells[idx] += 1;
    }

    /// The raw cell value (tabu stamp or frequency count) for `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.cells[self.cell_index(i, j)]
    }

    /// Returns the `(i, j)` with the smallest count, scanning only the move
    /// domain `1 <= j < i`. `j == 0` is never a valid move (see §4.3) and
    /// must be excluded here, not just left uninitialized at zero — a scan
    /// that included it would always return `(i, 0)` and feed a bogus move
    /// into the diversification restart. `None` if `dim < 3`.
    pub fn get_minimum(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize, i64)> = None;
        for i in 2..self.dim {
            for j in 1..i {
                let value = self.get(i, j);
                if best.is_none_or(|(_, _, m)| value < m) {
                    best = Some((i, j, value));
                }
            }
        }
        best.map(|(i, j, _)| (i, j))
    }

    /// Zeroes every cell and resets `current_max` back to `threshold`, the
    /// point at which no cell is tabu.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = 0);
        self.current_max = self.threshold;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabu_tenure_expires_after_threshold_distinct_sets() {
        let mut tabu = SemiMatrix::new(5, 3);
        tabu.set(2, 1);
        assert!(tabu.applies(2, 1));
        tabu.set(3, 1);
        tabu.set(4, 1);
        tabu.set(4, 2);
        // three distinct subsequent `set` calls have elapsed
        assert!(!tabu.applies(2, 1));
    }

    #[test]
    fn normalize_is_order_independent() {
        let mut tabu = SemiMatrix::new(5, 3);
        tabu.set(4, 1);
        assert!(tabu.applies(1, 4));
        assert!(tabu.applies(4, 1));
    }

    #[test]
    fn get_minimum_respects_the_triangular_bound() {
        let mut freq = SemiMatrix::new(4, 3);
        // Push every cell except (3, 2) above zero; it should win the scan.
        freq.inc(1, 0);
        freq.inc(2, 0);
        freq.inc(2, 1);
        freq.inc(3, 0);
        freq.inc(3, 1);
        let (i, j) = freq.get_minimum().unwrap();
        assert_eq!((i, j), (3, 2));
    }

    #[test]
    fn get_minimum_never_returns_a_j_zero_cell() {
        // `j == 0` cells are never a valid move and are never `inc`'d, so
        // they sit at 0 forever; the scan must not be fooled into picking
        // one over a genuinely-visited move-domain cell.
        let freq = SemiMatrix::new(4, 3);
        let (i, j) = freq.get_minimum().unwrap();
        assert_ne!(j, 0);
        assert_eq!((i, j), (2, 1));
    }

    #[test]
    fn reset_clears_cells_and_restores_tenure_floor() {
        let mut tabu = SemiMatrix::new(5, 3);
        tabu.set(2, 1);
        assert!(tabu.applies(2, 1));
        tabu.reset();
        assert!(!tabu.applies(2, 1));
        assert_eq!(tabu.get(2, 1), 0);
    }
}
