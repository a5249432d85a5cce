/// Dense row-major matrix of criterion values: one row per alternative, one
/// column per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build from row vectors. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == cols));
        let n = rows.len();
        let data = rows.into_iter().flatten().collect();
        Self {
            rows: n,
            cols,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().skip(col).step_by(self.cols.max(1)).copied()
    }

    /// New matrix with `f(row, col, value)` applied to every cell.
    pub fn map(&self, f: impl Fn(usize, usize, f64) -> f64) -> Self {
        let cols = self.cols;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| f(i / cols, i % cols, v))
            .collect();
        Self {
            rows: self.rows,
            cols,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
    }

    #[test]
    fn test_shape() {
        let m = sample();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
    }

    #[test]
    fn test_row_and_get() {
        let m = sample();
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 2), 3.0);
    }

    #[test]
    fn test_column() {
        let m = sample();
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![2.0, 5.0]);
    }

    #[test]
    fn test_map_passes_coordinates() {
        let m = sample().map(|r, c, v| v + (r * 10 + c) as f64);
        assert_eq!(m.row(0), &[1.0, 3.0, 5.0]);
        assert_eq!(m.row(1), &[14.0, 16.0, 18.0]);
    }
}
