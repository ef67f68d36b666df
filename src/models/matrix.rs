/// Compact square bit matrix holding the dark/light state of QR modules.
///
/// Addressed as `(row, col)`; `true` means a dark module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light matrix with `size` rows and columns
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (row, col); out-of-range reads are light
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let index = row * self.size + col;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set module at (row, col); out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        let index = row * self.size + col;
        if dark {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Flip module at (row, col)
    pub fn toggle(&mut self, row: usize, col: usize) {
        if row >= self.size || col >= self.size {
            return;
        }
        let index = row * self.size + col;
        self.data[index / 8] ^= 1 << (index % 8);
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate one row as booleans
    pub fn row(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.size).map(move |col| self.get(row, col))
    }

    /// Iterate one column as booleans
    pub fn column(&self, col: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.size).map(move |row| self.get(row, col))
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(21);
        assert_eq!(matrix.size(), 21);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(4, 3));
        assert_eq!(matrix.count_dark(), 1);

        matrix.toggle(3, 4);
        assert!(!matrix.get(3, 4));
        assert_eq!(matrix.count_dark(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = BitMatrix::new(8);
        matrix.set(10, 10, true); // Should not panic
        matrix.toggle(8, 0);
        assert!(!matrix.get(10, 10));
        assert_eq!(matrix.count_dark(), 0);
    }

    #[test]
    fn test_row_and_column_views() {
        let mut matrix = BitMatrix::new(5);
        matrix.set(2, 0, true);
        matrix.set(2, 4, true);
        matrix.set(0, 4, true);

        let row: Vec<bool> = matrix.row(2).collect();
        assert_eq!(row, vec![true, false, false, false, true]);
        let col: Vec<bool> = matrix.column(4).collect();
        assert_eq!(col, vec![true, false, true, false, false]);
    }
}
