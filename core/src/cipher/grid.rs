//! cipher/grid.rs
//! Row-major grayscale pixel grid.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    DimensionMismatch { height: usize, width: usize, len: usize },
    TooLarge { height: usize, width: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DimensionMismatch { height, width, len } =>
                write!(f, "{}x{} grid needs {} pixels, got {}", height, width, height.saturating_mul(*width), len),
            GridError::TooLarge { height, width } =>
                write!(f, "{}x{} grid overflows the address space", height, width),
        }
    }
}

impl std::error::Error for GridError {}

/// Height x width array of 8-bit samples. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    pub fn new(height: usize, width: usize, data: Vec<u8>) -> Result<Self, GridError> {
        let expected = height.checked_mul(width);
        if expected != Some(data.len()) {
            return Err(GridError::DimensionMismatch { height, width, len: data.len() });
        }
        Ok(Self { height, width, data })
    }

    pub fn filled(height: usize, width: usize, value: u8) -> Result<Self, GridError> {
        let len = height
            .checked_mul(width)
            .ok_or(GridError::TooLarge { height, width })?;
        Ok(Self { height, width, data: vec![value; len] })
    }

    pub fn zeros(height: usize, width: usize) -> Result<Self, GridError> {
        Self::filled(height, width, 0)
    }

    /// Build from nested rows; every row must have the first row's width.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::DimensionMismatch {
                    height,
                    width,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(height, width, data)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Iterate rows top to bottom. Empty for zero-width grids.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// New grid of the same shape holding `data`.
    pub(crate) fn with_data(&self, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self { height: self.height, width: self.width, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            PixelGrid::new(2, 3, vec![0; 5]),
            Err(GridError::DimensionMismatch { height: 2, width: 3, len: 5 })
        );
    }

    #[test]
    fn indexes_row_major() {
        let g = PixelGrid::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g.get(1, 0), Some(4));
        assert_eq!(g.get(0, 2), Some(3));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.rows().count(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 2], vec![3]];
        assert!(PixelGrid::from_rows(rows.as_slice()).is_err());
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert_eq!(
            PixelGrid::filled(usize::MAX, 2, 0),
            Err(GridError::TooLarge { height: usize::MAX, width: 2 })
        );
        assert!(PixelGrid::new(usize::MAX, 2, Vec::new()).is_err());
    }

    #[test]
    fn filled_and_into_vec_agree() {
        let g = PixelGrid::zeros(2, 3).unwrap();
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(PixelGrid::filled(2, 2, 9).unwrap().into_vec(), vec![9; 4]);
    }

    #[test]
    fn zero_sized_grids_are_legal() {
        let g = PixelGrid::new(0, 10, Vec::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.rows().count(), 0);
        assert_eq!(PixelGrid::new(4, 0, Vec::new()).unwrap().rows().count(), 0);
    }
}
