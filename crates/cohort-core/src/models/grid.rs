use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Square `[cohort][period]` table stored row-major.
///
/// Cohort `c` is only active from period `c` onwards; cells with
/// `period < cohort` hold `T::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Build a grid of `size x size`, calling `f(cohort, period)` for every
    /// active cell. Inactive cells are never computed.
    pub fn from_active(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = vec![T::default(); size * size];
        for cohort in 0..size {
            for period in cohort..size {
                cells[cohort * size + period] = f(cohort, period);
            }
        }
        Self { size, cells }
    }

    /// Number of cohorts (and periods).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(cohort, period)`, or `None` when out of bounds.
    pub fn get(&self, cohort: usize, period: usize) -> Option<T> {
        if cohort >= self.size || period >= self.size {
            return None;
        }
        Some(self.cells[cohort * self.size + period])
    }

    /// All periods for one cohort.
    pub fn row(&self, cohort: usize) -> Option<&[T]> {
        if cohort >= self.size {
            return None;
        }
        let start = cohort * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Iterate rows in cohort order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on 0; an empty grid simply has no rows.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Every cohort's value for one period.
    pub fn column(&self, period: usize) -> Vec<T> {
        if period >= self.size {
            return Vec::new();
        }
        (0..self.size)
            .map(|cohort| self.cells[cohort * self.size + period])
            .collect()
    }

    /// New grid with `f` applied to every cell, inactive cells included.
    pub fn map<U: Copy + Default>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            cells: self.cells.iter().copied().map(f).collect(),
        }
    }
}

impl Grid<f64> {
    /// Sum over cohorts for each period (the "sum of" row).
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.size];
        for row in self.rows() {
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        sums
    }
}

/// Serializes as a sequence of rows so consumers get a plain 2D array.
impl<T: Serialize + Copy + Default> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
