//! Dense distance matrix.

/// A dense n×n distance matrix stored in row-major order.
///
/// No symmetry is assumed: `get(i, j)` and `get(j, i)` are independent
/// entries.
///
/// # Examples
///
/// ```
/// use haul_routing::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(2);
/// dm.set(0, 1, 4.0);
/// assert_eq!(dm.get(0, 1), 4.0);
/// assert_eq!(dm.get(1, 0), 0.0);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Fills an n×n matrix from `f(row, col)`.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                data.push(f(i, j));
            }
        }
        Self { data, size }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the entry at (`from`, `to`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the entry at (`from`, `to`).
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate with the smallest `get(from, candidate)`.
    ///
    /// Ties go to the candidate yielded first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor<I>(&self, from: usize, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
