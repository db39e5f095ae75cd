use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Wraps a single vector as a 1×n row matrix.
    pub fn row(values: Vec<f64>) -> Matrix {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values],
        }
    }

    /// Builds a matrix from row vectors. Fails on ragged rows.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, Vec::len);
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(Error::dimension("matrix row", cols, bad.len()));
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Both uniforms live on (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Fills a (rows, cols) matrix with N(0, 1) samples multiplied by `scale`.
    ///
    /// Fan-in scaling passes `1 / sqrt(fan_in)` here.
    pub fn scaled_normal<R: Rng + ?Sized>(rows: usize, cols: usize, scale: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for row in res.data.iter_mut() {
            for value in row.iter_mut() {
                *value = Matrix::sample_standard_normal(rng) * scale;
            }
        }
        res
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Matrix product `self · rhs`.
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::dimension("matrix product", self.cols, rhs.rows));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Element-wise difference `self - rhs`.
    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_shape(rhs, "matrix difference")?;
        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x - y).collect()
            })
            .collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_shape(rhs, "hadamard product")?;
        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// Outer product `aᵀ · b` of two vectors, shape (a.len(), b.len()).
    pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
        Matrix {
            rows: a.len(),
            cols: b.len(),
            data: a.iter()
                .map(|&x| b.iter().map(|&y| x * y).collect())
                .collect(),
        }
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_finite())
    }

    fn check_same_shape(&self, rhs: &Matrix, context: &str) -> Result<()> {
        if self.rows != rhs.rows {
            return Err(Error::dimension(format!("{context} (rows)"), self.rows, rhs.rows));
        }
        if self.cols != rhs.cols {
            return Err(Error::dimension(format!("{context} (cols)"), self.cols, rhs.cols));
        }
        Ok(())
    }
}
