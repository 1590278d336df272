/// Square, row-major matrix of pairwise kernel values over a training set.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelMatrix {
    size: usize,
    values: Vec<f64>,
}

impl KernelMatrix {
    /// Build an `size x size` matrix by evaluating `f(i, j)` for the upper
    /// triangle and mirroring it. Kernels are symmetric, so this halves the work.
    pub fn from_symmetric_fn<E>(
        size: usize,
        mut f: impl FnMut(usize, usize) -> Result<f64, E>,
    ) -> Result<Self, E> {
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            for j in i..size {
                let v = f(i, j)?;
                values[i * size + j] = v;
                values[j * size + i] = v;
            }
        }
        Ok(Self { size, values })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Kernel values of training example `i` against the whole training set.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    pub fn diagonal(&self, i: usize) -> f64 {
        self.get(i, i)
    }
}
