//! C-SVC dual solver over a precomputed kernel.
//!
//! Sequential minimal optimization with second-order working set selection:
//! the first index is the maximal KKT violator, the second maximizes the
//! predicted objective decrease. Per-class box constraints implement class
//! weighting.

use relevancy_core::constants::SMO_TAU;
use relevancy_core::errors::{RelevancyResult, TrainingError};
use relevancy_core::models::{KernelMatrix, Label};
use relevancy_core::traits::{IClassifierSolver, IDecisionFunction, SolverParams};
use tracing::{debug, warn};

/// `f(k) = Σ coef_t · k[t] − rho`, over support vectors only.
#[derive(Debug, Clone, PartialEq)]
pub struct SvmDecisionFunction {
    /// (training index, α_t · y_t) for every α_t > 0.
    support: Vec<(usize, f64)>,
    rho: f64,
}

impl IDecisionFunction for SvmDecisionFunction {
    fn decision_value(&self, kernel_row: &[f64]) -> f64 {
        self.support
            .iter()
            .map(|&(t, coef)| coef * kernel_row[t])
            .sum::<f64>()
            - self.rho
    }

    fn support_vector_count(&self) -> usize {
        self.support.len()
    }
}

/// The built-in solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoSolver;

impl SmoSolver {
    pub fn new() -> Self {
        Self
    }
}

impl IClassifierSolver for SmoSolver {
    fn train(
        &self,
        kernel: &KernelMatrix,
        labels: &[Label],
        params: &SolverParams,
    ) -> RelevancyResult<Box<dyn IDecisionFunction>> {
        if kernel.size() != labels.len() {
            return Err(TrainingError::SizeMismatch {
                matrix: kernel.size(),
                labels: labels.len(),
            }
            .into());
        }
        for label in [Label::Positive, Label::Negative] {
            if !labels.contains(&label) {
                let present = if label == Label::Positive {
                    Label::Negative
                } else {
                    Label::Positive
                };
                return Err(TrainingError::SingleClass {
                    label: present.to_string(),
                }
                .into());
            }
        }

        let problem = Problem::new(kernel, labels, params);
        let solution = problem.solve(params.tolerance, params.max_iterations);
        if !solution.converged {
            warn!(
                iterations = solution.iterations,
                "SMO reached the iteration cap before converging"
            );
        }

        let support: Vec<(usize, f64)> = solution
            .alpha
            .iter()
            .enumerate()
            .filter(|(_, a)| **a > 0.0)
            .map(|(t, a)| (t, a * problem.y[t]))
            .collect();

        debug!(
            iterations = solution.iterations,
            support_vectors = support.len(),
            rho = solution.rho,
            "SMO finished"
        );

        Ok(Box::new(SvmDecisionFunction {
            support,
            rho: solution.rho,
        }))
    }

    fn name(&self) -> &str {
        "smo"
    }
}

struct Problem<'k> {
    kernel: &'k KernelMatrix,
    y: Vec<f64>,
    /// Upper bound of α_t: c · weight of t's class.
    bound: Vec<f64>,
}

struct Solution {
    alpha: Vec<f64>,
    rho: f64,
    iterations: usize,
    converged: bool,
}

impl<'k> Problem<'k> {
    fn new(kernel: &'k KernelMatrix, labels: &[Label], params: &SolverParams) -> Self {
        let y = labels.iter().map(|l| l.sign()).collect();
        let bound = labels
            .iter()
            .map(|l| match l {
                Label::Positive => params.c * params.positive_weight,
                Label::Negative => params.c * params.negative_weight,
            })
            .collect();
        Self { kernel, y, bound }
    }

    fn q(&self, i: usize, j: usize) -> f64 {
        self.y[i] * self.y[j] * self.kernel.get(i, j)
    }

    fn is_up(&self, t: usize, alpha: &[f64]) -> bool {
        if self.y[t] > 0.0 {
            alpha[t] < self.bound[t]
        } else {
            alpha[t] > 0.0
        }
    }

    fn is_low(&self, t: usize, alpha: &[f64]) -> bool {
        if self.y[t] > 0.0 {
            alpha[t] > 0.0
        } else {
            alpha[t] < self.bound[t]
        }
    }

    fn curvature(&self, i: usize, j: usize) -> f64 {
        let a = self.kernel.diagonal(i) + self.kernel.diagonal(j) - 2.0 * self.kernel.get(i, j);
        if a > 0.0 {
            a
        } else {
            SMO_TAU
        }
    }

    fn solve(&self, tolerance: f64, max_iterations: usize) -> Solution {
        let n = self.y.len();
        let mut alpha = vec![0.0; n];
        // Gradient of ½αᵀQα − eᵀα.
        let mut grad = vec![-1.0; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < max_iterations {
            let Some((i, j)) = self.select_working_set(&alpha, &grad, tolerance) else {
                converged = true;
                break;
            };
            iterations += 1;

            let (old_i, old_j) = (alpha[i], alpha[j]);
            self.update_pair(i, j, &mut alpha, &grad);
            let (delta_i, delta_j) = (alpha[i] - old_i, alpha[j] - old_j);
            for (t, g) in grad.iter_mut().enumerate() {
                *g += self.q(t, i) * delta_i + self.q(t, j) * delta_j;
            }
        }

        let rho = self.rho(&alpha, &grad);
        Solution {
            alpha,
            rho,
            iterations,
            converged,
        }
    }

    fn select_working_set(&self, alpha: &[f64], grad: &[f64], tolerance: f64) -> Option<(usize, usize)> {
        let n = self.y.len();

        let mut gmax = f64::NEG_INFINITY;
        let mut first = None;
        for t in 0..n {
            if self.is_up(t, alpha) {
                let v = -self.y[t] * grad[t];
                if v >= gmax {
                    gmax = v;
                    first = Some(t);
                }
            }
        }
        let i = first?;

        let mut gmax2 = f64::NEG_INFINITY;
        let mut best_obj = f64::INFINITY;
        let mut second = None;
        for t in 0..n {
            if !self.is_low(t, alpha) {
                continue;
            }
            let yg = self.y[t] * grad[t];
            gmax2 = gmax2.max(yg);
            let b = gmax + yg;
            if b > 0.0 {
                let obj = -(b * b) / self.curvature(i, t);
                if obj <= best_obj {
                    best_obj = obj;
                    second = Some(t);
                }
            }
        }

        if gmax + gmax2 < tolerance {
            return None;
        }
        second.map(|j| (i, j))
    }

    /// Analytic two-variable step, clipped to the box and the equality constraint.
    fn update_pair(&self, i: usize, j: usize, alpha: &mut [f64], grad: &[f64]) {
        let (ci, cj) = (self.bound[i], self.bound[j]);
        let quad = self.curvature(i, j);

        if self.y[i] != self.y[j] {
            let delta = (-grad[i] - grad[j]) / quad;
            let diff = alpha[i] - alpha[j];
            alpha[i] += delta;
            alpha[j] += delta;

            if diff > 0.0 {
                if alpha[j] < 0.0 {
                    alpha[j] = 0.0;
                    alpha[i] = diff;
                }
            } else if alpha[i] < 0.0 {
                alpha[i] = 0.0;
                alpha[j] = -diff;
            }
            if diff > ci - cj {
                if alpha[i] > ci {
                    alpha[i] = ci;
                    alpha[j] = ci - diff;
                }
            } else if alpha[j] > cj {
                alpha[j] = cj;
                alpha[i] = cj + diff;
            }
        } else {
            let delta = (grad[i] - grad[j]) / quad;
            let sum = alpha[i] + alpha[j];
            alpha[i] -= delta;
            alpha[j] += delta;

            if sum > ci {
                if alpha[i] > ci {
                    alpha[i] = ci;
                    alpha[j] = sum - ci;
                }
            } else if alpha[j] < 0.0 {
                alpha[j] = 0.0;
                alpha[i] = sum;
            }
            if sum > cj {
                if alpha[j] > cj {
                    alpha[j] = cj;
                    alpha[i] = sum - cj;
                }
            } else if alpha[i] < 0.0 {
                alpha[i] = 0.0;
                alpha[j] = sum;
            }
        }
    }

    /// Offset from free support vectors, or the midpoint of the feasible
    /// interval when every α sits on a bound.
    fn rho(&self, alpha: &[f64], grad: &[f64]) -> f64 {
        let mut upper = f64::INFINITY;
        let mut lower = f64::NEG_INFINITY;
        let mut free_sum = 0.0;
        let mut free_count = 0usize;

        for t in 0..self.y.len() {
            let yg = self.y[t] * grad[t];
            let positive = self.y[t] > 0.0;
            if alpha[t] >= self.bound[t] {
                if positive {
                    lower = lower.max(yg);
                } else {
                    upper = upper.min(yg);
                }
            } else if alpha[t] <= 0.0 {
                if positive {
                    upper = upper.min(yg);
                } else {
                    lower = lower.max(yg);
                }
            } else {
                free_sum += yg;
                free_count += 1;
            }
        }

        if free_count > 0 {
            free_sum / free_count as f64
        } else if upper.is_finite() && lower.is_finite() {
            (upper + lower) / 2.0
        } else {
            0.0
        }
    }
}
