//! Platt scaling: map decision values to P(positive) with a fitted sigmoid.
//!
//! Newton's method with backtracking line search on the regularized
//! targets `(N+ + 1) / (N+ + 2)` and `1 / (N- + 2)`.

use relevancy_core::models::Label;
use tracing::warn;

const MAX_ITERATIONS: usize = 100;
const MIN_STEP: f64 = 1e-10;
const HESSIAN_RIDGE: f64 = 1e-12;
const GRADIENT_EPS: f64 = 1e-5;

/// `P(+ | f) = 1 / (1 + exp(a·f + b))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlattSigmoid {
    pub a: f64,
    pub b: f64,
}

impl PlattSigmoid {
    pub fn probability(&self, decision_value: f64) -> f64 {
        let fapb = decision_value * self.a + self.b;
        if fapb >= 0.0 {
            (-fapb).exp() / (1.0 + (-fapb).exp())
        } else {
            1.0 / (1.0 + fapb.exp())
        }
    }

    /// True when higher decision values map to higher probabilities.
    pub fn preserves_order(&self) -> bool {
        self.a < 0.0
    }

    pub fn fit(decision_values: &[f64], labels: &[Label]) -> Self {
        let num_pos = labels.iter().filter(|l| **l == Label::Positive).count() as f64;
        let num_neg = labels.len() as f64 - num_pos;
        let hi_target = (num_pos + 1.0) / (num_pos + 2.0);
        let lo_target = 1.0 / (num_neg + 2.0);
        let targets: Vec<f64> = labels
            .iter()
            .map(|l| match l {
                Label::Positive => hi_target,
                Label::Negative => lo_target,
            })
            .collect();

        let mut a = 0.0;
        let mut b = ((num_neg + 1.0) / (num_pos + 1.0)).ln();
        let mut fval = objective(decision_values, &targets, a, b);

        let mut iteration = 0;
        while iteration < MAX_ITERATIONS {
            let (mut h11, mut h22, mut h21) = (HESSIAN_RIDGE, HESSIAN_RIDGE, 0.0);
            let (mut g1, mut g2) = (0.0, 0.0);
            for (f, t) in decision_values.iter().zip(&targets) {
                let fapb = f * a + b;
                let (p, q) = if fapb >= 0.0 {
                    let e = (-fapb).exp();
                    (e / (1.0 + e), 1.0 / (1.0 + e))
                } else {
                    let e = fapb.exp();
                    (1.0 / (1.0 + e), e / (1.0 + e))
                };
                let d2 = p * q;
                h11 += f * f * d2;
                h22 += d2;
                h21 += f * d2;
                let d1 = t - p;
                g1 += f * d1;
                g2 += d1;
            }
            if g1.abs() < GRADIENT_EPS && g2.abs() < GRADIENT_EPS {
                break;
            }

            let det = h11 * h22 - h21 * h21;
            let da = -(h22 * g1 - h21 * g2) / det;
            let db = -(-h21 * g1 + h11 * g2) / det;
            let gd = g1 * da + g2 * db;

            let mut step = 1.0;
            while step >= MIN_STEP {
                let (new_a, new_b) = (a + step * da, b + step * db);
                let new_f = objective(decision_values, &targets, new_a, new_b);
                if new_f < fval + 1e-4 * step * gd {
                    a = new_a;
                    b = new_b;
                    fval = new_f;
                    break;
                }
                step /= 2.0;
            }
            if step < MIN_STEP {
                warn!("Platt scaling line search failed, keeping current sigmoid");
                break;
            }
            iteration += 1;
        }
        if iteration >= MAX_ITERATIONS {
            warn!("Platt scaling reached the iteration cap");
        }

        Self { a, b }
    }
}

fn objective(decision_values: &[f64], targets: &[f64], a: f64, b: f64) -> f64 {
    decision_values
        .iter()
        .zip(targets)
        .map(|(f, t)| {
            let fapb = f * a + b;
            if fapb >= 0.0 {
                t * fapb + (1.0 + (-fapb).exp()).ln()
            } else {
                (t - 1.0) * fapb + (1.0 + fapb.exp()).ln()
            }
        })
        .sum()
}
