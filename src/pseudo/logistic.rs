//! Binary logistic regression fitted by batch gradient descent.

use ndarray::{Array1, Array2};

#[derive(Debug, Clone)]
pub(crate) struct LogisticRegression {
    weights: Array1<f64>,
    bias: f64,
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl LogisticRegression {
    /// Fits weights and intercept on `x` (rows = samples) against 0/1 targets `y`.
    pub(crate) fn fit(x: &Array2<f64>, y: &Array1<f64>, learning_rate: f64, max_iter: usize) -> Self {
        let n = x.nrows().max(1) as f64;
        let mut weights = Array1::<f64>::zeros(x.ncols());
        let mut bias = 0.0;

        for _ in 0..max_iter {
            let p = (x.dot(&weights) + bias).mapv(sigmoid);
            let err = &p - y;
            let dw = x.t().dot(&err) / n;
            let db = err.sum() / n;
            weights = &weights - &(dw * learning_rate);
            bias -= learning_rate * db;
        }

        Self { weights, bias }
    }

    /// Probability of the positive class for each row.
    pub(crate) fn predict_proba(&self, x: &Array2<f64>) -> Array1<f64> {
        (x.dot(&self.weights) + self.bias).mapv(sigmoid)
    }
}
