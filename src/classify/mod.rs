pub mod backend;
pub mod digit;
pub mod emotion;

use std::fmt;

use crate::error::{LayerError, Result};

/// Best class reported by a classifier
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub index: usize,
    pub label: &'static str,
    /// Probability in [0, 1]
    pub probability: f32,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}%)", self.label, self.probability * 100.0)
    }
}

/// Index and value of the first strictly greatest entry above zero.
///
/// Returns None when no entry exceeds 0.0 (nothing recognized).
pub fn argmax(values: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    let mut best_value = 0.0f32;

    for (index, &value) in values.iter().enumerate() {
        if value > best_value {
            best_value = value;
            best = Some((index, value));
        }
    }

    best
}

/// Numerically stable softmax
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max_logit = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max_logit).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.into_iter().map(|x| x / sum).collect()
}

/// Map a probability vector onto `labels`, validating its length
fn predict(probabilities: &[f32], labels: &'static [&'static str]) -> Result<Option<Prediction>> {
    if probabilities.len() != labels.len() {
        return Err(LayerError::Inference(format!(
            "model returned {} values, expected {}",
            probabilities.len(),
            labels.len()
        )));
    }

    Ok(argmax(probabilities).map(|(index, probability)| Prediction {
        index,
        label: labels[index],
        probability,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_keeps_first_of_equal_maxima() {
        assert_eq!(argmax(&[0.1, 0.4, 0.4, 0.1]), Some((1, 0.4)));
    }

    #[test]
    fn argmax_requires_positive_value() {
        assert_eq!(argmax(&[0.0, 0.0]), None);
        assert_eq!(argmax(&[-1.0, -0.5]), None);
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn softmax_sums_to_one_and_preserves_order() {
        let probs = softmax(&[1.0, 3.0, 2.0]);
        let sum: f32 = probs.iter().sum();

        assert!((sum - 1.0).abs() < 1e-6);
        assert!(probs[1] > probs[2] && probs[2] > probs[0]);
    }

    #[test]
    fn softmax_handles_large_logits() {
        let probs = softmax(&[1000.0, 1000.0]);
        assert!((probs[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn predict_rejects_wrong_length() {
        let labels: &'static [&'static str] = &["a", "b"];
        assert!(matches!(
            predict(&[0.5, 0.3, 0.2], labels),
            Err(LayerError::Inference(_))
        ));
    }

    #[test]
    fn prediction_display_shows_percent() {
        let prediction = Prediction {
            index: 3,
            label: "3",
            probability: 0.987,
        };
        assert_eq!(prediction.to_string(), "3 (98.7%)");
    }
}
