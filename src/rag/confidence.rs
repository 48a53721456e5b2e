//! Confidence scoring from retrieval similarity

/// Derives a single confidence value from retrieval scores
pub trait ConfidenceStrategy: Send + Sync {
    fn estimate(&self, scores: &[f64]) -> f64;
}

/// Mean similarity score rounded to two decimals.
///
/// Measures retrieval strength only; it says nothing about whether the
/// generated answer is faithful to the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanScoreConfidence;

impl ConfidenceStrategy for MeanScoreConfidence {
    fn estimate(&self, scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        round_to_hundredths(mean)
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_scores() {
        assert_close(MeanScoreConfidence.estimate(&[]), 0.0);
    }

    #[test]
    fn test_mean_already_two_decimals() {
        assert_close(MeanScoreConfidence.estimate(&[0.8, 0.6]), 0.7);
    }

    #[test]
    fn test_mean_rounds_after_averaging() {
        assert_close(MeanScoreConfidence.estimate(&[0.333, 0.667]), 0.5);
        assert_close(MeanScoreConfidence.estimate(&[0.914, 0.872, 0.801]), 0.86);
    }

    #[test]
    fn test_single_score() {
        assert_close(MeanScoreConfidence.estimate(&[0.456]), 0.46);
    }
}
