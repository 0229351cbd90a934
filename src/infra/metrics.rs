// ============================================================
// Layer 6: Accuracy Metrics
// ============================================================
// Records the accuracies the training driver reports and
// renders them as the console lines users read:
//
//   Accuracy at 0: 0.51562
//   Accuracy at 100: 0.93750
//   ...
//   Test batch accuracy 0: 1.00000
//
// Values are fractions in [0, 1] printed with 5 decimals.
//
// How to read the metrics:
//   - Step accuracy is measured on the batch that step just
//     trained on, so it is optimistic, not a validation signal
//   - Test batch accuracy is measured on held-out sequences;
//     each batch is reported on its own, never averaged

use std::fmt;

/// Training-batch accuracy at one logged step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepAccuracy {
    pub step:     usize,
    pub accuracy: f64,
}

impl fmt::Display for StepAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accuracy at {}: {:.5}", self.step, self.accuracy)
    }
}

/// Accuracy of one held-out evaluation batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestBatchAccuracy {
    pub index:    usize,
    pub accuracy: f64,
}

impl fmt::Display for TestBatchAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test batch accuracy {}: {:.5}", self.index, self.accuracy)
    }
}

/// Everything one training run reported, in the order it was reported.
#[derive(Debug, Clone, Default)]
pub struct TrainingReport {
    pub steps:        Vec<StepAccuracy>,
    pub test_batches: Vec<TestBatchAccuracy>,
}

impl TrainingReport {
    pub fn record_step(&mut self, step: usize, accuracy: f64) {
        let entry = StepAccuracy { step, accuracy };
        println!("{}", entry);
        tracing::debug!(step, accuracy, "step accuracy recorded");
        self.steps.push(entry);
    }

    pub fn record_test_batch(&mut self, index: usize, accuracy: f64) {
        let entry = TestBatchAccuracy { index, accuracy };
        println!("{}", entry);
        tracing::debug!(index, accuracy, "test batch accuracy recorded");
        self.test_batches.push(entry);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_line_format() {
        let m = StepAccuracy { step: 100, accuracy: 0.9375 };
        assert_eq!(m.to_string(), "Accuracy at 100: 0.93750");
    }

    #[test]
    fn test_test_batch_line_format() {
        let m = TestBatchAccuracy { index: 3, accuracy: 1.0 };
        assert_eq!(m.to_string(), "Test batch accuracy 3: 1.00000");
    }

    #[test]
    fn test_report_keeps_order() {
        let mut r = TrainingReport::default();
        r.record_step(0, 0.5);
        r.record_step(100, 0.75);
        r.record_test_batch(0, 0.8);

        assert_eq!(r.steps.iter().map(|s| s.step).collect::<Vec<_>>(), vec![0, 100]);
        assert_eq!(r.test_batches.len(), 1);
    }
}
