// ============================================================
// Layer 4: Train/Test Splitter
// ============================================================
// Randomly shuffles samples and splits them into two sets:
//   - Training set: sampled from during the optimisation loop
//   - Test set:     only touched by the final evaluation batches
//
// The corpus arrives ordered (all odd sequences, then all even
// ones). Without shuffling, one split would contain a single
// class. The default fraction of 0.5 turns the 20,000 generated
// sequences into 10,000 train / 10,000 test.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.

use rand::{seq::SliceRandom, Rng};

/// Randomly shuffle `samples` and split into (train, test).
///
/// # Arguments
/// * `samples`        - All available samples (consumed by this function)
/// * `train_fraction` - Proportion for training, e.g. 0.5 = 50%
/// * `rng`            - Source of randomness for the shuffle
pub fn split_train_test<T, R: Rng + ?Sized>(
    mut samples:    Vec<T>,
    train_fraction: f64,
    rng:            &mut R,
) -> (Vec<T>, Vec<T>) {
    samples.shuffle(rng);

    let total    = samples.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;

    // Clamp to valid range to avoid panics on tiny datasets
    let split_at = split_at.min(total);

    // After this: samples = [0..split_at], test = [split_at..total]
    let test = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} test ({}% / {}%)",
        samples.len(),
        test.len(),
        (samples.len() * 100) / total.max(1),
        (test.len()    * 100) / total.max(1),
    );

    (samples, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..20_000).collect();
        let (train, test)     = split_train_test(items, 0.5, &mut rng());
        assert_eq!(train.len(), 10_000);
        assert_eq!(test.len(),  10_000);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..50).collect();
        let (train, test)     = split_train_test(items, 0.7, &mut rng());
        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_ordered_classes_are_mixed() {
        // 100 "odd" (true) followed by 100 "even" (false)
        let items: Vec<bool> = (0..200).map(|i| i < 100).collect();
        let (train, _)        = split_train_test(items, 0.5, &mut rng());
        assert!(train.iter().any(|&x| x));
        assert!(train.iter().any(|&x| !x));
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, test)     = split_train_test(items, 0.5, &mut rng());
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}
