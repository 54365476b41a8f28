//! Stratified shuffle split

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::error::SplitError;
use crate::data::Frame;
use crate::Result;

/// Single stratified train/test splitter
#[derive(Clone, Debug)]
pub struct StratifiedSplit {
    test_size: f64,
    seed: u64,
}

impl StratifiedSplit {
    /// Create a splitter holding out `test_size` of the rows
    pub fn new(test_size: f64) -> Self {
        Self {
            test_size,
            seed: 42,
        }
    }

    /// Set random seed for shuffling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of test rows for `n_samples` rows
    pub fn test_count(&self, n_samples: usize) -> usize {
        (self.test_size * n_samples as f64).ceil() as usize
    }

    /// Generate sorted `(train, test)` row indices stratified on `labels`
    pub fn split<S: AsRef<str>>(
        &self,
        labels: &[S],
    ) -> std::result::Result<(Vec<usize>, Vec<usize>), SplitError> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(SplitError::InvalidTestSize(self.test_size));
        }
        let n = labels.len();
        if n == 0 {
            return Err(SplitError::Empty);
        }

        let mut classes: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (i, label) in labels.iter().enumerate() {
            classes.entry(label.as_ref()).or_default().push(i);
        }

        if let Some((class, members)) = classes.iter().min_by_key(|(_, m)| m.len()) {
            if members.len() < 2 {
                return Err(SplitError::TooFewMembers {
                    class: (*class).to_string(),
                    count: members.len(),
                });
            }
        }

        let n_classes = classes.len();
        let n_test = self.test_count(n);
        let n_train = n - n_test;
        if n_test < n_classes {
            return Err(SplitError::TestTooSmall {
                size: n_test,
                n_classes,
            });
        }
        if n_train < n_classes {
            return Err(SplitError::TrainTooSmall {
                size: n_train,
                n_classes,
            });
        }

        let counts: Vec<usize> = classes.values().map(Vec::len).collect();
        let allocation = allocate(&counts, n_test, n);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut train = Vec::with_capacity(n_train);
        let mut test = Vec::with_capacity(n_test);
        for (members, &take) in classes.values().zip(allocation.iter()) {
            let mut shuffled = members.clone();
            shuffled.shuffle(&mut rng);
            test.extend_from_slice(&shuffled[..take]);
            train.extend_from_slice(&shuffled[take..]);
        }

        train.sort_unstable();
        test.sort_unstable();
        Ok((train, test))
    }
}

/// Distribute `n_test` rows over classes proportionally to their size.
///
/// Floors first, then hands leftover rows to the largest fractional
/// remainders. Every class keeps at least one row on the train side.
fn allocate(counts: &[usize], n_test: usize, n: usize) -> Vec<usize> {
    let mut alloc: Vec<usize> = counts.iter().map(|&c| c * n_test / n).collect();
    let mut remaining = n_test - alloc.iter().sum::<usize>();

    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = counts[a] * n_test % n;
        let rb = counts[b] * n_test % n;
        rb.cmp(&ra)
            .then(counts[b].cmp(&counts[a]))
            .then(a.cmp(&b))
    });

    while remaining > 0 {
        let mut progressed = false;
        for &class in &order {
            if remaining == 0 {
                break;
            }
            if alloc[class] + 1 < counts[class] {
                alloc[class] += 1;
                remaining -= 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    alloc
}

/// Split a frame into `(train, test)` frames stratified on `target`
pub fn train_test_split(
    frame: &Frame,
    target: &str,
    test_size: f64,
    seed: u64,
) -> Result<(Frame, Frame)> {
    let labels = frame.require(target)?.labels();
    let (train_idx, test_idx) = StratifiedSplit::new(test_size)
        .with_seed(seed)
        .split(&labels)?;

    tracing::info!(
        train = train_idx.len(),
        test = test_idx.len(),
        seed,
        "stratified split"
    );

    Ok((frame.take(&train_idx), frame.take(&test_idx)))
}
