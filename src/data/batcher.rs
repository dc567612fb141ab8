//! Shuffled mini-batch sampling over row indices.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Yields shuffled mini-batches of row indices.
///
/// The sampler walks a random permutation of `0..num_rows`, handing out
/// `batch_size` indices at a time, and reshuffles once the permutation is
/// exhausted. A batch that would cross the permutation boundary is truncated,
/// so every row is visited exactly once per pass.
#[derive(Debug)]
pub struct BatchSampler {
    order: Vec<usize>,
    cursor: usize,
    rng: StdRng,
}

impl BatchSampler {
    /// Creates a sampler over `num_rows` indices.
    ///
    /// A seed makes the shuffle order reproducible; otherwise OS entropy is
    /// used.
    pub fn new(num_rows: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut sampler = Self {
            order: (0..num_rows).collect(),
            cursor: 0,
            rng,
        };
        sampler.reshuffle();
        sampler
    }

    fn reshuffle(&mut self) {
        self.order.shuffle(&mut self.rng);
        self.cursor = 0;
    }

    /// Returns the next batch of at most `batch_size` row indices.
    ///
    /// Empty only when the sampler covers zero rows or `batch_size` is zero.
    pub fn next_batch(&mut self, batch_size: usize) -> Vec<usize> {
        if self.order.is_empty() || batch_size == 0 {
            return Vec::new();
        }
        if self.cursor >= self.order.len() {
            self.reshuffle();
        }
        let end = (self.cursor + batch_size).min(self.order.len());
        let batch = self.order[self.cursor..end].to_vec();
        self.cursor = end;
        batch
    }
}
