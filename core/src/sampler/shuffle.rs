use super::*;

/// Fisher-Yates shuffle of the pool, stopped once the first `count` slots are settled.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleSampler {
    seed: u64,
}

impl ShuffleSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CategorySampler for ShuffleSampler {
    fn sample(self, pool: &[CategoryId], count: usize) -> Result<Vec<CategoryId>> {
        use rand::prelude::*;

        let mut ids = distinct_pool(pool, count)?;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for i in 0..count {
            let j = rng.random_range(i..ids.len());
            ids.swap(i, j);
        }
        ids.truncate(count);

        Ok(ids)
    }
}
