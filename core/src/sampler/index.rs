use super::*;

/// Draws `count` distinct pool indices directly, without reordering the pool.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexSampler {
    seed: u64,
}

impl IndexSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CategorySampler for IndexSampler {
    fn sample(self, pool: &[CategoryId], count: usize) -> Result<Vec<CategoryId>> {
        use rand::prelude::*;

        let ids = distinct_pool(pool, count)?;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        Ok(rand::seq::index::sample(&mut rng, ids.len(), count)
            .into_iter()
            .map(|i| ids[i])
            .collect())
    }
}
