use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::*;
pub use index::*;
pub use shuffle::*;

mod index;
mod shuffle;

/// Picks the categories of a round from the provider's pool.
pub trait CategorySampler {
    /// Returns exactly `count` distinct identifiers from `pool`, each equally likely to be chosen.
    fn sample(self, pool: &[CategoryId], count: usize) -> Result<Vec<CategoryId>>;
}

/// Drops repeated identifiers (first occurrence wins) and checks that enough remain.
fn distinct_pool(pool: &[CategoryId], count: usize) -> Result<Vec<CategoryId>> {
    let mut seen = BTreeSet::new();
    let distinct: Vec<CategoryId> = pool.iter().copied().filter(|&id| seen.insert(id)).collect();

    if distinct.len() != pool.len() {
        log::warn!(
            "category pool had {} duplicate ids",
            pool.len() - distinct.len()
        );
    }

    if distinct.len() < count {
        return Err(GameError::PoolTooSmall {
            required: count,
            available: distinct.len(),
        });
    }

    Ok(distinct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn pool(size: u64) -> Vec<CategoryId> {
        (1..=size).map(CategoryId).collect()
    }

    fn assert_valid_sample(picked: &[CategoryId], pool: &[CategoryId], count: usize) {
        assert_eq!(picked.len(), count);
        let unique: BTreeSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), count, "duplicates in {picked:?}");
        assert!(picked.iter().all(|id| pool.contains(id)));
    }

    /// Selection counts over many seeds stay close to the uniform expectation.
    fn assert_uniform<S, F>(make: F)
    where
        S: CategorySampler,
        F: Fn(u64) -> S,
    {
        const RUNS: u64 = 20_000;
        const COUNT: usize = 3;
        let pool = pool(10);
        let mut hits: BTreeMap<CategoryId, u64> = BTreeMap::new();

        for seed in 0..RUNS {
            for id in make(seed).sample(&pool, COUNT).unwrap() {
                *hits.entry(id).or_default() += 1;
            }
        }

        let expected = RUNS * COUNT as u64 / pool.len() as u64;
        let tolerance = expected / 20;
        assert_eq!(hits.len(), pool.len());
        for (id, count) in hits {
            assert!(
                count.abs_diff(expected) <= tolerance,
                "{id} picked {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn both_samplers_pick_distinct_ids_for_every_pool_size() {
        for size in 6..=40 {
            let pool = pool(size);
            for seed in 0..20 {
                assert_valid_sample(&ShuffleSampler::new(seed).sample(&pool, 6).unwrap(), &pool, 6);
                assert_valid_sample(&IndexSampler::new(seed).sample(&pool, 6).unwrap(), &pool, 6);
            }
        }
    }

    #[test]
    fn shuffle_sampler_is_uniform() {
        assert_uniform(ShuffleSampler::new);
    }

    #[test]
    fn index_sampler_is_uniform() {
        assert_uniform(IndexSampler::new);
    }

    #[test]
    fn small_pool_is_an_error_not_a_short_sample() {
        let expected = GameError::PoolTooSmall {
            required: 6,
            available: 5,
        };
        assert_eq!(ShuffleSampler::new(0).sample(&pool(5), 6), Err(expected.clone()));
        assert_eq!(IndexSampler::new(0).sample(&pool(5), 6), Err(expected));
    }

    #[test]
    fn duplicates_do_not_count_towards_the_pool() {
        let pool = [1, 2, 2, 3, 3, 3].map(CategoryId);

        assert_eq!(
            ShuffleSampler::new(3).sample(&pool, 4),
            Err(GameError::PoolTooSmall {
                required: 4,
                available: 3
            })
        );

        let mut picked = IndexSampler::new(3).sample(&pool, 3).unwrap();
        picked.sort();
        assert_eq!(picked, [1, 2, 3].map(CategoryId));
    }

    #[test]
    fn same_seed_gives_same_sample() {
        let pool = pool(100);
        assert_eq!(
            ShuffleSampler::new(42).sample(&pool, 6),
            ShuffleSampler::new(42).sample(&pool, 6)
        );
        assert_eq!(
            IndexSampler::new(42).sample(&pool, 6),
            IndexSampler::new(42).sample(&pool, 6)
        );
    }

    #[test]
    fn sampling_nothing_is_allowed() {
        assert_eq!(ShuffleSampler::new(1).sample(&pool(3), 0), Ok(vec![]));
        assert_eq!(IndexSampler::new(1).sample(&[], 0), Ok(vec![]));
    }
}
