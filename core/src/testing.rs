//! In-memory provider for exercising round setup without a network.

use core::cell::RefCell;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::collections::{BTreeMap, BTreeSet};

use crate::*;

/// Future that stays pending for the given number of polls, waking itself each time.
struct Polls(u32);

impl Future for Polls {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

#[derive(Debug, Default)]
pub(crate) struct StubProvider {
    pool: Vec<CategorySummary>,
    categories: BTreeMap<CategoryId, RawCategory>,
    delays: BTreeMap<CategoryId, u32>,
    failing: BTreeSet<CategoryId>,
    completed: RefCell<Vec<CategoryId>>,
}

impl StubProvider {
    /// Pool of ids `1..=size`, each category titled `Category {id}` with `clues` clues named
    /// `Question {id}.{n}` / `Answer {id}.{n}`.
    pub(crate) fn with_pool(size: u64, clues: usize) -> Self {
        let mut provider = Self::default();
        for id in (1..=size).map(CategoryId) {
            let title = format!("Category {}", id.0);
            provider.pool.push(CategorySummary {
                id,
                title: title.clone(),
            });
            provider.categories.insert(
                id,
                RawCategory {
                    id,
                    title,
                    clues: (0..clues)
                        .map(|n| {
                            RawClue::new(
                                format!("Question {}.{n}", id.0),
                                format!("Answer {}.{n}", id.0),
                            )
                        })
                        .collect(),
                },
            );
        }
        provider
    }

    pub(crate) fn with_category(mut self, category: RawCategory) -> Self {
        self.categories.insert(category.id, category);
        self
    }

    /// Holds the fetch of `id` back for `polls` polls.
    pub(crate) fn delay(mut self, id: CategoryId, polls: u32) -> Self {
        self.delays.insert(id, polls);
        self
    }

    pub(crate) fn fail(mut self, id: CategoryId) -> Self {
        self.failing.insert(id);
        self
    }

    /// Ids in the order their fetches resolved.
    pub(crate) fn completion_order(&self) -> Vec<CategoryId> {
        self.completed.borrow().clone()
    }
}

impl CategoryProvider for StubProvider {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>> {
        Ok(self.pool.iter().take(count).cloned().collect())
    }

    async fn category(&self, id: CategoryId) -> Result<RawCategory> {
        Polls(self.delays.get(&id).copied().unwrap_or(0)).await;
        self.completed.borrow_mut().push(id);

        if self.failing.contains(&id) {
            return Err(GameError::CategoryFetch {
                id,
                reason: "connection reset".into(),
            });
        }

        self.categories
            .get(&id)
            .cloned()
            .ok_or_else(|| GameError::CategoryFetch {
                id,
                reason: "404 Not Found".into(),
            })
    }
}
