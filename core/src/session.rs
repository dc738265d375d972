use alloc::rc::Rc;
use core::cell::Cell;

use crate::*;

/// Identifies the round a pending board belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundTicket {
    generation: u64,
}

impl RoundTicket {
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Keeps the session in its loading state for as long as it is alive. Dropping it clears the flag,
/// unless a newer round has taken the flag over in the meantime.
#[derive(Debug)]
#[must_use = "the loading state ends as soon as the guard is dropped"]
pub struct LoadingGuard {
    active: Rc<Cell<Option<u64>>>,
    generation: u64,
}

impl LoadingGuard {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.active.get() == Some(self.generation) {
            log::trace!("round {} no longer loading", self.generation);
            self.active.set(None);
        }
    }
}

/// Everything one player's game holds between rounds: the current board, the round counter and
/// whatever went wrong last.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Option<Board>,
    generation: u64,
    loading: Rc<Cell<Option<u64>>>,
    last_error: Option<GameError>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: None,
            generation: 0,
            loading: Rc::new(Cell::new(None)),
            last_error: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get().is_some()
    }

    pub fn last_error(&self) -> Option<&GameError> {
        self.last_error.as_ref()
    }

    pub fn is_current(&self, ticket: RoundTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Starts a new round. Any round still in flight becomes stale.
    pub fn begin_round(&mut self) -> (RoundTicket, LoadingGuard) {
        self.generation += 1;
        self.loading.set(Some(self.generation));
        log::debug!("round {} started", self.generation);

        let guard = LoadingGuard {
            active: Rc::clone(&self.loading),
            generation: self.generation,
        };
        (
            RoundTicket {
                generation: self.generation,
            },
            guard,
        )
    }

    /// Installs the outcome of a round. A failed round keeps the previous board on display.
    pub fn finish_round(&mut self, ticket: RoundTicket, result: Result<Board>) -> Result<()> {
        if !self.is_current(ticket) {
            log::warn!(
                "dropping result of round {}, round {} is current",
                ticket.generation,
                self.generation
            );
            return Err(GameError::StaleRound);
        }

        if self.loading.get() == Some(ticket.generation) {
            self.loading.set(None);
        }

        match result {
            Ok(board) => {
                log::debug!("round {} dealt, grid {:?}", ticket.generation, board.size());
                self.board = Some(board);
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                log::warn!("round {} failed: {}", ticket.generation, err);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Starts a round and waits for it to be dealt.
    pub async fn play_round<P, S>(&mut self, provider: &P, sampler: S) -> Result<()>
    where
        P: CategoryProvider,
        S: CategorySampler,
    {
        let (ticket, guard) = self.begin_round();
        let result = deal_board(provider, &self.config, sampler).await;
        drop(guard);
        self.finish_round(ticket, result)
    }

    pub fn reveal_at(&mut self, pos: CellPos) -> Result<RevealOutcome<'_>> {
        self.board.as_mut().ok_or(GameError::NoBoard)?.reveal(pos)
    }

    pub fn is_round_over(&self) -> bool {
        self.board.as_ref().is_some_and(Board::is_complete)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
