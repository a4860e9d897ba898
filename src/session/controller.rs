//! Session controller: human input, deferred computer turns, reset.

use tracing::{debug, info, warn};

use crate::agent::{HeuristicAgent, MovePolicy};
use crate::core::{GameError, GameRng, Player, Result, SessionConfig};
use crate::events::GameObserver;
use crate::rules::{GameEngine, MoveOutcome};

/// A game session owned by whatever drives the UI.
pub struct Session {
    config: SessionConfig,
    engine: GameEngine,
    /// Computer player, seated as `config.ai_player`.
    agent: Option<Box<dyn MovePolicy>>,
    /// A computer turn is waiting to run.
    pending: bool,
}

impl Session {
    /// Create a session from `config`.
    ///
    /// With `ai_enabled` a `HeuristicAgent` takes the `ai_player` seat,
    /// seeded from `config.seed` or from a fresh random seed.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let agent: Option<Box<dyn MovePolicy>> = if config.ai_enabled {
            let rng = match config.seed {
                Some(seed) => GameRng::new(seed),
                None => GameRng::from_random_seed(),
            };
            info!(seed = rng.seed(), seat = config.ai_player.id(), "seating heuristic agent");
            Some(Box::new(HeuristicAgent::from_rng(rng)))
        } else {
            None
        };
        Self::build(config, agent)
    }

    /// Create a session with a custom computer policy in the `ai_player` seat.
    ///
    /// `config.ai_enabled` is ignored; the policy is always seated.
    pub fn with_agent(config: SessionConfig, agent: Box<dyn MovePolicy>) -> Result<Self> {
        let config = SessionConfig {
            ai_enabled: true,
            ..config
        };
        Self::build(config, Some(agent))
    }

    fn build(config: SessionConfig, agent: Option<Box<dyn MovePolicy>>) -> Result<Self> {
        config.validate()?;
        let engine = GameEngine::new(config.board_size)?;
        let mut session = Self {
            config,
            engine,
            agent,
            pending: false,
        };
        session.schedule_agent();
        Ok(session)
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read-only access to the engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Register an observer on the engine.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.engine.add_observer(observer);
    }

    /// The seat the computer plays, if one is seated.
    #[must_use]
    pub fn agent_player(&self) -> Option<Player> {
        self.agent.as_ref().map(|_| self.config.ai_player)
    }

    /// It is the computer's move and the game is still running.
    #[must_use]
    pub fn is_agent_turn(&self) -> bool {
        !self.engine.is_game_over()
            && self.agent_player() == Some(self.engine.current_player())
    }

    /// A computer turn is scheduled and has not run yet.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Submit a human move.
    ///
    /// Any scheduled computer turn runs first. Afterwards, if the move hands
    /// the turn to the computer, its turn is scheduled but not run.
    ///
    /// Fails with `ComputerTurn` while the computer is to move, which
    /// happens when its scheduled turn could not be completed.
    pub fn request_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome> {
        self.run_pending()?;

        if self.is_agent_turn() {
            let seat = self.engine.current_player();
            warn!(seat = seat.id(), row, col, "human move rejected: computer to play");
            return Err(GameError::ComputerTurn(seat));
        }

        let outcome = self.engine.apply_move(row, col)?;
        self.schedule_agent();
        Ok(outcome)
    }

    /// Run the scheduled computer turn.
    ///
    /// The computer keeps moving while it earns extra turns. It stops when
    /// the turn passes back or the game ends. Returns the computer's moves.
    ///
    /// If the policy proposes no move, or a move the engine rejects, the turn
    /// stays scheduled and the seat stays with the computer.
    pub fn run_pending(&mut self) -> Result<Vec<MoveOutcome>> {
        let mut outcomes = Vec::new();
        if !self.pending {
            return Ok(outcomes);
        }

        while self.is_agent_turn() {
            let Some(agent) = self.agent.as_mut() else {
                break;
            };
            let policy = agent.name();
            let Some(edge) = agent.select_move(self.engine.board()) else {
                warn!(policy, "agent proposed no move");
                return Ok(outcomes);
            };
            debug!(policy, %edge, "agent move");
            match self.engine.apply_move(edge.row, edge.col) {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    warn!(policy, %edge, %err, "agent move rejected");
                    return Err(err);
                }
            }
        }

        self.pending = false;
        Ok(outcomes)
    }

    /// Start a new game with the same configuration.
    pub fn reset(&mut self) {
        self.pending = false;
        self.engine.reset();
        self.schedule_agent();
    }

    fn schedule_agent(&mut self) {
        if self.is_agent_turn() {
            self.pending = true;
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("engine", &self.engine)
            .field("agent", &self.agent.as_ref().map(|a| a.name()))
            .field("pending", &self.pending)
            .finish()
    }
}
