//! Game orchestration between the human and the computer.

use crate::config::GameConfig;
use crate::game::{Game, MoveError, MoveRequest};
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::{Context, Result};
use minimax_core::{Mark, Outcome};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The computer is choosing its move.
    ComputerThinking,
    /// A move was applied; carries the new state.
    MoveMade {
        /// Who moved.
        mark: Mark,
        /// State after the move.
        game: Game,
    },
    /// The human asked for a move that cannot be played.
    IllegalMove(MoveError),
    /// Game ended.
    GameOver(Outcome),
}

/// Orchestrates gameplay between two players.
///
/// The human plays X and the computer plays O.
pub struct Orchestrator {
    game: Game,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        game: Game,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game,
            human,
            computer,
            event_tx,
        }
    }

    /// Runs the game loop until the game ends.
    ///
    /// Illegal human requests are reported and the human is asked again.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!(first = %self.game.to_move(), "Starting game orchestration");

        loop {
            let outcome = self.game.outcome();
            if outcome.is_terminal() {
                info!(%outcome, "Game over");
                self.event_tx.send(GameEvent::GameOver(outcome))?;
                return Ok(outcome);
            }

            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.human,
                Mark::O => &mut self.computer,
            };

            if player.is_computer() {
                self.event_tx.send(GameEvent::ComputerThinking)?;
            }

            debug!(player = %player.name(), %mark, "Waiting for move");
            let request = player.get_move(&self.game).await?;

            match self.game.play(request) {
                Ok(next) => {
                    self.game = next;
                    self.event_tx.send(GameEvent::MoveMade { mark, game: next })?;
                }
                Err(err) if mark == Mark::X => {
                    warn!(%request, error = %err, "Rejected human move");
                    self.event_tx.send(GameEvent::IllegalMove(err))?;
                }
                Err(err) => {
                    return Err(err).context(format!("Computer requested illegal move {}", request));
                }
            }
        }
    }
}

/// A running game: the orchestrator task plus both ends of its channels.
pub struct GameHandle {
    task: JoinHandle<()>,
    moves: mpsc::UnboundedSender<MoveRequest>,
    events: mpsc::UnboundedReceiver<GameEvent>,
}

impl GameHandle {
    /// Spawns a new game configured by `config`.
    #[instrument(skip(config))]
    pub fn spawn(config: &GameConfig) -> Self {
        let (moves, move_rx) = mpsc::unbounded_channel();
        let (event_tx, events) = mpsc::unbounded_channel();

        let human = Box::new(HumanPlayer::new("Human", move_rx));
        let computer = Box::new(ComputerPlayer::new("Computer", config.computer_delay()));
        let game = Game::new(config.first_player().mark());
        let mut orchestrator = Orchestrator::new(game, human, computer, event_tx);

        let task = tokio::spawn(async move {
            if let Err(e) = orchestrator.run().await {
                error!(error = %e, "Orchestrator error");
            }
        });

        Self {
            task,
            moves,
            events,
        }
    }

    /// Forwards a human move request to the orchestrator.
    pub fn submit(&self, request: MoveRequest) {
        if self.moves.send(request).is_err() {
            warn!(%request, "Game is no longer accepting moves");
        }
    }

    /// Returns the next pending event without waiting.
    pub fn try_next_event(&mut self) -> Option<GameEvent> {
        self.events.try_recv().ok()
    }
}

/// Dropping the handle stops the game.
impl Drop for GameHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
