//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::game::{Game, MoveRequest};
use anyhow::Result;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next move request from this player.
    ///
    /// The request is not validated here; the orchestrator rejects illegal
    /// requests and asks again.
    async fn get_move(&mut self, game: &Game) -> Result<MoveRequest>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True if the front end should show a "thinking" notice.
    fn is_computer(&self) -> bool {
        false
    }
}
