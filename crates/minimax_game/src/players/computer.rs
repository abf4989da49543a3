//! Computer player backed by the minimax search.

use super::Player;
use crate::game::{Game, MoveRequest};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer player that pauses, then plays the minimax choice.
pub struct ComputerPlayer {
    name: String,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a new computer player with the given cosmetic delay.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn get_move(&mut self, game: &Game) -> Result<MoveRequest> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Computer waiting before move");
        tokio::time::sleep(self.delay).await;

        let game = *game;
        let request = tokio::task::spawn_blocking(move || game.computer_move())
            .await
            .context("Search task failed")?;

        match request {
            Some(request) => {
                debug!(%request, "Computer chose move");
                Ok(request)
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}
