//! Human player fed by the terminal UI.

use super::Player;
use crate::game::{Game, MoveRequest};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

/// Human player whose requests arrive over a channel from the UI.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<MoveRequest>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<MoveRequest>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &Game) -> Result<MoveRequest> {
        match self.input_rx.recv().await {
            Some(request) => {
                debug!(player = %self.name, %request, "Human requested move");
                Ok(request)
            }
            None => anyhow::bail!("Input channel closed"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_core::Mark;

    #[tokio::test]
    async fn test_forwards_requests_until_closed() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut human = HumanPlayer::new("Human", rx);
        let game = Game::new(Mark::X);

        tx.send(MoveRequest::new(2, 1)).unwrap();
        assert_eq!(human.get_move(&game).await.unwrap(), MoveRequest::new(2, 1));

        drop(tx);
        assert!(human.get_move(&game).await.is_err());
    }
}
