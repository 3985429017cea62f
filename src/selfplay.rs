//! Engine-vs-engine matches.
//!
//! Two engines at the same depth always play the same game, so the first few
//! plies of each game are chosen uniformly at random from the legal moves to
//! get a spread of positions. A fixed seed reproduces the whole run.

use anyhow::Context;
use tracing::{debug, info};

use crate::board::Player;
use crate::config::GameConfig;
use crate::game::{Game, GameSummary, Outcome};

/// Results of a self-play run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub games: Vec<GameSummary>,
}

impl Tally {
    fn record(&mut self, summary: GameSummary) {
        match summary.outcome() {
            Outcome::Winner(Player::Black) => self.black_wins += 1,
            Outcome::Winner(Player::White) => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.games.push(summary);
    }
}

/// Play one game: `openings` random plies, then engine moves to the end.
pub fn play_one(
    config: &GameConfig,
    openings: usize,
    rng: &mut fastrand::Rng,
) -> anyhow::Result<GameSummary> {
    let mut game = Game::new(config.clone())?;

    while !game.is_over() {
        if game.pass_if_stuck() {
            continue;
        }
        if game.moves_played() < openings {
            let moves = game.legal_moves();
            let mv = moves[rng.usize(..moves.len())];
            debug!("random opening move {mv} for {}", game.to_move());
            game.play(mv)?;
        } else {
            game.engine_turn().context("engine found no move")?;
        }
    }

    Ok(game.summary())
}

/// Play `games` engine-vs-engine games at `depth` plies.
pub fn run_selfplay(depth: u32, games: usize, openings: usize, seed: u64) -> anyhow::Result<Tally> {
    let config = GameConfig::self_play(depth);
    config.validate()?;
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut tally = Tally::default();

    for i in 0..games {
        let summary = play_one(&config, openings, &mut rng)?;
        info!(
            "game {}: black {} white {} in {} moves",
            i + 1,
            summary.black,
            summary.white,
            summary.moves
        );
        tally.record(summary);
    }

    Ok(tally)
}
