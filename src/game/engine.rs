//! The game engine: configuration, construction, and the play loop.
//!
//! A [`Game`] owns one board, a red and a black die, the ordered
//! player list (turn order = list order), and the single seeded RNG
//! every randomized operation draws from. The board is shuffled and
//! edge-validated inside [`Game::new`], before any die is rolled for
//! play.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Suit};
use crate::core::dice::{Die, DieColor};
use crate::core::player::{Player, PlayerId, MARKERS_PER_PLAYER};
use crate::core::rng::GameRng;
use crate::error::GameError;
use crate::game::choice::{MarkerChoice, TurnContext};
use crate::game::turn::{MoveRecord, TurnPhase, TurnRecord};

/// Everything fixed at game start. No runtime reconfiguration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names, in turn order.
    pub player_names: Vec<String>,
    /// Names of each player's three markers.
    pub marker_names: Vec<String>,
    /// Suit set for the board composition.
    pub suits: Vec<Suit>,
    /// Value set for the board composition. Values must lie in
    /// 1..=13; value 0 is reserved for jokers.
    pub values: Vec<u8>,
    /// Number of jokers appended to the composition.
    pub joker_count: usize,
    /// Side count for both dice.
    pub die_sides: u8,
}

impl GameConfig {
    /// The standard game: 54-card board (four suits, values 1..=13,
    /// two jokers), six-sided dice, markers "1" "2" "3".
    #[must_use]
    pub fn standard(player_names: Vec<String>) -> Self {
        Self {
            player_names,
            marker_names: vec!["1".to_string(), "2".to_string(), "3".to_string()],
            suits: Suit::STANDARD.to_vec(),
            values: (1..=13).collect(),
            joker_count: 2,
            die_sides: 6,
        }
    }

    /// Fail fast on configurations the game cannot start from.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if self.marker_names.len() != MARKERS_PER_PLAYER {
            return Err(GameError::MarkerNameCount(self.marker_names.len()));
        }
        if self.die_sides < 1 {
            return Err(GameError::InvalidDieSides(self.die_sides));
        }
        if self.suits.is_empty() || self.values.is_empty() {
            return Err(GameError::EmptyComposition);
        }
        if let Some(&value) = self.values.iter().find(|&&v| v == 0 || v > 13) {
            return Err(GameError::InvalidCardValue(value));
        }
        Ok(())
    }
}

/// Result of one round: the turns played and the winner, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Turn records in play order. Ends early when a player wins.
    pub turns: Vec<TurnRecord>,
    /// The winning player, if this round produced one.
    pub winner: Option<PlayerId>,
}

/// A race in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    red_die: Die,
    black_die: Die,
    players: Vec<Player>,
    rng: GameRng,
    phase: TurnPhase,
    rounds_played: u32,
}

impl Game {
    /// Build a game: validate the configuration, lay out the board,
    /// shuffle it, and enforce the edge rule — all before any play
    /// roll.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let mut board = Board::build(&config.suits, &config.values, config.joker_count);
        board.shuffle(&mut rng);
        board.validate(&mut rng)?;

        let players = config
            .player_names
            .iter()
            .map(|name| Player::new(name.clone(), &config.marker_names))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            board,
            red_die: Die::new(config.die_sides, DieColor::Red)?,
            black_die: Die::new(config.die_sides, DieColor::Black)?,
            players,
            rng,
            phase: TurnPhase::AwaitingRedRoll,
            rounds_played: 0,
        })
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// One player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Current phase of the turn in progress.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// First player in turn order with all three markers on the final
    /// cell, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all(self.players.len()).find(|&id| self.players[id.index()].has_won(&self.board))
    }

    /// Play one player's turn: roll both dice, compute the stop value,
    /// then apply the red and black moves with markers supplied by
    /// `provider`.
    pub fn play_turn(
        &mut self,
        player: PlayerId,
        provider: &mut dyn MarkerChoice,
    ) -> Result<TurnRecord, GameError> {
        self.phase = TurnPhase::AwaitingRedRoll;
        let red_value = self.red_die.roll(&mut self.rng);

        self.phase = TurnPhase::AwaitingBlackRoll;
        let black_value = self.black_die.roll(&mut self.rng);

        let stop_value = u16::from(red_value) + u16::from(black_value);

        self.phase = TurnPhase::AwaitingRedMarkerChoice;
        let red_move = self.apply_move(
            player,
            DieColor::Red,
            red_value,
            (red_value, black_value, stop_value),
            provider,
        )?;
        self.phase = TurnPhase::RedMoveApplied;

        self.phase = TurnPhase::AwaitingBlackMarkerChoice;
        let black_move = self.apply_move(
            player,
            DieColor::Black,
            black_value,
            (red_value, black_value, stop_value),
            provider,
        )?;
        self.phase = TurnPhase::BlackMoveApplied;

        self.phase = TurnPhase::TurnComplete;
        Ok(TurnRecord {
            player,
            red_value,
            black_value,
            stop_value,
            moves: [red_move, black_move],
        })
    }

    /// Ask the provider for a marker, validate the index, and advance
    /// the chosen marker.
    fn apply_move(
        &mut self,
        player: PlayerId,
        die: DieColor,
        spaces: u8,
        (red_value, black_value, stop_value): (u8, u8, u16),
        provider: &mut dyn MarkerChoice,
    ) -> Result<MoveRecord, GameError> {
        let ctx = TurnContext {
            player_name: self.players[player.index()].name(),
            die,
            red_value,
            black_value,
            stop_value,
        };
        let index = provider.choose_marker(&ctx);

        let count = self.players[player.index()].markers().len();
        if index >= count {
            return Err(GameError::InvalidSelection { index, count, die });
        }

        let marker = self.players[player.index()]
            .marker_mut(index)
            .ok_or(GameError::InvalidSelection { index, count, die })?;
        let from = marker.position();
        marker.advance(spaces, stop_value, &self.board);
        let to = marker.position();

        Ok(MoveRecord {
            die,
            marker: index,
            from,
            to,
        })
    }

    /// Play one round: every player takes a turn in order, with a win
    /// check immediately after each turn. Ends early on a win.
    pub fn play_round(&mut self, provider: &mut dyn MarkerChoice) -> Result<RoundOutcome, GameError> {
        let mut turns = Vec::with_capacity(self.players.len());

        for id in PlayerId::all(self.players.len()) {
            turns.push(self.play_turn(id, provider)?);

            if self.players[id.index()].has_won(&self.board) {
                self.rounds_played += 1;
                return Ok(RoundOutcome {
                    turns,
                    winner: Some(id),
                });
            }
        }

        self.rounds_played += 1;
        Ok(RoundOutcome {
            turns,
            winner: None,
        })
    }

    /// Run rounds until a winner emerges.
    pub fn play(&mut self, provider: &mut dyn MarkerChoice) -> Result<PlayerId, GameError> {
        loop {
            if let Some(winner) = self.play_round(provider)?.winner {
                return Ok(winner);
            }
        }
    }
}
