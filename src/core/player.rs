//! Players and player identification.
//!
//! A player owns a named set of exactly three race markers. Marker
//! membership is fixed at construction; only marker positions change
//! during play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::marker::{AdvancePolicy, Marker};
use crate::error::GameError;

/// Number of markers every player races with.
pub const MARKERS_PER_PLAYER: usize = 3;

/// Player identifier, indexing the game's turn-order list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count`
    /// players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A named player and their three markers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    markers: SmallVec<[Marker; MARKERS_PER_PLAYER]>,
}

impl Player {
    /// Create a player with stop-value markers named after
    /// `marker_names`, all at the off-board start.
    ///
    /// Fails unless exactly three marker names are supplied.
    pub fn new(name: impl Into<String>, marker_names: &[String]) -> Result<Self, GameError> {
        if marker_names.len() != MARKERS_PER_PLAYER {
            return Err(GameError::MarkerNameCount(marker_names.len()));
        }
        Ok(Self {
            name: name.into(),
            markers: marker_names
                .iter()
                .map(|n| Marker::new(n.clone(), AdvancePolicy::StopValue))
                .collect(),
        })
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's markers in declared order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Mutable access to one marker by index.
    pub fn marker_mut(&mut self, index: usize) -> Option<&mut Marker> {
        self.markers.get_mut(index)
    }

    /// Occupancy string for a board position: per marker in declared
    /// order, the marker's name if it sits at `position`, else a
    /// single blank.
    #[must_use]
    pub fn occupancy_at(&self, position: i32) -> String {
        let mut occupancy = String::new();
        for marker in &self.markers {
            if marker.position() == position {
                occupancy.push_str(marker.name());
            } else {
                occupancy.push(' ');
            }
        }
        occupancy
    }

    /// Has this player won: all three markers on the final cell?
    #[must_use]
    pub fn has_won(&self, board: &Board) -> bool {
        let finish = board.finish_position();
        self.markers.iter().all(|m| m.position() == finish)
    }
}
