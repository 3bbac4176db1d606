//! Achievements (badges) and high scores (boards), tracked by the host.
//!
//! A zero delta is a read: `get_*` are the `add_*` calls with nothing added.

use serde::{Deserialize, Serialize};

use crate::host::Misc;
use crate::net::Peer;
use crate::Firefly;

/// An achievement defined in the app metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Badge(pub u8);

/// A scoreboard defined in the app metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board(pub u8);

/// How far a peer is towards earning a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Progress {
    pub done: u16,
    pub goal: u16,
}

impl Progress {
    /// Decode the packed host value: done in the high 16 bits, goal in the low 16.
    pub fn from_raw(raw: u32) -> Self {
        Self {
            done: (raw >> 16) as u16,
            goal: raw as u16,
        }
    }

    pub fn earned(self) -> bool {
        self.done >= self.goal
    }
}

impl<H: Misc> Firefly<H> {
    pub fn add_progress(&self, peer: Peer, badge: Badge, delta: i16) -> Progress {
        let raw = self
            .host()
            .add_progress(peer.raw() as u32, u32::from(badge.0), i32::from(delta));
        Progress::from_raw(raw)
    }

    pub fn get_progress(&self, peer: Peer, badge: Badge) -> Progress {
        self.add_progress(peer, badge, 0)
    }

    /// Add to the peer's score on the board and return the new score, as wide
    /// as the host reports it.
    pub fn add_score(&self, peer: Peer, board: Board, delta: i16) -> i32 {
        self.host()
            .add_score(peer.raw() as u32, u32::from(board.0), i32::from(delta))
    }

    pub fn get_score(&self, peer: Peer, board: Board) -> i32 {
        self.add_score(peer, board, 0)
    }
}
