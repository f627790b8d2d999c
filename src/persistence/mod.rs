//! Match snapshots
//!
//! A versioned JSON envelope around [`MatchState`]. Snapshots are taken
//! between ticks, when the event queue is always empty, so resuming from one
//! with the same inputs replays the match exactly.

use serde::{Deserialize, Serialize};

use crate::sim::MatchState;
use crate::{Error, Result};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized match state plus format version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub state: MatchState,
}

impl Snapshot {
    pub fn capture(state: &MatchState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            state: state.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot, rejecting other format versions
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(Error::UnsupportedSnapshot {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    pub fn restore(self) -> MatchState {
        self.state
    }
}

/// Serialize a match state
pub fn save(state: &MatchState) -> Result<String> {
    Snapshot::capture(state).to_json()
}

/// Restore a match state
pub fn load(json: &str) -> Result<MatchState> {
    Ok(Snapshot::from_json(json)?.restore())
}
