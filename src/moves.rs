//! Append-only move log shared by both game modes.

use alloc::vec::Vec;

use crate::common::{AttackResult, Position};
use crate::ship::ShipClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveResult {
    Hit,
    Miss,
    Sunk,
    /// The shot landed on a bomb trap and dealt no damage.
    Trap,
}

impl From<AttackResult> for MoveResult {
    fn from(res: AttackResult) -> Self {
        match res {
            AttackResult::Miss => MoveResult::Miss,
            AttackResult::Hit { .. } => MoveResult::Hit,
            AttackResult::Sunk { .. } => MoveResult::Sunk,
        }
    }
}

/// One resolved attack. `A` identifies participants (1v1 actor or 2v2 seat).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord<A> {
    pub actor: A,
    /// Owner of the board that was attacked.
    pub defender: A,
    pub target: Position,
    pub result: MoveResult,
    pub ship_sunk: Option<ShipClass>,
    /// 1-based position in the log.
    pub sequence: usize,
    pub timestamp_ms: u64,
}

impl<A> MoveRecord<A> {
    pub fn is_hit(&self) -> bool {
        matches!(self.result, MoveResult::Hit | MoveResult::Sunk)
    }
}

/// Records can be appended and read, never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveLog<A> {
    records: Vec<MoveRecord<A>>,
}

impl<A> Default for MoveLog<A> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<A: Copy> MoveLog<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, stamping the next sequence number.
    pub fn push(
        &mut self,
        actor: A,
        defender: A,
        target: Position,
        result: MoveResult,
        ship_sunk: Option<ShipClass>,
        timestamp_ms: u64,
    ) -> &MoveRecord<A> {
        let sequence = self.records.len() + 1;
        self.records.push(MoveRecord {
            actor,
            defender,
            target,
            result,
            ship_sunk,
            sequence,
            timestamp_ms,
        });
        &self.records[sequence - 1]
    }

    pub fn records(&self) -> &[MoveRecord<A>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&MoveRecord<A>> {
        self.records.last()
    }
}
