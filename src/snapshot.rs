#![cfg(feature = "std")]

//! Snapshot encoding for handing finished or in-progress games to storage.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Compact binary form, for storage hand-off.
pub fn encode<T: Serialize>(value: &T) -> anyhow::Result<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> anyhow::Result<T> {
    Ok(bincode::deserialize(bytes)?)
}

/// Human-readable export, e.g. the final state and move log of a game.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> anyhow::Result<T> {
    Ok(serde_json::from_str(json)?)
}
