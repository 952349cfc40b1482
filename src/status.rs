//! Entity status codes and the display statuses they map to.
//!
//! The game client reports a raw numeric status per entity. Only a handful of
//! codes matter to callers deciding whether an action makes sense; everything
//! else collapses to `Status::Unknown`.

use serde::{Serialize, Serializer};
use std::fmt;

/// Raw entity status as reported by the client.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EntityStatus {
    Idle,
    Engaged,
    Dead,
    DeadEngaged,
    Event,
    Healing,
    Other(u32),
}

impl EntityStatus {
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => EntityStatus::Idle,
            1 => EntityStatus::Engaged,
            2 => EntityStatus::Dead,
            3 => EntityStatus::DeadEngaged,
            4 => EntityStatus::Event,
            33 => EntityStatus::Healing,
            other => EntityStatus::Other(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            EntityStatus::Idle => 0,
            EntityStatus::Engaged => 1,
            EntityStatus::Dead => 2,
            EntityStatus::DeadEngaged => 3,
            EntityStatus::Event => 4,
            EntityStatus::Healing => 33,
            EntityStatus::Other(code) => *code,
        }
    }
}

/// Display status exposed to decision logic.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    Standing,
    Fighting,
    Dead1,
    Dead2,
    Event,
    Healing,
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Standing => "standing",
            Status::Fighting => "fighting",
            Status::Dead1 => "dead1",
            Status::Dead2 => "dead2",
            Status::Event => "event",
            Status::Healing => "healing",
            Status::Unknown => "unknown",
        }
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, Status::Dead1 | Status::Dead2)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

pub fn to_status(status: EntityStatus) -> Status {
    match status {
        EntityStatus::Idle => Status::Standing,
        EntityStatus::Engaged => Status::Fighting,
        EntityStatus::Dead => Status::Dead1,
        EntityStatus::DeadEngaged => Status::Dead2,
        EntityStatus::Event => Status::Event,
        EntityStatus::Healing => Status::Healing,
        EntityStatus::Other(_) => Status::Unknown,
    }
}

impl From<EntityStatus> for Status {
    fn from(status: EntityStatus) -> Self {
        to_status(status)
    }
}
