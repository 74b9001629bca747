//! Seats and teams of the 2v2 variant.

use core::fmt;

/// One of the four boards in a 2v2 game, and the player behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    User,
    Buddy,
    Enemy1,
    Enemy2,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::User, Seat::Buddy, Seat::Enemy1, Seat::Enemy2];

    /// Stable index into per-seat arrays.
    pub const fn index(self) -> usize {
        match self {
            Seat::User => 0,
            Seat::Buddy => 1,
            Seat::Enemy1 => 2,
            Seat::Enemy2 => 3,
        }
    }

    pub const fn team(self) -> Team {
        match self {
            Seat::User | Seat::Buddy => Team::Allies,
            Seat::Enemy1 | Seat::Enemy2 => Team::Enemies,
        }
    }

    pub const fn teammate(self) -> Seat {
        match self {
            Seat::User => Seat::Buddy,
            Seat::Buddy => Seat::User,
            Seat::Enemy1 => Seat::Enemy2,
            Seat::Enemy2 => Seat::Enemy1,
        }
    }

    pub fn is_ally_of(self, other: Seat) -> bool {
        self.team() == other.team()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::User => write!(f, "user"),
            Seat::Buddy => write!(f, "buddy"),
            Seat::Enemy1 => write!(f, "enemy1"),
            Seat::Enemy2 => write!(f, "enemy2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    Allies,
    Enemies,
}

impl Team {
    pub const fn opponent(self) -> Team {
        match self {
            Team::Allies => Team::Enemies,
            Team::Enemies => Team::Allies,
        }
    }

    /// Members in attack order.
    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Team::Allies => [Seat::User, Seat::Buddy],
            Team::Enemies => [Seat::Enemy1, Seat::Enemy2],
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Allies => write!(f, "allies"),
            Team::Enemies => write!(f, "enemies"),
        }
    }
}
