// Hero state snapshots produced by the game-state source

use glam::Vec2;
use std::fmt::Write;

/// Facing direction, in the fixed channel order N, E, S, W
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Every orientation, indexed by [`Orientation::index`]
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column of this facing in the hero sheet
    pub fn atlas_column(self) -> u32 {
        match self {
            Self::North => 3,
            Self::East => 2,
            Self::South => 0,
            Self::West => 1,
        }
    }
}

/// Where a hero stands and how healthy it is at one end of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroState {
    /// Grid cell (tile units)
    pub pos: Vec2,
    /// Health, nominally 0 to 100
    pub life: f32,
}

impl HeroState {
    pub fn new(x: f32, y: f32, life: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            life,
        }
    }
}

/// Snapshot rejected at the update boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetaError {
    #[error("Orientation sequence is empty")]
    EmptyOrientation,

    #[error("Life is not a finite number: {0}")]
    NonFiniteLife(f32),

    #[error("Position is not finite: {0}")]
    NonFinitePosition(Vec2),
}

/// Description of one hero transition between two turns
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    /// State before the turn, absent for the first snapshot
    pub from: Option<HeroState>,
    /// State after the turn
    pub to: HeroState,
    /// Facings visited during the turn, sampled over its duration
    pub orientation: Vec<Orientation>,
    /// Health reported alongside the event, for diagnostics
    pub life: Option<f32>,
    pub moved: bool,
    pub attack: bool,
    pub killed: bool,
    pub take_mine: bool,
    pub attacked: bool,
    pub winning: bool,
}

impl Meta {
    /// Snapshot with no prior state and every flag cleared
    pub fn new(to: HeroState, orientation: Vec<Orientation>) -> Self {
        Self {
            from: None,
            to,
            orientation,
            life: None,
            moved: false,
            attack: false,
            killed: false,
            take_mine: false,
            attacked: false,
            winning: false,
        }
    }

    /// Transition from `from` to `to`
    pub fn transition(from: HeroState, to: HeroState, orientation: Vec<Orientation>) -> Self {
        Self {
            from: Some(from),
            ..Self::new(to, orientation)
        }
    }

    pub fn validate(&self) -> Result<(), MetaError> {
        if self.orientation.is_empty() {
            return Err(MetaError::EmptyOrientation);
        }
        for state in self.from.iter().chain(std::iter::once(&self.to)) {
            if !state.life.is_finite() {
                return Err(MetaError::NonFiniteLife(state.life));
            }
            if !state.pos.is_finite() {
                return Err(MetaError::NonFinitePosition(state.pos));
            }
        }
        Ok(())
    }

    /// Facing at the end of the turn
    pub fn final_orientation(&self) -> Orientation {
        self.orientation
            .last()
            .copied()
            .unwrap_or(Orientation::South)
    }

    /// Facing at progress `p` through the turn
    ///
    /// Picks entry `floor(p * len)`, clamped to the last entry once `p` reaches 1.
    pub fn orientation_at(&self, p: f32) -> Orientation {
        let len = self.orientation.len();
        if len == 0 {
            return Orientation::South;
        }
        let index = (p.max(0.0) * len as f32).floor() as usize;
        self.orientation[index.min(len - 1)]
    }

    /// One-line `key=value` summary of every field except `from` and `to`
    ///
    /// Fields appear in a fixed order, each followed by a space. Flags print
    /// their bare key when set and nothing otherwise; absent values are skipped.
    pub fn summary(&self) -> String {
        let mut out = String::new();

        if let Some(life) = self.life {
            let _ = write!(out, "life={} ", life);
        }

        let orientation: Vec<String> = self
            .orientation
            .iter()
            .map(|o| o.index().to_string())
            .collect();
        let _ = write!(out, "orientation={} ", orientation.join(","));

        let flags = [
            ("move", self.moved),
            ("attack", self.attack),
            ("killed", self.killed),
            ("takeMine", self.take_mine),
            ("attacked", self.attacked),
            ("winning", self.winning),
        ];
        for (key, set) in flags {
            if set {
                out.push_str(key);
                out.push(' ');
            }
        }

        out
    }
}
