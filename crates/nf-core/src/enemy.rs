//! Enemy definitions and zombie instances.

use serde::Serialize;

use crate::geom::Position;

/// The kinds of undead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnemyKind {
    /// Slow, common shambler.
    Walker,
    /// Fast and fragile.
    Runner,
    /// Slow and weak, but hard to spot.
    Crawler,
    /// Heavy, armoured, hits hard.
    Brute,
}

/// Static stats of an enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemyDef {
    /// Display name.
    pub name: &'static str,
    /// Map glyph.
    pub glyph: char,
    /// Starting health.
    pub hp: i32,
    /// Attack strength.
    pub atk: i32,
    /// Damage reduction.
    pub def: i32,
    /// Ticks per move; lower is faster.
    pub speed: u32,
    /// Combat experience granted on kill.
    pub xp: u32,
    /// Relative spawn frequency.
    pub spawn_weight: u32,
}

impl EnemyKind {
    /// Every enemy kind.
    pub const ALL: [EnemyKind; 4] = [Self::Walker, Self::Runner, Self::Crawler, Self::Brute];

    /// Static stats for this kind.
    pub fn def(self) -> EnemyDef {
        match self {
            Self::Walker => EnemyDef {
                name: "Walker",
                glyph: 'z',
                hp: 20,
                atk: 6,
                def: 0,
                speed: 2,
                xp: 10,
                spawn_weight: 60,
            },
            Self::Runner => EnemyDef {
                name: "Runner",
                glyph: 'r',
                hp: 14,
                atk: 5,
                def: 0,
                speed: 1,
                xp: 15,
                spawn_weight: 15,
            },
            Self::Crawler => EnemyDef {
                name: "Crawler",
                glyph: 'c',
                hp: 10,
                atk: 4,
                def: 0,
                speed: 3,
                xp: 6,
                spawn_weight: 15,
            },
            Self::Brute => EnemyDef {
                name: "Brute",
                glyph: 'B',
                hp: 45,
                atk: 12,
                def: 3,
                speed: 3,
                xp: 35,
                spawn_weight: 10,
            },
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// `(kind, weight)` pairs for weighted spawning.
    pub fn spawn_table() -> [(EnemyKind, u32); 4] {
        Self::ALL.map(|k| (k, k.def().spawn_weight))
    }
}

impl std::fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A live zombie in either the world or an interior population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zombie {
    /// Grid position in the owning space.
    pub pos: Position,
    /// Enemy kind.
    pub kind: EnemyKind,
    /// Current health.
    pub hp: i32,
    /// Starting health.
    pub max_hp: i32,
    /// Floor index for interior zombies; always 0 in the world.
    pub floor: usize,
}

impl Zombie {
    /// A fresh zombie at full health.
    pub fn new(kind: EnemyKind, pos: Position, floor: usize) -> Self {
        let hp = kind.def().hp;
        Self {
            pos,
            kind,
            hp,
            max_hp: hp,
            floor,
        }
    }

    /// Static stats of this zombie's kind.
    pub fn def(&self) -> EnemyDef {
        self.kind.def()
    }

    /// True once health reaches zero.
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
