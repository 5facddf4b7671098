//! Skills and experience.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest attainable skill level.
pub const MAX_SKILL_LEVEL: u32 = 10;

/// Trainable skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillId {
    /// Fighting; adds attack.
    Combat,
    /// Finding loot.
    Scavenging,
    /// Woodwork: barricades, salvage, furniture.
    Carpentry,
    /// Fieldcraft: cordage, shelter, fire.
    Survival,
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combat => write!(f, "Combat"),
            Self::Scavenging => write!(f, "Scavenging"),
            Self::Carpentry => write!(f, "Carpentry"),
            Self::Survival => write!(f, "Survival"),
        }
    }
}

/// Level and banked experience in one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SkillProgress {
    /// Current level.
    pub lvl: u32,
    /// Experience toward the next level.
    pub xp: u32,
}

/// Experience needed to advance from `lvl` to `lvl + 1`.
pub fn xp_to_next(lvl: u32) -> u32 {
    20 + 15 * lvl
}

/// Sparse skill map. Untrained skills are absent and count as level 0.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Skills(BTreeMap<SkillId, SkillProgress>);

impl Skills {
    /// No trained skills.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level of a skill.
    pub fn level(&self, id: SkillId) -> u32 {
        self.0.get(&id).map_or(0, |p| p.lvl)
    }

    /// Progress in a skill, if trained at all.
    pub fn progress(&self, id: SkillId) -> Option<SkillProgress> {
        self.0.get(&id).copied()
    }

    /// Iterate over trained skills.
    pub fn iter(&self) -> impl Iterator<Item = (SkillId, SkillProgress)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Add experience. Returns the new level if at least one level was gained.
    pub fn gain(&mut self, id: SkillId, xp: u32) -> Option<u32> {
        if xp == 0 {
            return None;
        }
        let entry = self.0.entry(id).or_default();
        let before = entry.lvl;
        entry.xp += xp;
        while entry.lvl < MAX_SKILL_LEVEL && entry.xp >= xp_to_next(entry.lvl) {
            entry.xp -= xp_to_next(entry.lvl);
            entry.lvl += 1;
        }
        if entry.lvl == MAX_SKILL_LEVEL {
            entry.xp = 0;
        }
        (entry.lvl > before).then_some(entry.lvl)
    }
}
