use nf_core::error::CoreError;
use nf_core::item::Slot;
use nf_core::recipe::Station;
use nf_core::skill::SkillId;

/// Outcome of a player command.
pub type ActionResult = Result<(), GameError>;

/// Why a command was refused.
///
/// The `Display` text is what the player sees in the message log.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// The player is dead.
    #[error("You are dead.")]
    Dead,

    /// Not enough stamina for the action.
    #[error("Too exhausted.")]
    Exhausted,

    /// A world-only command was used indoors.
    #[error("You need to be outside.")]
    NotOutdoors,

    /// An interior-only command was used outside.
    #[error("You need to be inside a building.")]
    NotIndoors,

    /// Movement delta was not a single cardinal step.
    #[error("You can only move one step north, east, south or west.")]
    InvalidDirection,

    /// The target cell cannot be entered.
    #[error("Something blocks the way.")]
    Blocked,

    /// A zombie stands on the target cell.
    #[error("A zombie is in the way.")]
    ZombieInTheWay,

    /// The world cell has no loot left.
    #[error("There is nothing left to scavenge here.")]
    NothingToScavenge,

    /// No searchable furniture nearby.
    #[error("Nothing to search nearby.")]
    NothingToSearch,

    /// No salvageable furniture nearby.
    #[error("Nothing to salvage nearby.")]
    NothingToSalvage,

    /// No door or window nearby.
    #[error("No door or window nearby to barricade.")]
    NothingToBarricade,

    /// The nearby openings are already at full strength.
    #[error("The barricade is already as strong as it gets.")]
    FullyBarricaded,

    /// A tool must be equipped.
    #[error("You need a {0} equipped.")]
    NeedTool(&'static str),

    /// A crafting station must be nearby.
    #[error("You need to be next to a {0}.")]
    NeedStation(Station),

    /// Skill level too low.
    #[error("Need {0} skill.")]
    NeedSkill(SkillId),

    /// Recipe inputs are missing.
    #[error("Not enough materials.")]
    NotEnoughMaterials,

    /// No zombie at the targeted cell.
    #[error("There is no zombie there.")]
    NoZombieThere,

    /// The target is out of reach.
    #[error("That is too far away to hit.")]
    NotAdjacent,

    /// The current world tile has no interior.
    #[error("There is nothing to enter here.")]
    NotAnEntrance,

    /// The player is not standing on a way out.
    #[error("You need to stand on a door or ladder to leave.")]
    NotAtExit,

    /// The exit is barricaded.
    #[error("The exit is barricaded.")]
    ExitBarricaded,

    /// Leaving requires being on the ground floor.
    #[error("You can only leave from the ground floor.")]
    NotOnGroundFloor,

    /// The player is not standing on stairs.
    #[error("There are no stairs here.")]
    NoStairs,

    /// Resting with a zombie next to the player.
    #[error("You can't rest with zombies nearby.")]
    ZombiesNearby,

    /// Food or water below the rest reserve.
    #[error("Too hungry or thirsty to rest.")]
    TooHungry,

    /// The item is not in the inventory.
    #[error("You don't have any {0}.")]
    NotCarrying(String),

    /// Fewer units carried than asked for.
    #[error("You don't have enough {0}.")]
    NotEnough(String),

    /// The item has no use effect.
    #[error("You can't use that.")]
    NotUsable,

    /// The item has no equipment slot.
    #[error("You can't equip that.")]
    NotEquippable,

    /// The slot holds nothing.
    #[error("Nothing is equipped in your {0} slot.")]
    SlotEmpty(Slot),

    /// No item of that kind lies here.
    #[error("There is no {0} here.")]
    NothingHere(String),

    /// No container next to the player.
    #[error("There is no container nearby.")]
    NoContainer,

    /// The structure cannot be placed here.
    #[error("You can't place that here.")]
    CantPlaceHere,

    /// The item is not a structure.
    #[error("That can't be placed.")]
    NotPlaceable,

    /// A quantity of zero was requested.
    #[error("Quantity must be at least one.")]
    ZeroQuantity,

    /// Lookup of a user-supplied id failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_as_log_lines() {
        assert_eq!(GameError::Dead.to_string(), "You are dead.");
        assert_eq!(GameError::NeedSkill(SkillId::Carpentry).to_string(), "Need Carpentry skill.");
        assert_eq!(GameError::NeedTool("Hammer").to_string(), "You need a Hammer equipped.");
        assert_eq!(
            GameError::NeedStation(Station::Campfire).to_string(),
            "You need to be next to a campfire."
        );
    }

    #[test]
    fn core_errors_pass_through() {
        let err: GameError = CoreError::UnknownItem("laser".into()).into();
        assert_eq!(err.to_string(), "Unknown item: laser");
    }
}
