use serde::{Deserialize, Serialize};

/// An integer grid coordinate, in world or interior space depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance (king moves) to another position.
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// The position one step in `dir`.
    pub fn step(self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Offset by an arbitrary delta.
    pub fn offset(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four cardinal neighbours in N, E, S, W order.
    pub fn neighbors4(self) -> [Position; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// True if the other position is one cardinal step away.
    pub fn is_adjacent4(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cardinal direction. Diagonal movement does not exist in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up (y - 1).
    North,
    /// Right (x + 1).
    East,
    /// Down (y + 1).
    South,
    /// Left (x - 1).
    West,
}

impl Direction {
    /// All four directions in N, E, S, W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit delta for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Map a unit delta back to a direction. Diagonals and zero yield `None`.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Self::North),
            (1, 0) => Some(Self::East),
            (0, 1) => Some(Self::South),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }

    /// Parse a direction word or its first letter.
    pub fn parse(s: &str) -> Option<Direction> {
        match s.to_lowercase().as_str() {
            "n" | "north" | "up" => Some(Self::North),
            "e" | "east" | "right" => Some(Self::East),
            "s" | "south" | "down" => Some(Self::South),
            "w" | "west" | "left" => Some(Self::West),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::East => write!(f, "east"),
            Self::South => write!(f, "south"),
            Self::West => write!(f, "west"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Position::new(1, 1);
        let b = Position::new(4, -1);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(a.chebyshev(b), 3);
    }

    #[test]
    fn delta_round_trips_through_direction() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(dir));
        }
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn parse_accepts_short_and_long_forms() {
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("west"), Some(Direction::West));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn neighbors_are_adjacent() {
        let p = Position::new(3, 3);
        for n in p.neighbors4() {
            assert!(p.is_adjacent4(n));
        }
    }
}
