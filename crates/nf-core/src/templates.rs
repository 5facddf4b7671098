//! Interior layout templates.
//!
//! Each template is a rectangle of glyphs read through
//! [`InteriorTile::from_glyph`](crate::interior::InteriorTile::from_glyph).
//! Ground floors carry their own doors; second floors carry the stair that
//! leads back down (`>`) or back up (`<`).

use crate::error::{CoreError, CoreResult};
use crate::tile::BuildingType;

/// A layout as rows of glyphs.
pub type Template = &'static [&'static str];

const HOUSE_A: Template = &[
    "##=####=##",
    "#b..#...f#",
    "#...#..nn#",
    "#c......t#",
    "#...#....=",
    "#s..#...c#",
    "####+#####",
];

const HOUSE_B: Template = &[
    "####=#####",
    "#f.n#..b.#",
    "#...#....#",
    "=...#..c.#",
    "#.t......#",
    "#s.......+",
    "##########",
];

const APARTMENT: Template = &[
    "####=##=####",
    "#b.c#..#.b.#",
    "#...#..#...#",
    "#.......t..=",
    "=..........#",
    "#f.n#..#s.d#",
    "#...#..#...#",
    "#####++#####",
];

const STORE: Template = &[
    "##=##=####",
    "#ssss...x#",
    "#........#",
    "#.ss.ss..#",
    "#........#",
    "#nn......=",
    "###+######",
];

const SUPERMARKET: Template = &[
    "###=####=#####",
    "#ffff....xxx.#",
    "#............#",
    "#.ssss..ssss.#",
    "#............#",
    "#.ssss..ssss.#",
    "#............#",
    "#nn...nn.....=",
    "#####++#######",
];

const PHARMACY: Template = &[
    "##=###=##",
    "#sss..cc#",
    "#.......#",
    "#nnn..s.#",
    "#.......#",
    "####+####",
];

const HOSPITAL: Template = &[
    "##=###=####=##",
    "#b.b.#..#c.c.#",
    "#....#..#....#",
    "#b.b.#..#..d.#",
    "#............#",
    "#cc.....nnn..=",
    "#............#",
    "#l.l..x..s.s.#",
    "######++######",
];

const POLICE_STATION: Template = &[
    "###=##=#####",
    "#llll#d..d.#",
    "#....#.....#",
    "#.x..#..t..=",
    "#..........#",
    "#nnn.....c.#",
    "#..........#",
    "#####+######",
];

const GAS_STATION: Template = &[
    "##=##=##",
    "#ss..f.#",
    "#......#",
    "#s..nn.#",
    "#......#",
    "###+####",
];

const WAREHOUSE: Template = &[
    "##############",
    "#xx..ss..ss.x#",
    "#............#",
    "#.xx..%%..xx.#",
    "#............#",
    "#l.l......w..#",
    "#............=",
    "#ss.....d..xx#",
    "####++########",
];

const FARMHOUSE: Template = &[
    "###=###=###",
    "#b..#..fnn#",
    "#...#.....#",
    "#c......t.#",
    "#...#.....=",
    "#s..#.w...#",
    "#...#.....#",
    "#####+#####",
];

const CABIN: Template = &[
    "##=##=##",
    "#b...fn#",
    "#......#",
    "#c..t..#",
    "#s.....#",
    "###+####",
];

const CHURCH: Template = &[
    "##=##=##=###",
    "#..........#",
    "#.tt.tt.tt.#",
    "#..........#",
    "#.tt.tt.tt.#",
    "#..........=",
    "#c..nnnn..d#",
    "#..........#",
    "#####++#####",
];

const SCHOOL: Template = &[
    "##=###=###=###",
    "#d.d.d.#.....#",
    "#......#.ll..#",
    "#d.d.d.#.....#",
    "#............=",
    "#nn..........#",
    "#......#c..s.#",
    "#t.t...#f..s.#",
    "######++######",
];

const HOUSE_UPSTAIRS: Template = &[
    "##=##=##",
    "#b..#.b#",
    "#...#..#",
    "#.>....#",
    "#c...s.#",
    "########",
];

const APARTMENT_UPSTAIRS: Template = &[
    "####=##=####",
    "#b.c#..#.b.#",
    "#...#..#...#",
    "#.....>....=",
    "#f.n#..#s.d#",
    "#...#..#...#",
    "############",
];

const HOSPITAL_UPSTAIRS: Template = &[
    "##=###=###=#",
    "#b.b.#..b.b#",
    "#....#.....#",
    "#..>.......#",
    "#b.b.#..c.l#",
    "#....#.....#",
    "############",
];

const SCHOOL_UPSTAIRS: Template = &[
    "##=###=###=#",
    "#d.d.d#....#",
    "#.....#.ll.#",
    "#d.d.d#....#",
    "#..>.......#",
    "#t....c...s#",
    "############",
];

const POLICE_BASEMENT: Template = &[
    "##########",
    "#l.l.l..x#",
    "#........#",
    "#.<....%.#",
    "#x.x..d..#",
    "##########",
];

const FARMHOUSE_BASEMENT: Template = &[
    "#########",
    "#ss..x.x#",
    "#.......#",
    "#.<..%..#",
    "#c...w..#",
    "#########",
];

const CABIN_BASEMENT: Template = &[
    "#######",
    "#s.x.x#",
    "#.<...#",
    "#%..c.#",
    "#######",
];

const CHURCH_BASEMENT: Template = &[
    "##########",
    "#x.x..ss.#",
    "#........#",
    "#.<..tt..#",
    "#c.....%.#",
    "##########",
];

/// The starting shelter. Its only exit is the ladder in the bottom wall.
pub const BUNKER: Template = &[
    "#########",
    "#b..s..x#",
    "#.......#",
    "#w.c...f#",
    "####H####",
];

/// Ground floor pool for a building type. Empty for the bunker, which has
/// its own fixed layout.
pub fn ground_floors(bt: BuildingType) -> &'static [Template] {
    match bt {
        BuildingType::House => &[HOUSE_A, HOUSE_B],
        BuildingType::Apartment => &[APARTMENT],
        BuildingType::Store => &[STORE],
        BuildingType::Supermarket => &[SUPERMARKET],
        BuildingType::Pharmacy => &[PHARMACY],
        BuildingType::Hospital => &[HOSPITAL],
        BuildingType::PoliceStation => &[POLICE_STATION],
        BuildingType::GasStation => &[GAS_STATION],
        BuildingType::Warehouse => &[WAREHOUSE],
        BuildingType::Farmhouse => &[FARMHOUSE],
        BuildingType::Cabin => &[CABIN],
        BuildingType::Church => &[CHURCH],
        BuildingType::School => &[SCHOOL],
        BuildingType::Bunker => &[],
    }
}

/// Second floor pool (upstairs or basement) for a building type.
pub fn second_floors(bt: BuildingType) -> &'static [Template] {
    match bt {
        BuildingType::House => &[HOUSE_UPSTAIRS],
        BuildingType::Apartment => &[APARTMENT_UPSTAIRS],
        BuildingType::Hospital => &[HOSPITAL_UPSTAIRS],
        BuildingType::School => &[SCHOOL_UPSTAIRS],
        BuildingType::PoliceStation => &[POLICE_BASEMENT],
        BuildingType::Farmhouse => &[FARMHOUSE_BASEMENT],
        BuildingType::Cabin => &[CABIN_BASEMENT],
        BuildingType::Church => &[CHURCH_BASEMENT],
        _ => &[],
    }
}

/// Width and height of a template, rejecting empty or ragged layouts.
pub fn dimensions(template: Template, name: &str) -> CoreResult<(i32, i32)> {
    let width = template
        .first()
        .map(|row| row.chars().count())
        .filter(|w| *w > 0)
        .ok_or_else(|| CoreError::MalformedTemplate(name.to_string()))?;
    if template.iter().any(|row| row.chars().count() != width) {
        return Err(CoreError::MalformedTemplate(name.to_string()));
    }
    Ok((width as i32, template.len() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::StairDirection;

    fn all_templates() -> Vec<(String, Template)> {
        let mut out = vec![("Bunker".to_string(), BUNKER)];
        for bt in BuildingType::ALL {
            for t in ground_floors(bt) {
                out.push((format!("{bt} ground"), *t));
            }
            for t in second_floors(bt) {
                out.push((format!("{bt} second"), *t));
            }
        }
        out
    }

    #[test]
    fn every_template_is_rectangular() {
        for (name, t) in all_templates() {
            assert!(dimensions(t, &name).is_ok(), "{name}");
        }
    }

    #[test]
    fn every_ground_floor_has_a_door() {
        for bt in BuildingType::ALL {
            for t in ground_floors(bt) {
                assert!(t.iter().any(|row| row.contains('+')), "{bt}");
            }
        }
    }

    #[test]
    fn every_non_bunker_type_has_a_ground_pool() {
        for bt in BuildingType::ALL {
            assert_eq!(ground_floors(bt).is_empty(), bt == BuildingType::Bunker, "{bt}");
        }
    }

    #[test]
    fn second_floors_carry_the_return_stair() {
        for bt in BuildingType::ALL {
            let profile = bt.profile();
            let back = match profile.stairs {
                StairDirection::Up => '>',
                StairDirection::Down => '<',
            };
            if profile.second_floor_chance > 0.0 {
                assert!(!second_floors(bt).is_empty(), "{bt}");
            }
            for t in second_floors(bt) {
                assert!(t.iter().any(|row| row.contains(back)), "{bt}");
            }
        }
    }

    #[test]
    fn ragged_template_is_rejected() {
        let bad: Template = &["###", "##"];
        assert_eq!(dimensions(bad, "bad"), Err(CoreError::MalformedTemplate("bad".into())));
        assert!(dimensions(&[], "empty").is_err());
    }
}
