//! Static tables describing the standard game data.

use world_data::*;

use super::sub_location::*;
use super::{TransXList, XListRole};

/// Transitions between two sections of a single area.
pub(crate) const INTRA_TRANSITIONS: [(LocationCode, LocationCode); 6] = [
    (LOCATION_BLOOD_TEMPLE_TOP, LOCATION_BLOOD_TEMPLE_BOTTOM),
    (LOCATION_BLOOD_TEMPLE_BOTTOM, LOCATION_BLOOD_TEMPLE_TOP),
    (LOCATION_LAS_VEGAS_SEWERS_WEST, LOCATION_LAS_VEGAS_SEWERS_EAST),
    (LOCATION_LAS_VEGAS_SEWERS_EAST, LOCATION_LAS_VEGAS_SEWERS_WEST),
    (LOCATION_NEEDLES_DOWNTOWN_WEST, LOCATION_NEEDLES_DOWNTOWN_EAST),
    (LOCATION_NEEDLES_DOWNTOWN_EAST, LOCATION_NEEDLES_DOWNTOWN_WEST),
];

/// Depth of each location. The world map is 0; interiors are deeper.
///
/// A shallow-to-deep transition is never replaced with a deep-to-shallow
/// one: Highpool-to-cave should not become Courthouse-to-Quartz.
pub(crate) const LOCATION_DEPTHS: [(LocationCode, u8); 60] = [
    (LOCATION_WORLD_MAP, 0),
    (LOCATION_QUARTZ, 1),
    (LOCATION_SCOTTS_BAR, 2),
    (LOCATION_STAGE_COACH_INN, 2),
    (LOCATION_UGLYS_HIDEOUT, 2),
    (LOCATION_QUARTZ_DERELICT_BUILDINGS, 2),
    (LOCATION_COURTHOUSE, 2),
    (LOCATION_SLEEPER_BASE_LEVEL1, 1),
    (LOCATION_DESERT_NOMADS, 1),
    (LOCATION_AG_CENTER, 1),
    (LOCATION_HIGHPOOL, 1),
    (LOCATION_LAS_VEGAS_DERELICT_BUILDINGS, 2),
    (LOCATION_LAS_VEGAS, 1),
    (LOCATION_SLEEPER_BASE_LEVEL2, 2),
    (LOCATION_SLEEPER_BASE_LEVEL3, 2),
    (LOCATION_BASE_COCHISE_OUTSIDE, 2),
    (LOCATION_BASE_COCHISE_LEVEL1, 3),
    (LOCATION_BASE_COCHISE_LEVEL3, 3),
    (LOCATION_BASE_COCHISE_LEVEL2, 3),
    (LOCATION_BASE_COCHISE_LEVEL4, 3),
    (LOCATION_DARWIN, 1),
    (LOCATION_DARWIN_BASE, 2),
    (LOCATION_FINSTERS_BRAIN, 2),
    (LOCATION_LAS_VEGAS_SEWERS_WEST, 3),
    (LOCATION_LAS_VEGAS_SEWERS_EAST, 3),
    (LOCATION_NEEDLES, 1),
    (LOCATION_BLOOD_TEMPLE_TOP, 2),
    (LOCATION_BLOOD_TEMPLE_BOTTOM, 2),
    (LOCATION_VERMIN_CAVE, 2),
    (LOCATION_WASTE_PIT, 2),
    (LOCATION_NEEDLES_DOWNTOWN_EAST, 3),
    (LOCATION_NEEDLES_DOWNTOWN_WEST, 3),
    (LOCATION_POLICE_STATION, 2),
    (LOCATION_GUARDIAN_CITADEL_ENTRANCE, 2),
    (LOCATION_GUARDIAN_CITADEL_OUTER, 3),
    (LOCATION_TEMPLE_MUSHROOM, 2),
    (LOCATION_FARAN_BRYGOS, 2),
    (LOCATION_FAT_FREDDYS, 2),
    (LOCATION_SPADES_CASINO, 2),
    (LOCATION_GUARDIAN_CITADEL_INNER, 3),
    (LOCATION_MINE_SHAFT, 1),
    (LOCATION_SAVAGE_VILLAGE, 1),
    (SUB_LOCATION_HIGHPOOL_CAVE, 2),
    (SUB_LOCATION_HIGHPOOL_COMMUNITY_CENTER, 2),
    (SUB_LOCATION_HIGHPOOL_WORKSHOP, 2),
    (SUB_LOCATION_AG_CENTER_ROOT_CELLAR, 2),
    (SUB_LOCATION_DESERT_NOMADS_TENT, 2),
    (SUB_LOCATION_UGLYS_HIDEOUT_ALLEY, 2),
    (SUB_LOCATION_NEEDLES_BISHOPS_OFFICE, 2),
    (SUB_LOCATION_NEEDLES_GARAGE, 2),
    (SUB_LOCATION_NEEDLES_POLICE_STATION, 2),
    (SUB_LOCATION_NEEDLES_AMMO_BUNKER, 2),
    (SUB_LOCATION_DARWIN_BLACK_MARKET, 2),
    (SUB_LOCATION_DARWIN_LAB, 2),
    (SUB_LOCATION_DARWIN_BLACK_GILA_TAVERN, 2),
    (SUB_LOCATION_LAS_VEGAS_JAIL, 2),
    (SUB_LOCATION_LAS_VEGAS_PROTON_AX_ROOM, 2),
    (SUB_LOCATION_SPADES_CASINO_WINE_CELLAR, 3),
    (SUB_LOCATION_SPADES_CASINO_LEVEL2, 3),
    (SUB_LOCATION_SPADES_CASINO_BASEMENT, 3),
];

/// Locations the player should only reach after finishing the sewers.
pub(crate) const POST_SEWERS_LOCATIONS: [LocationCode; 12] = [
    LOCATION_SLEEPER_BASE_LEVEL1,
    LOCATION_SLEEPER_BASE_LEVEL2,
    LOCATION_SLEEPER_BASE_LEVEL3,
    LOCATION_BASE_COCHISE_OUTSIDE,
    LOCATION_BASE_COCHISE_LEVEL1,
    LOCATION_BASE_COCHISE_LEVEL3,
    LOCATION_BASE_COCHISE_LEVEL2,
    LOCATION_BASE_COCHISE_LEVEL4,
    LOCATION_FINSTERS_BRAIN,
    LOCATION_GUARDIAN_CITADEL_ENTRANCE,
    LOCATION_GUARDIAN_CITADEL_OUTER,
    LOCATION_GUARDIAN_CITADEL_INNER,
];

/// Selector exception lists, keyed by (source regular location, raw
/// destination).
pub(crate) fn standard_xlists() -> Vec<(LocPair, XListRole, TransXList)> {
    vec![
        // Puts the player back in the tent, but only after the tent has been
        // entered once. Once Nomads->Tent is replaced it must never be used as
        // copy content.
        (
            LocPair::new(LOCATION_DESERT_NOMADS, LOCATION_DESERT_NOMADS),
            XListRole::Read,
            TransXList::black(vec![12]),
        ),
        // Several Needles->DowntownWest transitions are confusing as
        // replacements. Only selector 20, made absolute by the fixup pass, is
        // usable.
        (
            LocPair::new(LOCATION_NEEDLES, LOCATION_NEEDLES_DOWNTOWN_WEST),
            XListRole::Read,
            TransXList::white(vec![20]),
        ),
    ]
}
