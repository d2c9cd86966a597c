//! Regular location codes and their block coordinates.
//!
//! Every block of either campaign corresponds to exactly one regular
//! location. Codes from [`SUB_LOCATION_MIN`] upward are reserved for
//! sub-locations, which are defined by the transition core rather than here.

use serde::{Deserialize, Serialize};

use crate::{BlockCoord, Result, WorldError};

/// Integer code identifying a regular location or a sub-location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LocationCode(pub u16);

impl LocationCode {
    /// Whether this code lies in the reserved sub-location range.
    pub fn is_sub_location(self) -> bool {
        self.0 >= SUB_LOCATION_MIN
    }
}

impl std::fmt::Display for LocationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered pair of locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocPair {
    pub from: LocationCode,
    pub to: LocationCode,
}

impl LocPair {
    /// Create a directed pair.
    pub fn new(from: LocationCode, to: LocationCode) -> Self {
        Self { from, to }
    }

    /// The same pair travelled in the opposite direction.
    pub fn mirror(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// First code of the sub-location range.
pub const SUB_LOCATION_MIN: u16 = 256;

/// Destination sentinel meaning "wherever the player came from".
pub const LOCATION_PREVIOUS: LocationCode = LocationCode(255);

// Campaign 0.
pub const LOCATION_WORLD_MAP: LocationCode = LocationCode(0);
pub const LOCATION_HIGHPOOL: LocationCode = LocationCode(1);
pub const LOCATION_AG_CENTER: LocationCode = LocationCode(2);
pub const LOCATION_VERMIN_CAVE: LocationCode = LocationCode(3);
pub const LOCATION_DESERT_NOMADS: LocationCode = LocationCode(4);
pub const LOCATION_QUARTZ: LocationCode = LocationCode(5);
pub const LOCATION_SCOTTS_BAR: LocationCode = LocationCode(6);
pub const LOCATION_STAGE_COACH_INN: LocationCode = LocationCode(7);
pub const LOCATION_UGLYS_HIDEOUT: LocationCode = LocationCode(8);
pub const LOCATION_QUARTZ_DERELICT_BUILDINGS: LocationCode = LocationCode(9);
pub const LOCATION_COURTHOUSE: LocationCode = LocationCode(10);
pub const LOCATION_SLEEPER_BASE_LEVEL1: LocationCode = LocationCode(11);
pub const LOCATION_NEEDLES: LocationCode = LocationCode(12);
pub const LOCATION_NEEDLES_DOWNTOWN_WEST: LocationCode = LocationCode(13);
pub const LOCATION_NEEDLES_DOWNTOWN_EAST: LocationCode = LocationCode(14);
pub const LOCATION_POLICE_STATION: LocationCode = LocationCode(15);
pub const LOCATION_WASTE_PIT: LocationCode = LocationCode(16);
pub const LOCATION_TEMPLE_MUSHROOM: LocationCode = LocationCode(17);
pub const LOCATION_MINE_SHAFT: LocationCode = LocationCode(18);
pub const LOCATION_SAVAGE_VILLAGE: LocationCode = LocationCode(19);
pub const LOCATION_BLOOD_TEMPLE_TOP: LocationCode = LocationCode(20);
pub const LOCATION_BLOOD_TEMPLE_BOTTOM: LocationCode = LocationCode(21);

// Campaign 1.
pub const LOCATION_LAS_VEGAS: LocationCode = LocationCode(22);
pub const LOCATION_LAS_VEGAS_DERELICT_BUILDINGS: LocationCode = LocationCode(23);
pub const LOCATION_SLEEPER_BASE_LEVEL2: LocationCode = LocationCode(24);
pub const LOCATION_SLEEPER_BASE_LEVEL3: LocationCode = LocationCode(25);
pub const LOCATION_BASE_COCHISE_OUTSIDE: LocationCode = LocationCode(26);
pub const LOCATION_BASE_COCHISE_LEVEL1: LocationCode = LocationCode(27);
pub const LOCATION_BASE_COCHISE_LEVEL2: LocationCode = LocationCode(28);
pub const LOCATION_BASE_COCHISE_LEVEL3: LocationCode = LocationCode(29);
pub const LOCATION_BASE_COCHISE_LEVEL4: LocationCode = LocationCode(30);
pub const LOCATION_DARWIN: LocationCode = LocationCode(31);
pub const LOCATION_DARWIN_BASE: LocationCode = LocationCode(32);
pub const LOCATION_FINSTERS_BRAIN: LocationCode = LocationCode(33);
pub const LOCATION_LAS_VEGAS_SEWERS_WEST: LocationCode = LocationCode(34);
pub const LOCATION_LAS_VEGAS_SEWERS_EAST: LocationCode = LocationCode(35);
pub const LOCATION_GUARDIAN_CITADEL_ENTRANCE: LocationCode = LocationCode(36);
pub const LOCATION_GUARDIAN_CITADEL_OUTER: LocationCode = LocationCode(37);
pub const LOCATION_GUARDIAN_CITADEL_INNER: LocationCode = LocationCode(38);
pub const LOCATION_FARAN_BRYGOS: LocationCode = LocationCode(39);
pub const LOCATION_FAT_FREDDYS: LocationCode = LocationCode(40);
pub const LOCATION_SPADES_CASINO: LocationCode = LocationCode(41);

// Block indices, campaign 0.
pub const BLOCK0_WORLD_MAP: usize = 0;
pub const BLOCK0_HIGHPOOL: usize = 1;
pub const BLOCK0_AG_CENTER: usize = 2;
pub const BLOCK0_VERMIN_CAVE: usize = 3;
pub const BLOCK0_DESERT_NOMADS: usize = 4;
pub const BLOCK0_QUARTZ: usize = 5;
pub const BLOCK0_UGLYS_HIDEOUT: usize = 8;
pub const BLOCK0_NEEDLES: usize = 12;
pub const BLOCK0_NEEDLES_DOWNTOWN_WEST: usize = 13;
pub const BLOCK0_POLICE_STATION: usize = 15;
pub const BLOCK0_WASTE_PIT: usize = 16;

// Block indices, campaign 1.
pub const BLOCK1_LAS_VEGAS: usize = 0;
pub const BLOCK1_DARWIN: usize = 9;
pub const BLOCK1_FAT_FREDDYS: usize = 18;
pub const BLOCK1_SPADES_CASINO: usize = 19;

/// Number of blocks in each campaign.
pub const CAMPAIGN_BLOCK_COUNTS: [usize; 2] = [22, 20];

/// Regular locations, indexed by campaign then block.
const CAMPAIGN0: [(LocationCode, &str); 22] = [
    (LOCATION_WORLD_MAP, "WorldMap"),
    (LOCATION_HIGHPOOL, "Highpool"),
    (LOCATION_AG_CENTER, "AgCenter"),
    (LOCATION_VERMIN_CAVE, "VerminCave"),
    (LOCATION_DESERT_NOMADS, "DesertNomads"),
    (LOCATION_QUARTZ, "Quartz"),
    (LOCATION_SCOTTS_BAR, "ScottsBar"),
    (LOCATION_STAGE_COACH_INN, "StageCoachInn"),
    (LOCATION_UGLYS_HIDEOUT, "UglysHideout"),
    (LOCATION_QUARTZ_DERELICT_BUILDINGS, "QuartzDerelictBuildings"),
    (LOCATION_COURTHOUSE, "Courthouse"),
    (LOCATION_SLEEPER_BASE_LEVEL1, "SleeperBaseLevel1"),
    (LOCATION_NEEDLES, "Needles"),
    (LOCATION_NEEDLES_DOWNTOWN_WEST, "NeedlesDowntownWest"),
    (LOCATION_NEEDLES_DOWNTOWN_EAST, "NeedlesDowntownEast"),
    (LOCATION_POLICE_STATION, "PoliceStation"),
    (LOCATION_WASTE_PIT, "WastePit"),
    (LOCATION_TEMPLE_MUSHROOM, "TempleMushroom"),
    (LOCATION_MINE_SHAFT, "MineShaft"),
    (LOCATION_SAVAGE_VILLAGE, "SavageVillage"),
    (LOCATION_BLOOD_TEMPLE_TOP, "BloodTempleTop"),
    (LOCATION_BLOOD_TEMPLE_BOTTOM, "BloodTempleBottom"),
];

const CAMPAIGN1: [(LocationCode, &str); 20] = [
    (LOCATION_LAS_VEGAS, "LasVegas"),
    (LOCATION_LAS_VEGAS_DERELICT_BUILDINGS, "LasVegasDerelictBuildings"),
    (LOCATION_SLEEPER_BASE_LEVEL2, "SleeperBaseLevel2"),
    (LOCATION_SLEEPER_BASE_LEVEL3, "SleeperBaseLevel3"),
    (LOCATION_BASE_COCHISE_OUTSIDE, "BaseCochiseOutside"),
    (LOCATION_BASE_COCHISE_LEVEL1, "BaseCochiseLevel1"),
    (LOCATION_BASE_COCHISE_LEVEL2, "BaseCochiseLevel2"),
    (LOCATION_BASE_COCHISE_LEVEL3, "BaseCochiseLevel3"),
    (LOCATION_BASE_COCHISE_LEVEL4, "BaseCochiseLevel4"),
    (LOCATION_DARWIN, "Darwin"),
    (LOCATION_DARWIN_BASE, "DarwinBase"),
    (LOCATION_FINSTERS_BRAIN, "FinstersBrain"),
    (LOCATION_LAS_VEGAS_SEWERS_WEST, "LasVegasSewersWest"),
    (LOCATION_LAS_VEGAS_SEWERS_EAST, "LasVegasSewersEast"),
    (LOCATION_GUARDIAN_CITADEL_ENTRANCE, "GuardianCitadelEntrance"),
    (LOCATION_GUARDIAN_CITADEL_OUTER, "GuardianCitadelOuter"),
    (LOCATION_GUARDIAN_CITADEL_INNER, "GuardianCitadelInner"),
    (LOCATION_FARAN_BRYGOS, "FaranBrygos"),
    (LOCATION_FAT_FREDDYS, "FatFreddys"),
    (LOCATION_SPADES_CASINO, "SpadesCasino"),
];

fn campaign_table(campaign: usize) -> Option<&'static [(LocationCode, &'static str)]> {
    match campaign {
        0 => Some(&CAMPAIGN0),
        1 => Some(&CAMPAIGN1),
        _ => None,
    }
}

fn regular_locations() -> impl Iterator<Item = &'static (LocationCode, &'static str)> {
    CAMPAIGN0.iter().chain(CAMPAIGN1.iter())
}

/// Resolve a block coordinate to the regular location it holds.
pub fn block_to_location(coord: BlockCoord) -> Result<LocationCode> {
    campaign_table(coord.campaign)
        .and_then(|table| table.get(coord.block))
        .map(|(loc, _)| *loc)
        .ok_or(WorldError::InvalidBlock(coord))
}

/// The name of a regular location, or of the "previous" sentinel.
pub fn regular_location_name(loc: LocationCode) -> Option<&'static str> {
    if loc == LOCATION_PREVIOUS {
        return Some("Previous");
    }
    regular_locations()
        .find(|(code, _)| *code == loc)
        .map(|(_, name)| *name)
}

/// Display form of a regular location; unknown codes render as `"?"`.
pub fn regular_location_string(loc: LocationCode) -> String {
    regular_location_name(loc)
        .map(str::to_string)
        .unwrap_or_else(|| "?".to_string())
}

/// Parse a regular location name (case-sensitive).
pub fn parse_regular_location(s: &str) -> Result<LocationCode> {
    regular_locations()
        .find(|(_, name)| *name == s)
        .map(|(code, _)| *code)
        .ok_or_else(|| WorldError::UnknownLocationName(s.to_string()))
}

/// Parse a regular location name, ignoring ASCII case.
pub fn parse_regular_location_no_case(s: &str) -> Result<LocationCode> {
    regular_locations()
        .find(|(_, name)| name.eq_ignore_ascii_case(s))
        .map(|(code, _)| *code)
        .ok_or_else(|| WorldError::UnknownLocationName(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_to_location() {
        let coord = BlockCoord::new(0, BLOCK0_HIGHPOOL);
        assert_eq!(block_to_location(coord).unwrap(), LOCATION_HIGHPOOL);

        let coord = BlockCoord::new(1, BLOCK1_FAT_FREDDYS);
        assert_eq!(block_to_location(coord).unwrap(), LOCATION_FAT_FREDDYS);
    }

    #[test]
    fn test_block_to_location_invalid() {
        let coord = BlockCoord::new(0, 99);
        assert_eq!(
            block_to_location(coord),
            Err(WorldError::InvalidBlock(coord))
        );
        assert!(block_to_location(BlockCoord::new(2, 0)).is_err());
    }

    #[test]
    fn test_block_constants_match_tables() {
        let pairs = [
            (0, BLOCK0_WORLD_MAP, LOCATION_WORLD_MAP),
            (0, BLOCK0_AG_CENTER, LOCATION_AG_CENTER),
            (0, BLOCK0_VERMIN_CAVE, LOCATION_VERMIN_CAVE),
            (0, BLOCK0_DESERT_NOMADS, LOCATION_DESERT_NOMADS),
            (0, BLOCK0_QUARTZ, LOCATION_QUARTZ),
            (0, BLOCK0_UGLYS_HIDEOUT, LOCATION_UGLYS_HIDEOUT),
            (0, BLOCK0_NEEDLES, LOCATION_NEEDLES),
            (0, BLOCK0_NEEDLES_DOWNTOWN_WEST, LOCATION_NEEDLES_DOWNTOWN_WEST),
            (0, BLOCK0_POLICE_STATION, LOCATION_POLICE_STATION),
            (0, BLOCK0_WASTE_PIT, LOCATION_WASTE_PIT),
            (1, BLOCK1_LAS_VEGAS, LOCATION_LAS_VEGAS),
            (1, BLOCK1_DARWIN, LOCATION_DARWIN),
            (1, BLOCK1_SPADES_CASINO, LOCATION_SPADES_CASINO),
        ];
        for (campaign, block, loc) in pairs {
            assert_eq!(block_to_location(BlockCoord::new(campaign, block)).unwrap(), loc);
        }
        assert_eq!(CAMPAIGN0.len(), CAMPAIGN_BLOCK_COUNTS[0]);
        assert_eq!(CAMPAIGN1.len(), CAMPAIGN_BLOCK_COUNTS[1]);
    }

    #[test]
    fn test_parse_regular_location() {
        assert_eq!(parse_regular_location("Needles").unwrap(), LOCATION_NEEDLES);
        assert!(parse_regular_location("needles").is_err());
        assert_eq!(
            parse_regular_location_no_case("needles").unwrap(),
            LOCATION_NEEDLES
        );
        assert_eq!(
            parse_regular_location_no_case("Atlantis"),
            Err(WorldError::UnknownLocationName("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_location_names() {
        assert_eq!(regular_location_name(LOCATION_DARWIN), Some("Darwin"));
        assert_eq!(regular_location_name(LOCATION_PREVIOUS), Some("Previous"));
        assert_eq!(regular_location_string(LocationCode(200)), "?");
    }

    #[test]
    fn test_loc_pair_mirror() {
        let pair = LocPair::new(LOCATION_QUARTZ, LOCATION_COURTHOUSE);
        assert_eq!(pair.mirror(), LocPair::new(LOCATION_COURTHOUSE, LOCATION_QUARTZ));
        assert_eq!(pair.mirror().mirror(), pair);
    }

    #[test]
    fn test_location_code_serializes_as_integer() {
        let json = serde_json::to_string(&LOCATION_QUARTZ).unwrap();
        assert_eq!(json, "5");
        assert!(LocationCode(SUB_LOCATION_MIN).is_sub_location());
        assert!(!LOCATION_PREVIOUS.is_sub_location());
    }
}
