//! Sub-locations - areas inside another block's map that are treated as
//! separate locations.
//!
//! A sub-location has no block of its own. It is identified only by the
//! transition slots that lead into or out of it.

use serde::{Deserialize, Serialize};
use world_data::*;

pub const SUB_LOCATION_HIGHPOOL_CAVE: LocationCode = LocationCode(256);
pub const SUB_LOCATION_HIGHPOOL_COMMUNITY_CENTER: LocationCode = LocationCode(257);
pub const SUB_LOCATION_HIGHPOOL_WORKSHOP: LocationCode = LocationCode(258);
pub const SUB_LOCATION_AG_CENTER_ROOT_CELLAR: LocationCode = LocationCode(259);
pub const SUB_LOCATION_DESERT_NOMADS_TENT: LocationCode = LocationCode(260);
pub const SUB_LOCATION_UGLYS_HIDEOUT_ALLEY: LocationCode = LocationCode(261);
pub const SUB_LOCATION_NEEDLES_BISHOPS_OFFICE: LocationCode = LocationCode(262);
pub const SUB_LOCATION_NEEDLES_GARAGE: LocationCode = LocationCode(263);
pub const SUB_LOCATION_NEEDLES_POLICE_STATION: LocationCode = LocationCode(264);
pub const SUB_LOCATION_NEEDLES_AMMO_BUNKER: LocationCode = LocationCode(265);
pub const SUB_LOCATION_DARWIN_BLACK_MARKET: LocationCode = LocationCode(266);
pub const SUB_LOCATION_DARWIN_LAB: LocationCode = LocationCode(267);
pub const SUB_LOCATION_DARWIN_BLACK_GILA_TAVERN: LocationCode = LocationCode(268);
pub const SUB_LOCATION_LAS_VEGAS_JAIL: LocationCode = LocationCode(269);
pub const SUB_LOCATION_LAS_VEGAS_PROTON_AX_ROOM: LocationCode = LocationCode(270);
pub const SUB_LOCATION_SPADES_CASINO_WINE_CELLAR: LocationCode = LocationCode(271);
pub const SUB_LOCATION_SPADES_CASINO_LEVEL2: LocationCode = LocationCode(272);
pub const SUB_LOCATION_SPADES_CASINO_BASEMENT: LocationCode = LocationCode(273);

pub(crate) const SUB_LOCATION_NAMES: [(LocationCode, &str); 18] = [
    (SUB_LOCATION_HIGHPOOL_CAVE, "HighpoolCave"),
    (SUB_LOCATION_HIGHPOOL_COMMUNITY_CENTER, "HighpoolCommunityCenter"),
    (SUB_LOCATION_HIGHPOOL_WORKSHOP, "HighpoolWorkshop"),
    (SUB_LOCATION_AG_CENTER_ROOT_CELLAR, "AgCenterRootCellar"),
    (SUB_LOCATION_DESERT_NOMADS_TENT, "DesertNomadsTent"),
    (SUB_LOCATION_UGLYS_HIDEOUT_ALLEY, "UglysHideoutAlley"),
    (SUB_LOCATION_NEEDLES_BISHOPS_OFFICE, "NeedlesBishopsOffice"),
    (SUB_LOCATION_NEEDLES_GARAGE, "NeedlesGarage"),
    (SUB_LOCATION_NEEDLES_POLICE_STATION, "NeedlesPoliceStation"),
    (SUB_LOCATION_NEEDLES_AMMO_BUNKER, "NeedlesAmmoBunker"),
    (SUB_LOCATION_DARWIN_BLACK_MARKET, "DarwinBlackMarket"),
    (SUB_LOCATION_DARWIN_LAB, "DarwinLab"),
    (SUB_LOCATION_DARWIN_BLACK_GILA_TAVERN, "DarwinBlackGilaTavern"),
    (SUB_LOCATION_LAS_VEGAS_JAIL, "LasVegasJail"),
    (SUB_LOCATION_LAS_VEGAS_PROTON_AX_ROOM, "LasVegasProtonAxRoom"),
    (SUB_LOCATION_SPADES_CASINO_WINE_CELLAR, "SpadesCasinoWineCellar"),
    (SUB_LOCATION_SPADES_CASINO_LEVEL2, "SpadesCasinoLevel2"),
    (SUB_LOCATION_SPADES_CASINO_BASEMENT, "SpadesCasinoBasement"),
];

/// Addresses one transition slot: (campaign, block, selector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubLocDesc {
    pub campaign: usize,
    pub block: usize,
    pub selector: usize,
}

impl SubLocDesc {
    /// Address one transition slot.
    pub fn new(campaign: usize, block: usize, selector: usize) -> Self {
        Self {
            campaign,
            block,
            selector,
        }
    }
}

/// Exact endpoints for a transition slot. `None` means the regular location
/// (the owning block for `from`, the record's destination for `to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubLocOverride {
    pub from: Option<LocationCode>,
    pub to: Option<LocationCode>,
}

impl SubLocOverride {
    /// The slot leads from the parent location into `to`.
    pub fn entering(to: LocationCode) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    /// The slot leads out of `from` to the record's destination.
    pub fn leaving(from: LocationCode) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Both endpoints overridden.
    pub fn between(from: LocationCode, to: LocationCode) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }
}

/// The transition slots that actually lead to or from a sub-location.
pub(crate) fn standard_overrides() -> Vec<(SubLocDesc, SubLocOverride)> {
    let d = SubLocDesc::new;
    vec![
        // Highpool.
        (d(0, BLOCK0_HIGHPOOL, 1), SubLocOverride::entering(SUB_LOCATION_HIGHPOOL_CAVE)),
        (d(0, BLOCK0_HIGHPOOL, 2), SubLocOverride::leaving(SUB_LOCATION_HIGHPOOL_CAVE)),
        (d(0, BLOCK0_HIGHPOOL, 3), SubLocOverride::entering(SUB_LOCATION_HIGHPOOL_COMMUNITY_CENTER)),
        (d(0, BLOCK0_HIGHPOOL, 4), SubLocOverride::leaving(SUB_LOCATION_HIGHPOOL_COMMUNITY_CENTER)),
        (d(0, BLOCK0_HIGHPOOL, 5), SubLocOverride::entering(SUB_LOCATION_HIGHPOOL_WORKSHOP)),
        (d(0, BLOCK0_HIGHPOOL, 6), SubLocOverride::leaving(SUB_LOCATION_HIGHPOOL_WORKSHOP)),
        // Ag Center.
        (d(0, BLOCK0_AG_CENTER, 3), SubLocOverride::entering(SUB_LOCATION_AG_CENTER_ROOT_CELLAR)),
        (d(0, BLOCK0_VERMIN_CAVE, 0), SubLocOverride::leaving(SUB_LOCATION_AG_CENTER_ROOT_CELLAR)),
        // Desert Nomads.
        (d(0, BLOCK0_DESERT_NOMADS, 1), SubLocOverride::entering(SUB_LOCATION_DESERT_NOMADS_TENT)),
        (d(0, BLOCK0_DESERT_NOMADS, 12), SubLocOverride::entering(SUB_LOCATION_DESERT_NOMADS_TENT)),
        (d(0, BLOCK0_DESERT_NOMADS, 13), SubLocOverride::leaving(SUB_LOCATION_DESERT_NOMADS_TENT)),
        // Quartz.
        (d(0, BLOCK0_QUARTZ, 92), SubLocOverride::entering(SUB_LOCATION_UGLYS_HIDEOUT_ALLEY)),
        (d(0, BLOCK0_UGLYS_HIDEOUT, 1), SubLocOverride::leaving(SUB_LOCATION_UGLYS_HIDEOUT_ALLEY)),
        // Needles.
        (d(0, BLOCK0_NEEDLES, 8), SubLocOverride::entering(SUB_LOCATION_NEEDLES_BISHOPS_OFFICE)),
        (d(0, BLOCK0_POLICE_STATION, 6), SubLocOverride::leaving(SUB_LOCATION_NEEDLES_BISHOPS_OFFICE)),
        (d(0, BLOCK0_NEEDLES, 9), SubLocOverride::entering(SUB_LOCATION_NEEDLES_POLICE_STATION)),
        (d(0, BLOCK0_POLICE_STATION, 3), SubLocOverride::leaving(SUB_LOCATION_NEEDLES_POLICE_STATION)),
        (d(0, BLOCK0_NEEDLES, 10), SubLocOverride::entering(SUB_LOCATION_NEEDLES_GARAGE)),
        (d(0, BLOCK0_POLICE_STATION, 2), SubLocOverride::leaving(SUB_LOCATION_NEEDLES_GARAGE)),
        (d(0, BLOCK0_NEEDLES, 19), SubLocOverride::entering(SUB_LOCATION_NEEDLES_AMMO_BUNKER)),
        (d(0, BLOCK0_WASTE_PIT, 5), SubLocOverride::leaving(SUB_LOCATION_NEEDLES_AMMO_BUNKER)),
        // Darwin village.
        (d(1, BLOCK1_DARWIN, 3), SubLocOverride::entering(SUB_LOCATION_DARWIN_BLACK_MARKET)),
        (d(1, BLOCK1_DARWIN, 1), SubLocOverride::leaving(SUB_LOCATION_DARWIN_BLACK_MARKET)),
        (d(1, BLOCK1_DARWIN, 10), SubLocOverride::leaving(SUB_LOCATION_DARWIN_BLACK_MARKET)),
        (d(1, BLOCK1_DARWIN, 11), SubLocOverride::leaving(SUB_LOCATION_DARWIN_BLACK_MARKET)),
        (d(1, BLOCK1_DARWIN, 4), SubLocOverride::entering(SUB_LOCATION_DARWIN_LAB)),
        (d(1, BLOCK1_DARWIN, 2), SubLocOverride::leaving(SUB_LOCATION_DARWIN_LAB)),
        (d(1, BLOCK1_DARWIN, 5), SubLocOverride::entering(SUB_LOCATION_DARWIN_BLACK_GILA_TAVERN)),
        (d(1, BLOCK1_DARWIN, 6), SubLocOverride::entering(SUB_LOCATION_DARWIN_BLACK_GILA_TAVERN)),
        (d(1, BLOCK1_DARWIN, 0), SubLocOverride::leaving(SUB_LOCATION_DARWIN_BLACK_GILA_TAVERN)),
        (d(1, BLOCK1_DARWIN, 9), SubLocOverride::leaving(SUB_LOCATION_DARWIN_BLACK_GILA_TAVERN)),
        // Las Vegas.
        (d(1, BLOCK1_LAS_VEGAS, 1), SubLocOverride::entering(SUB_LOCATION_LAS_VEGAS_JAIL)),
        (
            d(1, BLOCK1_FAT_FREDDYS, 6),
            SubLocOverride::between(SUB_LOCATION_LAS_VEGAS_JAIL, LOCATION_LAS_VEGAS),
        ),
        (d(1, BLOCK1_LAS_VEGAS, 3), SubLocOverride::entering(SUB_LOCATION_LAS_VEGAS_PROTON_AX_ROOM)),
        (
            d(1, BLOCK1_FAT_FREDDYS, 5),
            SubLocOverride::between(SUB_LOCATION_LAS_VEGAS_PROTON_AX_ROOM, LOCATION_LAS_VEGAS),
        ),
        // Spade's Casino.
        (d(1, BLOCK1_SPADES_CASINO, 1), SubLocOverride::entering(SUB_LOCATION_SPADES_CASINO_WINE_CELLAR)),
        (d(1, BLOCK1_SPADES_CASINO, 2), SubLocOverride::leaving(SUB_LOCATION_SPADES_CASINO_WINE_CELLAR)),
        (d(1, BLOCK1_SPADES_CASINO, 3), SubLocOverride::entering(SUB_LOCATION_SPADES_CASINO_LEVEL2)),
        (d(1, BLOCK1_SPADES_CASINO, 4), SubLocOverride::leaving(SUB_LOCATION_SPADES_CASINO_LEVEL2)),
        (d(1, BLOCK1_SPADES_CASINO, 7), SubLocOverride::entering(SUB_LOCATION_SPADES_CASINO_BASEMENT)),
        // Normally leads out to Las Vegas; pointed back at the casino so the
        // basement has a round trip.
        (
            d(1, BLOCK1_SPADES_CASINO, 5),
            SubLocOverride::between(SUB_LOCATION_SPADES_CASINO_BASEMENT, LOCATION_SPADES_CASINO),
        ),
    ]
}
