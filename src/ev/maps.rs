// src/ev/maps.rs

/// Every map area the combination search may draw from, by bare name
/// (the catalog's drop areas carry the `MapWorlds` prefix).
pub static MAP_POOL: &[&str] = &[
    "ForbiddenWoods",
    "ColdRiver_",
    "FrozenCabins",
    "Iceberg",
    "Scriptorium",
    "Museum",
    "Academy",
    "DrySea",
    "Dunes",
    "DesertSpring",
    "MineralPools",
    "CrystalOre",
    "TortureChamber",
    "Grotto",
    "Wharf",
    "FloodedMine",
    "Waterways",
    "Vault",
    "Peninsula",
    "Geode",
    "AshenWood",
    "SpiderForest",
    "Lair",
    "Thicket",
    "TropicalIsland",
    "Stagnation",
    "JungleValley",
    "BrambleValley",
    "SunkenCity",
    "VaalPyramid",
    "Alleyways",
    "Arcade",
    "Port",
    "MoonTemple",
    "Factory",
    "Excavation",
    "Orchard",
    "Plaza",
    "Conservatory",
    "Temple",
    "Cemetery",
    "GraveTrough",
    "Graveyard",
    "LavaChamber",
    "BoneCrypt",
    "Bog",
    "Marshes",
    "Basilica",
    "Residence",
    "Arsenal",
    "Promenade",
    "OvergrownShrine",
    "Courtyard",
    "Terrace",
    "Gardens",
    "Strand",
    "Shore",
    "LavaLake",
    "Estuary",
    "Volcano",
    "Foundry",
    "UndergroundSea",
    "CursedCrypt",
    "Necropolis",
    "AcidLakes",
    "ArachnidNest",
    "ArachnidTomb",
    "AridLake",
    "Armoury",
    "Atoll",
    "Barrows",
    "Beach",
    "Belfry",
    "BurialChambers",
    "Cage",
    "Canyon",
    "CastleRuins",
    "Cells",
    "Channel",
    "CitySquare",
    "CoralRuins",
    "Courthouse",
    "CrimsonTemple",
    "CrimsonTownship",
    "DefiledCathedral",
    "Dungeon",
    "Fields",
    "ForkingRiver",
    "Springs",
    "HauntedMansion",
    "Leyline",
    "Lighthouse",
    "Lookout",
    "Malformation",
    "Mausoleum",
    "Maze",
    "Palace",
    "Park",
    "Pen",
    "Phantasmagoria",
    "Pier",
    "Pit",
    "Plateau",
    "PrimordialPool",
    "Reef",
    "Shipyard",
    "Shrine",
    "Siege",
    "Silo",
    "SulphurVents",
    "Tower",
    "ToxicSewer",
    "UndergroundRiver",
    "Villa",
    "WastePool",
    "Wasteland",
];
