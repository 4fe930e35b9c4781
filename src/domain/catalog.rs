use super::models::{CatalogEntry, Category};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("catalog entry {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<CatalogEntry>,
}

/// The fixed set of searchable site entries. Read-only once built; the
/// order of `entries` is the order results are reported in.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index,
                    field: "title",
                });
            }
            if entry.url.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index,
                    field: "url",
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file.entries)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by category, in `Category::all()` order. Entries keep
    /// their catalog order inside each group.
    #[must_use]
    pub fn by_category(&self) -> Vec<(Category, Vec<&CatalogEntry>)> {
        Category::all()
            .iter()
            .filter_map(|cat| {
                let items: Vec<&CatalogEntry> =
                    self.entries.iter().filter(|e| e.category == *cat).collect();
                (!items.is_empty()).then_some((*cat, items))
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: built_in_entries(),
        }
    }
}

fn built_in_entries() -> Vec<CatalogEntry> {
    use Category::*;
    let e = CatalogEntry::new;
    vec![
        // Games
        e("GTA V Cheats", "games/gta/index.html", "Free mod menus, trainers, and scripts for GTA V", Games, "fa-car"),
        e("GTA IV Mods", "mods.html#gta", "Graphics overhauls and mods for GTA IV", Mods, "fa-puzzle-piece"),
        e("Counter-Strike 2", "games/cs2/index.html", "Aimbot, wallhack, and ESP tools for CS2", Games, "fa-crosshairs"),
        e("Garry's Mod", "games/gmod/index.html", "Enhanced gameplay tools and cheats", Games, "fa-gamepad"),
        e("Red Dead Redemption 2", "games/rdr2/index.html", "Trainers and mod menus for RDR2", Games, "fa-horse"),
        e("Call of Duty", "games/cod/index.html", "Cheats for all COD games", Games, "fa-crosshairs"),
        e("Battlefield", "games/battlefield/index.html", "Cheats for all Battlefield games", Games, "fa-crosshairs"),
        e("Team Fortress 2", "games/tf2/index.html", "64-bit and 32-bit TF2 cheats", Games, "fa-gamepad"),
        e("Left 4 Dead", "games/left4dead/index.html", "L4D1 & L4D2 cheats and mods", Games, "fa-gamepad"),
        e("Farlight 84", "games/farlight84/index.html", "Battle royale cheats", Games, "fa-gamepad"),
        // Emulators
        e("PlayStation Emulators", "console/playstation-emulators.html", "PS1, PS2, PS3, PSP emulators", Emulators, "fa-play"),
        e("Xbox Emulators", "console/xbox-emulators.html", "Original Xbox and Xbox 360 emulators", Emulators, "fa-cube"),
        e("Nintendo Emulators", "console/nintendo-emulators.html", "N64, GameCube, Wii, Switch emulators", Emulators, "fa-star"),
        e("All Console Emulators", "console/emulators.html", "Complete emulator collection", Emulators, "fa-desktop"),
        e("PCSX2 (PS2)", "console/playstation-emulators.html#ps2", "PlayStation 2 emulator", Emulators, "fa-play"),
        e("RPCS3 (PS3)", "console/playstation-emulators.html#ps3", "PlayStation 3 emulator", Emulators, "fa-play"),
        e("PPSSPP (PSP)", "console/playstation-emulators.html#psp", "PlayStation Portable emulator", Emulators, "fa-play"),
        e("Dolphin", "console/nintendo-emulators.html#dolphin", "GameCube and Wii emulator", Emulators, "fa-star"),
        e("Cemu", "console/nintendo-emulators.html#wiiu", "Wii U emulator", Emulators, "fa-star"),
        e("Xenia", "console/xbox-emulators.html#xbox360", "Xbox 360 emulator", Emulators, "fa-cube"),
        // Mods
        e("Game Mods", "mods.html", "Mods for GTA, Skyrim, Fallout, and more", Mods, "fa-puzzle-piece"),
        e("Skyrim Mods", "mods.html#rpg", "Graphics overhauls and quest mods", Mods, "fa-dragon"),
        e("Fallout 4 Mods", "mods.html#rpg", "Settlement building and weapon mods", Mods, "fa-radiation"),
        e("Minecraft Mods", "mods.html#fps", "Tech mods, shaders, and modpacks", Mods, "fa-cube"),
        // Community
        e("Discord Servers", "index.html#discord", "Join our gaming communities", Community, "fa-discord"),
        e("YouTube Channel", "youtube.html", "Watch our gaming videos", Community, "fa-youtube"),
        // Tools
        e("Injectors & Tools", "tools/injectors.html", "DLL injectors and process tools", Tools, "fa-tools"),
        e("Cheat Sources", "tools/sources.html", "Open-source cheat repositories", Tools, "fa-code"),
        // Console mods
        e("Xbox 360 Mods", "console/xbox360.html", "JTAG, RGH modifications", Console, "fa-gamepad"),
        e("PlayStation 3 Mods", "console/ps3.html", "Custom firmware and homebrew", Console, "fa-gamepad"),
        // Other
        e("Help & FAQ", "help.html", "Get help and find answers", Help, "fa-question-circle"),
        e("Contact Info", "profile.html", "Get in touch with us", Contact, "fa-address-card"),
        e("Safety Tips", "safety.html", "Stay safe while gaming", Help, "fa-shield-alt"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_catalog_is_valid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 33);
        assert!(Catalog::new(catalog.entries().to_vec()).is_ok());
        assert_eq!(catalog.entries()[0].title, "GTA V Cheats");
    }

    #[test]
    fn test_empty_url_rejected_with_index() {
        let entries = vec![
            CatalogEntry::new("Ok", "ok.html", "", Category::Help, "fa-x"),
            CatalogEntry::new("Broken", "  ", "", Category::Help, "fa-x"),
        ];
        match Catalog::new(entries) {
            Err(CatalogError::EmptyField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "url");
            }
            other => panic!("Expected EmptyField error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_toml_catalog() {
        let content = r#"
            [[entries]]
            title = "Dolphin"
            url = "console/nintendo-emulators.html#dolphin"
            description = "GameCube and Wii emulator"
            category = "Emulators"
            icon = "fa-star"

            [[entries]]
            title = "Help & FAQ"
            url = "help.html"
            category = "Help"
        "#;
        let catalog = Catalog::from_toml_str(content, Path::new("catalog.toml")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[1].description, "");
        assert_eq!(catalog.entries()[1].category, Category::Help);
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let content = r#"
            [[entries]]
            title = "Thing"
            url = "thing.html"
            category = "Music"
        "#;
        let err = Catalog::from_toml_str(content, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_by_category_keeps_catalog_order() {
        let catalog = Catalog::default();
        let groups = catalog.by_category();
        assert_eq!(groups[0].0, Category::Games);
        assert_eq!(groups[0].1[0].title, "GTA V Cheats");
        let mods = groups.iter().find(|(c, _)| *c == Category::Mods).unwrap();
        assert_eq!(mods.1[0].title, "GTA IV Mods");
        let total: usize = groups.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, catalog.len());
    }
}
