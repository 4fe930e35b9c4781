use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Games,
    Emulators,
    Mods,
    Tools,
    Community,
    Console,
    Help,
    Contact,
}

impl Category {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Games => "Games",
            Category::Emulators => "Emulators",
            Category::Mods => "Mods",
            Category::Tools => "Tools",
            Category::Community => "Community",
            Category::Console => "Console",
            Category::Help => "Help",
            Category::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn all() -> &'static [Category] {
        &[
            Category::Games,
            Category::Emulators,
            Category::Mods,
            Category::Tools,
            Category::Community,
            Category::Console,
            Category::Help,
            Category::Contact,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub icon: String,
}

impl CatalogEntry {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
            category,
            icon: icon.into(),
        }
    }
}

/// A canned query bound to one of the modal's shortcut buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub label: String,
    pub query: String,
}

impl Shortcut {
    pub fn new(label: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            query: query.into(),
        }
    }
}

#[must_use]
pub fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("GTA Cheats", "GTA"),
        Shortcut::new("Emulators", "emulator"),
        Shortcut::new("Game Mods", "mods"),
        Shortcut::new("Discord", "discord"),
    ]
}
