//! Bot Catalog
//!
//! The featured bot list consumed by the landing view. The view only sees the
//! [`BotCatalog`] trait, so the built-in list can be swapped for a JSON file or
//! any other source without touching rendering.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A selectable AI character shown on the landing page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotProfile {
    /// Display name
    pub name: String,

    /// One-line pitch shown under the name
    pub description: String,

    /// Emoji or short glyph used as the avatar
    #[serde(rename = "avatar")]
    pub avatar_glyph: String,
}

impl BotProfile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        avatar_glyph: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            avatar_glyph: avatar_glyph.into(),
        }
    }
}

/// Source of bot profiles (Strategy pattern)
pub trait BotCatalog {
    /// Catalog name, used in diagnostics
    fn name(&self) -> &str;

    /// All bots, in display order
    fn bots(&self) -> Vec<BotProfile>;
}

/// The three bots that ship with the page
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub const fn new() -> Self {
        Self
    }
}

impl BotCatalog for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    fn bots(&self) -> Vec<BotProfile> {
        vec![
            BotProfile::new(
                "Luna",
                "A friendly space explorer who loves telling stories about the stars.",
                "🌌",
            ),
            BotProfile::new("James", "A helpful and knowledgeable teacher.", "📚"),
            BotProfile::new(
                "Bella",
                "A playful and witty gamer who enjoys jokes and riddles.",
                "🎮",
            ),
        ]
    }
}

/// Catalog backed by a JSON array of profiles
///
/// ```json
/// [{ "name": "Luna", "description": "...", "avatar": "🌌" }]
/// ```
#[derive(Clone, Debug)]
pub struct JsonCatalog {
    bots: Vec<BotProfile>,
}

impl JsonCatalog {
    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let bots: Vec<BotProfile> = serde_json::from_str(json)?;
        tracing::debug!(count = bots.len(), "parsed bot catalog");
        Ok(Self { bots })
    }
}

impl BotCatalog for JsonCatalog {
    fn name(&self) -> &str {
        "json"
    }

    fn bots(&self) -> Vec<BotProfile> {
        self.bots.clone()
    }
}
