use crate::ElementType;
use serde::{Deserialize, Serialize};

/// Immutable species definition that creature instances are stamped from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub name: String,
    pub type_label: String,               // Free-form label shown to the player
    pub element: Option<ElementType>,     // None behaves as neutral in battle
    pub max_hp: u16,
    pub moves: Vec<String>,               // Display only, no mechanical effect
    pub level: u16,
    pub workability: Option<u8>,          // 0-100
    pub special_skill: Option<String>,
}

/// The whole catalog as authored in `data/catalog.ron`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    pub templates: Vec<CreatureTemplate>,
    /// Names of the templates the player's first creature may be drawn from.
    pub starters: Vec<String>,
}

impl CatalogData {
    pub fn find(&self, name: &str) -> Option<&CreatureTemplate> {
        self.templates
            .iter()
            .find(|template| template.name.eq_ignore_ascii_case(name))
    }

    /// Encode the catalog for embedding. Used by the build script.
    pub fn to_postcard(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    pub fn from_postcard(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
