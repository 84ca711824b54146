use crate::error::LoadError;
use bevy::prelude::*;
use constants::flowers::FLOWER_TYPES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChoice {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone)]
pub struct FlowerType {
    pub name: String,
    pub asset_path: String,
    pub colors: Vec<ColorChoice>,
}

/// Read-only flower-type catalog: model asset and ordered colour choices per
/// flower type. Built once at startup.
#[derive(Resource, Debug, Clone)]
pub struct FlowerCatalog {
    types: Vec<FlowerType>,
}

impl Default for FlowerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FlowerCatalog {
    /// Catalog compiled into the `constants` crate.
    pub fn builtin() -> Self {
        let types = FLOWER_TYPES
            .iter()
            .map(|info| FlowerType {
                name: info.name.to_string(),
                asset_path: info.asset_path.to_string(),
                colors: info
                    .colors
                    .iter()
                    .map(|c| ColorChoice {
                        name: c.name.to_string(),
                        hex: c.hex.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { types }
    }

    pub fn get(&self, name: &str) -> Option<&FlowerType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn asset_path(&self, name: &str) -> Result<&str, LoadError> {
        self.get(name)
            .map(|t| t.asset_path.as_str())
            .ok_or_else(|| LoadError::UnknownFlowerType(name.to_string()))
    }

    /// Colour choices for a flower type; empty for unknown types.
    pub fn color_choices(&self, name: &str) -> &[ColorChoice] {
        self.get(name).map(|t| t.colors.as_slice()).unwrap_or(&[])
    }
}
