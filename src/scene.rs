use std::io::Read;

use crate::{
    engine::config::RingConfig,
    foundation::error::BezringResult,
    geometry::functions::ProceduralGeometry,
    render::cpu::RenderSettings,
};

/// JSON scene document: `{ "ring": {..}, "geometry": {..}, "render": {..} }`, every key optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneFile {
    /// Ring configuration; hosts pick their own default when absent.
    pub ring: Option<RingConfig>,
    /// Data-described geometry.
    pub geometry: Option<ProceduralGeometry>,
    /// Raster styling.
    pub render: Option<RenderSettings>,
}

impl SceneFile {
    /// Parse and validate a scene from a JSON string.
    pub fn from_json_str(json: &str) -> BezringResult<Self> {
        let scene: Self = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Parse and validate a scene from a JSON reader.
    pub fn from_reader(reader: impl Read) -> BezringResult<Self> {
        let scene: Self = serde_json::from_reader(reader)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Validate every section that is present.
    pub fn validate(&self) -> BezringResult<()> {
        if let Some(ring) = &self.ring {
            ring.validate()?;
        }
        if let Some(geometry) = &self.geometry {
            geometry.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
