use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Physical properties shared by bodies made of the same stuff
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub key: String,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub color: u32,
}

impl Material {
    /// Mass of a body of this material with characteristic `size`
    pub fn mass_for_size(&self, size: f32) -> f32 {
        size * self.density
    }
}

#[derive(Clone)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
    key_to_index: HashMap<String, usize>,
}

impl MaterialRegistry {
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    pub fn builtin() -> Self {
        let materials = vec![
            builtin("metal", 7.8, 0.6, 0.3, 0xC0C0C0),
            builtin("rubber", 1.2, 0.8, 0.9, 0xFF6B6B),
            builtin("glass", 2.5, 0.4, 0.1, 0x4ECDC4),
            builtin("wood", 0.6, 0.7, 0.4, 0xDEB887),
            builtin("ice", 0.9, 0.1, 0.2, 0x87CEEB),
        ];
        Self::from_materials(materials)
    }

    fn from_materials(materials: Vec<Material>) -> Self {
        let key_to_index = materials
            .iter()
            .enumerate()
            .map(|(idx, m)| (m.key.clone(), idx))
            .collect();
        Self { materials, key_to_index }
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn get(&self, key: &str) -> Option<&Material> {
        self.key_to_index.get(key).map(|&idx| &self.materials[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn manifest_json(&self) -> String {
        let out = MaterialManifest { materials: &self.materials };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        if bundle.materials.is_empty() {
            return Err("material bundle is empty".to_string());
        }

        let mut materials = Vec::with_capacity(bundle.materials.len());
        for m in bundle.materials {
            if m.key.is_empty() {
                return Err("material key must not be empty".to_string());
            }
            if materials.iter().any(|existing: &Material| existing.key == m.key) {
                return Err(format!("duplicate material key: {}", m.key));
            }
            if !m.density.is_finite() || m.density <= 0.0 {
                return Err(format!("material {}: density must be positive", m.key));
            }
            if !m.friction.is_finite() || !(0.0..=1.0).contains(&m.friction) {
                return Err(format!("material {}: friction out of range", m.key));
            }
            if !m.restitution.is_finite() || !(0.0..=1.0).contains(&m.restitution) {
                return Err(format!("material {}: restitution out of range", m.key));
            }
            let color = parse_hex_color(&m.color)
                .ok_or_else(|| format!("material {}: bad color {}", m.key, m.color))?;

            materials.push(Material {
                key: m.key,
                density: m.density,
                friction: m.friction,
                restitution: m.restitution,
                color,
            });
        }

        Ok(Self::from_materials(materials))
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin(key: &str, density: f32, friction: f32, restitution: f32, color: u32) -> Material {
    Material {
        key: key.to_string(),
        density,
        friction,
        restitution,
        color,
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into 0xRRGGBB
pub fn parse_hex_color(s: &str) -> Option<u32> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

pub fn format_hex_color(color: u32) -> String {
    format!("#{:06X}", color & 0x00FF_FFFF)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialManifest<'a> {
    materials: &'a [Material],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    materials: Vec<BundleMaterial>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleMaterial {
    key: String,
    density: f32,
    #[serde(default)]
    friction: f32,
    #[serde(default)]
    restitution: f32,
    #[serde(default = "default_color")]
    color: String,
}

fn default_color() -> String {
    "#FFFFFF".to_string()
}
