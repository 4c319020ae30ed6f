use std::collections::{hash_map::Entry::*, HashMap};

use serde::{Deserialize, Serialize};

use crate::color::Hsba;

const PALETTE_JSON: &str = include_str!("palette.json");

/// One named pencil color as stored in the bundled palette file.
#[derive(Debug, Deserialize, Serialize)]
pub struct PencilColorSpec {
    pub name: String,
    pub hue: f64,
    pub sat: f64,
    pub bright: f64,
    pub alpha: f64,
}

impl PencilColorSpec {
    pub fn to_hsba(&self) -> Hsba {
        Hsba::new(self.hue, self.sat, self.bright, self.alpha)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WirePalette {
    colors: Vec<PencilColorSpec>,
}

#[derive(Debug)]
pub enum WireFormatError {
    DuplicateColor { name: String },
}

/// The bundled database of named pencil colors.
#[derive(Debug)]
pub struct Palette {
    colors: Vec<PencilColorSpec>,
    colors_by_name: HashMap<String, usize>,
}

impl Palette {
    pub fn from_bundle() -> Self {
        let wire: WirePalette =
            serde_json::from_str(PALETTE_JSON).expect("bundled palette is invalid JSON");
        Palette::from_wire(wire).expect("bundled palette is not a valid database")
    }

    pub fn from_wire(wire: WirePalette) -> Result<Self, WireFormatError> {
        let mut palette = Palette {
            colors: Vec::with_capacity(wire.colors.len()),
            colors_by_name: HashMap::with_capacity(wire.colors.len()),
        };
        for color in wire.colors {
            let index = palette.colors.len();
            let name = color.name.clone();
            palette.colors.push(color);
            match palette.colors_by_name.entry(name) {
                Occupied(o) => {
                    let name = o.remove_entry().0;
                    return Err(WireFormatError::DuplicateColor { name });
                }
                Vacant(v) => v.insert(index),
            };
        }
        Ok(palette)
    }

    pub fn color_by_name(&self, name: &str) -> Option<Hsba> {
        let spec = &self.colors[*self.colors_by_name.get(name)?];
        Some(spec.to_hsba())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|c| c.name.as_str())
    }
}
