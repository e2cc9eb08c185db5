//! Brush faces and per-face texture assignment

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the six sides of a brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    North,
    South,
    East,
    West,
    Top,
    Down,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::North,
        Face::South,
        Face::East,
        Face::West,
        Face::Top,
        Face::Down,
    ];

    /// Key used in level files
    pub fn name(self) -> &'static str {
        match self {
            Face::North => "north",
            Face::South => "south",
            Face::East => "east",
            Face::West => "west",
            Face::Top => "top",
            Face::Down => "down",
        }
    }

    /// Parse a level file key. `bottom` is accepted for `down`.
    pub fn from_name(name: &str) -> Option<Face> {
        match name {
            "north" => Some(Face::North),
            "south" => Some(Face::South),
            "east" => Some(Face::East),
            "west" => Some(Face::West),
            "top" => Some(Face::Top),
            "down" | "bottom" => Some(Face::Down),
            _ => None,
        }
    }
}

/// Texture identifier for each face. Unassigned faces are `None`.
///
/// Serializes as a `{face: filename}` object keyed by `Face::name`,
/// omitting unassigned faces. Unknown keys are skipped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceTextures {
    pub north: Option<String>,
    pub south: Option<String>,
    pub east: Option<String>,
    pub west: Option<String>,
    pub top: Option<String>,
    pub down: Option<String>,
}

impl FaceTextures {
    /// Same texture on every face
    pub fn uniform(texture: impl Into<String>) -> Self {
        let texture = texture.into();
        let mut out = Self::default();
        for face in Face::ALL {
            out.set(face, texture.clone());
        }
        out
    }

    pub fn get(&self, face: Face) -> Option<&str> {
        self.slot(face).as_deref()
    }

    pub fn set(&mut self, face: Face, texture: impl Into<String>) {
        *self.slot_mut(face) = Some(texture.into());
    }

    /// Builder-style `set`
    pub fn with(mut self, face: Face, texture: impl Into<String>) -> Self {
        self.set(face, texture);
        self
    }

    /// Assigned faces in `Face::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Face, &str)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(move |face| self.get(face).map(|tex| (face, tex)))
    }

    fn slot(&self, face: Face) -> &Option<String> {
        match face {
            Face::North => &self.north,
            Face::South => &self.south,
            Face::East => &self.east,
            Face::West => &self.west,
            Face::Top => &self.top,
            Face::Down => &self.down,
        }
    }

    fn slot_mut(&mut self, face: Face) -> &mut Option<String> {
        match face {
            Face::North => &mut self.north,
            Face::South => &mut self.south,
            Face::East => &mut self.east,
            Face::West => &mut self.west,
            Face::Top => &mut self.top,
            Face::Down => &mut self.down,
        }
    }
}

impl Serialize for FaceTextures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.iter().count()))?;
        for (face, texture) in self.iter() {
            map.serialize_entry(face.name(), texture)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FaceTextures {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Sorted keys: "down" is applied after "bottom" when a file has both
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut textures = FaceTextures::default();
        for (key, texture) in raw {
            match Face::from_name(&key) {
                Some(face) => textures.set(face, texture),
                None => log::warn!("Ignoring texture for unknown face '{}'", key),
            }
        }
        Ok(textures)
    }
}
