/*
    Declare data structs needed to parse JSON layout files.

    - SingleOrVec
    - CuboidJSON: A single cuboid entry
    - CuboidLayout: Root of the file, boundary + cuboids

    Example layout:
    {
        "Boundary": "0 0 0",
        "Cuboid": [
            { "_id": "1", "Center": "4 4 4" },
            { "_id": "2", "Center": [3, 3, 4], "Height": 6, "Width": "6", "Length": 8 }
        ]
    }

    @date: 13 Oct, 2025
    @author: Bartu
*/

use crate::prelude::*;
use crate::cuboid::Cuboid;


// To handle JSON file having a single <object>
// or an array of <object>s.
// Untagged variants are tried in order, Multiple must come before Single
// or a defaulted struct would also accept [] as one element.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Multiple(Vec<T>),
    Single(T),
}

impl<T: Clone> SingleOrVec<T>  {
    pub fn all(&self) -> Vec<T> {
        match &self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t.clone()],
            SingleOrVec::Multiple(vec) => vec.clone(),
        }
    }
}

impl<T> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}


#[derive(Debug, Deserialize, Clone, SmartDefault)]
#[serde(default)]
pub struct CuboidJSON {
    #[serde(rename = "_id", deserialize_with = "deser_usize")]
    pub _id: usize,

    #[serde(rename = "Center", deserialize_with = "deser_vec3")]
    pub center: Vector3,

    #[default = 2.0]
    #[serde(rename = "Height", deserialize_with = "deser_float")]
    pub height: Float,

    #[default = 2.0]
    #[serde(rename = "Width", deserialize_with = "deser_float")]
    pub width: Float,

    #[default = 2.0]
    #[serde(rename = "Length", deserialize_with = "deser_float")]
    pub length: Float,
}

impl CuboidJSON {
    pub fn to_cuboid(&self) -> Cuboid {
        Cuboid::from_center_size(self.center, [self.height, self.width, self.length])
    }
}


#[derive(Debug, Deserialize, SmartDefault)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct CuboidLayout {
    // Missing axes default to 0, see deser_bounds
    #[default(Cuboid::DEFAULT_BOUNDS)]
    #[serde(deserialize_with = "deser_bounds")]
    pub boundary: Vector3,

    #[serde(rename = "Cuboid")]
    pub cuboids: SingleOrVec<CuboidJSON>,
}

impl CuboidLayout {
    /// Returns (_id, Cuboid) pairs regardless of JSON being a single object or array
    pub fn build_cuboids(&self) -> Vec<(usize, Cuboid)> {
        self.cuboids.all().iter().map(|c| (c._id, c.to_cuboid())).collect()
    }
}
