/*

    Provide utilities to parse cuboid layout JSON files.

    The parser is somewhat robust, let <a> be integer or float type,
    in JSON file <a> can be given both in quotes (string) or as is.

    e.g. In JSON file both
    "Height": "6" and "Height": 6
    works as height: Float in source code

    Vector3 fields can be given as "<a> <a> <a>" or [<a>, <a>, <a>].
    Boundary additionally accepts {"x": <a>, "y": <a>, "z": <a>}
    where any missing axis is 0.

    @date: 2 Oct, 2025
    @author: bartu
*/

use std::fmt::{self};
use std::fs::File;
use std::io::BufReader;

use serde_json::{self, Value};
use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess, MapAccess};
use serde::de::Error as _;

use crate::prelude::*;
use crate::json_structs::CuboidLayout;

pub fn parse_json(path: &str) -> Result<CuboidLayout, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_layout");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path);

    // Parse JSON into CuboidLayout
    let layout: CuboidLayout = serde_json::from_reader(reader)?;
    Ok(layout)
}

pub fn parse_json_str(text: &str) -> Result<CuboidLayout, Box<dyn std::error::Error>> {
    let layout: CuboidLayout = serde_json::from_str(text)?;
    Ok(layout)
}

fn float_from_value(v: Value) -> Result<Float, String> {
    match v {
        Value::Number(n) => n.as_f64()
            .map(|v| v as Float)
            .ok_or_else(|| String::from("Invalid float")),
        Value::String(s) => s.trim().parse::<Float>()
            .map_err(|_| format!("Failed to parse float from string '{s}'")),
        t => Err(format!("Expected float or string, found {t}")),
    }
}

pub(crate) fn deser_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize usize type given as either string or number in JSON
    */
    let s: Value = Deserialize::deserialize(deserializer)?;
    match s {
        Value::Number(n) => n.as_u64()
            .map(|v| v as usize)
            .ok_or_else(|| de::Error::custom("Invalid integer")),
        Value::String(s) => s.parse::<usize>()
            .map_err(|_| de::Error::custom("Failed to parse integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {:#?}", t))),
    }
}

// Handles floats as string or number
pub(crate) fn deser_float<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    float_from_value(v).map_err(de::Error::custom)
}

pub(crate) fn parse_vec3_str(value: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 components for Vec3 string, found '{value}'"));
    }
    let mut xyz = [0.0 as Float; 3];
    for (i, part) in parts.iter().enumerate() {
        xyz[i] = part
            .parse::<Float>()
            .map_err(|_| format!("Failed parsing component {i} of '{value}'"))?;
    }
    Ok(Vector3::from_array(xyz))
}

// partial = true lets map form omit axes, which are then 0
struct Vec3Visitor {
    partial: bool,
}

impl<'de> Visitor<'de> for Vec3Visitor {
    type Value = Vector3;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a Vec3 as a string 'x y z', an array [x, y, z] or a map {x, y, z}")
    }

    // Given "X Y Z"
    fn visit_str<E>(self, value: &str) -> Result<Vector3, E>
    where
        E: de::Error,
    {
        parse_vec3_str(value).map_err(de::Error::custom)
    }

    // Given [X, Y, Z]
    fn visit_seq<A>(self, mut seq: A) -> Result<Vector3, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut xyz = [0.0 as Float; 3];
        for c in xyz.iter_mut() {
            let v: Value = seq
                .next_element()?
                .ok_or_else(|| A::Error::custom("Expected 3 elements in Vec3 array"))?;
            *c = float_from_value(v).map_err(A::Error::custom)?;
        }
        if seq.next_element::<Value>()?.is_some() {
            return Err(A::Error::custom("Expected only 3 elements in Vec3 array"));
        }
        Ok(Vector3::from_array(xyz))
    }

    // Given {"x": X, "y": Y, "z": Z}
    fn visit_map<A>(self, mut map: A) -> Result<Vector3, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut xyz: [Option<Float>; 3] = [None; 3];
        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.to_ascii_lowercase().as_str() {
                "x" => 0,
                "y" => 1,
                "z" => 2,
                other => return Err(A::Error::unknown_field(other, &["x", "y", "z"])),
            };
            let v: Value = map.next_value()?;
            xyz[slot] = Some(float_from_value(v).map_err(A::Error::custom)?);
        }

        let mut out = [0.0 as Float; 3];
        for (i, axis) in ["x", "y", "z"].into_iter().enumerate() {
            out[i] = match xyz[i] {
                Some(v) => v,
                None if self.partial => {
                    debug!("Boundary axis '{axis}' not given, using 0");
                    0.0
                }
                None => return Err(A::Error::missing_field(axis)),
            };
        }
        Ok(Vector3::from_array(out))
    }
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(Vec3Visitor { partial: false })
}

pub(crate) fn deser_bounds<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(Vec3Visitor { partial: true })
}
