
pub mod numeric;
pub mod interval;
pub mod cuboid;
pub mod json_structs;
pub mod json_parser;

pub mod prelude;

pub use crate::cuboid::{Cuboid, Rotation};
