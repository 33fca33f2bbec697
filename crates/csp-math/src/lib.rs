pub mod blend;

pub use blend::blend;
pub use glam::{dvec3, DVec3};

pub type Point3 = DVec3;
