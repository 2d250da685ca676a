pub mod analysis;
pub mod colour;
pub mod ir;
