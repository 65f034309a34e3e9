pub mod aggregate;
pub mod segments;
