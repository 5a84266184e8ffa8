// flowprops/src/lib.rs

pub mod generate;
pub mod manifest;

pub use generate::generate;
pub use manifest::Manifest;
