pub mod bitops;

pub use bitops::TileSet;
