//! Field of view over a 2D opacity grid, computed with recursive
//! shadowcasting.

mod config;
mod error;
mod fov_map;
mod grid;
mod shadowcast;
mod shadowcast_octants;
mod stack;

pub use config::*;
pub use error::*;
pub use fov_map::*;
pub use grid::{InputGrid, OutputGrid};
pub use shadowcast::*;
pub use shadowcast_octants::{Octant, OCTANTS};
pub use stack::*;
