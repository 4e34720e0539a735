use coord_2d::{Coord, Size};

/// Receives each cell found to be visible during a scan.
pub trait OutputGrid {
    fn see(&mut self, coord: Coord);
}

/// Source of opacity for a scan.
///
/// `is_opaque` is only called with coordinates inside `size()`.
pub trait InputGrid {
    fn size(&self) -> Size;
    fn is_opaque(&self, coord: Coord) -> bool;
}

pub(crate) fn index(size: Size, coord: Coord) -> usize {
    coord.y as usize * size.width() as usize + coord.x as usize
}
