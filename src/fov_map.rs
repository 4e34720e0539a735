use crate::error::FovError;
use crate::grid::*;
use crate::shadowcast::{self, Radius};
use coord_2d::{Coord, Size};
use direction::{Direction, DirectionBitmap};

/// Opacity and visibility for one grid.
///
/// The caller writes opacity with `set_opaque` or `fill_opacity`, then calls
/// `compute` whenever the observer moves and reads the result back with
/// `is_visible`. Both buffers are allocated once; `compute` never allocates.
///
/// Coordinates passed to the per-cell accessors and to `compute` must lie
/// inside the grid.
#[derive(Debug, Clone)]
pub struct FovMap {
    size: Size,
    opacity: Vec<bool>,
    visibility: Vec<bool>,
}

fn allocate(count: usize) -> Option<Vec<bool>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(count).ok()?;
    cells.resize(count, false);
    Some(cells)
}

struct Opacity<'a> {
    size: Size,
    cells: &'a [bool],
}

impl<'a> InputGrid for Opacity<'a> {
    fn size(&self) -> Size {
        self.size
    }
    fn is_opaque(&self, coord: Coord) -> bool {
        self.cells[index(self.size, coord)]
    }
}

impl FovMap {
    /// Allocates a transparent, unseen grid of `size`.
    pub fn new(size: Size) -> Result<Self, FovError> {
        let error = || {
            log::warn!(
                "failed to allocate field of view for {}x{} grid",
                size.width(),
                size.height()
            );
            FovError::Allocation {
                width: size.width(),
                height: size.height(),
            }
        };
        let count = (size.width() as usize)
            .checked_mul(size.height() as usize)
            .ok_or_else(error)?;
        let opacity = allocate(count).ok_or_else(error)?;
        let visibility = allocate(count).ok_or_else(error)?;
        log::debug!(
            "allocated field of view for {}x{} grid",
            size.width(),
            size.height()
        );
        Ok(Self {
            size,
            opacity,
            visibility,
        })
    }

    /// Releases both buffers. The map is left 0x0; calling this again does
    /// nothing.
    pub fn destroy(&mut self) {
        if self.size.count() > 0 {
            log::debug!(
                "releasing field of view for {}x{} grid",
                self.size.width(),
                self.size.height()
            );
        }
        self.opacity = Vec::new();
        self.visibility = Vec::new();
        self.size = Size::new(0, 0);
    }

    /// Destroys the map and allocates it again at `size`, clearing all
    /// opacity and visibility. On failure the map stays destroyed.
    pub fn reset(&mut self, size: Size) -> Result<(), FovError> {
        self.destroy();
        *self = Self::new(size)?;
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_destroyed(&self) -> bool {
        self.size.count() == 0
    }

    pub fn set_opaque(&mut self, coord: Coord, opaque: bool) {
        debug_assert!(coord.is_valid(self.size));
        self.opacity[index(self.size, coord)] = opaque;
    }

    pub fn is_opaque(&self, coord: Coord) -> bool {
        debug_assert!(coord.is_valid(self.size));
        self.opacity[index(self.size, coord)]
    }

    /// Sets the opacity of every cell from `f`, in row-major order.
    pub fn fill_opacity<F: FnMut(Coord) -> bool>(&mut self, mut f: F) {
        let width = self.size.width() as i32;
        for (i, cell) in self.opacity.iter_mut().enumerate() {
            let i = i as i32;
            *cell = f(Coord::new(i % width, i / width));
        }
    }

    pub fn clear_opacity(&mut self) {
        for cell in self.opacity.iter_mut() {
            *cell = false;
        }
    }

    /// Recomputes visibility from `origin`, discarding the previous result.
    pub fn compute(&mut self, origin: Coord, radius: Radius) {
        debug_assert!(origin.is_valid(self.size));
        log::trace!("computing field of view from {:?} ({:?})", origin, radius);
        for cell in self.visibility.iter_mut() {
            *cell = false;
        }
        let size = self.size;
        let opacity = Opacity {
            size,
            cells: &self.opacity,
        };
        let visibility = &mut self.visibility;
        shadowcast::for_each(origin, &opacity, radius, |coord| {
            visibility[index(size, coord)] = true;
        });
    }

    pub fn is_visible(&self, coord: Coord) -> bool {
        debug_assert!(coord.is_valid(self.size));
        self.visibility[index(self.size, coord)]
    }

    pub fn visible_count(&self) -> usize {
        self.visibility.iter().filter(|&&visible| visible).count()
    }

    pub fn visible_coords<'a>(&'a self) -> impl 'a + Iterator<Item = Coord> {
        let width = self.size.width() as usize;
        self.visibility
            .iter()
            .enumerate()
            .filter(|&(_, &visible)| visible)
            .map(move |(i, _)| Coord::new((i % width) as i32, (i / width) as i32))
    }

    /// Which of the eight cells around `coord` are visible. Neighbours off
    /// the edge of the grid are never included.
    pub fn visible_neighbours(&self, coord: Coord) -> DirectionBitmap {
        let mut bitmap = DirectionBitmap::empty();
        for direction in Direction::all() {
            let neighbour = coord + direction.coord();
            if neighbour.is_valid(self.size) && self.is_visible(neighbour) {
                bitmap |= direction.bitmap();
            }
        }
        bitmap
    }
}

impl InputGrid for FovMap {
    fn size(&self) -> Size {
        self.size
    }
    fn is_opaque(&self, coord: Coord) -> bool {
        FovMap::is_opaque(self, coord)
    }
}
