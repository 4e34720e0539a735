use coord_2d::Coord;

/// Maps offsets in the canonical octant (`dy <= 0 <= -dx <= -dy`) onto the
/// real grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Octant {
    xx: i32,
    xy: i32,
    yx: i32,
    yy: i32,
}

impl Octant {
    const fn new(xx: i32, xy: i32, yx: i32, yy: i32) -> Self {
        Self { xx, xy, yx, yy }
    }

    pub fn make_coord(&self, centre: Coord, dx: i32, dy: i32) -> Coord {
        Coord::new(
            centre.x + dx * self.xx + dy * self.xy,
            centre.y + dx * self.yx + dy * self.yy,
        )
    }
}

// The order matters only in that every octant appears once; adjacent entries
// share a boundary ray.
pub const OCTANTS: [Octant; 8] = [
    Octant::new(1, 0, 0, 1),
    Octant::new(0, 1, 1, 0),
    Octant::new(0, -1, 1, 0),
    Octant::new(-1, 0, 0, 1),
    Octant::new(-1, 0, 0, -1),
    Octant::new(0, -1, -1, 0),
    Octant::new(0, 1, -1, 0),
    Octant::new(1, 0, 0, -1),
];
