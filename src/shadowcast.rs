use crate::grid::*;
use crate::shadowcast_octants::*;
use coord_2d::{Coord, Size};
use std::cmp;

/// How far an observer can see.
///
/// A raw radius of 0 converts to `Unlimited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Radius {
    Unlimited,
    Limited(u32),
}

impl From<u32> for Radius {
    fn from(radius: u32) -> Self {
        match radius {
            0 => Radius::Unlimited,
            radius => Radius::Limited(radius),
        }
    }
}

impl Radius {
    /// The number of rows to scan from `centre` in a grid of `size`.
    ///
    /// `Unlimited` becomes the distance to the farthest grid corner plus one.
    /// A limited radius beyond that is clamped to it, which doesn't change
    /// which cells are visible.
    pub fn resolve(self, size: Size, centre: Coord) -> i32 {
        let width = size.width() as i64;
        let height = size.height() as i64;
        let x = cmp::max(width - centre.x as i64, centre.x as i64);
        let y = cmp::max(height - centre.y as i64, centre.y as i64);
        let unlimited = ((x * x + y * y) as f64).sqrt() as i64 + 1;
        match self {
            Radius::Unlimited => unlimited as i32,
            Radius::Limited(radius) => cmp::min(radius as i64, unlimited) as i32,
        }
    }
}

struct StaticParams<'a, In: 'a + InputGrid> {
    centre: Coord,
    radius: i32,
    radius_squared: i64,
    input_grid: &'a In,
    width: i32,
    height: i32,
}

#[derive(Clone, Copy, Debug)]
struct ScanParams {
    depth: i32,
    start_slope: f32,
    end_slope: f32,
}

impl ScanParams {
    fn whole_octant() -> Self {
        Self {
            depth: 1,
            start_slope: 1.0,
            end_slope: 0.0,
        }
    }
}

fn scan<In, F>(octant: &Octant, params: ScanParams, static_params: &StaticParams<In>, f: &mut F)
where
    In: InputGrid,
    F: FnMut(Coord),
{
    let ScanParams {
        depth,
        mut start_slope,
        end_slope,
    } = params;

    if start_slope < end_slope {
        return;
    }

    let mut next_start_slope = 0.0;

    for depth in depth..(static_params.radius + 1) {
        let dy = -depth;
        let mut blocked = false;

        for dx in -depth..=0 {
            let coord = octant.make_coord(static_params.centre, dx, dy);
            if coord.x < 0
                || coord.x >= static_params.width
                || coord.y < 0
                || coord.y >= static_params.height
            {
                continue;
            }

            // angular extent of the cell as seen from the centre
            let left_slope = (dx as f32 - 0.5) / (dy as f32 + 0.5);
            let right_slope = (dx as f32 + 0.5) / (dy as f32 - 0.5);

            if start_slope < right_slope {
                continue;
            } else if end_slope > left_slope {
                break;
            }

            let distance_squared = (dx * dx + dy * dy) as i64;
            if distance_squared <= static_params.radius_squared {
                f(coord);
            }

            let opaque = static_params.input_grid.is_opaque(coord);
            if blocked {
                if opaque {
                    next_start_slope = right_slope;
                } else {
                    blocked = false;
                    start_slope = next_start_slope;
                }
            } else if opaque && depth < static_params.radius {
                blocked = true;
                scan(
                    octant,
                    ScanParams {
                        depth: depth + 1,
                        start_slope,
                        end_slope: left_slope,
                    },
                    static_params,
                    f,
                );
                next_start_slope = right_slope;
            }
        }

        if blocked {
            break;
        }
    }
}

/// Calls `f` with every cell visible from `centre`.
///
/// The centre is always reported. Cells on the boundary between two
/// octants may be reported more than once.
pub fn for_each<In, F>(centre: Coord, input_grid: &In, radius: Radius, mut f: F)
where
    In: InputGrid,
    F: FnMut(Coord),
{
    f(centre);
    let size = input_grid.size();
    let radius = radius.resolve(size, centre);
    let params = StaticParams {
        centre,
        radius,
        radius_squared: radius as i64 * radius as i64,
        input_grid,
        width: size.width() as i32,
        height: size.height() as i32,
    };
    for octant in OCTANTS.iter() {
        scan(octant, ScanParams::whole_octant(), &params, &mut f);
    }
}

pub fn observe<In, Out>(centre: Coord, input_grid: &In, radius: Radius, output_grid: &mut Out)
where
    In: InputGrid,
    Out: OutputGrid,
{
    for_each(centre, input_grid, radius, |coord| output_grid.see(coord));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_is_unlimited() {
        assert_eq!(Radius::from(0), Radius::Unlimited);
        assert_eq!(Radius::from(7), Radius::Limited(7));
    }

    #[test]
    fn unlimited_reaches_far_corner() {
        // farthest extents are 10 and 5: sqrt(125) = 11.18
        let size = Size::new(10, 5);
        assert_eq!(Radius::Unlimited.resolve(size, Coord::new(0, 0)), 12);
        // extents 7 and 3 from (3, 2): sqrt(58) = 7.6
        assert_eq!(Radius::Unlimited.resolve(size, Coord::new(3, 2)), 8);
    }

    #[test]
    fn limited_radius_is_clamped() {
        let size = Size::new(4, 4);
        assert_eq!(Radius::Limited(2).resolve(size, Coord::new(0, 0)), 2);
        assert_eq!(Radius::Limited(1000).resolve(size, Coord::new(0, 0)), 6);
        assert_eq!(Radius::Limited(u32::max_value()).resolve(size, Coord::new(0, 0)), 6);
    }

    struct Open(Size);

    impl InputGrid for Open {
        fn size(&self) -> Size {
            self.0
        }
        fn is_opaque(&self, _coord: Coord) -> bool {
            false
        }
    }

    #[test]
    fn centre_reported_first() {
        let mut seen = Vec::new();
        for_each(Coord::new(1, 1), &Open(Size::new(3, 3)), Radius::Limited(1), |coord| {
            seen.push(coord)
        });
        assert_eq!(seen[0], Coord::new(1, 1));
        assert!(seen.len() > 1);
    }

    #[test]
    fn radius_one_sees_orthogonal_neighbours_only() {
        struct Collect(Vec<Coord>);
        impl OutputGrid for Collect {
            fn see(&mut self, coord: Coord) {
                if !self.0.contains(&coord) {
                    self.0.push(coord);
                }
            }
        }
        let mut output = Collect(Vec::new());
        observe(Coord::new(1, 1), &Open(Size::new(3, 3)), Radius::Limited(1), &mut output);
        let mut seen = output.0;
        seen.sort_by_key(|c| (c.y, c.x));
        assert_eq!(
            seen,
            vec![
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(1, 2),
            ]
        );
    }
}
