use crate::config::FovConfig;
use crate::error::FovError;
use crate::fov_map::FovMap;
use crate::shadowcast::Radius;
use coord_2d::{Coord, Size};

/// One field of view per map level, all the same size and all computed from
/// the same (x, y) cursor.
#[derive(Debug, Clone)]
pub struct FovStack {
    levels: Vec<FovMap>,
}

impl FovStack {
    /// Allocates `levels` maps of `size`. If any allocation fails, every
    /// level already allocated is released before returning.
    pub fn new(size: Size, levels: usize) -> Result<Self, FovError> {
        let levels = (0..levels)
            .map(|_| FovMap::new(size))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("allocated field of view stack with {} levels", levels.len());
        Ok(Self { levels })
    }

    /// Writes opacity for every level from `opaque(level, coord)`. When the
    /// config disables occlusion all levels are left transparent.
    pub fn populate<F>(&mut self, config: &FovConfig, mut opaque: F)
    where
        F: FnMut(usize, Coord) -> bool,
    {
        for (level, map) in self.levels.iter_mut().enumerate() {
            if config.enabled {
                map.fill_opacity(|coord| opaque(level, coord));
            } else {
                map.clear_opacity();
            }
        }
        log::debug!(
            "populated {} levels (occlusion {})",
            self.levels.len(),
            if config.enabled { "on" } else { "off" }
        );
    }

    pub fn compute(&mut self, origin: Coord, radius: Radius) {
        for map in self.levels.iter_mut() {
            map.compute(origin, radius);
        }
    }

    pub fn is_visible(&self, level: usize, coord: Coord) -> bool {
        self.levels[level].is_visible(coord)
    }

    pub fn level(&self, level: usize) -> Option<&FovMap> {
        self.levels.get(level)
    }

    pub fn level_mut(&mut self, level: usize) -> Option<&mut FovMap> {
        self.levels.get_mut(level)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn destroy(&mut self) {
        for map in self.levels.iter_mut() {
            map.destroy();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn levels_share_cursor_but_not_opacity() {
        let size = Size::new(5, 1);
        let mut stack = FovStack::new(size, 2).unwrap();
        // wall at x = 2 on level 0 only
        stack.populate(&FovConfig::default(), |level, coord| {
            level == 0 && coord.x == 2
        });
        stack.compute(Coord::new(0, 0), Radius::Unlimited);
        assert!(stack.is_visible(0, Coord::new(2, 0)));
        assert!(!stack.is_visible(0, Coord::new(3, 0)));
        assert!(stack.is_visible(1, Coord::new(3, 0)));
        assert!(stack.is_visible(1, Coord::new(4, 0)));
    }

    #[test]
    fn disabled_config_leaves_everything_transparent() {
        let mut stack = FovStack::new(Size::new(5, 1), 1).unwrap();
        let config = FovConfig {
            enabled: false,
            radius: 0,
        };
        stack.populate(&config, |_, _| true);
        stack.compute(Coord::new(0, 0), config.radius());
        assert_eq!(stack.level(0).unwrap().visible_count(), 5);
    }

    #[test]
    fn failed_level_allocation_fails_stack() {
        assert!(FovStack::new(Size::new(1 << 30, 1 << 30), 3).is_err());
    }

    #[test]
    fn destroy_every_level() {
        let mut stack = FovStack::new(Size::new(3, 3), 3).unwrap();
        stack.destroy();
        stack.destroy();
        assert_eq!(stack.len(), 3);
        assert!((0..3).all(|i| stack.level(i).unwrap().is_destroyed()));
        assert!(stack.level(3).is_none());
    }
}
