use crate::{Pos, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    active: bool,
}

impl Cell {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn inactive() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggled(self) -> Self {
        Self {
            active: !self.active,
        }
    }
}

impl From<bool> for Cell {
    fn from(active: bool) -> Self {
        Self { active }
    }
}

/// A finite plane of cells whose edges wrap around.
///
/// Every position is valid: implementations wrap coordinates onto the plane
/// before reading or writing, so callers never need to.
pub trait World: Clone + PartialEq {
    fn empty(size: Size) -> Self;
    fn size(&self) -> Size;
    fn get(&self, pos: Pos) -> Cell;
    fn set(&mut self, pos: Pos, cell: Cell);

    /// positions of every active cell, row by row.
    fn actives(&self) -> Vec<Pos> {
        self.size()
            .positions()
            .filter(|&pos| self.get(pos).is_active())
            .collect()
    }

    fn population(&self) -> usize {
        self.actives().len()
    }

    /// builds a world of the given size from a cell for each position.
    fn from_fn(size: Size, mut f: impl FnMut(Pos) -> Cell) -> Self {
        let mut world = Self::empty(size);
        for pos in size.positions() {
            world.set(pos, f(pos));
        }
        world
    }
}

pub use torus_world::TorusWorld;
mod torus_world;
