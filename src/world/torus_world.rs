use crate::{pos, Cell, Pos, Size, World};

/// dense storage, one cell per position, indexed `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorusWorld {
    size: Size,
    cells: Vec<Cell>,
}

impl TorusWorld {
    fn index(&self, pos: Pos) -> usize {
        let Pos { x, y } = self.size.wrap(pos);
        (y * self.size.width + x) as usize
    }
}

impl World for TorusWorld {
    fn empty(size: Size) -> Self {
        let cells = vec![Cell::inactive(); size.area()];
        Self { size, cells }
    }

    fn size(&self) -> Size {
        self.size
    }

    fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    fn actives(&self) -> Vec<Pos> {
        let width = self.size.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_active())
            .map(|(index, _)| pos!(index as i32 % width, index as i32 / width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TorusWorld {
        let mut world = TorusWorld::empty(Size::new(5, 4));
        world.set(pos!(0, 0), Cell::active());
        world.set(pos!(4, 3), Cell::active());
        world.set(pos!(2, 1), Cell::active());
        world
    }

    #[test]
    fn empty_world_is_fully_populated_and_dead() {
        let world = TorusWorld::empty(Size::new(7, 3));
        assert_eq!(world.cells.len(), 21);
        assert!(world.actives().is_empty());
    }

    #[test]
    fn lookups_wrap_in_both_directions() {
        let world = sample();
        let Size { width, height } = world.size();
        for x in -3 * width..3 * width {
            for y in -3 * height..3 * height {
                let wrapped = pos!(x.rem_euclid(width), y.rem_euclid(height));
                assert_eq!(world.get(pos!(x, y)), world.get(wrapped), "at {x},{y}");
            }
        }
        assert!(world.get(pos!(-1, -1)).is_active());
        assert!(world.get(pos!(5, 4)).is_active());
        let far = pos!(i32::MAX, i32::MIN);
        assert_eq!(world.get(far), world.get(world.size().wrap(far)));
    }

    #[test]
    fn set_wraps_too() {
        let mut world = TorusWorld::empty(Size::new(5, 4));
        world.set(pos!(-1, 4), Cell::active());
        assert_eq!(world.actives(), vec![pos!(4, 0)]);
    }

    #[test]
    fn actives_are_listed_row_by_row() {
        assert_eq!(sample().actives(), vec![pos!(0, 0), pos!(2, 1), pos!(4, 3)]);
        assert_eq!(sample().population(), 3);
    }
}
