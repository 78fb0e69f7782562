use rand::Rng;

use crate::{pos, Cell, Pos, World};

/// the eight positions around `pos`, not wrapped.
pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    (-1..=1)
        .flat_map(|x| (-1..=1).map(move |y| pos!(x, y)))
        .filter(|&offset| offset != pos!(0, 0))
        .map(move |offset| pos + offset)
}

pub fn neighbor_count<W>(world: &W, pos: Pos) -> usize
where
    W: World,
{
    neighbors(pos)
        .filter(|&pos| world.get(pos).is_active())
        .count()
}

/// applies the B3/S23 rule to every cell at once.
pub fn next_generation<W>(world: &W) -> W
where
    W: World,
{
    W::from_fn(world.size(), |pos| {
        let is_active = world.get(pos).is_active();
        match (is_active, neighbor_count(world, pos)) {
            (true, 2 | 3) => Cell::active(),  // stay
            (false, 3) => Cell::active(),     // becomes alive
            _ => Cell::inactive(),            // dies or stays dead
        }
    })
}

/// pans the plane: the cell at `pos` takes the value found at `pos + offset`.
pub fn translate<W>(world: &W, offset: Pos) -> W
where
    W: World,
{
    W::from_fn(world.size(), |pos| world.get(pos + offset))
}

pub fn randomize<W>(world: &mut W, rng: &mut impl Rng)
where
    W: World,
{
    for pos in world.size().positions() {
        world.set(pos, Cell::from(rng.gen_bool(0.5)));
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{Size, TorusWorld};

    fn world_with(size: Size, actives: &[Pos]) -> TorusWorld {
        let mut world = TorusWorld::empty(size);
        for &pos in actives {
            world.set(pos, Cell::active());
        }
        world
    }

    #[test]
    fn neighbors_exclude_the_center() {
        let around: Vec<_> = neighbors(pos!(0, 0)).collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&pos!(0, 0)));
    }

    #[test]
    fn neighbor_count_wraps_over_edges() {
        let size = Size::new(6, 5);
        let world = world_with(size, &[pos!(5, 4), pos!(0, 4), pos!(5, 0)]);
        assert_eq!(neighbor_count(&world, pos!(0, 0)), 3);
        assert_eq!(neighbor_count(&world, pos!(3, 2)), 0);
    }

    #[test]
    fn live_cell_with_few_or_many_neighbors_dies() {
        let size = Size::new(8, 8);
        let lonely = world_with(size, &[pos!(3, 3), pos!(4, 3)]);
        assert!(!next_generation(&lonely).get(pos!(3, 3)).is_active());

        let crowded = world_with(
            size,
            &[pos!(3, 3), pos!(2, 2), pos!(3, 2), pos!(4, 2), pos!(2, 3)],
        );
        assert_eq!(neighbor_count(&crowded, pos!(3, 3)), 4);
        assert!(!next_generation(&crowded).get(pos!(3, 3)).is_active());
    }

    #[test]
    fn live_cell_with_three_neighbors_survives_and_dead_one_is_born() {
        let size = Size::new(8, 8);
        let world = world_with(size, &[pos!(3, 3), pos!(2, 2), pos!(3, 2), pos!(4, 2)]);
        let next = next_generation(&world);
        assert!(next.get(pos!(3, 3)).is_active());

        let world = world_with(size, &[pos!(2, 2), pos!(3, 2), pos!(4, 2)]);
        assert!(next_generation(&world).get(pos!(3, 3)).is_active());
    }

    #[test]
    fn block_is_still_anywhere_on_the_torus() {
        let size = Size::new(6, 5);
        for x in 0..size.width {
            for y in 0..size.height {
                let origin = pos!(x, y);
                let block = world_with(
                    size,
                    &[origin, origin + pos!(1, 0), origin + pos!(0, 1), origin + pos!(1, 1)],
                );
                assert_eq!(next_generation(&block), block, "block at {x},{y}");
            }
        }
    }

    #[test]
    fn next_generation_leaves_its_input_alone() {
        let size = Size::new(5, 5);
        let world = world_with(size, &[pos!(1, 2), pos!(2, 2), pos!(3, 2)]);
        let before = world.clone();
        let _ = next_generation(&world);
        assert_eq!(world, before);
    }

    #[test]
    fn translate_moves_cells_and_wraps() {
        let size = Size::new(4, 3);
        let world = world_with(size, &[pos!(0, 0)]);
        let panned = translate(&world, pos!(1, 0));
        assert_eq!(panned.actives(), vec![pos!(3, 0)]);
        let panned = translate(&world, pos!(0, -1));
        assert_eq!(panned.actives(), vec![pos!(0, 1)]);
    }

    #[test]
    fn translate_back_restores_the_world() {
        let size = Size::new(7, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let mut world = TorusWorld::empty(size);
        randomize(&mut world, &mut rng);
        for dx in -9..=9 {
            for dy in -6..=6 {
                let offset = pos!(dx, dy);
                assert_eq!(translate(&translate(&world, offset), -offset), world);
            }
        }
    }

    #[test]
    fn randomize_is_reproducible_with_a_seed() {
        let size = Size::new(10, 10);
        let mut first = TorusWorld::empty(size);
        let mut second = TorusWorld::empty(size);
        randomize(&mut first, &mut StdRng::seed_from_u64(42));
        randomize(&mut second, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert!(first.population() > 0 && first.population() < size.area());
    }
}
