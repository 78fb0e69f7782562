use std::ops::{Add, Neg, Sub};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Pos {
    type Output = Self;
    fn neg(self) -> Self::Output {
        pos!(-self.x, -self.y)
    }
}

/// dimensions of a wrap-around plane, both at least 1.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 1 && height >= 1, "size must be at least 1x1");
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// brings any position back onto the plane.
    pub fn wrap(&self, Pos { x, y }: Pos) -> Pos {
        pos!(wrap(x, self.width), wrap(y, self.height))
    }

    /// every position of the plane, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let Size { width, height } = *self;
        (0..height).flat_map(move |y| (0..width).map(move |x| pos!(x, y)))
    }
}

pub fn wrap(n: i32, len: i32) -> i32 {
    ((n % len) + len) % len
}

#[test]
fn test_wrap() {
    assert_eq!(wrap(0, 10), 0);
    assert_eq!(wrap(9, 10), 9);
    assert_eq!(wrap(10, 10), 0);
    assert_eq!(wrap(-1, 10), 9);
    assert_eq!(wrap(-10, 10), 0);
    assert_eq!(wrap(-31, 10), 9);
    assert_eq!(wrap(i32::MIN, 7), wrap(i32::MIN % 7, 7));
}

#[test]
fn test_size_wrap() {
    let size = Size::new(4, 3);
    assert_eq!(size.wrap(pos!(5, -1)), pos!(1, 2));
    assert_eq!(size.wrap(pos!(-4, 3)), pos!(0, 0));
}

#[test]
fn test_positions_cover_the_plane() {
    let size = Size::new(3, 2);
    let all: Vec<_> = size.positions().collect();
    assert_eq!(all.len(), size.area());
    assert_eq!(all[0], pos!(0, 0));
    assert_eq!(all[3], pos!(0, 1));
}
