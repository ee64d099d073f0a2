use core::fmt;
use smallvec::SmallVec;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Integer grid position, with `x` growing to the right and `y` growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

pub const UP: Coord = Coord { x: 0, y: -1 };
pub const DOWN: Coord = Coord { x: 0, y: 1 };
pub const LEFT: Coord = Coord { x: -1, y: 0 };
pub const RIGHT: Coord = Coord { x: 1, y: 0 };

/// The four unit steps a search may take, in the order neighbours are enumerated.
pub const CARDINALS: [Coord; 4] = [UP, DOWN, LEFT, RIGHT];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// Saturates at [i32::MAX] for endpoints further apart than that.
    pub fn manhattan_distance(&self, other: &Coord) -> i32 {
        let d = self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y));
        i32::try_from(d).unwrap_or(i32::MAX)
    }

    /// The cardinal neighbours of this position in [CARDINALS] order, without any bounds
    /// filtering. Steps leaving the `i32` range are left out.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coord; 4]> {
        CARDINALS
            .iter()
            .filter_map(|d| {
                let x = self.x.checked_add(d.x)?;
                let y = self.y.checked_add(d.y)?;
                Some(Coord::new(x, y))
            })
            .collect()
    }

    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;
    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Coord> for i32 {
    type Output = Coord;
    fn mul(self, rhs: Coord) -> Coord {
        rhs * self
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, rhs: Coord) {
        *self = *self + rhs;
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, rhs: Coord) {
        *self = *self - rhs;
    }
}

/// Formats as `"x y"`, the form expected by move commands.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
