//! Grid coordinates and 4-connected neighbourhoods.
//!
//! Coordinates are signed so that neighbours of edge pixels can be
//! generated freely and rejected later, when they are taken off the
//! frontier.

use std::fmt;

/// A (column, row) position on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column (horizontal position)
    pub x: i32,
    /// Row (vertical position)
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step one unit in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four axis-aligned neighbours, in the given order.
    #[inline]
    pub fn neighbours(self, order: &NeighbourOrder) -> [Coord; 4] {
        order.0.map(|direction| self.step(direction))
    }

    /// Convert to an `[row, col]` array index if inside a `width` x `height` grid.
    #[inline]
    pub fn to_index(self, width: usize, height: usize) -> Option<[usize; 2]> {
        if self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height {
            Some([self.y as usize, self.x as usize])
        } else {
            None
        }
    }

    pub fn manhattan_distance(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn euclidean_distance(self, other: Coord) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned step direction. Rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Order in which a painted pixel's neighbours are added to the frontier.
///
/// The order only changes the intermediate propagation pattern; the final
/// filled region is the same for every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighbourOrder(pub [Direction; 4]);

impl NeighbourOrder {
    /// Up, down, left, right.
    pub const VERTICAL_FIRST: Self = Self([
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]);

    /// Right, left, down, up.
    pub const HORIZONTAL_FIRST: Self = Self([
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ]);

    /// True if each of the four directions appears exactly once.
    pub fn is_complete(&self) -> bool {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
            .iter()
            .all(|d| self.0.iter().filter(|&&o| o == *d).count() == 1)
    }
}

impl Default for NeighbourOrder {
    fn default() -> Self {
        Self::VERTICAL_FIRST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_are_four_connected() {
        let c = Coord::new(3, 3);
        for n in c.neighbours(&NeighbourOrder::default()) {
            assert_eq!(c.manhattan_distance(n), 1);
        }
    }

    #[test]
    fn test_neighbours_follow_order() {
        let c = Coord::new(0, 0);
        let n = c.neighbours(&NeighbourOrder::HORIZONTAL_FIRST);
        assert_eq!(n, [
            Coord::new(1, 0),
            Coord::new(-1, 0),
            Coord::new(0, 1),
            Coord::new(0, -1),
        ]);
    }

    #[test]
    fn test_to_index_rejects_out_of_range() {
        assert_eq!(Coord::new(2, 1).to_index(3, 2), Some([1, 2]));
        assert_eq!(Coord::new(3, 1).to_index(3, 2), None);
        assert_eq!(Coord::new(0, 2).to_index(3, 2), None);
        assert_eq!(Coord::new(-1, 0).to_index(3, 2), None);
        assert_eq!(Coord::new(0, -1).to_index(3, 2), None);
        assert_eq!(Coord::new(0, 0).to_index(0, 0), None);
    }

    #[test]
    fn test_euclidean_distance() {
        let d = Coord::new(0, 0).euclidean_distance(Coord::new(3, 4));
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_incomplete_order_detected() {
        let order = NeighbourOrder([Direction::Up, Direction::Up, Direction::Left, Direction::Right]);
        assert!(!order.is_complete());
        assert!(NeighbourOrder::default().is_complete());
    }
}
