use std::fmt;
use std::hash::Hash;

pub trait Coord:
    num_traits::Signed + std::cmp::Ord + std::cmp::Eq + Hash + Clone + Copy + fmt::Display + fmt::Debug
{
}

impl<C> Coord for C where
    C: num_traits::Signed
        + std::cmp::Ord
        + std::cmp::Eq
        + Hash
        + Clone
        + Copy
        + fmt::Display
        + fmt::Debug
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<C: Coord = i64> {
    pub x: C,
    pub y: C,
}

impl<C: Coord> Point<C> {
    pub fn new(x: C, y: C) -> Self {
        Point { x, y }
    }

    /// The four orthogonally adjacent points.
    pub fn cardinal_neighbors(&self) -> [Point<C>; 4] {
        let one = C::one();
        [
            Point::new(self.x + one, self.y),
            Point::new(self.x - one, self.y),
            Point::new(self.x, self.y + one),
            Point::new(self.x, self.y - one),
        ]
    }

    /// True when `other` is within one cell on both axes (diagonals and
    /// overlap count).
    pub fn is_adjacent(&self, other: Point<C>) -> bool {
        (self.x - other.x).abs() <= C::one() && (self.y - other.y).abs() <= C::one()
    }

    /// One step toward `other`, moving diagonally when both axes differ.
    /// Returns `self` when the points already coincide.
    pub fn step_toward(&self, other: Point<C>) -> Point<C> {
        Point::new(
            self.x + (other.x - self.x).signum(),
            self.y + (other.y - self.y).signum(),
        )
    }

    /// Walk from here to `other` along a shared row or column, inclusive of
    /// both endpoints.
    pub fn line_to(&self, other: Point<C>) -> impl Iterator<Item = Point<C>> {
        debug_assert!(self.x == other.x || self.y == other.y);
        LineIter {
            next: Some(*self),
            end: other,
            step: Point::new((other.x - self.x).signum(), (other.y - self.y).signum()),
        }
    }
}

impl<C: Coord> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<C: Coord> std::ops::Add for Point<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

#[derive(Debug)]
struct LineIter<C: Coord> {
    next: Option<Point<C>>,
    end: Point<C>,
    step: Point<C>,
}

impl<C: Coord> Iterator for LineIter<C> {
    type Item = Point<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == self.end {
            None
        } else {
            Some(current + self.step)
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn test_line_to_vertical() {
        let points = Point::new(2, 0)
            .line_to(Point::new(2, 3))
            .collect::<Vec<_>>();
        assert_eq!(
            points,
            vec![
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
                Point::new(2, 3)
            ]
        );
    }

    #[test]
    fn test_line_to_backwards() {
        let forward = Point::new(0, 0)
            .line_to(Point::new(4, 0))
            .collect::<Vec<_>>();
        let mut backward = Point::new(4, 0)
            .line_to(Point::new(0, 0))
            .collect::<Vec<_>>();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 5);
    }

    #[test]
    fn test_line_to_single_point() {
        let p = Point::new(7, -2);
        assert_eq!(p.line_to(p).collect::<Vec<_>>(), vec![p]);
    }

    #[test]
    fn test_step_toward() {
        let origin = Point::new(0, 0);
        assert_eq!(origin.step_toward(Point::new(2, 0)), Point::new(1, 0));
        assert_eq!(origin.step_toward(Point::new(-2, 2)), Point::new(-1, 1));
        assert_eq!(origin.step_toward(origin), origin);
    }

    #[test]
    fn test_is_adjacent() {
        let p = Point::new(3, 3);
        assert!(p.is_adjacent(p));
        assert!(p.is_adjacent(Point::new(4, 4)));
        assert!(p.is_adjacent(Point::new(2, 3)));
        assert!(!p.is_adjacent(Point::new(5, 3)));
        assert!(!p.is_adjacent(Point::new(4, 1)));
    }
}
