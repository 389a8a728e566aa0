use std::cmp::{max, min};
use std::fmt;

use crate::point::Point;

type Index = i64;

/// Cell types with a designated background value, so grids can be built
/// without naming the fill at every call site.
pub trait HasEmpty {
    fn empty_value() -> Self;
}

/// A rectangle of cells spanning two corner points (either order), backed by
/// a flat Vec.
#[derive(Debug)]
pub struct DenseGrid<V: Clone + fmt::Debug> {
    min_x: Index,
    min_y: Index,
    max_x: Index,
    max_y: Index,
    width: usize,
    height: usize,
    cells: Vec<V>,
}

impl<V: Clone + fmt::Debug + HasEmpty> DenseGrid<V> {
    pub fn new(corner_a: Point<Index>, corner_b: Point<Index>) -> Self {
        Self::filled(corner_a, corner_b, V::empty_value())
    }
}

impl<V: Clone + fmt::Debug> DenseGrid<V> {
    pub fn filled(corner_a: Point<Index>, corner_b: Point<Index>, fill: V) -> Self {
        let min_x = min(corner_a.x, corner_b.x);
        let max_x = max(corner_a.x, corner_b.x);
        let min_y = min(corner_a.y, corner_b.y);
        let max_y = max(corner_a.y, corner_b.y);
        let width = 1 + max_x.abs_diff(min_x) as usize;
        let height = 1 + max_y.abs_diff(min_y) as usize;
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, coordinate: Point<Index>) -> bool {
        (self.min_x..=self.max_x).contains(&coordinate.x)
            && (self.min_y..=self.max_y).contains(&coordinate.y)
    }

    /// Get a cell by coordinate. Returns None out of bounds.
    pub fn get(&self, coordinate: Point<Index>) -> Option<V> {
        self.cells.get(self.offset_of(coordinate)?).cloned()
    }

    /// Set a cell by coordinate. Returns None out of bounds.
    pub fn set(&mut self, coordinate: Point<Index>, value: V) -> Option<()> {
        let offset = self.offset_of(coordinate)?;
        self.cells[offset] = value;
        Some(())
    }

    /// All coordinates in the grid, row-major.
    pub fn points(&self) -> impl Iterator<Item = Point<Index>> + '_ {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Point::new(x, y)))
    }

    pub fn dump_with<F: Fn(&V) -> char>(&self, f: F) {
        for y in self.min_y..=self.max_y {
            let row = (self.min_x..=self.max_x)
                .map(|x| f(&self[Point::new(x, y)]))
                .collect::<String>();
            println!("{}", row);
        }
    }

    fn offset_of(&self, coordinate: Point<Index>) -> Option<usize> {
        if !self.contains(coordinate) {
            return None;
        }
        let row = coordinate.y.abs_diff(self.min_y) as usize;
        let col = coordinate.x.abs_diff(self.min_x) as usize;
        Some(row * self.width + col)
    }
}

impl<V: Clone + fmt::Debug> std::ops::Index<Point<Index>> for DenseGrid<V> {
    type Output = V;

    fn index(&self, coordinate: Point<Index>) -> &Self::Output {
        let offset = self.offset_of(coordinate).unwrap();
        &self.cells[offset]
    }
}

impl<V: Clone + fmt::Debug> std::ops::IndexMut<Point<Index>> for DenseGrid<V> {
    fn index_mut(&mut self, coordinate: Point<Index>) -> &mut Self::Output {
        let offset = self.offset_of(coordinate).unwrap();
        &mut self.cells[offset]
    }
}
