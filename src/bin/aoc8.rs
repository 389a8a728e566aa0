use clap::{Parser, ValueEnum};

use aoclib::{DenseGrid, Point};

const DIRECTIONS: [Point; 4] = [
    Point { x: 0, y: -1 },
    Point { x: 0, y: 1 },
    Point { x: -1, y: 0 },
    Point { x: 1, y: 0 },
];

fn parse_grid(input: &str) -> anyhow::Result<DenseGrid<u8>> {
    let lines = input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>();
    let height = lines.len();
    let width = lines.first().map(|l| l.len()).unwrap_or(0);
    if width == 0 {
        anyhow::bail!("empty grid");
    }
    let mut grid = DenseGrid::filled(
        Point::new(0, 0),
        Point::new(width as i64 - 1, height as i64 - 1),
        0u8,
    );
    for (y, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!("row {} is not {} cells wide", y + 1, width);
        }
        for (x, b) in line.bytes().enumerate() {
            if !b.is_ascii_digit() {
                anyhow::bail!("tree height {:?} is not a digit", b as char);
            }
            grid.set(Point::new(x as i64, y as i64), b - b'0');
        }
    }
    Ok(grid)
}

/// A tree is visible if some direction holds only shorter trees between it
/// and the edge.
fn is_visible(grid: &DenseGrid<u8>, tree: Point) -> bool {
    let height = grid[tree];
    DIRECTIONS.iter().any(|step| {
        let mut cursor = tree + *step;
        while let Some(other) = grid.get(cursor) {
            if other >= height {
                return false;
            }
            cursor = cursor + *step;
        }
        true
    })
}

fn viewing_distance(grid: &DenseGrid<u8>, tree: Point, step: Point) -> usize {
    let height = grid[tree];
    let mut distance = 0;
    let mut cursor = tree + step;
    while let Some(other) = grid.get(cursor) {
        distance += 1;
        if other >= height {
            break;
        }
        cursor = cursor + step;
    }
    distance
}

fn scenic_score(grid: &DenseGrid<u8>, tree: Point) -> usize {
    DIRECTIONS
        .iter()
        .map(|step| viewing_distance(grid, tree, *step))
        .product()
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_enum)]
    mode: Mode,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let stdin = std::io::stdin();
    let input = std::io::read_to_string(stdin)?;
    let grid = parse_grid(&input)?;
    match args.mode {
        Mode::Part1 => {
            let visible = grid.points().filter(|p| is_visible(&grid, *p)).count();
            println!("{}", visible);
        }
        Mode::Part2 => {
            let best = grid.points().map(|p| scenic_score(&grid, p)).max();
            println!(
                "{}",
                best.ok_or_else(|| anyhow::anyhow!("grid has no cells"))?
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{is_visible, parse_grid, scenic_score};
    use aoclib::Point;

    const EXAMPLE: &str = "30373\n25512\n65332\n33549\n35390\n";

    #[test]
    fn test_edges_are_visible() {
        let grid = parse_grid(EXAMPLE).unwrap();
        assert!(is_visible(&grid, Point::new(0, 0)));
        assert!(is_visible(&grid, Point::new(4, 4)));
        assert!(is_visible(&grid, Point::new(0, 2)));
    }

    #[test]
    fn test_interior_visibility() {
        let grid = parse_grid(EXAMPLE).unwrap();
        assert!(is_visible(&grid, Point::new(1, 1)));
        assert!(!is_visible(&grid, Point::new(3, 1)));
        assert!(!is_visible(&grid, Point::new(2, 2)));
    }

    #[test]
    fn test_visible_count() {
        let grid = parse_grid(EXAMPLE).unwrap();
        assert_eq!(grid.points().filter(|p| is_visible(&grid, *p)).count(), 21);
    }

    #[test]
    fn test_scenic_score() {
        let grid = parse_grid(EXAMPLE).unwrap();
        assert_eq!(scenic_score(&grid, Point::new(2, 1)), 4);
        assert_eq!(scenic_score(&grid, Point::new(2, 3)), 8);
    }

    #[test]
    fn test_best_scenic_score() {
        let grid = parse_grid(EXAMPLE).unwrap();
        assert_eq!(grid.points().map(|p| scenic_score(&grid, p)).max(), Some(8));
    }

    #[test]
    fn test_ragged_grid_fails() {
        assert!(parse_grid("123\n12\n").is_err());
    }
}
