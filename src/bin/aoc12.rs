use std::collections::HashMap;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use petgraph::graph::{DiGraph, NodeIndex};

use aoclib::Point;

#[derive(Debug)]
struct HeightMap {
    graph: DiGraph<(), ()>,
    start: NodeIndex,
    end: NodeIndex,
    lowlands: Vec<NodeIndex>,
}

impl FromStr for HeightMap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut heights = HashMap::new();
        let mut start = None;
        let mut end = None;
        for (y, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            for (x, square) in line.chars().enumerate() {
                let here = Point::new(x as i64, y as i64);
                let height = match square {
                    'S' => {
                        start = Some(here);
                        0
                    }
                    'E' => {
                        end = Some(here);
                        25
                    }
                    'a'..='z' => square as u8 - b'a',
                    other => anyhow::bail!("unexpected map square {:?}", other),
                };
                heights.insert(here, height);
            }
        }
        let start = start.ok_or_else(|| anyhow::anyhow!("map has no start square"))?;
        let end = end.ok_or_else(|| anyhow::anyhow!("map has no end square"))?;
        let mut graph = DiGraph::new();
        let nodes = heights
            .keys()
            .map(|p| (*p, graph.add_node(())))
            .collect::<HashMap<_, _>>();
        for (here, height) in &heights {
            for neighbor in here.cardinal_neighbors() {
                // at most one step up, any number of steps down
                if let Some(neighbor_height) = heights.get(&neighbor) {
                    if *neighbor_height <= height + 1 {
                        graph.add_edge(nodes[here], nodes[&neighbor], ());
                    }
                }
            }
        }
        log::debug!(
            "built a graph with {} squares and {} walkable edges",
            graph.node_count(),
            graph.edge_count()
        );
        let lowlands = heights
            .iter()
            .filter(|(_, height)| **height == 0)
            .map(|(p, _)| nodes[p])
            .collect();
        Ok(HeightMap {
            graph,
            start: nodes[&start],
            end: nodes[&end],
            lowlands,
        })
    }
}

impl HeightMap {
    fn shortest_hike(&self) -> anyhow::Result<usize> {
        let costs = petgraph::algo::dijkstra(&self.graph, self.start, Some(self.end), |_| 1usize);
        costs
            .get(&self.end)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no route from the start square"))
    }

    /// Shortest hike starting from any square at the lowest elevation,
    /// found with one search over the reversed graph.
    fn shortest_hike_from_any_lowland(&self) -> anyhow::Result<usize> {
        let mut reversed = self.graph.clone();
        reversed.reverse();
        let costs = petgraph::algo::dijkstra(&reversed, self.end, None, |_| 1usize);
        self.lowlands
            .iter()
            .filter_map(|node| costs.get(node))
            .min()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no lowland square can reach the end"))
    }
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, value_enum)]
    mode: Mode,
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let stdin = std::io::stdin();
    let input = std::io::read_to_string(stdin)?;
    let map: HeightMap = input.parse()?;
    let steps = match args.mode {
        Mode::Part1 => map.shortest_hike()?,
        Mode::Part2 => map.shortest_hike_from_any_lowland()?,
    };
    println!("{}", steps);
    Ok(())
}
