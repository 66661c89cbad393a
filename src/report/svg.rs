use std::path::Path;
use ::svg::Document;
use ::svg::node::element::{Circle, Group, Line, Polyline, Rectangle, Text};
use tracing::info;

use crate::errors::ReportError;
use crate::geometry::{Bounds, Coordinate};
use crate::graph::RoadGraph;
use crate::harness::SweepEntry;


/// Colorblind-friendly palette (Okabe-Ito), cycled per weight
const PALETTE: [&str; 7] = [
    "#0072B2", "#E69F00", "#009E73", "#D55E00", "#CC79A7", "#56B4E9", "#F0E442",
];

const ROAD_COLOR: &str = "#BBBBBB";
const START_COLOR: &str = "#000000";
const GOAL_COLOR: &str = "#D55E00";
const LEGEND_LINE_HEIGHT: f64 = 18.0;


/// Renders road graphs with sweep paths on top
/// Roads in light gray, one coloured polyline per found run, start and goal markers and a legend
pub struct PathOverlay {
    canvas: f64, // pixels along the longer side of the map
    margin: f64,
}

impl Default for PathOverlay {
    fn default() -> Self {
        Self { canvas: 1000.0, margin: 40.0 }
    }
}

/// Map-to-pixel transform for one drawing, y flipped so north is up
struct Frame {
    bounds: Bounds,
    scale: f64,
    margin: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn new(bounds: Bounds, canvas: f64, margin: f64) -> Self {
        let span = bounds.width().max(bounds.height()).max(1.0);
        let scale = canvas / span;
        Self {
            bounds,
            scale,
            margin,
            width: bounds.width() * scale + 2.0 * margin,
            height: bounds.height() * scale + 2.0 * margin,
        }
    }

    fn point(&self, c: Coordinate) -> (f64, f64) {
        let x = self.margin + (c.x as f64 - self.bounds.min.x as f64) * self.scale;
        let y = self.height - self.margin - (c.y as f64 - self.bounds.min.y as f64) * self.scale;
        (x, y)
    }
}

impl PathOverlay {

    /// Draw the graph and every path found in the sweep
    pub fn render(&self, graph: &RoadGraph, title: &str, entries: &[SweepEntry]) -> Document {
        let bounds = graph.bounds().unwrap_or(Bounds {
            min: Coordinate::new(0, 0),
            max: Coordinate::new(1, 1),
        });
        let frame = Frame::new(bounds, self.canvas, self.margin);

        let mut doc = Document::new()
            .set("width", frame.width)
            .set("height", frame.height)
            .set("viewBox", (0.0, 0.0, frame.width, frame.height))
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", frame.width)
                    .set("height", frame.height)
                    .set("fill", "white"),
            );

        doc = doc.add(self.render_roads(graph, &frame));
        doc = doc.add(self.render_paths(entries, &frame));
        if let Some(path) = entries.iter().find_map(SweepEntry::path) {
            doc = doc.add(self.render_endpoints(path, &frame));
        }
        doc.add(self.render_legend(title, entries))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, graph: &RoadGraph, title: &str, entries: &[SweepEntry]) -> Result<(), ReportError> {
        let path = path.as_ref();
        ::svg::save(path, &self.render(graph, title, entries))?;
        info!("wrote overlay {}", path.display());
        Ok(())
    }

    fn render_roads(&self, graph: &RoadGraph, frame: &Frame) -> Group {
        let mut group = Group::new()
            .set("id", "roads")
            .set("stroke", ROAD_COLOR)
            .set("stroke-width", 1);
        for (from, to) in graph.segments() {
            let (x1, y1) = frame.point(from);
            let (x2, y2) = frame.point(to);
            group = group.add(
                Line::new()
                    .set("x1", x1)
                    .set("y1", y1)
                    .set("x2", x2)
                    .set("y2", y2),
            );
        }
        group
    }

    fn render_paths(&self, entries: &[SweepEntry], frame: &Frame) -> Group {
        let mut group = Group::new().set("id", "paths").set("fill", "none");
        for (i, entry) in entries.iter().enumerate() {
            let Some(path) = entry.path() else {
                continue;
            };
            let points = path
                .iter()
                .map(|&c| {
                    let (x, y) = frame.point(c);
                    format!("{x:.2},{y:.2}")
                })
                .collect::<Vec<_>>()
                .join(" ");
            group = group.add(
                Polyline::new()
                    .set("points", points)
                    .set("stroke", PALETTE[i % PALETTE.len()])
                    .set("stroke-width", 2.5)
                    .set("stroke-opacity", 0.8)
                    .set("stroke-linecap", "round")
                    .set("stroke-linejoin", "round"),
            );
        }
        group
    }

    fn render_endpoints(&self, path: &[Coordinate], frame: &Frame) -> Group {
        let mut group = Group::new().set("id", "endpoints");
        let ends = path.first().zip(path.last());
        if let Some((&start, &goal)) = ends {
            for (node, color) in [(start, START_COLOR), (goal, GOAL_COLOR)] {
                let (cx, cy) = frame.point(node);
                group = group.add(
                    Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", 5)
                        .set("fill", color),
                );
            }
        }
        group
    }

    fn render_legend(&self, title: &str, entries: &[SweepEntry]) -> Group {
        let mut group = Group::new()
            .set("id", "legend")
            .set("font-family", "monospace")
            .set("font-size", 13);
        group = group.add(
            Text::new(title)
                .set("x", 10)
                .set("y", LEGEND_LINE_HEIGHT)
                .set("font-weight", "bold"),
        );
        for (i, entry) in entries.iter().enumerate() {
            let label = match entry.metrics() {
                Some(m) => format!("w={}  cost={:.2}  iterations={}", m.weight, m.cost, m.iterations),
                None => format!("w={}  no path", entry.weight),
            };
            group = group.add(
                Text::new(label)
                    .set("x", 10)
                    .set("y", LEGEND_LINE_HEIGHT * (i + 2) as f64)
                    .set("fill", PALETTE[i % PALETTE.len()]),
            );
        }
        group
    }
}
