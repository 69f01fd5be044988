//! Axis-aligned bounds and polyline splitting

use std::cmp::Ordering;

use super::point::Point;

/// Tolerance used when comparing injected boundary vertices
const SPLIT_EPSILON: f64 = 1e-9;

/// An axis-aligned rectangle in one coordinate system's native units
///
/// Which system the values belong to is a convention of the caller and
/// is not stored here. Bounds are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    /// Minimum X coordinate
    pub lower_x: f64,
    /// Minimum Y coordinate
    pub lower_y: f64,
    /// Maximum X coordinate
    pub upper_x: f64,
    /// Maximum Y coordinate
    pub upper_y: f64,
    /// Optional display center overriding the geometric midpoint
    custom_center: Option<Point>,
}

/// A polyline piece produced by `Bounds::split_if_out_of_bounds`
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateChunk {
    /// Vertices of this piece, in original traversal order
    pub coordinates: Vec<Point>,
    /// True when every vertex of this piece lies inside the bounds
    pub is_within_bounds: bool,
}

impl CoordinateChunk {
    /// Create a new chunk
    pub fn new(coordinates: Vec<Point>, is_within_bounds: bool) -> Self {
        CoordinateChunk {
            coordinates,
            is_within_bounds,
        }
    }
}

impl Bounds {
    /// Create new bounds
    ///
    /// Panics when the lower corner does not lie below/left of the upper
    /// corner; an inverted rectangle is a defect in the calling code, not
    /// recoverable input.
    pub fn new(lower_x: f64, lower_y: f64, upper_x: f64, upper_y: f64) -> Self {
        assert!(
            lower_x <= upper_x && lower_y <= upper_y,
            "inverted bounds: ({}, {}) .. ({}, {})",
            lower_x,
            lower_y,
            upper_x,
            upper_y
        );
        Bounds {
            lower_x,
            lower_y,
            upper_x,
            upper_y,
            custom_center: None,
        }
    }

    /// Set a custom center overriding the geometric midpoint
    pub fn with_center(mut self, center: Point) -> Self {
        self.custom_center = Some(center);
        self
    }

    /// Get the width of the bounds
    pub fn width(&self) -> f64 {
        self.upper_x - self.lower_x
    }

    /// Get the height of the bounds
    pub fn height(&self) -> f64 {
        self.upper_y - self.lower_y
    }

    /// Get the center point (custom override if present, else midpoint)
    pub fn center(&self) -> Point {
        self.custom_center.unwrap_or_else(|| {
            Point::new(
                self.lower_x + self.width() / 2.0,
                self.lower_y + self.height() / 2.0,
            )
        })
    }

    /// Get the custom center, if one was set
    pub fn custom_center(&self) -> Option<Point> {
        self.custom_center
    }

    /// Get the bottom-left corner
    pub fn bottom_left(&self) -> Point {
        Point::new(self.lower_x, self.lower_y)
    }

    /// Get the top-right corner
    pub fn top_right(&self) -> Point {
        Point::new(self.upper_x, self.upper_y)
    }

    /// Flatten to `[lower_x, lower_y, upper_x, upper_y]`
    pub fn flatten(&self) -> [f64; 4] {
        [self.lower_x, self.lower_y, self.upper_x, self.upper_y]
    }

    /// Check if these bounds contain a coordinate (inclusive on all edges)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.lower_x && x <= self.upper_x && y >= self.lower_y && y <= self.upper_y
    }

    /// Split a polyline at every crossing of the bounds rectangle
    ///
    /// Returns `None` for input with fewer than 2 points or any non-finite
    /// coordinate. When every vertex lies inside, the input comes back as a
    /// single within-bounds chunk. Otherwise the polyline is cut at each
    /// point where it crosses a rectangle edge; the crossing point becomes
    /// a shared vertex ending one chunk and starting the next. A chunk is
    /// within bounds only if every one of its vertices (injected boundary
    /// vertices included) is contained, edge-inclusive.
    ///
    /// Backends with regional-only coverage clamp out-of-region input to a
    /// default value; pre-splitting lets a caller query such a backend for
    /// the in-bounds pieces only and treat the rest separately.
    pub fn split_if_out_of_bounds(&self, coordinates: &[Point]) -> Option<Vec<CoordinateChunk>> {
        if coordinates.len() < 2 {
            return None;
        }
        if coordinates.iter().any(|point| !point.is_finite()) {
            return None;
        }
        if coordinates
            .iter()
            .all(|point| self.contains(point.x, point.y))
        {
            return Some(vec![CoordinateChunk::new(coordinates.to_vec(), true)]);
        }

        let augmented = self.inject_crossings(coordinates);

        // Partition the augmented polyline into maximal runs of segments
        // sharing the same containment status; neighbouring runs share
        // their boundary vertex.
        let mut chunks = Vec::new();
        let mut current = vec![augmented[0]];
        let mut current_status: Option<bool> = None;
        for pair in augmented.windows(2) {
            let status =
                self.contains(pair[0].x, pair[0].y) && self.contains(pair[1].x, pair[1].y);
            if let Some(existing) = current_status {
                if existing != status {
                    chunks.push(self.finish_chunk(current));
                    current = vec![pair[0]];
                }
            }
            current_status = Some(status);
            current.push(pair[1]);
        }
        chunks.push(self.finish_chunk(current));

        Some(chunks)
    }

    fn finish_chunk(&self, coordinates: Vec<Point>) -> CoordinateChunk {
        let is_within = coordinates
            .iter()
            .all(|point| self.contains(point.x, point.y));
        CoordinateChunk::new(coordinates, is_within)
    }

    /// Rebuild the polyline with every edge crossing inserted as a vertex
    fn inject_crossings(&self, coordinates: &[Point]) -> Vec<Point> {
        let mut augmented = Vec::with_capacity(coordinates.len());
        augmented.push(coordinates[0]);
        for pair in coordinates.windows(2) {
            for crossing in self.edge_crossings(pair[0], pair[1]) {
                push_if_new(&mut augmented, crossing);
            }
            push_if_new(&mut augmented, pair[1]);
        }
        augmented
    }

    /// Crossings of the open segment (a, b) with the rectangle outline,
    /// ordered by distance from `a`
    fn edge_crossings(&self, a: Point, b: Point) -> Vec<Point> {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let mut hits: Vec<(f64, Point)> = Vec::new();

        if dx.abs() > SPLIT_EPSILON {
            for edge_x in [self.lower_x, self.upper_x] {
                let t = (edge_x - a.x) / dx;
                if t > SPLIT_EPSILON && t < 1.0 - SPLIT_EPSILON {
                    let y = a.y + t * dy;
                    if y >= self.lower_y - SPLIT_EPSILON && y <= self.upper_y + SPLIT_EPSILON {
                        hits.push((t, Point::new(edge_x, y)));
                    }
                }
            }
        }
        if dy.abs() > SPLIT_EPSILON {
            for edge_y in [self.lower_y, self.upper_y] {
                let t = (edge_y - a.y) / dy;
                if t > SPLIT_EPSILON && t < 1.0 - SPLIT_EPSILON {
                    let x = a.x + t * dx;
                    if x >= self.lower_x - SPLIT_EPSILON && x <= self.upper_x + SPLIT_EPSILON {
                        hits.push((t, Point::new(x, edge_y)));
                    }
                }
            }
        }

        hits.sort_by(|left, right| left.0.partial_cmp(&right.0).unwrap_or(Ordering::Equal));
        // A crossing through a corner hits two edges at the same spot
        hits.dedup_by(|left, right| (left.0 - right.0).abs() < SPLIT_EPSILON);
        hits.into_iter().map(|(_, point)| point).collect()
    }
}

fn push_if_new(points: &mut Vec<Point>, candidate: Point) {
    if let Some(last) = points.last() {
        if (last.x - candidate.x).abs() < SPLIT_EPSILON
            && (last.y - candidate.y).abs() < SPLIT_EPSILON
        {
            return;
        }
    }
    points.push(candidate);
}
