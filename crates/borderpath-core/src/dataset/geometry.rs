//! Boundary geometry: rings, polygons, bounding boxes and segment tests
//!
//! Coordinates are `(lon, lat)` degrees as in GeoJSON. All polygon inputs
//! are normalized to a list of polygons, so a GeoJSON `Polygon` becomes a
//! one-element `Geometry`.

use serde::{Deserialize, Serialize};

/// A single position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

impl Coord {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Coord { lon, lat }
    }
}

/// A closed boundary ring (first and last positions are normally equal)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ring(pub Vec<Coord>);

impl Ring {
    pub fn points(&self) -> &[Coord] {
        &self.0
    }

    /// Consecutive point pairs; a ring with fewer than two points has none
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.0.windows(2).map(|w| Segment::new(w[0], w[1]))
    }
}

/// A polygon: exterior ring followed by any holes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

impl Polygon {
    pub fn exterior(&self) -> Option<&Ring> {
        self.rings.first()
    }
}

/// Country boundary: one or more polygons
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub polygons: Vec<Polygon>,
}

impl Geometry {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Geometry { polygons }
    }

    /// Build from rings of a single polygon (exterior first)
    pub fn polygon(rings: Vec<Vec<Coord>>) -> Self {
        Geometry {
            polygons: vec![Polygon {
                rings: rings.into_iter().map(Ring).collect(),
            }],
        }
    }

    /// Every boundary segment of every ring, holes included.
    /// Holes matter: an enclave borders the country it sits inside.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.polygons
            .iter()
            .flat_map(|p| p.rings.iter())
            .flat_map(|r| r.segments())
    }

    /// True when there is no boundary segment to compare against
    pub fn is_empty(&self) -> bool {
        self.segments().next().is_none()
    }

    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(
            self.polygons
                .iter()
                .flat_map(|p| p.rings.iter())
                .flat_map(|r| r.points().iter().copied()),
        )
    }

    /// Mean of exterior-ring vertices (closing vertex excluded).
    ///
    /// Not an area centroid; it is only used to estimate travel distance.
    pub fn centroid(&self) -> Option<Coord> {
        let mut sum_lon = 0.0;
        let mut sum_lat = 0.0;
        let mut count = 0usize;

        for ring in self.polygons.iter().filter_map(Polygon::exterior) {
            let points = ring.points();
            let open = match points {
                [first, .., last] if first == last => &points[..points.len() - 1],
                _ => points,
            };
            for p in open {
                sum_lon += p.lon;
                sum_lat += p.lat;
                count += 1;
            }
        }

        (count > 0).then(|| Coord::new(sum_lon / count as f64, sum_lat / count as f64))
    }
}

/// Axis-aligned bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn from_points(points: impl IntoIterator<Item = Coord>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = BoundingBox {
            min_lon: first.lon,
            min_lat: first.lat,
            max_lon: first.lon,
            max_lat: first.lat,
        };
        Some(iter.fold(init, |b, p| BoundingBox {
            min_lon: b.min_lon.min(p.lon),
            min_lat: b.min_lat.min(p.lat),
            max_lon: b.max_lon.max(p.lon),
            max_lat: b.max_lat.max(p.lat),
        }))
    }

    pub fn expand(&self, by: f64) -> Self {
        BoundingBox {
            min_lon: self.min_lon - by,
            min_lat: self.min_lat - by,
            max_lon: self.max_lon + by,
            max_lat: self.max_lat + by,
        }
    }

    /// Closed-interval overlap (touching edges count)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_lon <= other.max_lon
            && other.min_lon <= self.max_lon
            && self.min_lat <= other.max_lat
            && other.min_lat <= self.max_lat
    }
}

/// A boundary segment between two consecutive ring positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Coord,
    pub b: Coord,
}

impl Segment {
    pub const fn new(a: Coord, b: Coord) -> Self {
        Segment { a, b }
    }

    pub fn bbox(&self) -> BoundingBox {
        BoundingBox {
            min_lon: self.a.lon.min(self.b.lon),
            min_lat: self.a.lat.min(self.b.lat),
            max_lon: self.a.lon.max(self.b.lon),
            max_lat: self.a.lat.max(self.b.lat),
        }
    }

    /// True when the two segments come within `tolerance` of each other
    /// (crossing, overlapping or merely touching segments qualify).
    pub fn within(&self, other: &Segment, tolerance: f64) -> bool {
        if !self.bbox().expand(tolerance).intersects(&other.bbox()) {
            return false;
        }
        if self.intersects(other) {
            return true;
        }
        point_segment_distance(self.a, other) <= tolerance
            || point_segment_distance(self.b, other) <= tolerance
            || point_segment_distance(other.a, self) <= tolerance
            || point_segment_distance(other.b, self) <= tolerance
    }

    fn intersects(&self, other: &Segment) -> bool {
        let o1 = orientation(self.a, self.b, other.a);
        let o2 = orientation(self.a, self.b, other.b);
        let o3 = orientation(other.a, other.b, self.a);
        let o4 = orientation(other.a, other.b, self.b);

        if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
            return true;
        }

        (o1 == 0.0 && on_segment(other.a, self))
            || (o2 == 0.0 && on_segment(other.b, self))
            || (o3 == 0.0 && on_segment(self.a, other))
            || (o4 == 0.0 && on_segment(self.b, other))
    }
}

/// Signed area of the triangle (p, q, r); zero when collinear
fn orientation(p: Coord, q: Coord, r: Coord) -> f64 {
    (q.lon - p.lon) * (r.lat - p.lat) - (q.lat - p.lat) * (r.lon - p.lon)
}

/// Assumes `p` is collinear with `seg`
fn on_segment(p: Coord, seg: &Segment) -> bool {
    p.lon >= seg.a.lon.min(seg.b.lon)
        && p.lon <= seg.a.lon.max(seg.b.lon)
        && p.lat >= seg.a.lat.min(seg.b.lat)
        && p.lat <= seg.a.lat.max(seg.b.lat)
}

fn point_segment_distance(p: Coord, seg: &Segment) -> f64 {
    let dx = seg.b.lon - seg.a.lon;
    let dy = seg.b.lat - seg.a.lat;
    let len_sq = dx * dx + dy * dy;

    let (cx, cy) = if len_sq == 0.0 {
        (seg.a.lon, seg.a.lat)
    } else {
        let t = (((p.lon - seg.a.lon) * dx + (p.lat - seg.a.lat) * dy) / len_sq).clamp(0.0, 1.0);
        (seg.a.lon + t * dx, seg.a.lat + t * dy)
    };

    ((p.lon - cx).powi(2) + (p.lat - cy).powi(2)).sqrt()
}
