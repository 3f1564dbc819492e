use anyhow::{Result, ensure};
use geo::{BoundingRect, Centroid, Intersects, Point, Polygon};
use rand::Rng;

/// Reference point the goals are ordered from, south of the map origin.
pub const SPAWN: [f64; 2] = [0.0, -100.0];

/// Goals closer than this (squared, in m²) to an accepted goal are rejected.
const MIN_SPACING_SQ: f64 = 1.0;
/// Random tries inside one polygon before falling back to its centroid.
const TRIES_PER_POLYGON: usize = 100;
/// Attempts allowed per requested goal.
const ATTEMPTS_PER_GOAL: usize = 100;

/// Picks up to `count` random route goals on the given surface.
///
/// Each attempt chooses a polygon at random and draws a point uniformly from its bounding
/// box until one lands inside or on the boundary. Goals are rounded to centimetres, kept at
/// least one metre apart and returned nearest to [`SPAWN`] first. Fewer than `count` goals
/// come out when the surface cannot hold them.
pub fn route_goals<R: Rng + ?Sized>(polygons: &[Polygon<f64>], count: usize, rng: &mut R) -> Result<Vec<[f64; 2]>> {
	ensure!(count >= 1, "number of route goals must be at least 1");
	ensure!(!polygons.is_empty(), "no polygons to place route goals on");

	let mut goals: Vec<[f64; 2]> = Vec::with_capacity(count);
	let mut attempts = 0;
	while goals.len() < count && attempts < count * ATTEMPTS_PER_GOAL {
		attempts += 1;
		let polygon = &polygons[rng.random_range(0..polygons.len())];
		let Some(goal) = sample_polygon(polygon, rng) else {
			continue;
		};
		if goals.iter().all(|other| distance_sq(goal, *other) >= MIN_SPACING_SQ) {
			goals.push(goal);
		}
	}

	if goals.len() < count {
		log::warn!("only {} distinct route goals found, {count} requested", goals.len());
	}
	goals.sort_by(|a, b| distance_sq(*a, SPAWN).total_cmp(&distance_sq(*b, SPAWN)));
	Ok(goals)
}

/// A rounded random point on `polygon`, or its rounded centroid after too many misses.
fn sample_polygon<R: Rng + ?Sized>(polygon: &Polygon<f64>, rng: &mut R) -> Option<[f64; 2]> {
	let rect = polygon.bounding_rect()?;
	let (min, max) = (rect.min(), rect.max());
	for _ in 0..TRIES_PER_POLYGON {
		let point = Point::new(rng.random_range(min.x..=max.x), rng.random_range(min.y..=max.y));
		if polygon.intersects(&point) {
			return Some([round(point.x()), round(point.y())]);
		}
	}
	let centroid = polygon.centroid()?;
	Some([round(centroid.x()), round(centroid.y())])
}

fn distance_sq(a: [f64; 2], b: [f64; 2]) -> f64 {
	(a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)
}

fn round(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}
