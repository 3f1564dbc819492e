use anyhow::{Result, ensure};
use geo::{BoundingRect, Intersects, Point, Polygon};
use itertools::Itertools;

const DECIMALS: f64 = 1e10;

/// Samples a regular grid over every polygon.
///
/// Grid points start at each polygon's minimum bounding corner and step by `resolution`.
/// Points inside or on the boundary are kept. The result is rounded to ten decimals,
/// deduplicated and sorted by `(x, y)`.
pub fn sample_grid<'a, I>(polygons: I, resolution: f64) -> Result<Vec<[f64; 2]>>
where
	I: IntoIterator<Item = &'a Polygon<f64>>,
{
	ensure!(resolution > 0.0, "sampling resolution must be positive, got {resolution}");

	let mut points = Vec::new();
	for polygon in polygons {
		let Some(rect) = polygon.bounding_rect() else {
			continue;
		};
		let (min, max) = (rect.min(), rect.max());
		let columns = ((max.x - min.x) / resolution).floor() as usize;
		let rows = ((max.y - min.y) / resolution).floor() as usize;
		for column in 0..=columns {
			let x = min.x + column as f64 * resolution;
			for row in 0..=rows {
				let y = min.y + row as f64 * resolution;
				if polygon.intersects(&Point::new(x, y)) {
					points.push([round(x), round(y)]);
				}
			}
		}
	}

	let points: Vec<[f64; 2]> = points
		.into_iter()
		.sorted_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])))
		.dedup()
		.collect();
	ensure!(!points.is_empty(), "no grid points fall inside the polygons");
	Ok(points)
}

fn round(value: f64) -> f64 {
	(value * DECIMALS).round() / DECIMALS
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ring::polygon_from_rings;
	use pretty_assertions::assert_eq;

	fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
		polygon_from_rings(&[[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]], &[])
	}

	#[test]
	fn includes_boundary_points() {
		let points = sample_grid(&[rect(0.0, 0.0, 1.0, 0.5)], 0.5).unwrap();
		assert_eq!(
			points,
			vec![[0.0, 0.0], [0.0, 0.5], [0.5, 0.0], [0.5, 0.5], [1.0, 0.0], [1.0, 0.5]]
		);
	}

	#[test]
	fn overlapping_polygons_are_deduplicated() {
		let points = sample_grid(&[rect(0.0, 0.0, 1.0, 1.0), rect(0.0, 0.0, 1.0, 1.0)], 1.0).unwrap();
		assert_eq!(points.len(), 4);
	}

	#[test]
	fn concave_polygons_skip_outside_points() {
		let l_shape = polygon_from_rings(
			&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 2.0], [0.0, 2.0], [0.0, 0.0]],
			&[],
		);
		let points = sample_grid(&[l_shape], 1.0).unwrap();
		assert!(!points.contains(&[2.0, 2.0]));
		assert_eq!(points.len(), 8);
	}

	#[test]
	fn errors() {
		assert!(sample_grid(&[rect(0.0, 0.0, 1.0, 1.0)], 0.0).is_err());
		let empty: Vec<Polygon<f64>> = Vec::new();
		let err = sample_grid(&empty, 0.5).unwrap_err();
		assert_eq!(err.to_string(), "no grid points fall inside the polygons");
	}
}
