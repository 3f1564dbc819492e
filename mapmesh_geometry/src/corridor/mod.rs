//! Turns a road or sidewalk centerline into the polygon of its paved surface.
//!
//! The primary construction buffers the centerline by half the width with flat end caps
//! and mitred joins, so corridor ends and corners stay square. When the buffer yields no
//! area the corridor is built from raw per-segment offset edges instead.

mod buffer;
mod offset;

use crate::merge::repair;
use geo::{Area, MultiPolygon};
use mapmesh_core::RoadsConfig;
use std::fmt;

pub use offset::offset_ring;

/// Reasons a centerline produces no corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorridorError {
	/// Fewer than two points.
	TooFewPoints,
	/// Zero-length line or non-positive width.
	EmptyGeometry,
}

impl fmt::Display for CorridorError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CorridorError::TooFewPoints => f.write_str("centerline has fewer than two points"),
			CorridorError::EmptyGeometry => f.write_str("centerline yields an empty corridor"),
		}
	}
}

impl std::error::Error for CorridorError {}

#[derive(Clone, Debug, PartialEq)]
pub struct CorridorBuilder {
	mitre_limit: f64,
}

impl CorridorBuilder {
	#[must_use]
	pub fn new(config: &RoadsConfig) -> Self {
		Self {
			mitre_limit: config.mitre_limit,
		}
	}

	/// Builds the corridor of `centerline` at `width`.
	///
	/// Consecutive duplicate points are tolerated. Every returned ring is explicitly closed.
	pub fn build(&self, centerline: &[[f64; 2]], width: f64) -> Result<MultiPolygon<f64>, CorridorError> {
		if centerline.len() < 2 {
			return Err(CorridorError::TooFewPoints);
		}
		if !has_length(centerline) || width.is_nan() || width <= 0.0 {
			return Err(CorridorError::EmptyGeometry);
		}
		let half_width = width / 2.0;

		let buffered = buffer::buffer_centerline(centerline, half_width, self.mitre_limit);
		if buffered.unsigned_area() > 0.0 {
			return Ok(buffered);
		}

		log::debug!("buffer of a {}-point centerline is empty, using offset edges", centerline.len());
		Self::build_from_offsets(centerline, half_width)
	}

	/// Fallback construction from per-segment offset edges, repaired into a valid polygon.
	pub fn build_from_offsets(centerline: &[[f64; 2]], half_width: f64) -> Result<MultiPolygon<f64>, CorridorError> {
		let ring = offset_ring(centerline, half_width);
		let polygon = crate::ring::polygon_from_rings(&ring, &[]);
		repair(&polygon).ok_or(CorridorError::EmptyGeometry)
	}
}

fn has_length(centerline: &[[f64; 2]]) -> bool {
	centerline.iter().any(|point| *point != centerline[0])
}
