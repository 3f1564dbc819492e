use crate::{
	merge::repair,
	ring::{polygon_from_rings, polygon_to_rings},
};
use geo::{Area, MultiPolygon};
use mapmesh_core::{Category, PolygonRecord, Tags};

/// A keyed map entity and its polygon set, passed by value from stage to stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Corridor {
	pub key: String,
	pub category: Category,
	pub tags: Tags,
	pub width: Option<f64>,
	pub height: Option<f64>,
	pub polygons: MultiPolygon<f64>,
	pub source_ids: Vec<i64>,
}

impl Corridor {
	/// Reads a record of an intermediate file. Parts that cannot be repaired are skipped.
	pub fn from_record(key: &str, category: Category, record: &PolygonRecord) -> Corridor {
		let mut polygons = Vec::new();
		for (exterior, holes) in record.parts() {
			match repair(&polygon_from_rings(exterior, holes)) {
				Some(repaired) => polygons.extend(repaired),
				None => log::warn!("skipping malformed polygon part of '{key}'"),
			}
		}
		Corridor {
			key: key.to_string(),
			category,
			tags: record.tags.clone(),
			width: record.width,
			height: record.height,
			polygons: MultiPolygon::new(polygons),
			source_ids: record.source_ids.clone(),
		}
	}

	pub fn to_record(&self) -> PolygonRecord {
		let (merged_polygons, mut merged_holes): (Vec<_>, Vec<_>) = self.polygons.iter().map(polygon_to_rings).unzip();
		if merged_holes.iter().all(Vec::is_empty) {
			merged_holes.clear();
		}
		PolygonRecord {
			merged_polygons,
			merged_holes,
			width: self.width,
			height: self.height,
			tags: self.tags.clone(),
			source_ids: self.source_ids.clone(),
			category: Some(self.category),
		}
	}

	pub fn area(&self) -> f64 {
		self.polygons.unsigned_area()
	}

	pub fn is_empty(&self) -> bool {
		self.polygons.0.is_empty()
	}
}
