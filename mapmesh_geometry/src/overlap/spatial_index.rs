use geo::{BoundingRect, Intersects, Polygon};
use rstar::{AABB, RTree, RTreeObject};

/// An obstacle polygon with its precomputed envelope.
#[derive(Clone, Debug)]
struct IndexedPolygon {
	polygon: Polygon<f64>,
	envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedPolygon {
	type Envelope = AABB<[f64; 2]>;

	fn envelope(&self) -> Self::Envelope {
		self.envelope
	}
}

fn envelope_of(polygon: &Polygon<f64>) -> Option<AABB<[f64; 2]>> {
	let rect = polygon.bounding_rect()?;
	Some(AABB::from_corners(
		[rect.min().x, rect.min().y],
		[rect.max().x, rect.max().y],
	))
}

/// Read-only R-tree over a fixed snapshot of obstacle polygons.
#[derive(Debug)]
pub struct ObstacleIndex {
	tree: RTree<IndexedPolygon>,
}

impl ObstacleIndex {
	#[must_use]
	pub fn new<I: IntoIterator<Item = Polygon<f64>>>(polygons: I) -> Self {
		let entries = polygons
			.into_iter()
			.filter_map(|polygon| {
				let envelope = envelope_of(&polygon)?;
				Some(IndexedPolygon { polygon, envelope })
			})
			.collect();
		Self {
			tree: RTree::bulk_load(entries),
		}
	}

	/// Obstacles that actually intersect `polygon`, found through their envelopes.
	pub fn candidates(&self, polygon: &Polygon<f64>) -> Vec<&Polygon<f64>> {
		let Some(envelope) = envelope_of(polygon) else {
			return Vec::new();
		};
		self
			.tree
			.locate_in_envelope_intersecting(&envelope)
			.map(|entry| &entry.polygon)
			.filter(|obstacle| obstacle.intersects(polygon))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.tree.size()
	}

	pub fn is_empty(&self) -> bool {
		self.tree.size() == 0
	}
}
