use anyhow::{Result, bail};
use mapmesh_core::{Category, PolygonFile, RoadsConfig};
use mapmesh_geometry::Corridor;
use std::path::Path;

/// Reads the corridors of an intermediate file.
///
/// The category of a record is `kind` if given, else the category stored in the record,
/// else the one its tags classify as.
pub fn read_corridors(path: &Path, kind: Option<Category>, roads: &RoadsConfig) -> Result<Vec<Corridor>> {
	let file = PolygonFile::from_path(path)?;
	let mut corridors = Vec::with_capacity(file.len());
	for (key, record) in file.iter() {
		let category = kind
			.or(record.category)
			.or_else(|| Category::classify(&record.tags, roads));
		let Some(category) = category else {
			bail!("cannot tell whether '{key}' in {} is a road, building or sidewalk", path.display());
		};
		let corridor = Corridor::from_record(key, category, record);
		if corridor.is_empty() {
			log::warn!("'{key}' has no usable polygon");
			continue;
		}
		corridors.push(corridor);
	}
	log::debug!("read {} corridors from {}", corridors.len(), path.display());
	Ok(corridors)
}

pub fn write_corridors(path: &Path, corridors: &[Corridor]) -> Result<()> {
	let file: PolygonFile = corridors
		.iter()
		.map(|corridor| (corridor.key.clone(), corridor.to_record()))
		.collect();
	file.to_path(path)
}
