use anyhow::{Context, Result, ensure};
use serde::{Serialize, de::DeserializeOwned};
use std::{
	fs::{self, File},
	io::{BufReader, BufWriter, Write},
	path::Path,
};

/// Reads and deserializes a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
	ensure!(path.exists(), "file {} not found", path.display());
	let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
	serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing JSON in {}", path.display()))
}

/// Serializes `value` as indented JSON, creating missing parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent.display()))?;
	}
	let mut writer = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
	serde_json::to_writer_pretty(&mut writer, value)?;
	writer.write_all(b"\n")?;
	writer.flush()?;
	log::debug!("wrote {}", path.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeMap;

	#[test]
	fn write_then_read_creates_directories() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("nested/deeper/data.json");
		let value = BTreeMap::from([("a".to_string(), vec![1.5, 2.0])]);
		write_json(&path, &value)?;
		let text = fs::read_to_string(&path)?;
		assert!(text.ends_with("}\n"));
		let read: BTreeMap<String, Vec<f64>> = read_json(&path)?;
		assert_eq!(read, value);
		Ok(())
	}

	#[test]
	fn read_missing_file() {
		let err = read_json::<serde_json::Value>(Path::new("/nonexistent/file.json")).unwrap_err();
		assert_eq!(err.to_string(), "file /nonexistent/file.json not found");
	}

	#[test]
	fn read_invalid_json() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("broken.json");
		fs::write(&path, "{ nope")?;
		let err = read_json::<serde_json::Value>(&path).unwrap_err();
		assert!(err.to_string().starts_with("parsing JSON in"));
		Ok(())
	}
}
