use mapmesh_core::{Category, PolygonFile};
use predicates::str;
use pretty_assertions::assert_eq;
use std::fs;
use test_utilities::*;

#[test]
fn build_scene() {
	let (dir, out_dir) = get_temp_output("scene");
	mapmesh_cmd()
		.args(["build", path_str(&get_testdata("map.json")), path_str(&out_dir)])
		.assert()
		.success()
		.stdout(str::contains("sidewalk"));

	for category in Category::ALL {
		let model = out_dir.join(category.model_name());
		assert!(model.join("model.config").exists(), "{category} model missing");
		let obj = fs::read_to_string(model.join(format!("meshes/{}.obj", category.model_name()))).unwrap();
		assert!(obj.lines().any(|line| line.starts_with("f ")));
	}
	let world = fs::read_to_string(out_dir.join("world.sdf")).unwrap();
	assert!(world.contains("<include>"));

	// every building overlapping a road has lost that area
	let buildings = PolygonFile::from_path(&out_dir.join("buildings.json")).unwrap();
	assert_eq!(buildings.len(), 3);
	drop(dir);
}

#[test]
fn staged_pipeline_matches_roads() {
	let (_dir, roads) = get_temp_output("roads.json");
	let merged = roads.with_file_name("merged.json");
	let clipped = roads.with_file_name("clipped.json");
	let points = roads.with_file_name("points.json");

	mapmesh_cmd()
		.args(["roads", path_str(&get_testdata("map.json")), path_str(&roads)])
		.assert()
		.success();
	mapmesh_cmd()
		.args(["merge", "--by-id", path_str(&roads), path_str(&merged)])
		.assert()
		.success();
	assert_eq!(
		PolygonFile::from_path(&roads).unwrap().len(),
		PolygonFile::from_path(&merged).unwrap().len()
	);

	mapmesh_cmd()
		.args([
			"clip",
			path_str(&get_testdata("buildings.json")),
			path_str(&roads),
			"-o",
			path_str(&clipped),
		])
		.assert()
		.success();
	mapmesh_cmd()
		.args(["sample", "-r", "2", path_str(&clipped), path_str(&points)])
		.assert()
		.success();
	assert!(fs::read_to_string(&points).unwrap().starts_with('['));
}

#[test]
fn missing_input_fails() {
	let (_dir, out_dir) = get_temp_output("scene");
	mapmesh_cmd()
		.args(["build", "does_not_exist.json", path_str(&out_dir)])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("not found"));
	assert!(!out_dir.exists());
}

#[test]
fn invalid_config_fails() {
	let (dir, config) = get_temp_output("config.yml");
	fs::write(&config, "roads:\n  lane_wdth: 3.0\n").unwrap();
	mapmesh_cmd()
		.args([
			"--config",
			path_str(&config),
			"build",
			path_str(&get_testdata("map.json")),
			path_str(dir.path()),
		])
		.assert()
		.failure()
		.stderr(str::contains("lane_wdth"));
}
