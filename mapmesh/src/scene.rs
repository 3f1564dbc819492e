//! Scene descriptors for simulators: one model directory per mesh, plus a world that
//! includes them.
//!
//! ```text
//! <out>/<model>/model.config
//! <out>/<model>/model.sdf
//! <out>/<model>/meshes/<model>.obj
//! ```

use anyhow::{Context, Result};
use mapmesh_core::Category;
use mapmesh_derive::context;
use mapmesh_geometry::mesh::{Mesh, write_obj};
use std::{
	fs::{self, File},
	io::{BufWriter, Write},
	path::{Path, PathBuf},
};

const SDF_VERSION: &str = "1.8";

/// Surface colour of a model as RGBA.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
	pub diffuse: [f64; 4],
	pub ambient: [f64; 4],
}

impl Material {
	pub fn for_category(category: Category) -> Material {
		match category {
			Category::Road => Material {
				diffuse: [0.6, 0.6, 0.6, 1.0],
				ambient: [0.4, 0.4, 0.4, 1.0],
			},
			Category::Building => Material {
				diffuse: [0.6, 0.6, 0.65, 1.0],
				ambient: [0.4, 0.4, 0.45, 1.0],
			},
			Category::Sidewalk => Material {
				diffuse: [0.6, 0.6, 0.6, 1.0],
				ambient: [0.5, 0.5, 0.5, 1.0],
			},
		}
	}
}

fn rgba(color: [f64; 4]) -> String {
	color.map(|c| c.to_string()).join(" ")
}

/// Writes the mesh, `model.sdf` and `model.config` of one model and returns its directory.
#[context("Failed to write model '{}' to {}", name, out_dir.display())]
pub fn write_model(out_dir: &Path, name: &str, category: Category, mesh: &Mesh) -> Result<PathBuf> {
	let model_dir = out_dir.join(name);
	let mesh_rel = format!("meshes/{name}.obj");
	let mesh_path = model_dir.join(&mesh_rel);
	if let Some(parent) = mesh_path.parent() {
		fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
	}

	let mut writer = BufWriter::new(File::create(&mesh_path)?);
	write_obj(mesh, &mut writer)?;
	writer.flush()?;

	fs::write(
		model_dir.join("model.sdf"),
		model_sdf(name, &mesh_rel, Material::for_category(category)),
	)?;
	fs::write(model_dir.join("model.config"), model_config(name, category))?;

	log::info!(
		"wrote model {name}: {} vertices, {} faces",
		mesh.vertex_count(),
		mesh.face_count()
	);
	Ok(model_dir)
}

pub fn model_sdf(name: &str, mesh_rel: &str, material: Material) -> String {
	let uri = format!("model://{name}/{mesh_rel}");
	format!(
		r#"<?xml version="1.0"?>
<sdf version="{SDF_VERSION}">
  <model name="{name}">
    <static>true</static>
    <link name="link">
      <visual name="visual">
        <geometry>
          <mesh><uri>{uri}</uri></mesh>
        </geometry>
        <material>
          <diffuse>{diffuse}</diffuse>
          <ambient>{ambient}</ambient>
        </material>
      </visual>
      <collision name="collision">
        <geometry>
          <mesh><uri>{uri}</uri></mesh>
        </geometry>
      </collision>
    </link>
  </model>
</sdf>
"#,
		diffuse = rgba(material.diffuse),
		ambient = rgba(material.ambient),
	)
}

pub fn model_config(name: &str, category: Category) -> String {
	let description = match category {
		Category::Road => "Road surfaces generated from map data",
		Category::Building => "Extruded buildings generated from map data",
		Category::Sidewalk => "Sidewalks generated from map data",
	};
	format!(
		r#"<?xml version="1.0"?>
<model>
  <name>{name}</name>
  <version>1.0</version>
  <sdf version="{SDF_VERSION}">model.sdf</sdf>
  <author><name>mapmesh</name></author>
  <description>{description}</description>
</model>
"#
	)
}

/// A world with a ground plane, a sun and an include for every model.
pub fn world_sdf(world_name: &str, models: &[String]) -> String {
	let includes: String = models
		.iter()
		.map(|model| format!("    <include>\n      <uri>model://{model}</uri>\n    </include>\n"))
		.collect();
	format!(
		r#"<?xml version="1.0"?>
<sdf version="{SDF_VERSION}">
  <world name="{world_name}">
    <gravity>0 0 -9.81</gravity>
    <light name="sun" type="directional">
      <pose>0 0 50 0 0 0</pose>
      <diffuse>1 1 1 1</diffuse>
      <direction>-0.5 0.5 -1</direction>
    </light>
{includes}    <model name="ground_plane">
      <static>true</static>
      <link name="link">
        <collision name="collision">
          <geometry>
            <plane><normal>0 0 1</normal><size>2000 2000</size></plane>
          </geometry>
        </collision>
        <visual name="visual">
          <geometry>
            <plane><normal>0 0 1</normal><size>2000 2000</size></plane>
          </geometry>
          <material>
            <diffuse>0.2 0.2 0.2 1</diffuse>
            <ambient>0.1 0.1 0.1 1</ambient>
          </material>
        </visual>
      </link>
    </model>
  </world>
</sdf>
"#
	)
}
