//! Vertex/fragment shader sources loaded from disk at startup
//!
//! Binding contract shared with the pipeline:
//! - group 0, binding 0: camera uniform `{ projection, view }`
//! - group 1, binding 0: `model` matrix (dynamic offset per draw)
//! - group 2, binding 0/1: sprite texture and sampler
//! - vertex inputs: location 0 `position`, location 1 `tex_coord`

use std::path::{Path, PathBuf};

use crate::AssetError;

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Default shader pair under `assets/shaders/`
    pub fn default_paths() -> (PathBuf, PathBuf) {
        (
            crate::asset_path("shaders/vertex_textured.wgsl"),
            crate::asset_path("shaders/fragment_textured.wgsl"),
        )
    }

    pub fn load(vertex_path: &Path, fragment_path: &Path) -> Result<Self, AssetError> {
        Ok(Self {
            vertex: read_source(vertex_path)?,
            fragment: read_source(fragment_path)?,
        })
    }

    pub fn create_modules(
        &self,
        device: &wgpu::Device,
    ) -> (wgpu::ShaderModule, wgpu::ShaderModule) {
        let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vertex_textured"),
            source: wgpu::ShaderSource::Wgsl(self.vertex.as_str().into()),
        });
        let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fragment_textured"),
            source: wgpu::ShaderSource::Wgsl(self.fragment.as_str().into()),
        });
        (vertex, fragment)
    }
}

fn read_source(path: &Path) -> Result<String, AssetError> {
    let source = std::fs::read_to_string(path).map_err(|source| AssetError::Shader {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded shader {}", path.display());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_shaders_load() {
        let (vs, fs) = ShaderSources::default_paths();
        let sources = ShaderSources::load(&vs, &fs).expect("bundled shaders");
        assert!(sources.vertex.contains(VERTEX_ENTRY));
        assert!(sources.fragment.contains(FRAGMENT_ENTRY));
        for name in ["projection", "view", "model", "position", "tex_coord"] {
            assert!(sources.vertex.contains(name), "vertex shader lacks {name}");
        }
    }

    #[test]
    fn test_missing_shader_is_an_error() {
        let missing = Path::new("does/not/exist.wgsl");
        let err = ShaderSources::load(missing, missing).unwrap_err();
        assert!(matches!(err, AssetError::Shader { .. }));
        assert!(err.to_string().contains("exist.wgsl"));
    }
}
