use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

use fitrec_core::registry::ArtifactPaths;

pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve the data directory holding the precomputed artifact files,
    /// preferring an explicit override to the platform default.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "fitrec")
                .context("Could not determine home directory")?
                .data_dir()
                .to_path_buf(),
        };

        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        Ok(Config { data_dir })
    }

    #[must_use]
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            exercises_csv: self.data_dir.join("exercises.csv"),
            meals_csv: self.data_dir.join("meals.csv"),
            similarity_json: self.data_dir.join("meal_similarity.json"),
        }
    }
}
