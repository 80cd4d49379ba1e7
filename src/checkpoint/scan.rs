//! Checkpoint directory scanning.
//!
//! Experiments live under
//! `<root>/{ft,scr}_experiments/<experiment>/` and may contain a
//! `training_state.pt` file, a `best_model/` directory, and a `last_model/`
//! directory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{FumbleError, Result};

/// Default checkpoint root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "checkpoints";

pub const TRAINING_STATE: &str = "training_state.pt";
pub const BEST_MODEL: &str = "best_model";
pub const LAST_MODEL: &str = "last_model";

/// How a model was trained.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// Fine-tuned from pretrained weights
    Ft,
    /// Trained from scratch
    Scr,
}

impl ModelType {
    pub const ALL: [ModelType; 2] = [ModelType::Ft, ModelType::Scr];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Ft => "ft",
            ModelType::Scr => "scr",
        }
    }

    /// Directory name under the checkpoint root, e.g. `ft_experiments`.
    pub fn dir_name(&self) -> String {
        format!("{}_experiments", self.as_str())
    }

    /// Path of one experiment directory.
    pub fn experiment_path<P: AsRef<Path>>(&self, root: P, experiment: &str) -> PathBuf {
        root.as_ref().join(self.dir_name()).join(experiment)
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = FumbleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ft" => Ok(ModelType::Ft),
            "scr" => Ok(ModelType::Scr),
            other => Err(FumbleError::invalid_config(format!(
                "unknown model type {other:?}, expected ft or scr"
            ))),
        }
    }
}

/// Which checkpoint markers an experiment directory holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointStatus {
    pub name: String,
    pub model_type: ModelType,
    pub path: String,
    pub has_training_state: bool,
    pub has_best_model: bool,
    pub has_last_model: bool,
}

impl CheckpointStatus {
    /// Inspect one experiment directory.
    pub fn inspect<P: AsRef<Path>>(model_type: ModelType, name: &str, path: P) -> Self {
        let path = path.as_ref();
        CheckpointStatus {
            name: name.to_string(),
            model_type,
            path: path.display().to_string(),
            has_training_state: path.join(TRAINING_STATE).exists(),
            has_best_model: path.join(BEST_MODEL).exists(),
            has_last_model: path.join(LAST_MODEL).exists(),
        }
    }

    /// Names of the markers present, in fixed order.
    pub fn markers(&self) -> Vec<&'static str> {
        let mut markers = Vec::with_capacity(3);
        if self.has_training_state {
            markers.push("training_state");
        }
        if self.has_best_model {
            markers.push(BEST_MODEL);
        }
        if self.has_last_model {
            markers.push(LAST_MODEL);
        }
        markers
    }

    /// Whether training can be resumed from this directory.
    pub fn is_resumable(&self) -> bool {
        self.has_training_state
    }
}

/// Experiments found for one model type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTypeGroup {
    pub model_type: ModelType,
    /// Whether `<root>/<type>_experiments` exists at all.
    pub exists: bool,
    pub experiments: Vec<CheckpointStatus>,
}

/// Everything found under a checkpoint root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointListing {
    pub root: String,
    pub root_exists: bool,
    pub groups: Vec<ModelTypeGroup>,
}

impl CheckpointListing {
    /// Iterate over every experiment across groups.
    pub fn experiments(&self) -> impl Iterator<Item = &CheckpointStatus> {
        self.groups.iter().flat_map(|g| g.experiments.iter())
    }
}

fn scan_group(root: &Path, model_type: ModelType) -> Result<ModelTypeGroup> {
    let dir = root.join(model_type.dir_name());
    if !dir.is_dir() {
        return Ok(ModelTypeGroup {
            model_type,
            exists: false,
            experiments: Vec::new(),
        });
    }

    let mut experiments = Vec::new();
    let entries = fs::read_dir(&dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        log::debug!("found experiment {model_type}/{name}");
        experiments.push(CheckpointStatus::inspect(model_type, &name, &path));
    }
    experiments.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(ModelTypeGroup {
        model_type,
        exists: true,
        experiments,
    })
}

/// List experiments under `root`, fine-tuned first, then from-scratch.
///
/// A missing root or type directory is reported in the listing, not as an
/// error.
pub fn list_checkpoints<P: AsRef<Path>>(root: P) -> Result<CheckpointListing> {
    let root = root.as_ref();
    let root_exists = root.is_dir();

    let groups = if root_exists {
        ModelType::ALL
            .iter()
            .map(|&model_type| scan_group(root, model_type))
            .collect::<Result<Vec<_>>>()?
    } else {
        log::warn!("checkpoint root {} does not exist", root.display());
        Vec::new()
    };

    Ok(CheckpointListing {
        root: root.display().to_string(),
        root_exists,
        groups,
    })
}
