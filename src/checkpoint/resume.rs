//! Planning how to resume a training run from its checkpoint.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checkpoint::scan::{ModelType, TRAINING_STATE};

/// Default experiment name.
pub const DEFAULT_EXPERIMENT: &str = "ft_experiment";

/// Outcome of looking for a resumable checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResumePlan {
    /// The experiment directory does not exist.
    NotFound { path: String },
    /// The directory exists but holds no `training_state.pt`.
    MissingState { path: String },
    /// Training can resume with either command.
    Ready {
        path: String,
        command: String,
        auto_resume_command: String,
    },
}

impl ResumePlan {
    pub fn is_ready(&self) -> bool {
        matches!(self, ResumePlan::Ready { .. })
    }
}

fn finetune_flag(model_type: ModelType) -> &'static str {
    match model_type {
        ModelType::Ft => "--finetune",
        ModelType::Scr => "",
    }
}

/// Multi-line command resuming from an explicit checkpoint path.
pub fn resume_command(model_type: ModelType, checkpoint_path: &str, experiment: &str) -> String {
    format!(
        "python3 train_t5.py \\\n    {} \\\n    --resume_from_checkpoint {checkpoint_path} \\\n    --experiment_name {experiment} \\\n    --learning_rate 1e-4 \\\n    --max_n_epochs 15 \\\n    --patience_epochs 5 \\\n    --batch_size 16 \\\n    --test_batch_size 16",
        finetune_flag(model_type)
    )
}

/// One-line command letting the trainer locate its own checkpoint.
pub fn auto_resume_command(model_type: ModelType, experiment: &str) -> String {
    format!(
        "python3 train_t5.py {} --auto_resume --experiment_name {experiment} --learning_rate 1e-4 --max_n_epochs 15 --patience_epochs 5",
        finetune_flag(model_type)
    )
}

/// Check `<root>/<type>_experiments/<experiment>` and plan a resume.
pub fn plan_resume<P: AsRef<Path>>(root: P, model_type: ModelType, experiment: &str) -> ResumePlan {
    let path = model_type.experiment_path(root, experiment);
    let display = path.display().to_string();

    if !path.exists() {
        log::debug!("no checkpoint at {display}");
        return ResumePlan::NotFound { path: display };
    }
    if !path.join(TRAINING_STATE).exists() {
        log::debug!("{display} has no {TRAINING_STATE}");
        return ResumePlan::MissingState { path: display };
    }

    ResumePlan::Ready {
        command: resume_command(model_type, &display, experiment),
        auto_resume_command: auto_resume_command(model_type, experiment),
        path: display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_command_ft() {
        let cmd = resume_command(ModelType::Ft, "checkpoints/ft_experiments/e1", "e1");
        let lines: Vec<&str> = cmd.lines().collect();
        assert_eq!(lines[0], "python3 train_t5.py \\");
        assert_eq!(lines[1], "    --finetune \\");
        assert_eq!(
            lines[2],
            "    --resume_from_checkpoint checkpoints/ft_experiments/e1 \\"
        );
        assert_eq!(lines[3], "    --experiment_name e1 \\");
        assert_eq!(lines.last(), Some(&"    --test_batch_size 16"));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_scratch_has_no_finetune_flag() {
        assert!(!resume_command(ModelType::Scr, "p", "e").contains("--finetune"));
        assert_eq!(
            auto_resume_command(ModelType::Scr, "e"),
            "python3 train_t5.py  --auto_resume --experiment_name e --learning_rate 1e-4 --max_n_epochs 15 --patience_epochs 5"
        );
        assert!(auto_resume_command(ModelType::Ft, "e").starts_with("python3 train_t5.py --finetune --auto_resume"));
    }

    #[test]
    fn test_plan_resume_outcomes() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();

        assert!(matches!(
            plan_resume(root, ModelType::Ft, "e1"),
            ResumePlan::NotFound { .. }
        ));

        let exp = ModelType::Ft.experiment_path(root, "e1");
        std::fs::create_dir_all(exp.join("best_model")).unwrap();
        assert!(matches!(
            plan_resume(root, ModelType::Ft, "e1"),
            ResumePlan::MissingState { .. }
        ));

        std::fs::write(exp.join(TRAINING_STATE), b"state").unwrap();
        let plan = plan_resume(root, ModelType::Ft, "e1");
        assert!(plan.is_ready());
        if let ResumePlan::Ready { command, .. } = plan {
            assert!(command.contains(&format!("--resume_from_checkpoint {}", exp.display())));
        }
    }
}
