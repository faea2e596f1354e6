use crate::core::cli_syntax::{PREFIX_ANIMAL_NAME, PREFIX_ANIMAL_TYPE, PREFIX_AVAILABILITY};
use crate::core::tokenizer::{ArgumentMultimap, Prefix};
use crate::domain::model::MESSAGE_AVAILABILITY_REQUIRED;
use crate::utils::error::{BookError, Result};

/// 任一 trigger 前綴有值時，required 前綴也必須有值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRule {
    triggers: Vec<Prefix>,
    required: Prefix,
    message: String,
}

impl DependencyRule {
    pub fn new(triggers: &[Prefix], required: Prefix, message: impl Into<String>) -> Self {
        Self {
            triggers: triggers.to_vec(),
            required,
            message: message.into(),
        }
    }

    pub fn is_satisfied(&self, args: &ArgumentMultimap) -> bool {
        let triggered = self.triggers.iter().any(|prefix| args.is_present(*prefix));
        !triggered || args.is_present(self.required)
    }

    pub fn check(&self, args: &ArgumentMultimap) -> Result<()> {
        if self.is_satisfied(args) {
            return Ok(());
        }

        tracing::debug!(
            "Dependency rule failed: {:?} requires {}",
            self.triggers,
            self.required
        );
        Err(BookError::MissingDependency {
            message: self.message.clone(),
        })
    }
}

pub fn availability_rule() -> DependencyRule {
    DependencyRule::new(
        &[PREFIX_ANIMAL_TYPE, PREFIX_ANIMAL_NAME],
        PREFIX_AVAILABILITY,
        MESSAGE_AVAILABILITY_REQUIRED,
    )
}
