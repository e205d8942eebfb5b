use crate::domain::{
    entities::{ProjectConfig, Template},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ProjectConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        if template.content.trim().is_empty() {
            return Err(DomainError::EmptyTemplate {
                template_id: template.id.to_string(),
            });
        }
        Ok(())
    }
}
