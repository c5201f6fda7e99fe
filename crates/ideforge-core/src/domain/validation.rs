use crate::domain::{
    capabilities,
    entities::project::ProjectConfiguration,
    error::DomainError,
    value_objects::{Ide, Platform},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across emitters.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_configuration(config: &ProjectConfiguration) -> Result<(), DomainError> {
        config.validate()
    }

    /// Check that `ide` can build for `platform`.
    ///
    /// Visual Studio needs at least one VS platform name for the target.
    /// The other families accept any platform.
    pub fn validate_platform(ide: Ide, platform: Platform) -> Result<(), DomainError> {
        let is_visual_studio = matches!(ide, Ide::Vs2005 | Ide::Vs2008 | Ide::Vs2010);
        if is_visual_studio && capabilities::vs_platforms(platform).is_empty() {
            return Err(DomainError::IncompatiblePlatform {
                ide: ide.to_string(),
                platform: platform.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_studio_rejects_platforms_without_vs_names() {
        assert!(DomainValidator::validate_platform(Ide::Vs2010, Platform::Windows).is_ok());
        assert!(DomainValidator::validate_platform(Ide::Vs2008, Platform::Ps3).is_ok());
        assert!(matches!(
            DomainValidator::validate_platform(Ide::Vs2005, Platform::Linux),
            Err(DomainError::IncompatiblePlatform { .. })
        ));
    }

    #[test]
    fn other_families_accept_any_platform() {
        assert!(DomainValidator::validate_platform(Ide::Xcode3, Platform::Windows).is_ok());
        assert!(DomainValidator::validate_platform(Ide::CodeWarrior, Platform::Mac).is_ok());
    }
}
