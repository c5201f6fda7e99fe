pub mod catalog;
pub mod grouping;
pub mod identifier;
pub mod model;
pub mod project;
pub mod script;
pub mod source_entry;

pub use crate::domain::DomainError;
pub use catalog::{Catalog, CatalogBuilder};
pub use grouping::{GroupMap, GroupNode, GroupTree};
pub use identifier::{IdMode, IdentifiedEntry, Identifier, IdentifierResolver, SemanticKey};
pub use model::ProjectModel;
pub use project::{HasName, NoName, ProjectConfiguration, ProjectConfigurationBuilder};
pub use script::{Plan, PlannedTarget, ProjectScript, ScriptStep, SettingValue, SettingsPatch};
pub use source_entry::SourceEntry;
