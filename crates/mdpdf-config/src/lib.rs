//! Configuration of mdpdf: config files, CLI overrides, per-document front
//! matter and template lookup.
pub mod config;
pub mod error;
pub mod lookup;
pub mod overrides;
pub mod templates;

pub use config::{Config, ConfigLayer, DateLocale, PageFormat};
pub use error::ConfigError;
pub use lookup::{TemplateOrigin, TemplateRoot, TemplateSet};
pub use overrides::DocumentOverrides;
