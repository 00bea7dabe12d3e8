//! ConfigLoader: the single entry point that assembles sources in precedence order.

use crate::config::merge::merge_policy::builder_with_defaults;
use crate::config::sources::{environment, explicit_file, global_file};
use crate::config::SdbConfig;
use crate::error::AppError;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global file, then environment overrides.
    pub fn load() -> Result<SdbConfig, AppError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Defaults, then the given file, then environment overrides. The global file is
    /// skipped so an explicit file fully describes the session.
    pub fn load_from_file(path: &Path) -> Result<SdbConfig, AppError> {
        let builder = builder_with_defaults()?;
        let builder = explicit_file::add_to_builder(builder, path)?;
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// `load_from_file` when a path is given, `load` otherwise.
    pub fn load_with(path: Option<&Path>) -> Result<SdbConfig, AppError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::load(),
        }
    }
}
