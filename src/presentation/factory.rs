//! Use Case Factory
//!
//! Creates the use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::append::AppendUseCase;
use crate::config::Settings;
use crate::infrastructure::{EsbuildBundler, LocalFs};

/// Type alias for the concrete AppendUseCase with all dependencies
pub type ConcreteAppendUseCase = AppendUseCase<LocalFs, EsbuildBundler>;

/// Create an append use case backed by the local disk and the configured bundler
pub fn create_append_use_case(settings: &Settings) -> ConcreteAppendUseCase {
    let file_system = LocalFs::new();
    let bundler = EsbuildBundler::new(settings.bundler_program.clone());

    AppendUseCase::new(file_system, bundler)
}
