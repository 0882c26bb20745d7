//! Append Use Case
//!
//! Orchestrates one run:
//! 1. Read the entry file
//! 2. Place its content into the target (overwrite or append)
//! 3. Bundle the target, unless compilation is skipped
//! 4. Overwrite the target with the bundle
//!
//! The placement is computed before any I/O, so an entry without a file
//! name is a usage error even when the path exists.
//!
//! Each step runs only if the previous one succeeded. The first failure ends
//! the run; earlier writes are not rolled back.

use crate::domain::ports::{AppendEvent, AppendEventSink, Bundler, FileSystem, NoopEventSink};
use crate::domain::services::{Placement, WriteStrategy};
use crate::error::{AppendSwError, AppendSwResult};

use super::options::AppendOptions;
use super::result::AppendResult;

/// Append use case, parameterized by its ports
pub struct AppendUseCase<FS, B>
where
    FS: FileSystem,
    B: Bundler,
{
    file_system: FS,
    bundler: B,
}

impl<FS, B> AppendUseCase<FS, B>
where
    FS: FileSystem,
    B: Bundler,
{
    pub fn new(file_system: FS, bundler: B) -> Self {
        Self {
            file_system,
            bundler,
        }
    }

    pub fn bundler(&self) -> &B {
        &self.bundler
    }

    /// Execute the run silently
    pub fn execute(&self, options: &AppendOptions) -> AppendSwResult<AppendResult> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute the run, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &AppendOptions,
        events: &dyn AppendEventSink,
    ) -> AppendSwResult<AppendResult> {
        let placement = placement_for(options)?;

        events.on_event(AppendEvent::Reading {
            entry: options.entry.clone(),
        });
        let content = self.file_system.read(&options.entry)?;

        let created = !self.file_system.exists(&placement.target);
        let mut bytes_written = self.place(&placement, &content)?;
        events.on_event(AppendEvent::Placed {
            target: placement.target.clone(),
            strategy: placement.strategy,
        });

        let compiled = if options.skip_compile {
            events.on_event(AppendEvent::CompileSkipped);
            false
        } else {
            let config = options.build_config();
            events.on_event(AppendEvent::Compiling {
                target: placement.target.clone(),
                env: config.env,
            });
            let bundle = self.bundler.compile(&placement.target, &config)?;
            self.file_system.write(&placement.target, &bundle)?;
            bytes_written = bundle.len();
            true
        };

        events.on_event(AppendEvent::Completed {
            target: placement.target.clone(),
            compiled,
        });

        Ok(AppendResult {
            target: placement.target,
            strategy: placement.strategy,
            created,
            compiled,
            bytes_written,
        })
    }

    /// Write `content` to the placement target, returning the bytes written.
    ///
    /// Append reads the existing target first; a failed read stops here
    /// without writing.
    fn place(&self, placement: &Placement, content: &str) -> AppendSwResult<usize> {
        let existing = match placement.strategy {
            WriteStrategy::Append => Some(self.file_system.read(&placement.target)?),
            WriteStrategy::Overwrite => None,
        };

        let merged = placement.content_for(existing.as_deref(), content);
        self.file_system.write(&placement.target, &merged)?;
        Ok(merged.len())
    }
}

fn placement_for(options: &AppendOptions) -> AppendSwResult<Placement> {
    Placement::for_entry(options.mode, &options.entry).ok_or_else(|| AppendSwError::Usage {
        message: format!(
            "entry path '{}' does not name a file",
            options.entry.display()
        ),
    })
}
