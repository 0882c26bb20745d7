//! Console event sink
//!
//! Turns use-case progress into info lines.

use append_sw::domain::ports::{AppendEvent, AppendEventSink};
use append_sw::WriteStrategy;

use crate::ui::output::Logger;

pub struct ConsoleEventSink<'a> {
    logger: &'a Logger,
}

impl<'a> ConsoleEventSink<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }
}

pub fn describe(event: &AppendEvent) -> Option<String> {
    match event {
        AppendEvent::Reading { entry } => Some(format!("Reading {}", entry.display())),
        AppendEvent::Placed {
            target,
            strategy: WriteStrategy::Append,
        } => Some(format!("Appended to {}", target.display())),
        AppendEvent::Placed {
            target,
            strategy: WriteStrategy::Overwrite,
        } => Some(format!("Wrote {}", target.display())),
        AppendEvent::Compiling { target, env } => {
            Some(format!("Compiling {} ({})", target.display(), env))
        }
        AppendEvent::CompileSkipped => Some("Skipping compilation".to_string()),
        AppendEvent::Completed { .. } => None,
    }
}

impl AppendEventSink for ConsoleEventSink<'_> {
    fn on_event(&self, event: AppendEvent) {
        if let Some(message) = describe(&event) {
            self.logger.info(&message);
        }
    }
}
