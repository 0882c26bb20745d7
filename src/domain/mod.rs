//! Domain Layer
//!
//! Pure placement rules and the ports the orchestrator talks through.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Mode, BuildEnv, BuildConfig)
//! - `services/` - Pure placement logic (target path, write strategy, merge)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, Bundler, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Placement is a total function of mode and entry name
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
