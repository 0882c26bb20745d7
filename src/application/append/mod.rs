//! Append Module
//!
//! Orchestrates one run: read the entry, place it, optionally bundle it.
//!
//! ## Structure
//!
//! - `options` - Invocation configuration (`AppendOptions`)
//! - `result` - Result type (`AppendResult`)
//! - `use_case` - Core use case logic (`AppendUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use append_sw::application::append::{AppendOptions, AppendUseCase};
//!
//! let use_case = AppendUseCase::new(LocalFs::new(), EsbuildBundler::default());
//! let result = use_case.execute(&AppendOptions::new("src/sw-extra.js"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{AppendOptions, DEFAULT_ENV_FILE};
pub use result::AppendResult;
pub use use_case::AppendUseCase;
