//! Domain Services
//!
//! Pure business logic with no I/O dependencies.

mod placement;

pub use placement::{merge, Placement, WriteStrategy, SERVICE_WORKER_PATH};
