//! Run domain.
//!
//! - [`entities::Run`]: one assistant pass over a thread
//! - [`status::RunStatus`]: the service-defined run lifecycle
//! - [`step::RunStep`]: read-only sub-records of a run

pub mod entities;
pub mod status;
pub mod step;
