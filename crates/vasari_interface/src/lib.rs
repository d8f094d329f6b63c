//! Trait definitions for the Vasari backlog generation library.
//!
//! The seam between the pipeline and completion backends lives here, so
//! backend crates and the pipeline crate only meet through this interface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod driver;

pub use driver::VasariDriver;
