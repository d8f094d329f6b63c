//! Prompt rendering, response parsing, and generation orchestration.
//!
//! [`GenerationPipeline`] wires the pure stages around an injected
//! [`vasari_interface::VasariDriver`]: [`renderer`] turns a request into a
//! prompt, the driver produces raw text, and [`parser`] turns that text
//! into ordered items. [`TaskMatrix`] fan-out runs the persona ×
//! integration product on a bounded worker pool.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod batch;
pub mod parser;
mod pipeline;
pub mod renderer;

pub use batch::{BatchOptions, TaskKey, TaskMatrix};
pub use pipeline::GenerationPipeline;
