pub use aligned::Aligned;
pub use cell::{Cell, Direction, Directions};
pub use error::{Error, Result};
pub use matrix::{AlignmentMatrix, AlignmentSeed, TraceStep, Traceback, Variant};
pub use options::Options;

mod aligned;
mod cell;
mod engine;
mod error;
pub mod matrix;
pub mod nw;
mod options;
pub mod scoring;
pub mod select;
pub mod sw;
