//! Canonicalization engine — pure `&str -> String` mappings of free-text
//! hardware and technology labels onto a closed vocabulary.
//!
//! Every function is deterministic and stateless. Blank input maps to a fixed
//! placeholder (`"Unknown"`, or `"None"` for upscaling); values no rule
//! recognises pass through rather than failing.

pub mod cpu;
pub mod gpu;
pub mod upscaling;
pub mod verdict;

pub use cpu::canonicalize_cpu;
pub use gpu::canonicalize_gpu;
pub use upscaling::canonicalize_upscaling;
pub use verdict::canonicalize_verdict;
