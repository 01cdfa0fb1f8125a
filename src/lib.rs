/// Handles argument parsing and the top-level driver.
pub mod cli;

/// Clipboard access with graceful degradation.
pub mod clipboard;

/// Constants used throughout stencil.
pub mod constants;

/// The template expansion engine.
pub mod engine;

/// Defines custom error types.
pub mod error;

/// A set of helpers for reading inputs and opening outputs.
pub mod ioutils;

/// Matches input documents to output destinations.
pub mod matching;
