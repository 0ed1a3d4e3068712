//! Scribe generates and maintains the README document of the sage
//! summarizer project. It renders a built-in Markdown template through a
//! template engine and can synchronize version markers in an existing
//! README with the version declared in Cargo.toml.

/// Command-line interface module for the scribe application
pub mod cli;

/// Common constants used throughout the application
pub mod constants;

/// Document rendering and persistence
pub mod emitter;

/// Error types and handling for the scribe application
pub mod error;

/// Template rendering engine
pub mod renderer;

/// The built-in README template and its render context
pub mod template;

/// Version marker synchronization against the package manifest
pub mod version;
