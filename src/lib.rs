//! SoundCue - notification sounds for debugger events
//!
//! This crate plays a short notification sound when a debugger breakpoint
//! is hit, gated by two boolean settings, and declares the settings schema
//! a host merges into its own registry.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Sound identifiers, settings, configuration schema, and errors
//! - **Application**: The notification sound player and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rodio playback, TOML settings file)
//! - **CLI**: Command-line host, argument parsing, and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
