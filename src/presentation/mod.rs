//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates the dispatcher with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use sitetask::presentation::factory;
//!
//! let dispatcher = factory::create_dispatcher(&config, &root, false);
//! let report = dispatcher.execute(Operation::Build, &options, &sink)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_dispatcher, create_toolchain, ConcreteDispatcher};
