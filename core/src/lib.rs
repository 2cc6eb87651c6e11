//! Accessor lowering pass over the typed tree of `accessor-types`.
//!
//! The pass finds property getters returning `String` or `String?` and
//! prefixes the value they produce, either through a string builder call
//! sequence or through a concatenation node.
//!
//! # Example
//!
//! ```
//! use accessor_core::{AccessorTransformer, LogSink, PassConfig, Symbols};
//! use accessor_types::{ClassDecl, PropertyDecl, Ty, Unit};
//!
//! let mut unit = Unit::new("Greeting.kt").with_decl(
//!     ClassDecl::new("Greeting").with_decl(PropertyDecl::backed("name", Ty::string(), false)),
//! );
//!
//! let symbols = Symbols::with_builtins();
//! let mut pass = AccessorTransformer::new(&symbols, PassConfig::default(), LogSink::current()).unwrap();
//! let report = pass.transform_unit(&mut unit);
//! assert_eq!(report.rewritten.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod library;
pub mod matcher;
pub mod sink;
pub mod synthesizer;
pub mod transformer;

pub use config::{DEFAULT_BUILDER_CLASS, DEFAULT_PREFIX, PassConfig, RewriteMode, Synthesis};
pub use error::{ConfigError, Operation};
pub use library::{LibraryOps, OpHandle, Symbols};
pub use matcher::{Matcher, SkipReason, Verdict, is_target};
pub use sink::LogSink;
pub use synthesizer::Synthesizer;
pub use transformer::{AccessorTransformer, TransformReport};
