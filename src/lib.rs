//! accessor-modifier - prefix the values returned by string property getters
//!
//! # Overview
//!
//! The compiler plugin core rewrites the bodies of property getters typed
//! `String` or `String?` so that they return `"Hello "` followed by their
//! original value. The host compiler hands over each translation unit as a
//! typed tree ([`Unit`]); the plugin rewrites it in place.
//!
//! # Quick Start
//!
//! ```
//! use accessor_modifier::{AccessorModifier, ClassDecl, PluginOptions, PropertyDecl, Ty, Unit};
//!
//! let mut unit = Unit::new("Person.kt").with_decl(
//!     ClassDecl::new("Person")
//!         .with_decl(PropertyDecl::backed("name", Ty::string(), true))
//!         .with_decl(PropertyDecl::backed("age", Ty::int(), true)),
//! );
//!
//! let plugin = AccessorModifier::new(PluginOptions::default());
//! let report = plugin.generate(&mut unit).unwrap();
//! assert_eq!(report.rewritten.len(), 1);
//! assert_eq!(report.rewritten[0], "<get-name>");
//! ```
//!
//! # Logging
//!
//! Passes log through `tracing`. Unless a sink is supplied with
//! [`AccessorModifier::with_sink`], events go to stderr, filtered by the
//! `ACCESSOR_MODIFIER_LOG` environment variable (default `warn`).

mod error;
mod error_renderer;
mod options;

pub use error::Error;
pub use error_renderer::{render_error, render_error_to_string, render_error_to_string_no_color};
pub use options::{OPTION_KEYS, PluginOptions};

// Re-export the pass and the tree it works on
pub use accessor_core::{
    AccessorTransformer, ConfigError, LibraryOps, LogSink, Operation, PassConfig, RewriteMode,
    Symbols, Synthesis, TransformReport,
};
pub use accessor_core::evaluator;
pub use accessor_types::{
    Annotation, ClassDecl, Decl, Expr, FieldDecl, FunctionDecl, Literal, Param, PropertyDecl, Stmt,
    Ty, Unit,
};

use once_cell::sync::OnceCell;
use tracing::Dispatch;

/// Id the host compiler knows the plugin by.
pub const PLUGIN_ID: &str = "dev.nhachicha.accessor-modifier-compiler-plugin";

/// Coordinates of the published plugin artifact.
pub const ARTIFACT_GROUP: &str = "dev.nhachicha";
pub const ARTIFACT_NAME: &str = "accessor-modifier-compiler-plugin";
pub const ARTIFACT_SHADED_NAME: &str = "accessor-modifier-compiler-plugin-shaded";
pub const ARTIFACT_VERSION: &str = "0.0.1-SNAPSHOT";

/// Environment variable holding the default sink's filter directives.
pub const LOG_ENV: &str = "ACCESSOR_MODIFIER_LOG";

/// The process-wide sink used when the host does not supply one.
///
/// Built once, on first use.
pub fn default_sink() -> LogSink {
    static DISPATCH: OnceCell<Dispatch> = OnceCell::new();

    let dispatch = DISPATCH.get_or_init(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();
        Dispatch::new(subscriber)
    });
    LogSink::new(dispatch.clone())
}

/// Entry point the host calls once per translation unit.
#[derive(Debug, Clone)]
pub struct AccessorModifier {
    options: PluginOptions,
    symbols: Symbols,
    sink: LogSink,
}

impl AccessorModifier {
    /// A plugin resolving against the standard library classes and logging
    /// to [`default_sink`].
    pub fn new(options: PluginOptions) -> Self {
        Self {
            options,
            symbols: Symbols::with_builtins(),
            sink: default_sink(),
        }
    }

    /// Resolve library operations against `symbols` instead.
    pub fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Run one pass over `unit`.
    ///
    /// Fails before touching the unit if the library classes do not have the
    /// shape the configured synthesis needs. A disabled plugin leaves the unit
    /// alone and reports nothing.
    pub fn generate(&self, unit: &mut Unit) -> Result<TransformReport, Error> {
        if !self.options.enabled {
            self.sink
                .in_scope(|| tracing::debug!(unit = %unit.name, "accessor-modifier disabled"));
            return Ok(TransformReport::default());
        }

        let mut pass =
            AccessorTransformer::new(&self.symbols, self.options.pass.clone(), self.sink.clone())?;
        Ok(pass.transform_unit(unit))
    }
}
