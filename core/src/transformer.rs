//! The accessor lowering pass.
//!
//! One [`AccessorTransformer`] is built per translation unit. Construction
//! resolves the library operations the synthesis needs and fails fast if the
//! library does not have the expected shape. Running the pass then walks the
//! unit, offers every function to the matcher, and rewrites the bodies of
//! the targets in place.
//!
//! The rewrite is not idempotent: running a second pass over its own output
//! prefixes the value again. Hosts run it exactly once per compilation.

use crate::{
    config::{PassConfig, RewriteMode, Synthesis},
    error::ConfigError,
    library::{LibraryOps, Symbols},
    matcher::{Matcher, SkipReason, Verdict},
    sink::LogSink,
    synthesizer::Synthesizer,
};
use accessor_types::{FunctionDecl, NodeMut, Stmt, Unit, Walk, walk, walk_stmts};
use ecow::EcoString;
use tracing::{debug, debug_span, trace};

/// What a pass did to a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Names of the functions whose body changed, in walk order.
    ///
    /// Targets with nothing to replace (external getters, computed getters
    /// in field-read mode) are not listed.
    pub rewritten: Vec<EcoString>,

    /// Number of functions offered to the matcher.
    pub inspected: usize,

    /// Number of nodes replaced across all rewritten bodies.
    pub replacements: usize,
}

impl TransformReport {
    /// Number of inspected functions that were left untouched.
    pub fn skipped(&self) -> usize {
        self.inspected - self.rewritten.len()
    }
}

/// Rewrites string getters of a unit.
#[derive(Debug)]
pub struct AccessorTransformer {
    mode: RewriteMode,
    matcher: Matcher,
    synthesizer: Synthesizer,
    sink: LogSink,
}

impl AccessorTransformer {
    /// Build a pass, resolving library operations from `symbols`.
    ///
    /// Operations are only resolved for [`Synthesis::StringBuilder`].
    pub fn new(symbols: &Symbols, config: PassConfig, sink: LogSink) -> Result<Self, ConfigError> {
        let synthesizer = match config.synthesis {
            Synthesis::StringBuilder => {
                Synthesizer::builder(LibraryOps::resolve(symbols, &config.builder_class)?)
            }
            Synthesis::Concatenation => Synthesizer::concatenation(),
        };

        Ok(Self::with_synthesizer(synthesizer, &config, sink))
    }

    /// Build a pass around operations resolved earlier.
    ///
    /// Lets a host resolve once and share the handles between passes running
    /// on different units. `config.synthesis` and `config.builder_class` are
    /// ignored; the pass always uses the string builder.
    pub fn with_ops(ops: LibraryOps, config: PassConfig, sink: LogSink) -> Self {
        Self::with_synthesizer(Synthesizer::builder(ops), &config, sink)
    }

    fn with_synthesizer(synthesizer: Synthesizer, config: &PassConfig, sink: LogSink) -> Self {
        Self {
            mode: config.mode,
            matcher: Matcher::new(config),
            synthesizer,
            sink,
        }
    }

    /// Rewrite every target getter of `unit` in place.
    pub fn transform_unit(&mut self, unit: &mut Unit) -> TransformReport {
        let sink = self.sink.clone();
        sink.in_scope(|| {
            let span = debug_span!("accessor_pass", unit = %unit.name, mode = ?self.mode);
            let _enter = span.enter();

            let mut report = TransformReport::default();
            walk(unit, |node| {
                if let NodeMut::Function(function) = node {
                    report.inspected += 1;
                    self.offer(function, &mut report);
                }
                Walk::Continue
            });

            debug!(
                rewritten = report.rewritten.len(),
                inspected = report.inspected,
                "accessor pass finished"
            );
            report
        })
    }

    fn offer(&mut self, function: &mut FunctionDecl, report: &mut TransformReport) {
        match self.matcher.classify(function) {
            Verdict::Target { prefix } => {
                let replaced = self.rewrite_body(function, &prefix);
                if replaced == 0 {
                    debug!(function = %function.name, "target has nothing to rewrite");
                    return;
                }
                debug!(function = %function.name, replaced, "rewrote accessor");
                report.rewritten.push(function.name.clone());
                report.replacements += replaced;
            }
            Verdict::Skip(SkipReason::MalformedMarker) => {
                debug!(
                    function = %function.name,
                    "skipping accessor with malformed marker arguments"
                );
            }
            Verdict::Skip(reason) => {
                trace!(function = %function.name, ?reason, "not a target");
            }
        }
    }

    /// Replace the target nodes of `function`'s body, returning how many.
    ///
    /// Nested declarations are left for the outer walk to offer separately,
    /// and synthesized subtrees are never revisited.
    fn rewrite_body(&mut self, function: &mut FunctionDecl, prefix: &str) -> usize {
        let Some(body) = function.body.as_mut() else {
            return 0;
        };

        let mode = self.mode;
        let synthesizer = &mut self.synthesizer;
        let mut replaced = 0;

        walk_stmts(body, |node| match node {
            NodeMut::Expr(expr) if mode == RewriteMode::FieldRead && expr.is_field_read() => {
                let original = expr.take();
                *expr = synthesizer.synthesize(prefix, original);
                replaced += 1;
                Walk::Skip
            }
            NodeMut::Stmt(Stmt::Return(value)) if mode == RewriteMode::ReturnValue => {
                let original = value.take();
                *value = synthesizer.synthesize(prefix, original);
                replaced += 1;
                Walk::Skip
            }
            NodeMut::Class(_) | NodeMut::Property(_) | NodeMut::Field(_) | NodeMut::Function(_) => {
                Walk::Skip
            }
            NodeMut::Stmt(_) | NodeMut::Expr(_) => Walk::Continue,
        });

        replaced
    }
}

#[cfg(test)]
#[path = "transformer_test.rs"]
mod transformer_test;
