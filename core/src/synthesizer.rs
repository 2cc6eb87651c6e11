//! Construction of the prefixed replacement expressions.
//!
//! Both strategies produce a single expression of type `String` that can
//! stand wherever the original expression stood:
//!
//! ```text
//! StringBuilder:   { val $tmp0 = StringBuilder()
//!                    $tmp0.append("Hello ")
//!                    $tmp0.append(<original>)
//!                    $tmp0.toString() }
//!
//! Concatenation:   "Hello " + <original>
//! ```
//!
//! A `null` operand renders as the text `null` under both strategies.

use crate::library::LibraryOps;
use accessor_types::{Expr, Stmt};
use ecow::eco_format;

#[derive(Debug, Clone)]
enum Strategy {
    Builder(LibraryOps),
    Concat,
}

/// Builds replacement subtrees for one pass.
///
/// Temporaries are numbered per synthesizer, so names never collide within
/// the unit the pass rewrites.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    strategy: Strategy,
    next_temp: usize,
}

impl Synthesizer {
    /// Synthesize string builder call sequences with the resolved `ops`.
    pub fn builder(ops: LibraryOps) -> Self {
        Self {
            strategy: Strategy::Builder(ops),
            next_temp: 0,
        }
    }

    /// Synthesize concatenation nodes.
    pub fn concatenation() -> Self {
        Self {
            strategy: Strategy::Concat,
            next_temp: 0,
        }
    }

    /// Wrap `original` so it evaluates to `prefix` followed by its value.
    pub fn synthesize(&mut self, prefix: &str, original: Expr) -> Expr {
        match &self.strategy {
            Strategy::Concat => Expr::concat(vec![Expr::string(prefix), original]),
            Strategy::Builder(ops) => {
                let name = eco_format!("$tmp{}", self.next_temp);
                self.next_temp += 1;

                let temp_ty = ops.construct.return_type().clone();
                let temp = || Some(Expr::get_value(name.clone(), temp_ty.clone()));

                let statements = vec![
                    Stmt::local(name.clone(), ops.construct.call(None, vec![])),
                    Stmt::expr(ops.append.call(temp(), vec![Expr::string(prefix)])),
                    Stmt::expr(ops.append.call(temp(), vec![original])),
                ];
                Expr::block(statements, ops.stringify.call(temp(), vec![]))
            }
        }
    }
}

#[cfg(test)]
#[path = "synthesizer_test.rs"]
mod synthesizer_test;
