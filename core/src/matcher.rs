//! Selection of the getters a pass rewrites.

use crate::config::PassConfig;
use accessor_types::{FunctionDecl, Literal};
use ecow::EcoString;

/// Marker argument that overrides the prefix for one getter.
const PREFIX_ARG: &str = "prefix";

/// Check whether a function has the shape of a rewrite target.
///
/// A target is a property accessor that is a getter and declares `String`
/// or `String?` as its return type.
pub fn is_target(function: &FunctionDecl) -> bool {
    function.is_property_accessor()
        && function.is_getter()
        && (function.return_type.is_string() || function.return_type.is_nullable_string())
}

/// Outcome of offering a function to the [`Matcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Rewrite the function, prepending `prefix`.
    Target { prefix: EcoString },

    /// Leave the function untouched.
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Not a `String`/`String?` getter.
    Shape,

    /// A marker is required and the getter does not carry it.
    Unmarked,

    /// The marker carries arguments other than a single string `prefix`.
    MalformedMarker,
}

/// Classifies functions for one pass.
#[derive(Debug, Clone)]
pub struct Matcher {
    prefix: EcoString,
    marker: Option<EcoString>,
}

impl Matcher {
    pub fn new(config: &PassConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            marker: config.marker.clone(),
        }
    }

    pub fn classify(&self, function: &FunctionDecl) -> Verdict {
        if !is_target(function) {
            return Verdict::Skip(SkipReason::Shape);
        }

        let Some(marker) = &self.marker else {
            return Verdict::Target {
                prefix: self.prefix.clone(),
            };
        };

        let mut markers = function
            .annotations
            .iter()
            .filter(|annotation| annotation.name == *marker);

        let (Some(annotation), None) = (markers.next(), markers.next()) else {
            // Absent, or repeated.
            return match function.annotation(marker) {
                None => Verdict::Skip(SkipReason::Unmarked),
                Some(_) => Verdict::Skip(SkipReason::MalformedMarker),
            };
        };

        match annotation.args.as_slice() {
            [] => Verdict::Target {
                prefix: self.prefix.clone(),
            },
            [(name, Literal::Str(prefix))] if name.as_str() == PREFIX_ARG => Verdict::Target {
                prefix: prefix.clone(),
            },
            _ => Verdict::Skip(SkipReason::MalformedMarker),
        }
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
