//! Plugin options as handed over by the host compiler.
//!
//! Hosts pass options as `key=value` pairs, usually prefixed with the plugin
//! id on the command line (`plugin:<id>:prefix=Hi `).

use crate::{Error, PLUGIN_ID};
use accessor_core::{PassConfig, RewriteMode, Synthesis};

/// Keys understood by [`PluginOptions::from_pairs`].
pub const OPTION_KEYS: [&str; 6] = [
    "enabled",
    "prefix",
    "mode",
    "synthesis",
    "marker",
    "builder-class",
];

/// Options of one compilation.
///
/// # Example
///
/// ```
/// use accessor_modifier::{PluginOptions, Synthesis};
///
/// let options = PluginOptions::from_pairs([("synthesis", "concatenation"), ("prefix", "Hi ")]).unwrap();
/// assert_eq!(options.pass.synthesis, Synthesis::Concatenation);
/// assert_eq!(options.pass.prefix, "Hi ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOptions {
    /// Whether the pass runs at all.
    ///
    /// Default: true
    pub enabled: bool,

    pub pass: PassConfig,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            pass: PassConfig::default(),
        }
    }
}

impl PluginOptions {
    /// Build options from `key=value` pairs, later keys overriding earlier ones.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self, Error> {
        let mut options = Self::default();
        for (key, value) in pairs {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Build options from command line arguments.
    ///
    /// Arguments addressed to other plugins are ignored.
    pub fn from_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Self, Error> {
        let mut options = Self::default();
        for arg in args {
            let Some(rest) = arg.strip_prefix("plugin:") else {
                continue;
            };
            let (id, option) = rest.split_once(':').unwrap_or((rest, ""));
            if id != PLUGIN_ID {
                continue;
            }
            let (key, value) = option
                .split_once('=')
                .ok_or_else(|| Error::MalformedOption { arg: arg.into() })?;
            options.set(key, value)?;
        }
        Ok(options)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let invalid = |expected| Error::InvalidOption {
            key: key.into(),
            value: value.into(),
            expected,
        };

        match key {
            "enabled" => {
                self.enabled = match value {
                    "true" => true,
                    "false" => false,
                    _ => return Err(invalid("`true` or `false`")),
                };
            }
            "prefix" => self.pass.prefix = value.into(),
            "mode" => {
                self.pass.mode = match value {
                    "field-read" => RewriteMode::FieldRead,
                    "return-value" => RewriteMode::ReturnValue,
                    _ => return Err(invalid("`field-read` or `return-value`")),
                };
            }
            "synthesis" => {
                self.pass.synthesis = match value {
                    "string-builder" => Synthesis::StringBuilder,
                    "concatenation" => Synthesis::Concatenation,
                    _ => return Err(invalid("`string-builder` or `concatenation`")),
                };
            }
            "marker" if value.is_empty() => self.pass.marker = None,
            "marker" => self.pass.marker = Some(value.into()),
            "builder-class" if value.is_empty() => return Err(invalid("a class name")),
            "builder-class" => self.pass.builder_class = value.into(),
            _ => return Err(Error::UnknownOption { key: key.into() }),
        }
        Ok(())
    }
}
