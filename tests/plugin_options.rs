use accessor_modifier::{
    Error, OPTION_KEYS, PLUGIN_ID, PassConfig, PluginOptions, RewriteMode, Synthesis,
};
use pretty_assertions::assert_eq;

#[test]
fn test_defaults() {
    let options = PluginOptions::default();
    assert!(options.enabled);
    assert_eq!(options.pass, PassConfig::default());
    assert_eq!(options.pass.prefix, "Hello ");
    assert_eq!(options.pass.mode, RewriteMode::FieldRead);
    assert_eq!(options.pass.synthesis, Synthesis::StringBuilder);
    assert_eq!(options.pass.marker, None);
    assert_eq!(options.pass.builder_class, "StringBuilder");
}

#[test]
fn test_every_key_is_accepted() {
    let values = [
        ("enabled", "false"),
        ("prefix", "Hi "),
        ("mode", "return-value"),
        ("synthesis", "concatenation"),
        ("marker", "Greet"),
        ("builder-class", "TextBuffer"),
    ];
    assert_eq!(values.map(|(key, _)| key), OPTION_KEYS);

    let options = PluginOptions::from_pairs(values).unwrap();
    assert_eq!(
        options,
        PluginOptions {
            enabled: false,
            pass: PassConfig {
                prefix: "Hi ".into(),
                mode: RewriteMode::ReturnValue,
                synthesis: Synthesis::Concatenation,
                marker: Some("Greet".into()),
                builder_class: "TextBuffer".into(),
            },
        }
    );
}

#[test]
fn test_later_pairs_override_earlier_ones() {
    let options =
        PluginOptions::from_pairs([("marker", "Greet"), ("prefix", "A"), ("marker", ""), ("prefix", "B")])
            .unwrap();
    assert_eq!(options.pass.marker, None);
    assert_eq!(options.pass.prefix, "B");
}

#[test]
fn test_invalid_values() {
    assert_eq!(
        PluginOptions::from_pairs([("enabled", "yes")]),
        Err(Error::InvalidOption {
            key: "enabled".into(),
            value: "yes".into(),
            expected: "`true` or `false`",
        })
    );
    assert_eq!(
        PluginOptions::from_pairs([("synthesis", "template")]),
        Err(Error::InvalidOption {
            key: "synthesis".into(),
            value: "template".into(),
            expected: "`string-builder` or `concatenation`",
        })
    );
    assert_eq!(
        PluginOptions::from_pairs([("builder-class", "")]),
        Err(Error::InvalidOption {
            key: "builder-class".into(),
            value: "".into(),
            expected: "a class name",
        })
    );
}

#[test]
fn test_unknown_key() {
    let err = PluginOptions::from_pairs([("suffix", "!")]).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownOption {
            key: "suffix".into()
        }
    );
    assert_eq!(err.to_string(), "unknown option `suffix`");
}

#[test]
fn test_from_args_picks_own_options() {
    let prefix = format!("plugin:{}:prefix=Hey ", PLUGIN_ID);
    let mode = format!("plugin:{}:mode=return-value", PLUGIN_ID);
    let args = [
        "-Xverbose",
        prefix.as_str(),
        "plugin:org.example.other:prefix=ignored",
        mode.as_str(),
    ];

    let options = PluginOptions::from_args(args).unwrap();
    assert_eq!(options.pass.prefix, "Hey ");
    assert_eq!(options.pass.mode, RewriteMode::ReturnValue);
}

#[test]
fn test_from_args_ignores_plugins_sharing_id_prefix() {
    let extras = format!("plugin:{}-extras:foo=bar", PLUGIN_ID);
    let bare = format!("plugin:{}-extras", PLUGIN_ID);

    let options = PluginOptions::from_args([extras.as_str(), bare.as_str()]).unwrap();
    assert_eq!(options, PluginOptions::default());
}

#[test]
fn test_from_args_keeps_equals_in_value() {
    let arg = format!("plugin:{}:prefix=a=b", PLUGIN_ID);
    let options = PluginOptions::from_args([arg.as_str()]).unwrap();
    assert_eq!(options.pass.prefix, "a=b");
}

#[test]
fn test_from_args_rejects_malformed_option() {
    let arg = format!("plugin:{}:prefix", PLUGIN_ID);
    assert_eq!(
        PluginOptions::from_args([arg.as_str()]),
        Err(Error::MalformedOption { arg: arg.clone() })
    );
}
