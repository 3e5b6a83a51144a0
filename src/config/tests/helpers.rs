//! Builds a [`StorefrontConfig`] from hand-written configuration sources.
//!
//! Each [`Source`] stands for one place the storefront reads settings from:
//! the built-in defaults, `storefront.toml`, `STOREFRONT_*` variables or the
//! command line. Sources are merged in the order given.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::StorefrontConfig;

/// Origin of one configuration layer.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Pushes `value` onto the composer as a layer from `source`.
pub fn push_source(composer: &mut MergeComposer, source: Source, value: Value) {
    match source {
        Source::Defaults => composer.push_defaults(value),
        Source::File => composer.push_file(value, None),
        Source::Environment => composer.push_environment(value),
        Source::Cli => composer.push_cli(value),
    }
}

/// Merges `sources` in order into a storefront configuration.
pub fn storefront_config(sources: &[(Source, Value)]) -> StorefrontConfig {
    let mut composer = MergeComposer::new();
    for (source, value) in sources {
        push_source(&mut composer, *source, value.clone());
    }
    StorefrontConfig::merge_from_layers(composer.layers())
        .expect("storefront layers should merge")
}
