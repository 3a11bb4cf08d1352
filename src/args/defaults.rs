pub(crate) const DEFAULT_USER_AGENT: &str = concat!("ulta/", env!("CARGO_PKG_VERSION"));

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["ulta.toml", "ulta.json"];
