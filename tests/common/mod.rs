//! Common test utilities for kvconf integration tests
//!
//! Provides a shared sample registry, sample config text, and a static user
//! table so tests never touch the host user database.

#![allow(dead_code)]

use std::sync::Arc;

use kvconf::users::{StaticUsers, UserIdentity};
use kvconf::{
    Config, ConfigNode, FloatOption, IntOption, PathListOption, StringOption, UserOption,
};

/// Sample config text matching the fixture registry
pub const SAMPLE_CONF: &str = "\
# sample configuration
; both comment styles in use

key_a=Alternate Value
key_b=27
";

/// A fixed user table: root (uid 0) and one ordinary user
pub fn user_table() -> Arc<StaticUsers> {
    Arc::new(
        StaticUsers::new()
            .with_user(UserIdentity {
                uid: 0,
                gid: 0,
                name: "root".into(),
                display_name: "System Administrator".into(),
                home_dir: "/root".into(),
            })
            .with_user(UserIdentity {
                uid: 1000,
                gid: 1000,
                name: "alice".into(),
                display_name: "Alice Example".into(),
                home_dir: "/home/alice".into(),
            }),
    )
}

/// Initialize test logging; safe to call repeatedly
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Registry with one node of every kind, defaults untouched
pub fn sample_config() -> Config {
    init_logging();
    let mut config = Config::new();
    config.add("key_a", StringOption::new("default 1"));
    config.add("key_b", IntOption::new(2));
    config.add("ratio", FloatOption::new(0.5));
    config.add(
        "search_path",
        PathListOption::with_separator(vec!["/usr/bin".into()], ':'),
    );
    config.add("run_as", UserOption::with_directory("", user_table()));
    config
}

/// Assert that every node in `config` still reports its default
pub fn assert_all_default(config: &Config) {
    for key in ["key_a", "key_b", "ratio", "search_path", "run_as"] {
        assert!(
            config.get(key).unwrap().is_default(),
            "{key} unexpectedly non-default",
        );
    }
}
