//! Environment layer of the configuration loader.
//!
//! Kept in its own test binary: the variables set here would otherwise leak
//! into the `load()` calls of other tests running in parallel.

use ideaforge_rate_limit::IdeaforgeConfig;
use std::io::Write;
use tempfile::Builder;

const PERMITS_VAR: &str = "IDEAFORGE__RATE_LIMIT__PERMITS_PER_MINUTE";
const MAX_TOKENS_VAR: &str = "IDEAFORGE__ANTHROPIC__MAX_TOKENS";

#[test]
fn test_environment_overrides_files() -> anyhow::Result<()> {
    // SAFETY: the only test in this binary, so no other thread reads the
    // environment concurrently.
    unsafe {
        std::env::set_var(PERMITS_VAR, "9");
        std::env::set_var(MAX_TOKENS_VAR, "77");
    }

    let from_env = IdeaforgeConfig::load();

    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        temp_file,
        r#"
[anthropic]
max_tokens = 500
temperature = 0.1

[rate_limit]
permits_per_minute = 4
"#
    )?;
    let with_file = IdeaforgeConfig::load_with_override(Some(temp_file.path()));

    unsafe {
        std::env::remove_var(PERMITS_VAR);
        std::env::remove_var(MAX_TOKENS_VAR);
    }

    let from_env = from_env?;
    assert_eq!(from_env.rate_limit.permits_per_minute, 9);
    assert_eq!(from_env.anthropic.max_tokens, 77);

    let with_file = with_file?;
    assert_eq!(with_file.rate_limit.permits_per_minute, 9);
    assert_eq!(with_file.anthropic.max_tokens, 77);
    // File values the environment does not name still apply
    assert_eq!(with_file.anthropic.temperature, 0.1);

    let unset = IdeaforgeConfig::load()?;
    assert_eq!(unset.rate_limit.permits_per_minute, 5);
    assert_eq!(unset.anthropic.max_tokens, 1024);
    Ok(())
}
