use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Failure while substituting `{{ env.VAR }}` placeholders
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// Variable is unset and no default was given
    #[error("environment variable not found: `{0}`")]
    Missing(String),
    /// Placeholder is not scoped with `env.`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Group 1: the scoped key, group 2: optional default("...") value
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// `{{ env.VAR | default("x") }}` substitutes `x` when `VAR` is unset.
/// Comment lines are copied verbatim so commented-out secrets need not be
/// defined.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut output = input
        .lines()
        .map(expand_line)
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, ExpandError> {
    if line.trim_start().starts_with('#') {
        return Ok(line.to_owned());
    }

    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for captures in placeholder().captures_iter(line) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        expanded.push_str(&line[cursor..whole.start()]);
        expanded.push_str(&resolve(&captures)?);
        cursor = whole.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}

fn resolve(captures: &Captures<'_>) -> Result<String, ExpandError> {
    let key = captures.get(1).map_or("", |m| m.as_str());
    let default = captures.get(2).map(|m| m.as_str());

    let var_name = match key.split_once('.') {
        Some(("env", name)) if !name.is_empty() && !name.contains('.') => name,
        _ => return Err(ExpandError::UnsupportedScope(key.to_owned())),
    };

    std::env::var(var_name)
        .ok()
        .or_else(|| default.map(str::to_owned))
        .ok_or_else(|| ExpandError::Missing(var_name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "route_prefix = \"/api\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn api_key_is_substituted() {
        temp_env::with_var("MAGGID_TEST_KEY", Some("sk-123"), || {
            let result = expand_env("api_key = \"{{ env.MAGGID_TEST_KEY }}\"").unwrap();
            assert_eq!(result, "api_key = \"sk-123\"");
        });
    }

    #[test]
    fn several_placeholders_on_separate_lines() {
        let vars = [("MAGGID_HOST", Some("0.0.0.0")), ("MAGGID_PORT", Some("8888"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("a = \"{{ env.MAGGID_HOST }}:{{env.MAGGID_PORT}}\"\nb = 1").unwrap();
            assert_eq!(result, "a = \"0.0.0.0:8888\"\nb = 1");
        });
    }

    #[test]
    fn unset_variable_is_an_error() {
        temp_env::with_var_unset("MAGGID_ABSENT", || {
            let err = expand_env("api_key = \"{{ env.MAGGID_ABSENT }}\"").unwrap_err();
            assert_eq!(err, ExpandError::Missing("MAGGID_ABSENT".to_owned()));
        });
    }

    #[test]
    fn other_scopes_are_rejected() {
        let err = expand_env("key = \"{{ secrets.KEY }}\"").unwrap_err();
        assert_eq!(err, ExpandError::UnsupportedScope("secrets.KEY".to_owned()));
    }

    #[test]
    fn comments_are_not_expanded() {
        temp_env::with_var_unset("MAGGID_ABSENT", || {
            let input = "  # api_key = \"{{ env.MAGGID_ABSENT }}\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }

    #[test]
    fn default_applies_when_unset() {
        temp_env::with_var_unset("MAGGID_OPTIONAL", || {
            let result = expand_env("api_key = \"{{ env.MAGGID_OPTIONAL | default(\"\") }}\"").unwrap();
            assert_eq!(result, "api_key = \"\"");
        });
    }

    #[test]
    fn set_variable_beats_default() {
        temp_env::with_var("MAGGID_OPTIONAL", Some("real"), || {
            let result = expand_env("api_key = \"{{ env.MAGGID_OPTIONAL | default(\"fallback\") }}\"").unwrap();
            assert_eq!(result, "api_key = \"real\"");
        });
    }
}
