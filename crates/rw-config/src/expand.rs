//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Variable referenced by a config value but missing from the environment.
struct UnsetVar(String);

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// Only the braced form is expanded; a bare `$VAR` is kept verbatim so
/// paths and URLs containing `$` survive untouched. An unterminated `${`
/// is kept verbatim too.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_braced(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand a single `${...}` token.
fn expand_braced(token: &str, field: &str) -> Result<String, ConfigError> {
    let lookup = |name: &str| match std::env::var(name) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(name.to_owned())),
    };

    match shellexpand::env_with_context(token, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(err) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.cause.0),
        }),
    }
}
