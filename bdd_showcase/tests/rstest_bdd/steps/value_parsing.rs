//! Placeholder normalisation shared by the step modules.

use anyhow::{Result, anyhow};

/// Strips one layer of matching single or double quotes from a value.
pub(crate) fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Reads an `active` / `inactive` placeholder.
pub(crate) fn parse_activity(value: &str) -> Result<bool> {
    match unquote(value) {
        "active" => Ok(true),
        "inactive" => Ok(false),
        other => Err(anyhow!(
            "unexpected activity '{other}'; expected 'active' or 'inactive'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_activity, unquote};
    use rstest::rstest;

    #[rstest]
    #[case("\"alice\"", "alice")]
    #[case("'alice'", "alice")]
    #[case("  alice ", "alice")]
    #[case("\"alice'", "\"alice'")]
    fn strips_matching_quotes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unquote(raw), expected);
    }

    #[rstest]
    fn rejects_unknown_activity() {
        assert!(parse_activity("dormant").is_err());
        assert!(matches!(parse_activity("\"inactive\""), Ok(false)));
    }
}
