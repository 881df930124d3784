//! Resolves access-token settings that name an external command.
//!
//! A token setting of the form `< command args...` runs the named command
//! with the shop domain appended as its final argument and uses the
//! command's standard output as the token. Anything else is taken verbatim.
//! This lets tokens live in password managers or short scripts instead of
//! shell history.

use crate::config::ShopDomain;
use crate::error::TokenError;
use tokio::process::Command;
use tracing::debug;

/// Resolves an access token setting.
///
/// If `setting` starts with `<` (after optional leading whitespace), the
/// remainder is run as a command with the shop's full domain as its sole
/// extra argument, and the command's stdout becomes the token with exactly
/// one trailing newline removed. Otherwise `setting` is returned unchanged.
///
/// # Errors
///
/// Returns a [`TokenError`] when the command cannot be spawned, exits with a
/// non-zero status, or prints non-UTF-8 output.
///
/// # Example
///
/// ```rust,no_run
/// use sdt::auth::resolve_token;
/// use sdt::config::ShopDomain;
///
/// # async fn example() -> Result<(), sdt::error::TokenError> {
/// let shop = ShopDomain::new("my-store").unwrap();
/// let token = resolve_token(&shop, "< pass show shopify").await?;
/// # Ok(())
/// # }
/// ```
pub async fn resolve_token(shop: &ShopDomain, setting: &str) -> Result<String, TokenError> {
    let Some(command_line) = parse_command(setting) else {
        return Ok(setting.to_string());
    };

    debug!(command = command_line, "resolving access token via command");

    let mut parts = command_line.split_whitespace();
    // parse_command guarantees at least one token
    let program = parts.next().unwrap_or_default();

    let output = Command::new(program)
        .args(parts)
        .arg(shop.as_ref())
        .output()
        .await
        .map_err(|source| TokenError::CommandFailed {
            command: command_line.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(TokenError::CommandExited {
            command: command_line.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| TokenError::InvalidOutput {
        command: command_line.to_string(),
    })?;

    Ok(strip_one_newline(&stdout).to_string())
}

/// Extracts the command line from a `< command` setting, or `None` when the
/// setting is a literal token.
fn parse_command(setting: &str) -> Option<&str> {
    let rest = setting.trim_start().strip_prefix('<')?;
    let command = rest.trim_start();
    (!command.is_empty()).then_some(command)
}

fn strip_one_newline(output: &str) -> &str {
    output.strip_suffix('\n').unwrap_or(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_settings_pass_through() {
        assert_eq!(parse_command("shpat_abc123"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  token-with-leading-space"), None);
    }

    #[test]
    fn test_command_settings_are_detected() {
        assert_eq!(parse_command("< get-token.sh"), Some("get-token.sh"));
        assert_eq!(parse_command("  <   pass show shopify"), Some("pass show shopify"));
        assert_eq!(parse_command("<cmd"), Some("cmd"));
    }

    #[test]
    fn test_bare_angle_bracket_is_not_a_command() {
        assert_eq!(parse_command("<"), None);
        assert_eq!(parse_command("<   "), None);
    }

    #[test]
    fn test_strips_exactly_one_trailing_newline() {
        assert_eq!(strip_one_newline("token\n"), "token");
        assert_eq!(strip_one_newline("token\n\n"), "token\n");
        assert_eq!(strip_one_newline("token"), "token");
    }

    #[tokio::test]
    async fn test_literal_token_resolves_to_itself() {
        let shop = ShopDomain::new("my-store").unwrap();
        let token = resolve_token(&shop, "shpat_abc123").await.unwrap();
        assert_eq!(token, "shpat_abc123");
    }

    #[tokio::test]
    async fn test_command_receives_shop_domain() {
        let shop = ShopDomain::new("my-store").unwrap();
        let token = resolve_token(&shop, "< echo").await.unwrap();
        assert_eq!(token, "my-store.myshopify.com");
    }

    #[tokio::test]
    async fn test_missing_command_fails() {
        let shop = ShopDomain::new("my-store").unwrap();
        let result = resolve_token(&shop, "< definitely-not-a-real-command-xyz").await;
        assert!(matches!(result, Err(TokenError::CommandFailed { .. })));
    }

    #[tokio::test]
    async fn test_failing_command_reports_status() {
        let shop = ShopDomain::new("my-store").unwrap();
        let result = resolve_token(&shop, "< false").await;
        assert!(matches!(result, Err(TokenError::CommandExited { .. })));
    }
}
