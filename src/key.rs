// API key resolution. The key is looked up from three places in strict
// order: the `FOSSA_API_KEY` environment variable, the OS secrets store
// under the same name, and finally a masked prompt. An empty value at
// any stage counts as absent.

use anyhow::Result;
use dialoguer::Password;
use keyring::Entry;

pub const API_KEY_VAR: &str = "FOSSA_API_KEY";
const KEYRING_SERVICE: &str = "fossa-scan-cli";

/// Resolve the API key, falling back to an interactive masked prompt
/// when neither the environment nor the secrets store has one. Returns
/// `None` when the user submits an empty prompt; the caller is expected
/// to warn and skip any network call.
pub fn resolve() -> Result<Option<String>> {
    if let Some(key) = pick(env_key(), secrets_key()) {
        return Ok(Some(key));
    }
    let entered = Password::new()
        .with_prompt("FOSSA API key")
        .allow_empty_password(true)
        .interact()?;
    Ok(non_empty(entered))
}

fn env_key() -> Option<String> {
    std::env::var(API_KEY_VAR).ok().and_then(non_empty)
}

fn secrets_key() -> Option<String> {
    let entry = Entry::new(KEYRING_SERVICE, API_KEY_VAR).ok()?;
    entry.get_password().ok().and_then(non_empty)
}

/// Precedence between the two non-interactive sources: the environment
/// always wins when it has a value.
fn pick(env: Option<String>, secrets: Option<String>) -> Option<String> {
    env.or(secrets)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins_over_secrets() {
        assert_eq!(
            pick(Some("from-env".into()), Some("from-secrets".into())),
            Some("from-env".into())
        );
    }

    #[test]
    fn secrets_used_when_env_absent() {
        assert_eq!(
            pick(None, Some("from-secrets".into())),
            Some("from-secrets".into())
        );
    }

    #[test]
    fn both_absent_yields_none() {
        assert_eq!(pick(None, None), None);
    }

    #[test]
    fn empty_values_count_as_absent() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("abc".into()), Some("abc".into()));
    }

    #[test]
    fn env_lookup_ignores_empty_variable() {
        std::env::set_var(API_KEY_VAR, "");
        assert_eq!(env_key(), None);
        std::env::set_var(API_KEY_VAR, "abc");
        assert_eq!(env_key(), Some("abc".into()));
        std::env::remove_var(API_KEY_VAR);
    }
}
