use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;

const FALLBACK_USER_NAME: &str = "Developer";

/// A source that may know the invoking developer's display name.
#[async_trait]
pub trait UserNameProvider: Send + Sync {
    /// `Ok(None)` means "no answer here, try the next source".
    async fn user_name(&self) -> Result<Option<String>>;
}

/// Reads `user.name` from the local git configuration. Only answers when the
/// working directory is inside a checkout with a configured identity.
pub struct GitConfigProvider;

#[async_trait]
impl UserNameProvider for GitConfigProvider {
    async fn user_name(&self) -> Result<Option<String>> {
        let Ok(bin) = which::which("git") else {
            return Ok(None);
        };
        let output = Command::new(bin)
            .arg("config")
            .arg("user.name")
            .output()
            .await?;
        if !output.status.success() {
            return Ok(None);
        }
        Ok(non_empty(String::from_utf8_lossy(&output.stdout).trim()))
    }
}

/// Asks the GitHub CLI for the authenticated account's login handle.
pub struct GhCliProvider;

#[async_trait]
impl UserNameProvider for GhCliProvider {
    async fn user_name(&self) -> Result<Option<String>> {
        let Ok(bin) = which::which("gh") else {
            return Ok(None);
        };
        let output = Command::new(bin)
            .arg("api")
            .arg("user")
            .arg("--jq")
            .arg(".login")
            .output()
            .await?;
        if !output.status.success() {
            return Ok(None);
        }
        Ok(non_empty(String::from_utf8_lossy(&output.stdout).trim()))
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Default lookup chain: local git identity first, then the GitHub CLI.
pub fn default_providers() -> Vec<Box<dyn UserNameProvider>> {
    vec![Box::new(GitConfigProvider), Box::new(GhCliProvider)]
}

/// Walk the providers in order and return the first non-empty answer.
/// Lookup failures are absorbed rather than propagated; when every source
/// comes up empty the fixed placeholder is returned.
pub async fn resolve_user_name(providers: &[Box<dyn UserNameProvider>]) -> String {
    for provider in providers {
        match provider.user_name().await {
            Ok(Some(name)) => return name,
            Ok(None) | Err(_) => continue,
        }
    }
    FALLBACK_USER_NAME.to_string()
}
