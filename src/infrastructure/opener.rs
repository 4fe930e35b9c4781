use crate::domain::navigator::Navigator;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};
use url::Url;

// Program followed by its leading arguments.
#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &[&str] = &["open"];
// The empty argument is the window title `start` expects before the target.
#[cfg(target_os = "windows")]
const DEFAULT_OPENER: &[&str] = &["cmd", "/C", "start", ""];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_OPENER: &[&str] = &["xdg-open"];

/// Opens catalog URLs with an external program, e.g. the desktop browser.
#[derive(Debug, Clone)]
pub struct SystemNavigator {
    base: Option<Url>,
    program: String,
    args: Vec<String>,
}

impl SystemNavigator {
    pub fn new(base_url: Option<&str>, opener: Option<&str>) -> Result<Self> {
        let base = base_url
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid base_url: {raw}")))
            .transpose()?;

        let parts: Vec<String> = match opener {
            Some(command) => command.split_whitespace().map(str::to_string).collect(),
            None => DEFAULT_OPENER.iter().map(|part| (*part).to_string()).collect(),
        };
        let mut parts = parts.into_iter();
        let program = parts
            .next()
            .ok_or_else(|| anyhow!("opener command is empty"))?;
        let args = parts.collect();

        Ok(Self {
            base,
            program,
            args,
        })
    }

    /// Resolves a relative catalog URL against the base URL, if any.
    pub fn resolve(&self, url: &str) -> Result<String> {
        match &self.base {
            Some(base) => Ok(base
                .join(url)
                .with_context(|| format!("cannot resolve {url} against {base}"))?
                .to_string()),
            None => Ok(url.to_string()),
        }
    }
}

#[async_trait]
impl Navigator for SystemNavigator {
    async fn navigate(&self, url: &str) -> Result<String> {
        let target = self.resolve(url)?;
        debug!(program = %self.program, %target, "launching opener");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .with_context(|| format!("failed to run {}", self.program))?;

        if !status.success() {
            bail!("{} exited with {status}", self.program);
        }

        info!(%target, "opened");
        Ok(target)
    }
}
