// src/infrastructure/browser.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Shows rendered HTML in the system browser through a temporary file.
#[derive(Debug, Default)]
pub struct BrowserLauncher {
    // Keep last temp dir alive to prevent deletion
    temp_dir: Option<TempDir>,
}

impl BrowserLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_temp_file(&mut self, slug: &str, html: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("notewall-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join(format!("{slug}.html"));

        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(html.as_bytes())
            .context("Failed to write content to temporary file")?;

        debug!(?file_path, "Wrote rendered note");
        self.temp_dir = Some(temp_dir);
        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        // Keep the temp directory alive while the browser loads the file
        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}
