use anyhow::{Context, Result};
use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use futures::StreamExt;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tracing::{error, info, trace, warn};

/// Find Chrome/Chromium executable on the system with platform-specific search paths.
pub async fn find_browser_executable() -> Result<PathBuf> {
    // Environment variable overrides all other methods
    if let Ok(path) = std::env::var("CHROMIUM_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!(
                "Using browser from CHROMIUM_PATH environment variable: {}",
                path.display()
            );
            return Ok(path);
        }
        warn!(
            "CHROMIUM_PATH environment variable points to non-existent file: {}",
            path.display()
        );
    }

    let candidates: &[&str] = if cfg!(target_os = "windows") {
        &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files\Chromium\Application\chrome.exe",
        ]
    } else if cfg!(target_os = "macos") {
        &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "~/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "~/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/opt/homebrew/bin/chromium",
        ]
    } else {
        &[
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
            "/usr/local/bin/chromium",
            "/opt/google/chrome/chrome",
        ]
    };

    for candidate in candidates {
        let path = match candidate.strip_prefix("~/") {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => continue,
            },
            None => PathBuf::from(candidate),
        };

        if path.exists() {
            info!("Found browser at: {}", path.display());
            return Ok(path);
        }
    }

    if !cfg!(target_os = "windows") {
        for cmd in ["chromium", "chromium-browser", "google-chrome", "chrome"] {
            if let Ok(output) = Command::new("which").arg(cmd).output()
                && output.status.success()
            {
                let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path_str.is_empty() {
                    let path = PathBuf::from(path_str);
                    info!("Found browser using 'which' command: {}", path.display());
                    return Ok(path);
                }
            }
        }
    }

    warn!("No Chrome/Chromium executable found. Will download and use fetcher.");
    Err(anyhow::anyhow!("Chrome/Chromium executable not found"))
}

/// Downloads and manages Chromium browser if not found locally.
/// Returns a path to the downloaded executable.
pub async fn download_managed_browser() -> Result<PathBuf> {
    info!("Downloading managed Chromium browser...");

    let cache_dir = dirs::cache_dir()
        .map(|dir| dir.join("kodegen_vitals"))
        .unwrap_or_else(|| {
            let fallback = std::env::temp_dir().join("kodegen_vitals_cache");
            warn!(
                "Could not determine user cache directory, using temp directory fallback: {}",
                fallback.display()
            );
            fallback
        })
        .join("chromium");

    std::fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

    let fetcher = BrowserFetcher::new(
        BrowserFetcherOptions::builder()
            .with_path(&cache_dir)
            .build()
            .context("Failed to build fetcher options")?,
    );

    let revision_info = fetcher.fetch().await.context("Failed to fetch browser")?;

    info!(
        "Downloaded Chromium to: {}",
        revision_info.folder_path.display()
    );

    Ok(revision_info.executable_path)
}

/// A launched browser together with its CDP handler task
///
/// [`BrowserSession::shutdown`] must be awaited to close Chrome, stop the
/// handler and remove a temporary profile.
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    /// Set only when the profile directory was created for this session
    temp_profile: Option<PathBuf>,
}

impl BrowserSession {
    /// Find or download Chromium and launch it headless (or headed)
    ///
    /// # Arguments
    /// * `headless` - Whether to run browser in headless mode
    /// * `user_agent` - User-Agent override sent with every request
    /// * `chrome_data_dir` - Profile directory. If None, a unique temporary
    ///   profile is created and removed on shutdown.
    pub async fn launch(
        headless: bool,
        user_agent: &str,
        chrome_data_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let chrome_path = match find_browser_executable().await {
            Ok(path) => path,
            Err(_) => download_managed_browser().await?,
        };

        let (user_data_dir, temp_profile) = match chrome_data_dir {
            Some(dir) => (dir, None),
            None => {
                let dir = std::env::temp_dir().join(format!(
                    "kodegen_vitals_chrome_{}_{}",
                    std::process::id(),
                    uuid::Uuid::new_v4().simple()
                ));
                (dir.clone(), Some(dir))
            }
        };

        std::fs::create_dir_all(&user_data_dir)
            .context("Failed to create user data directory")?;

        let mut config_builder = BrowserConfigBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .window_size(1920, 1080)
            .user_data_dir(user_data_dir)
            .chrome_executable(chrome_path);

        if headless {
            config_builder = config_builder.headless_mode(HeadlessMode::default());
        } else {
            config_builder = config_builder.with_head();
        }

        config_builder = config_builder
            .arg(format!("--user-agent={user_agent}"))
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer")
            .arg("--mute-audio")
            .arg("--hide-scrollbars")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-extensions")
            .arg("--ignore-certificate-errors");

        let browser_config = config_builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;

        info!("Launching browser with config: {:?}", browser_config);
        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .context("Failed to launch browser")?;

        let handler = task::spawn(async move {
            while let Some(h) = handler.next().await {
                if let Err(e) = h {
                    let error_msg = e.to_string();

                    // Chrome emits CDP events chromiumoxide does not model.
                    // Reference: https://github.com/mattsse/chromiumoxide/issues/167
                    let is_benign_serialization_error = error_msg
                        .contains("data did not match any variant of untagged enum Message")
                        || error_msg.contains("Failed to deserialize WS response");

                    if is_benign_serialization_error {
                        trace!("Suppressed benign CDP serialization error: {}", error_msg);
                    } else {
                        error!("Browser handler error: {:?}", e);
                    }
                }
            }
            info!("Browser handler task completed");
        });

        Ok(Self {
            browser,
            handler,
            temp_profile,
        })
    }

    /// Open a blank page
    pub async fn new_page(&self) -> Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .context("Failed to create page")
    }

    /// Close Chrome, stop the handler task and remove a temporary profile
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        self.handler.abort();

        if let Some(path) = self.temp_profile.take() {
            if let Err(e) = tokio::fs::remove_dir_all(&path).await {
                warn!(
                    "Failed to remove temporary profile {}: {}",
                    path.display(),
                    e
                );
            } else {
                trace!("Removed temporary profile {}", path.display());
            }
        }
    }
}
