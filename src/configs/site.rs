/// Deployment-level settings for the site shell.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Path prefix the site is served under, empty at the domain root.
    pub path_prefix: String,
    /// Local-storage key holding the theme preference.
    pub theme_storage_key: String,
    /// Preference used when nothing is persisted yet.
    pub default_dark: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            path_prefix: String::new(),
            theme_storage_key: "ganes.dev-theme".to_string(),
            default_dark: false,
        }
    }
}

impl SiteConfig {
    /// The landing-page path: prefix plus a trailing slash.
    pub fn root_path(&self) -> String {
        format!("{}/", self.path_prefix)
    }

    /// Resolve the deployment config. Native builds honor `PATH_PREFIX` and
    /// `THEME_STORAGE_KEY` overrides; wasm builds ship the defaults.
    pub fn resolve() -> Self {
        let mut config = Self::default();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(prefix) = std::env::var("PATH_PREFIX") {
                config.path_prefix = prefix.trim_end_matches('/').to_string();
            }
            if let Ok(key) = std::env::var("THEME_STORAGE_KEY") {
                log::info!("using theme storage key override: {}", key);
                config.theme_storage_key = key;
            }
        }
        config
    }
}
