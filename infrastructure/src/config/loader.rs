//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["textnext.toml", ".textnext.toml"];
const ENV_PREFIX: &str = "TEXTNEXT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TEXTNEXT_*` environment variables (`TEXTNEXT_GEMINI__BASE_URL`, ...)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./textnext.toml` or `./.textnext.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/textnext/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::figment(global.as_deref(), project.as_deref(), config_path.map(PathBuf::as_path))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            debug!("Loading global config: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            debug!("Loading project config: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            debug!("Loading config: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load a `.env` file from the working directory, if present.
    ///
    /// Variables already set in the environment win. Returns the file path
    /// that was loaded.
    pub fn load_dotenv() -> Option<PathBuf> {
        match dotenv::dotenv() {
            Ok(path) => {
                debug!("Loaded environment from {}", path.display());
                Some(path)
            }
            Err(e) => {
                debug!("No .env file loaded: {}", e);
                None
            }
        }
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/textnext/config.toml if set,
    /// otherwise falls back to ~/.config/textnext/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("textnext").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Variables: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./textnext.toml or ./.textnext.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("textnext"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(
            &dir,
            "project.toml",
            "[gemini]\nmodels = [\"gemini-pro\"]\nverify_model = false\n",
        );
        let explicit = write_toml(
            &dir,
            "explicit.toml",
            "[gemini]\nmodels = [\"gemini-1.5-flash\"]\n",
        );

        let config: FileConfig = ConfigLoader::figment(None, Some(&project), Some(&explicit))
            .extract()
            .unwrap();

        assert_eq!(config.gemini.models, vec!["gemini-1.5-flash".to_string()]);
        // Untouched keys come from the lower layer
        assert!(!config.gemini.verify_model);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_toml(&dir, "bad.toml", "[gemini\nmodels = ");
        let result: Result<FileConfig, _> = ConfigLoader::figment(None, None, Some(&path)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("explicit.toml", "[gemini]\nbase_url = \"https://a.example\"\n")?;
            jail.set_env("TEXTNEXT_GEMINI__BASE_URL", "http://localhost:9999");

            let explicit = PathBuf::from("explicit.toml");
            let config: FileConfig = ConfigLoader::figment(None, None, Some(&explicit)).extract()?;
            assert_eq!(config.gemini.base_url, "http://localhost:9999");
            Ok(())
        });
    }
}
