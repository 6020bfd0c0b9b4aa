//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::FrameworkConfig;
use crate::error::Result;
use crate::i18n::TranslationPath;
use crate::loader::{load_metadata, validate_metadata};
use crate::types::Locale;
use serde_json::{json, Value};
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let message = self.execute()?;
        self.output_message(&message);
        Ok(())
    }

    /// Run the command and return the message it prints
    fn execute(&self) -> Result<Value> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Validate { metadata } => self.validate(&config, metadata),
            Commands::Translate { metadata, locale } => {
                self.translate(&config, metadata, locale.as_deref())
            }
            Commands::Paths => self.paths(&config),
            Commands::Locales => Ok(self.locales()),
        }
    }

    /// Load framework configuration, falling back to defaults
    fn load_config(&self) -> Result<FrameworkConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                FrameworkConfig::from_file(path)
            }
            None => Ok(FrameworkConfig::default()),
        }
    }

    /// Validate a piece metadata file
    fn validate(&self, config: &FrameworkConfig, path: &Path) -> Result<Value> {
        let metadata = load_metadata(path)?;
        validate_metadata(&metadata, config.platform.minimum_release()?)?;

        Ok(json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Piece '{}' v{} is valid with {} actions and {} triggers",
                    metadata.name,
                    metadata.version,
                    metadata.actions.len(),
                    metadata.triggers.len()
                )
            }
        }))
    }

    /// Translate a piece metadata file
    fn translate(
        &self,
        config: &FrameworkConfig,
        path: &Path,
        locale: Option<&str>,
    ) -> Result<Value> {
        let locale = match locale {
            Some(code) => Some(code.parse::<Locale>()?),
            None => config.i18n.default_locale,
        };

        let metadata = load_metadata(path)?;
        let translator = config.translator()?;
        let translated = translator.translate_piece(&metadata, locale);

        Ok(json!({
            "type": "PIECE",
            "locale": locale.map(Locale::code),
            "piece": serde_json::to_value(translated.as_ref())?
        }))
    }

    /// List translation paths
    fn paths(&self, config: &FrameworkConfig) -> Result<Value> {
        let keys = config.i18n.translation_keys()?;
        let paths: Vec<String> = keys.paths().iter().map(TranslationPath::to_string).collect();

        Ok(json!({
            "type": "PATHS",
            "maxKeyLength": config.i18n.max_key_length,
            "paths": paths
        }))
    }

    /// List supported locales
    fn locales(&self) -> Value {
        let codes: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
        json!({
            "type": "LOCALES",
            "locales": codes
        })
    }

    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
