use std::path::{Path, PathBuf};

use chrono::Local;
use strsim::levenshtein;

use crate::{
    cli::{
        commands,
        errors::{CliError, CommandError},
        io as cli_io,
        output::{self, OutputPreferences},
        registry::CommandRegistry,
    },
    config::{Config, ConfigManager},
    domain::ReferenceCatalog,
    storage::JsonDraftStore,
    utils::paths::PathResolver,
    wizard::InquiryWizard,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub(crate) struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
    pub(crate) config: Config,
    pub(crate) catalog: ReferenceCatalog,
    pub(crate) wizard: InquiryWizard<JsonDraftStore>,
    base: PathBuf,
    config_manager: ConfigManager,
    registry: CommandRegistry,
}

impl ShellContext {
    pub(crate) fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, PathResolver::base_dir())
    }

    pub(crate) fn with_base_dir(mode: CliMode, base: PathBuf) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default configuration");
                output::warning(format!("{err}; using defaults"));
                Config::default()
            }
        };
        output::set_preferences(OutputPreferences::from(&config));

        let catalog = load_catalog(&config, &base);
        let wizard = open_wizard(&config, &base)?;
        tracing::debug!(base = %base.display(), key = %config.storage_key, "shell ready");

        Ok(Self {
            mode,
            running: true,
            config,
            catalog,
            wizard,
            base,
            config_manager,
            registry: CommandRegistry::new(commands::all_definitions()),
        })
    }

    pub(crate) fn base_dir(&self) -> &Path {
        &self.base
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("inquiry [{}/3]> ", self.wizard.step().index() + 1)
    }

    /// Persists `config` and re-applies everything derived from it.
    pub(crate) fn update_config(&mut self, config: Config) -> Result<(), CommandError> {
        self.config_manager.save(&config)?;
        let reopen = config.storage_key != self.config.storage_key;
        let reload_catalog = config.catalog_path != self.config.catalog_path;
        self.config = config;
        output::set_preferences(OutputPreferences::from(&self.config));
        if reopen {
            self.reopen_wizard()?;
        }
        if reload_catalog {
            self.catalog = load_catalog(&self.config, &self.base);
        }
        Ok(())
    }

    /// Starts over on whatever is stored under the configured key.
    pub(crate) fn reopen_wizard(&mut self) -> Result<(), CommandError> {
        self.wizard = open_wizard(&self.config, &self.base)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = closest(input, self.registry.names()) {
            output::hint(format!("Did you mean `{best}`?"));
        }
    }

    /// Interactive confirmation; script mode always proceeds.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        match self.mode {
            CliMode::Script => Ok(true),
            CliMode::Interactive => cli_io::confirm_action(prompt, false),
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        self.confirm("Exit shell? Your draft stays saved.")
            .map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => return Err(CommandError::InvalidArguments(err.to_string())),
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&raw.to_lowercase(), raw, &args)
    }
}

/// Closest candidate within an edit distance of three.
pub(crate) fn closest<'a>(
    input: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = input.to_ascii_lowercase();
    candidates
        .map(|candidate| (levenshtein(&needle, &candidate.to_ascii_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

fn open_wizard(
    config: &Config,
    base: &Path,
) -> crate::errors::Result<InquiryWizard<JsonDraftStore>> {
    let store = JsonDraftStore::new(Some(base.to_path_buf()), Some(&config.storage_key))?;
    let today = Local::now().date_naive();
    Ok(InquiryWizard::new(store, None).with_today(today))
}

fn load_catalog(config: &Config, base: &Path) -> ReferenceCatalog {
    let path = config.resolve_catalog_path(base);
    ReferenceCatalog::load_or_builtin(&path).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "unreadable catalog; using built-in entries");
        output::warning(format!("Catalog {} is unreadable; using built-in entries", path.display()));
        ReferenceCatalog::builtin()
    })
}
