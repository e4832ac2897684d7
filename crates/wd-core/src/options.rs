//! Game options and configuration
//!
//! Options come from a `walkdogrc` file in the familiar `OPTIONS=` line
//! format, then command-line flags override individual values.
//!
//! ```text
//! # comments start with '#'
//! OPTIONS=!color,header
//! OPTIONS=seed:42,name:Erin
//! ```
//!
//! `name:` runs to the end of its line, so it comes last.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming the options file
pub const OPTIONS_ENV: &str = "WALKDOGRC";

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Emit 24-bit color escapes
    pub color: bool,
    /// Show the title header before the owner is registered
    pub header: bool,
    /// Fixed RNG seed; entropy when unset
    pub seed: Option<u64>,
    /// Owner name; the name prompt is skipped when set
    pub name: Option<String>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            color: true,
            header: true,
            seed: None,
            name: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("could not read options file '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value for option '{0}': {1}")]
    InvalidValue(String, String),

    #[error("option '{0}' needs a value")]
    MissingValue(String),
}

impl GameOptions {
    /// Path named by `$WALKDOGRC`, if any
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os(OPTIONS_ENV).map(PathBuf::from)
    }

    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| OptionsError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim_start();

            if line.trim_end().is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                options.parse_options_line(opts)?;
            }
        }

        Ok(options)
    }

    /// Parse the comma-separated options of one line. `name:` takes the
    /// rest of the line verbatim, commas and spaces included.
    fn parse_options_line(&mut self, mut rest: &str) -> Result<(), OptionsError> {
        loop {
            let piece = rest.trim_start();
            if let Some(name) = piece.strip_prefix("name:") {
                return self.set_option("name", name);
            }

            let (opt, tail) = match piece.split_once(',') {
                Some((opt, tail)) => (opt, Some(tail)),
                None => (piece, None),
            };
            let opt = opt.trim();
            if !opt.is_empty() {
                self.parse_option(opt)?;
            }

            match tail {
                Some(tail) => rest = tail,
                None => return Ok(()),
            }
        }
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some(name) = opt.strip_prefix('!') {
            return self.set_bool_option(name, false);
        }

        match opt.split_once(':') {
            Some((name, value)) => self.set_option(name.trim(), value.trim()),
            None => self.set_bool_option(opt, true),
        }
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "color" | "colour" => self.color = value,
            "header" => self.header = value,
            "seed" | "name" => return Err(OptionsError::MissingValue(name.to_string())),
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        match name {
            "seed" => {
                let seed = value
                    .parse()
                    .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))?;
                self.seed = Some(seed);
            }
            "name" => {
                if value.is_empty() {
                    return Err(OptionsError::MissingValue(name.to_string()));
                }
                self.name = Some(value.to_string());
            }
            "color" | "colour" | "header" => {
                let flag = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => {
                        return Err(OptionsError::InvalidValue(
                            name.to_string(),
                            value.to_string(),
                        ));
                    }
                };
                self.set_bool_option(name, flag)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Render options back into config file format
    pub fn to_config_string(&self) -> String {
        let mut lines = vec![format!(
            "OPTIONS={}color,{}header",
            if self.color { "" } else { "!" },
            if self.header { "" } else { "!" },
        )];
        if let Some(seed) = self.seed {
            lines.push(format!("OPTIONS=seed:{seed}"));
        }
        if let Some(name) = &self.name {
            lines.push(format!("OPTIONS=name:{name}"));
        }
        lines.push(String::new());
        lines.join("\n")
    }
}
