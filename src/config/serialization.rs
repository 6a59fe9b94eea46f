//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// TOML string literal for `value`, escaped the way TOML parsers expect
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Render the configuration as a commented TOML document
    pub fn to_toml(&self) -> String {
        let date_of_birth = match self.profile.date_of_birth {
            Some(date) => format!("date_of_birth = \"{}\"", date.format("%Y-%m-%d")),
            None => "# date_of_birth = \"1999-01-05\"   # Unset = today".to_string(),
        };

        format!(
            r#"# showcase configuration
# Precedence: environment variables > this file > built-in defaults

# Page heading
title = {title}

# Theme: "auto", "dracula", "nord", "gruvbox" (env: SHOWCASE_THEME)
theme = {theme}

# Record shown by the user-info panel
[profile]
name = {name}
age = {age}
address = {address}
{date_of_birth}

# Dynamic counter seed (env: SHOWCASE_COUNT)
[counter]
initial = {initial}

[logging]
level = {level}            # trace, debug, info, warn, error (RUST_LOG overrides)
file_enabled = {file_enabled}
file_dir = {file_dir}
file_rotation = {file_rotation}    # hourly, daily, never
file_prefix = {file_prefix}
"#,
            title = quoted(&self.title),
            theme = quoted(&self.theme),
            name = quoted(&self.profile.name),
            age = self.profile.age,
            address = quoted(&self.profile.address),
            date_of_birth = date_of_birth,
            initial = self.counter.initial,
            level = quoted(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = quoted(&self.logging.file_dir.display().to_string()),
            file_rotation = quoted(self.logging.file_rotation.as_str()),
            file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
