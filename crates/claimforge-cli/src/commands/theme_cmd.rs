//! Theme preference commands.

use anyhow::Result;
use clap::Subcommand;
use claimforge_core::{Theme, ThemeManager};
use colored::Colorize;

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the active theme
    Show,

    /// Switch between dark and light
    Toggle,

    /// Set the theme explicitly
    Set {
        /// dark or light
        theme: Theme,
    },
}

pub fn execute(cmd: ThemeCommands, mut themes: ThemeManager) -> Result<()> {
    match cmd {
        ThemeCommands::Show => {
            println!("{}", themes.current());
        }

        ThemeCommands::Toggle => {
            let theme = themes.toggle()?;
            println!("{} Theme set to {}", "✓".green().bold(), theme.to_string().cyan());
        }

        ThemeCommands::Set { theme } => {
            themes.set(theme)?;
            println!("{} Theme set to {}", "✓".green().bold(), theme.to_string().cyan());
        }
    }

    Ok(())
}
