// Command-line overrides for values in draft.toml.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use snapdraft_core::config::{Config, LayoutPreference};

#[derive(Debug, Parser)]
#[command(name = "snapdraft")]
#[command(
    about = "Fantasy football snake draft assistant",
    long_about = "Fantasy football snake draft assistant\n\nSettings come from config/draft.toml; flags override them for one run."
)]
pub struct Cli {
    /// Season whose projections to load (default: [data].season or the current year)
    #[arg(short, long)]
    pub season: Option<i32>,

    /// Projections file to load instead of {projections_dir}/Projections-{season}.json
    #[arg(short, long)]
    pub projections: Option<PathBuf>,

    /// Table layout
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Desktop,
    Compact,
    /// Compact when the terminal is narrower than [ui].compact_width
    Auto,
}

impl From<LayoutArg> for LayoutPreference {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Desktop => LayoutPreference::Desktop,
            LayoutArg::Compact => LayoutPreference::Compact,
            LayoutArg::Auto => LayoutPreference::Auto,
        }
    }
}

impl Cli {
    /// Apply the flags to a loaded config. Returns the explicit projections
    /// path, if one was given.
    pub fn apply(&self, config: &mut Config) -> Option<PathBuf> {
        if let Some(season) = self.season {
            config.data.season = Some(season);
        }
        if let Some(layout) = self.layout {
            config.ui.layout = layout.into();
        }
        self.projections.clone()
    }
}
