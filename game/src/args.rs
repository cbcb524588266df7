use std::path::PathBuf;

use clap::Parser;

use colormatch_common::settings_loader::{GameSettings, LoaderError, SettingsLoader};

/// Click a cell to clear every cell of a similar color. Clearing more cells
/// than the attempt number scores points.
#[derive(Debug, Parser)]
pub struct Args {
    /// Settings file (JSON5), overridden by the flags below
    #[arg(short = 'c', long)]
    pub settings: Option<PathBuf>,
    /// Seed for the board colors (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Normalized color similarity tolerance, 0..=1
    #[arg(short, long)]
    pub tolerance: Option<f32>,
    /// Grid rows
    #[arg(long)]
    pub rows: Option<usize>,
    /// Grid columns
    #[arg(long)]
    pub cols: Option<usize>,
}

impl Args {
    /// Settings file first, then flag overrides, then one more validation
    /// since the flags are unchecked.
    pub fn resolve(&self) -> Result<GameSettings, LoaderError> {
        let mut settings = match &self.settings {
            Some(path) => SettingsLoader::load_from_path(path)?,
            None => GameSettings::default(),
        };

        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }

        if let Some(tolerance) = self.tolerance {
            settings.tolerance = tolerance;
        }

        if let Some(rows) = self.rows {
            settings.rows = rows;
        }

        if let Some(cols) = self.cols {
            settings.cols = cols;
        }

        settings.validate()?;

        Ok(settings)
    }
}
