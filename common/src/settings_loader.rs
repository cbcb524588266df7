use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::Deserialize;

use colormatch::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TOLERANCE,
};

/// Resolved game settings, after defaults and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub tolerance: f32,
    pub seed: Option<u64>,
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), LoaderError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LoaderError::Invalid("grid must have at least one cell"));
        }

        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return Err(LoaderError::Invalid("cell dimensions must be positive"));
        }

        if !(0.0..=1.0).contains(&self.tolerance) {
            return Err(LoaderError::Invalid("tolerance must lie in 0..=1"));
        }

        Ok(())
    }

    /// Window size implied by the grid, in pixels.
    pub fn window_size(&self) -> (u32, u32) {
        (
            (self.cols as f32 * self.cell_width) as u32,
            (self.rows as f32 * self.cell_height) as u32,
        )
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
        }
    }
}

/// On-disk form of the settings. Every key is optional.
#[derive(Debug, Deserialize)]
struct SettingsStub {
    rows: Option<usize>,
    cols: Option<usize>,
    cell_width: Option<f32>,
    cell_height: Option<f32>,
    tolerance: Option<f32>,
    seed: Option<u64>,
}

pub struct SettingsLoader {}

impl SettingsLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<GameSettings, LoaderError> {
        let text = std::fs::read_to_string(path).map_err(LoaderError::InputError)?;

        Self::load_from_str(&text)
    }

    pub fn load_from_str(text: &str) -> Result<GameSettings, LoaderError> {
        let stub: SettingsStub = json5::from_str(text).map_err(LoaderError::FormatError)?;

        let defaults = GameSettings::default();

        let settings = GameSettings {
            rows: stub.rows.unwrap_or(defaults.rows),
            cols: stub.cols.unwrap_or(defaults.cols),
            cell_width: stub.cell_width.unwrap_or(defaults.cell_width),
            cell_height: stub.cell_height.unwrap_or(defaults.cell_height),
            tolerance: stub.tolerance.unwrap_or(defaults.tolerance),
            seed: stub.seed,
        };

        settings.validate()?;

        Ok(settings)
    }
}

#[derive(Debug)]
pub enum LoaderError {
    InputError(std::io::Error),
    FormatError(json5::Error),
    Invalid(&'static str),
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputError(e) => f.write_fmt(format_args!("{e}")),
            Self::FormatError(e) => f.write_fmt(format_args!("{e}")),
            Self::Invalid(msg) => f.write_fmt(format_args!("{msg}")),
        }
    }
}

impl Error for LoaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputError(e) => Some(e),
            Self::FormatError(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = SettingsLoader::load_from_str("{}").unwrap();

        assert_eq!(settings, GameSettings::default());
        assert_eq!(settings.window_size(), (800, 600));
    }

    #[test]
    fn keys_override_defaults() {
        let settings = SettingsLoader::load_from_str(
            r#"{
                // smaller board, stricter matching
                rows: 4,
                cols: 5,
                cell_width: 80,
                tolerance: 0.1,
                seed: 99,
            }"#,
        )
        .unwrap();

        assert_eq!(settings.rows, 4);
        assert_eq!(settings.cols, 5);
        assert_eq!(settings.cell_width, 80.0);
        assert_eq!(settings.cell_height, 100.0);
        assert_eq!(settings.tolerance, 0.1);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.window_size(), (400, 400));
    }

    #[test]
    fn out_of_range_tolerance_is_rejected() {
        let result = SettingsLoader::load_from_str("{ tolerance: 1.5 }");

        assert!(matches!(result, Err(LoaderError::Invalid(_))));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let result = SettingsLoader::load_from_str("{ rows: 0 }");

        assert!(matches!(result, Err(LoaderError::Invalid(_))));
    }

    #[test]
    fn malformed_text_is_a_format_error() {
        let result = SettingsLoader::load_from_str("rows: [");

        assert!(matches!(result, Err(LoaderError::FormatError(_))));
    }
}
