use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub frame: usize,
    pub molecule_position: usize,
    pub csv_path: Option<PathBuf>,
}
