pub struct DefaultsConfig {
    pub frame: usize,
    pub molecule_position: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            frame: 0,
            molecule_position: 1,
        }
    }
}
