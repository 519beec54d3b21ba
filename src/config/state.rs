// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Tidy,
    CitySkill,
    SkillRole,
    Recommendations,
    Heatmap,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Postings file typed into the top bar
    pub input_path: String,
    /// Output directory typed into the export bar
    pub out_dir: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            input_path: s!(),
            out_dir: s!(super::consts::DEFAULT_OUT_DIR),
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            out_dir: options.export.out_dir.display().to_string(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
