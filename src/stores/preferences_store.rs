use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

use crate::listing::{RenderingMode, ViewMode};

/// Browsing preferences that survive a reload
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Preferences {
    pub view_mode: ViewMode,
    pub rendering_mode: RenderingMode,
}

/// Global preference state
pub static PREFERENCES: GlobalSignal<Preferences> = Signal::global(Preferences::default);

const STORAGE_KEY_VIEW_MODE: &str = "bookline_view_mode";
const STORAGE_KEY_RENDERING_MODE: &str = "bookline_rendering_mode";

/// Load preferences from localStorage
pub fn init_preferences() {
    let mut prefs = Preferences::default();

    if let Ok(mode) = LocalStorage::get::<String>(STORAGE_KEY_VIEW_MODE) {
        prefs.view_mode = ViewMode::from_str(&mode);
    }
    if let Ok(mode) = LocalStorage::get::<String>(STORAGE_KEY_RENDERING_MODE) {
        prefs.rendering_mode = RenderingMode::from_str(&mode);
    }

    log::info!(
        "Loaded preferences: {:?} view, {:?} rendering",
        prefs.view_mode,
        prefs.rendering_mode
    );
    *PREFERENCES.write() = prefs;
}

pub fn set_view_mode(mode: ViewMode) {
    if PREFERENCES.read().view_mode == mode {
        return;
    }

    PREFERENCES.write().view_mode = mode;
    LocalStorage::set(STORAGE_KEY_VIEW_MODE, mode.as_str()).ok();
    log::info!("View mode changed to: {:?}", mode);
}

pub fn set_rendering_mode(mode: RenderingMode) {
    if PREFERENCES.read().rendering_mode == mode {
        return;
    }

    PREFERENCES.write().rendering_mode = mode;
    LocalStorage::set(STORAGE_KEY_RENDERING_MODE, mode.as_str()).ok();
    log::info!("Rendering mode changed to: {:?}", mode);
}

pub fn view_mode() -> ViewMode {
    PREFERENCES.read().view_mode
}

pub fn rendering_mode() -> RenderingMode {
    PREFERENCES.read().rendering_mode
}
