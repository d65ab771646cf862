pub mod mocks;

use crate::configs::ThemeConfig;
use crate::theme::ThemeController;
use mocks::{ MemoryStore, RecordingSurface };

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub type TestController = ThemeController<MemoryStore, RecordingSurface>;

/// Controller over the given stored pairs and OS preference, already started.
pub fn started(stored: &[(&str, &str)], os_dark: bool) -> TestController {
    setup();
    let mut controller = ThemeController::new(
        MemoryStore::with(stored),
        RecordingSurface::new(os_dark),
        ThemeConfig::default()
    );
    controller.start();
    controller
}
