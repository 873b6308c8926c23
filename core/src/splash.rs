//! Startup splash visibility

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashScreen {
    visible: bool,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl SplashScreen {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the splash. Safe to call any number of times.
    pub fn hide(&mut self) {
        if self.visible {
            log::debug!("hiding splash screen");
            self.visible = false;
        }
    }
}
