//! Overlay menu state.

/// Open/closed state of the overlay navigation menu.
///
/// `open` and `close` are idempotent so callers never have to check the
/// current state first.
#[derive(Debug, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_idempotent() {
        let mut menu = MenuState::new();
        assert!(!menu.is_open());

        menu.open();
        menu.open();
        assert!(menu.is_open());

        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }
}
