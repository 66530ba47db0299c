/// Mobile navigation ("burger") menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    BurgerClicked,
    LinkClicked,
    EscapePressed,
    /// Viewport resized to this width.
    Resized(f64),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Value for the burger's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Next state. Anything but the burger closes the menu; so does growing
    /// past `breakpoint`, where the burger is hidden.
    pub fn on(self, event: NavEvent, breakpoint: f64) -> Self {
        match (self, event) {
            (MenuState::Closed, NavEvent::BurgerClicked) => MenuState::Open,
            (MenuState::Open, NavEvent::BurgerClicked) => MenuState::Closed,
            (state, NavEvent::Resized(width)) if width < breakpoint => state,
            _ => MenuState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burger_toggles() {
        let open = MenuState::Closed.on(NavEvent::BurgerClicked, 768.0);
        assert!(open.is_open());
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.on(NavEvent::BurgerClicked, 768.0), MenuState::Closed);
    }

    #[test]
    fn links_and_escape_close() {
        assert_eq!(MenuState::Open.on(NavEvent::LinkClicked, 768.0), MenuState::Closed);
        assert_eq!(MenuState::Open.on(NavEvent::EscapePressed, 768.0), MenuState::Closed);
        assert_eq!(MenuState::Closed.on(NavEvent::EscapePressed, 768.0), MenuState::Closed);
    }

    #[test]
    fn resize_closes_only_past_breakpoint() {
        assert_eq!(MenuState::Open.on(NavEvent::Resized(500.0), 768.0), MenuState::Open);
        assert_eq!(MenuState::Open.on(NavEvent::Resized(1024.0), 768.0), MenuState::Closed);
        assert_eq!(MenuState::Closed.on(NavEvent::Resized(500.0), 768.0), MenuState::Closed);
    }
}
