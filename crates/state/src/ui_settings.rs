//! Dashboard chrome toggles (sidebar, navbar, configurator panel).
//!
//! State changes go through [`reduce`], a pure function; [`UiSettingsStore`]
//! only holds the current value and is passed explicitly to whoever needs it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidenavType {
    #[default]
    White,
    Gray,
    Transparent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    pub open_sidenav: bool,
    pub sidenav_color: String,
    pub sidenav_type: SidenavType,
    pub transparent_navbar: bool,
    pub fixed_navbar: bool,
    pub open_configurator: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            open_sidenav: false,
            sidenav_color: "gray".to_string(),
            sidenav_type: SidenavType::White,
            transparent_navbar: true,
            fixed_navbar: false,
            open_configurator: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    OpenSidenav(bool),
    SidenavType(SidenavType),
    SidenavColor(String),
    TransparentNavbar(bool),
    FixedNavbar(bool),
    OpenConfigurator(bool),
}

/// Apply `action` to `state`, returning the new settings.
pub fn reduce(state: &UiSettings, action: UiAction) -> UiSettings {
    let mut next = state.clone();
    match action {
        UiAction::OpenSidenav(open) => next.open_sidenav = open,
        UiAction::SidenavType(kind) => next.sidenav_type = kind,
        UiAction::SidenavColor(color) => next.sidenav_color = color,
        UiAction::TransparentNavbar(on) => next.transparent_navbar = on,
        UiAction::FixedNavbar(on) => next.fixed_navbar = on,
        UiAction::OpenConfigurator(open) => next.open_configurator = open,
    }
    next
}

#[derive(Debug, Clone, Default)]
pub struct UiSettingsStore {
    current: UiSettings,
}

impl UiSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: UiSettings) -> Self {
        Self { current: settings }
    }

    pub fn get(&self) -> &UiSettings {
        &self.current
    }

    pub fn dispatch(&mut self, action: UiAction) {
        tracing::trace!(?action, "UI settings change");
        self.current = reduce(&self.current, action);
    }
}
