use super::state::NavState;

/// Visual style of the fixed header. Derived from the scroll flag only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Over the hero image: no background, light text.
    Transparent,
    /// Scrolled into the content: white background with shadow, dark text.
    Solid,
}

impl HeaderStyle {
    pub fn for_scroll(past_threshold: bool) -> Self {
        if past_threshold {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Transparent
        }
    }

    pub fn of(state: &NavState) -> Self {
        Self::for_scroll(state.is_past_threshold())
    }

    pub fn nav_class(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "site-nav site-nav--transparent",
            HeaderStyle::Solid => "site-nav site-nav--solid",
        }
    }

    pub fn brand_text_class(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "nav-brand__text nav-brand__text--light",
            HeaderStyle::Solid => "nav-brand__text nav-brand__text--brand",
        }
    }

    pub fn link_class(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "nav-link nav-link--light",
            HeaderStyle::Solid => "nav-link nav-link--dark",
        }
    }

    /// Color of the menu toggle icon; the glyph itself comes from [`ToggleIcon`].
    pub fn toggle_color_class(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "nav-toggle__icon nav-toggle__icon--light",
            HeaderStyle::Solid => "nav-toggle__icon nav-toggle__icon--dark",
        }
    }
}

/// Glyph shown on the mobile menu toggle. Derived from the menu flag only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Open,
    Close,
}

impl ToggleIcon {
    pub fn for_menu(menu_open: bool) -> Self {
        if menu_open {
            ToggleIcon::Close
        } else {
            ToggleIcon::Open
        }
    }

    pub fn of(state: &NavState) -> Self {
        Self::for_menu(state.is_menu_open())
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            ToggleIcon::Open => "Mở menu",
            ToggleIcon::Close => "Đóng menu",
        }
    }

    /// SVG path data for a 24x24 stroked icon.
    pub fn svg_path(self) -> &'static str {
        match self {
            ToggleIcon::Open => "M4 6h16M4 12h16M4 18h16",
            ToggleIcon::Close => "M6 18L18 6M6 6l12 12",
        }
    }
}

pub fn overlay_visible(state: &NavState) -> bool {
    state.is_menu_open()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(past: bool, open: bool) -> NavState {
        let mut state = NavState::with_threshold(50.0);
        state.observe_scroll(if past { 100.0 } else { 0.0 });
        if open {
            state.toggle_menu();
        }
        state
    }

    #[test]
    fn header_style_follows_scroll_flag_only() {
        for open in [false, true] {
            assert_eq!(HeaderStyle::of(&state(false, open)), HeaderStyle::Transparent);
            assert_eq!(HeaderStyle::of(&state(true, open)), HeaderStyle::Solid);
        }
    }

    #[test]
    fn overlay_and_icon_follow_menu_flag_only() {
        for past in [false, true] {
            assert!(!overlay_visible(&state(past, false)));
            assert!(overlay_visible(&state(past, true)));
            assert_eq!(ToggleIcon::of(&state(past, false)), ToggleIcon::Open);
            assert_eq!(ToggleIcon::of(&state(past, true)), ToggleIcon::Close);
        }
    }

    #[test]
    fn icon_color_and_glyph_compose_orthogonally() {
        let combos: Vec<(&str, &str)> = [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(past, open)| {
                let s = state(past, open);
                (HeaderStyle::of(&s).toggle_color_class(), ToggleIcon::of(&s).svg_path())
            })
            .collect();

        assert_eq!(combos[0].0, combos[1].0);
        assert_eq!(combos[2].0, combos[3].0);
        assert_ne!(combos[0].0, combos[2].0);
        assert_eq!(combos[0].1, combos[2].1);
        assert_eq!(combos[1].1, combos[3].1);
        assert_ne!(combos[0].1, combos[1].1);
    }

    #[test]
    fn solid_header_uses_solid_class() {
        assert!(HeaderStyle::Solid.nav_class().contains("site-nav--solid"));
        assert!(HeaderStyle::Transparent.nav_class().contains("site-nav--transparent"));
    }
}
