//! Scroll-position rules behind the header, nav highlighting, progress bar
//! and back-to-top button.

pub const HEADER_SCROLLED_AFTER: f64 = 100.0;
pub const BACK_TO_TOP_AFTER: f64 = 300.0;
/// Height of the fixed header; nav jumps land this far above a section.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;
pub const ACTIVE_SECTION_OFFSET: f64 = 150.0;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER
}

pub fn nav_target(section_top: f64) -> f64 {
    (section_top - NAV_SCROLL_OFFSET).max(0.0)
}

/// Percentage of the page scrolled, 0 when the page doesn't scroll.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn is_active(&self, scroll_y: f64) -> bool {
        let top = self.top - ACTIVE_SECTION_OFFSET;
        scroll_y > top && scroll_y <= top + self.height
    }
}

/// First section containing `scroll_y`.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .find(|s| s.is_active(scroll_y))
        .map(|s| s.id.as_str())
}
