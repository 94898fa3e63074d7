//! Page-lifetime presentation state of the result viewer.
//!
//! All transitions are plain functions on `ViewState`; the frontend only
//! decides when to call them and how to reflect the result in the DOM.

use crate::domain::a001_generated_result::ArtifactKind;
use serde::{Deserialize, Serialize};

pub const ZOOM_MIN_PERCENT: u16 = 50;
pub const ZOOM_MAX_PERCENT: u16 = 300;
pub const ZOOM_STEP_PERCENT: u16 = 10;
pub const ZOOM_DEFAULT_PERCENT: u16 = 100;

/// Preview zoom, kept as an integer percentage so that repeated steps stay exact.
///
/// Always within `ZOOM_MIN_PERCENT..=ZOOM_MAX_PERCENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoomLevel(u16);

impl ZoomLevel {
    /// Creates a zoom level, clamping to the valid range.
    pub fn new(percent: u16) -> Self {
        Self(percent.clamp(ZOOM_MIN_PERCENT, ZOOM_MAX_PERCENT))
    }

    pub fn percent(&self) -> u16 {
        self.0
    }

    /// Scale factor, 1.0 = 100%.
    pub fn scale(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn zoomed_in(self) -> Self {
        Self::new(self.0.saturating_add(ZOOM_STEP_PERCENT))
    }

    pub fn zoomed_out(self) -> Self {
        Self::new(self.0.saturating_sub(ZOOM_STEP_PERCENT))
    }

    pub fn is_min(&self) -> bool {
        self.0 <= ZOOM_MIN_PERCENT
    }

    pub fn is_max(&self) -> bool {
        self.0 >= ZOOM_MAX_PERCENT
    }

    /// Value for the CSS `transform` property of the preview image.
    pub fn css_transform(&self) -> String {
        format!("scale({})", self.scale())
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(ZOOM_DEFAULT_PERCENT)
    }
}

/// Outcome of a tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    pub previous: ArtifactKind,
    pub current: ArtifactKind,
}

impl TabChange {
    /// Code panes are re-highlighted on every activation, even a repeated one.
    pub fn needs_highlight(&self) -> bool {
        self.current.is_code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    active_tab: ArtifactKind,
    zoom: ZoomLevel,
    wrap_enabled: bool,
}

impl ViewState {
    pub fn new(active_tab: ArtifactKind) -> Self {
        Self {
            active_tab,
            zoom: ZoomLevel::default(),
            wrap_enabled: false,
        }
    }

    pub fn active_tab(&self) -> ArtifactKind {
        self.active_tab
    }

    pub fn is_active(&self, kind: ArtifactKind) -> bool {
        self.active_tab == kind
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn wrap_enabled(&self) -> bool {
        self.wrap_enabled
    }

    pub fn select_tab(&mut self, kind: ArtifactKind) -> TabChange {
        let previous = self.active_tab;
        self.active_tab = kind;
        TabChange {
            previous,
            current: kind,
        }
    }

    /// Selects a tab by its markup identifier. Unknown identifiers are ignored.
    pub fn select_tab_by_id(&mut self, id: &str) -> Option<TabChange> {
        ArtifactKind::from_id(id).map(|kind| self.select_tab(kind))
    }

    pub fn zoom_in(&mut self) -> ZoomLevel {
        self.zoom = self.zoom.zoomed_in();
        self.zoom
    }

    pub fn zoom_out(&mut self) -> ZoomLevel {
        self.zoom = self.zoom.zoomed_out();
        self.zoom
    }

    /// Flips wrap mode and returns the new value.
    pub fn toggle_wrap(&mut self) -> bool {
        self.wrap_enabled = !self.wrap_enabled;
        self.wrap_enabled
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ArtifactKind::Html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_tab_tracks_latest_valid_argument() {
        let mut state = ViewState::default();
        let sequence = ["css", "bogus", "preview", "", "js", "js", "nope"];
        let mut expected = ArtifactKind::Html;
        for id in sequence {
            if let Some(kind) = ArtifactKind::from_id(id) {
                expected = kind;
            }
            state.select_tab_by_id(id);
            assert_eq!(state.active_tab(), expected);
            let active: Vec<_> = ArtifactKind::ALL
                .iter()
                .filter(|k| state.is_active(**k))
                .collect();
            assert_eq!(active.len(), 1);
        }
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let mut state = ViewState::new(ArtifactKind::Css);
        assert_eq!(state.select_tab_by_id("markdown"), None);
        assert_eq!(state.active_tab(), ArtifactKind::Css);
    }

    #[test]
    fn test_highlight_only_for_code_panes() {
        let mut state = ViewState::default();
        assert!(!state.select_tab(ArtifactKind::Preview).needs_highlight());
        let change = state.select_tab(ArtifactKind::Js);
        assert_eq!(change.previous, ArtifactKind::Preview);
        assert!(change.needs_highlight());
        assert!(state.select_tab(ArtifactKind::Js).needs_highlight());
    }

    #[test]
    fn test_ten_zoom_steps_reach_exactly_two() {
        let mut state = ViewState::default();
        for _ in 0..10 {
            state.zoom_in();
        }
        assert_eq!(state.zoom().percent(), 200);
        assert_eq!(state.zoom().scale(), 2.0);
    }

    #[test]
    fn test_zoom_clamps_at_both_ends() {
        let mut state = ViewState::default();
        for _ in 0..25 {
            state.zoom_in();
            assert!(state.zoom().percent() <= ZOOM_MAX_PERCENT);
        }
        assert_eq!(state.zoom().scale(), 3.0);
        assert!(state.zoom().is_max());
        assert_eq!(state.zoom_in().percent(), ZOOM_MAX_PERCENT);

        for _ in 0..40 {
            state.zoom_out();
            assert!(state.zoom().percent() >= ZOOM_MIN_PERCENT);
        }
        assert_eq!(state.zoom().scale(), 0.5);
        assert!(state.zoom().is_min());
    }

    #[test]
    fn test_zoom_level_new_clamps() {
        assert_eq!(ZoomLevel::new(0).percent(), ZOOM_MIN_PERCENT);
        assert_eq!(ZoomLevel::new(1000).percent(), ZOOM_MAX_PERCENT);
        assert_eq!(ZoomLevel::new(120).css_transform(), "scale(1.2)");
    }

    #[test]
    fn test_toggle_wrap_is_involution() {
        let mut state = ViewState::default();
        let original = state.wrap_enabled();
        assert!(state.toggle_wrap());
        assert!(!state.toggle_wrap());
        assert_eq!(state.wrap_enabled(), original);
    }
}
