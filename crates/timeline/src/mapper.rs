use crate::section::{SECTION_COUNT, Section};

/// Index of the section active at `progress`.
///
/// `floor(p * SECTION_COUNT)` clamped to the last index. Out-of-range input is
/// clamped to `[0, 1]` and NaN counts as the start of the tour.
pub fn section_index(progress: f32) -> usize {
    let p = sanitize(progress);
    let index = (p * SECTION_COUNT as f32).floor() as usize;
    index.min(SECTION_COUNT - 1)
}

pub fn section_at(progress: f32) -> Section {
    Section::from_index(section_index(progress))
}

/// A progress value that maps back to `section`.
///
/// Nudged slightly past the exact boundary so f32 rounding can't land on the
/// previous section.
pub fn section_start(section: Section) -> f32 {
    let index = section.index();
    if index == 0 {
        return 0.0;
    }
    ((index as f32 + 1.0e-3) / SECTION_COUNT as f32).min(1.0)
}

fn sanitize(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Virtual scroll position over a page that is `scroll_pages` viewports long.
///
/// Progress is the stored quantity; the pixel offset is derived from it so a
/// viewport resize rescales the offset without moving the visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    progress: f32,
    viewport_height_px: f32,
    scroll_pages: f32,
}

impl ScrollTracker {
    pub fn new(viewport_height_px: f32, scroll_pages: f32) -> Self {
        Self {
            progress: 0.0,
            viewport_height_px: viewport_height_px.max(1.0),
            scroll_pages: scroll_pages.max(f32::EPSILON),
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn section(&self) -> Section {
        section_at(self.progress)
    }

    pub fn viewport_height_px(&self) -> f32 {
        self.viewport_height_px
    }

    /// Distance the page can scroll, in pixels.
    pub fn scroll_range_px(&self) -> f32 {
        self.scroll_pages * self.viewport_height_px
    }

    pub fn offset_px(&self) -> f32 {
        self.progress * self.scroll_range_px()
    }

    /// Full page height including the last visible viewport.
    pub fn document_height_px(&self) -> f32 {
        self.scroll_range_px() + self.viewport_height_px
    }

    pub fn scroll_by_px(&mut self, delta_px: f32) {
        if !delta_px.is_finite() {
            return;
        }
        self.progress = sanitize(self.progress + delta_px / self.scroll_range_px());
    }

    pub fn scroll_to_progress(&mut self, progress: f32) {
        self.progress = sanitize(progress);
    }

    pub fn scroll_to_section(&mut self, section: Section) {
        self.progress = section_start(section);
    }

    pub fn set_viewport_height(&mut self, height_px: f32) {
        if height_px.is_finite() {
            self.viewport_height_px = height_px.max(1.0);
        }
    }

    /// Changes the page length; progress stays, the pixel offset follows.
    pub fn set_scroll_pages(&mut self, scroll_pages: f32) {
        if scroll_pages.is_finite() {
            self.scroll_pages = scroll_pages.max(f32::EPSILON);
        }
    }

    pub fn scroll_pages(&self) -> f32 {
        self.scroll_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(section_index(0.0), 0);
        assert_eq!(section_index(1.0), SECTION_COUNT - 1);
    }

    #[test]
    fn monotone_and_bounded() {
        let mut previous = 0;
        for step in 0..=10_000 {
            let p = step as f32 / 10_000.0;
            let index = section_index(p);
            assert!(index < SECTION_COUNT);
            assert!(index >= previous, "section went backwards at p={p}");
            previous = index;
        }
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(section_index(-3.0), 0);
        assert_eq!(section_index(7.5), SECTION_COUNT - 1);
        assert_eq!(section_index(f32::NAN), 0);
        assert_eq!(section_index(f32::INFINITY), SECTION_COUNT - 1);
        assert_eq!(section_index(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn section_start_maps_back() {
        for section in Section::iter() {
            assert_eq!(section_at(section_start(section)), section);
        }
    }

    #[test]
    fn tracker_clamps_and_scrolls() {
        let mut tracker = ScrollTracker::new(1000.0, 7.0);
        tracker.scroll_by_px(-50.0);
        assert_eq!(tracker.progress(), 0.0);

        tracker.scroll_by_px(3500.0);
        assert!((tracker.progress() - 0.5).abs() < 1e-6);
        assert_eq!(tracker.section(), Section::Projects);

        tracker.scroll_by_px(1.0e9);
        assert_eq!(tracker.progress(), 1.0);
        assert_eq!(tracker.section(), Section::Contact);
    }

    #[test]
    fn resize_keeps_progress() {
        let mut tracker = ScrollTracker::new(800.0, 7.0);
        tracker.scroll_to_section(Section::Projects);
        let before = tracker.progress();

        tracker.set_viewport_height(412.0);
        assert_eq!(tracker.progress(), before);
        assert_eq!(tracker.section(), Section::Projects);
        assert!((tracker.offset_px() - before * 7.0 * 412.0).abs() < 1e-3);
    }

    #[test]
    fn longer_page_keeps_progress_and_slows_scrolling() {
        let mut tracker = ScrollTracker::new(1000.0, 7.0);
        tracker.scroll_to_section(Section::Skills);
        let before = tracker.progress();

        tracker.set_scroll_pages(14.0);
        assert_eq!(tracker.progress(), before);
        assert_eq!(tracker.scroll_pages(), 14.0);

        tracker.scroll_to_progress(0.0);
        tracker.scroll_by_px(7000.0);
        assert!((tracker.progress() - 0.5).abs() < 1e-6);

        tracker.set_scroll_pages(f32::NAN);
        assert_eq!(tracker.scroll_pages(), 14.0);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut tracker = ScrollTracker::new(800.0, 7.0);
        tracker.scroll_by_px(400.0);
        let before = tracker.progress();
        tracker.scroll_by_px(f32::NAN);
        tracker.set_viewport_height(f32::INFINITY);
        assert_eq!(tracker.progress(), before);
        assert_eq!(tracker.viewport_height_px(), 800.0);
    }
}
