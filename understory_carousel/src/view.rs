// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Render layer driven by a [`Carousel`](crate::Carousel).
///
/// The carousel only toggles "active" markers and the play/pause glyph; how those
/// are drawn, and how the slides were found, is up to the implementation.
pub trait SlideView {
    /// Number of slides. Read once, at construction.
    fn slide_count(&self) -> usize;

    /// Number of indicators. Indices at or past this count have no indicator.
    fn indicator_count(&self) -> usize {
        0
    }

    /// Marks a slide active or inactive.
    fn set_slide_active(&mut self, index: usize, active: bool);

    /// Marks an indicator active or inactive. Only called for `index < indicator_count()`.
    fn set_indicator_active(&mut self, _index: usize, _active: bool) {}

    /// Shows the pause glyph while playing and the play glyph otherwise.
    fn show_playing(&mut self, _playing: bool) {}

    /// Starts delivering document-wide key presses to the carousel.
    fn bind_keyboard(&mut self) {}

    /// Stops delivering key presses.
    fn unbind_keyboard(&mut self) {}
}

impl<V: SlideView + ?Sized> SlideView for &mut V {
    fn slide_count(&self) -> usize {
        (**self).slide_count()
    }

    fn indicator_count(&self) -> usize {
        (**self).indicator_count()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        (**self).set_slide_active(index, active);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        (**self).set_indicator_active(index, active);
    }

    fn show_playing(&mut self, playing: bool) {
        (**self).show_playing(playing);
    }

    fn bind_keyboard(&mut self) {
        (**self).bind_keyboard();
    }

    fn unbind_keyboard(&mut self) {
        (**self).unbind_keyboard();
    }
}
