// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text "render layer": one cell per slide plus a play/pause glyph.

use std::fmt;

use understory_carousel::SlideView;

#[derive(Debug)]
pub(crate) struct TextStrip {
    titles: Vec<String>,
    active: Vec<bool>,
    playing: bool,
}

impl TextStrip {
    pub(crate) fn new(titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        let active = vec![false; titles.len()];
        Self {
            titles,
            active,
            playing: false,
        }
    }

    fn active_title(&self) -> &str {
        self.active
            .iter()
            .position(|&a| a)
            .map_or("-", |i| self.titles[i].as_str())
    }
}

impl SlideView for TextStrip {
    fn slide_count(&self) -> usize {
        self.titles.len()
    }

    fn indicator_count(&self) -> usize {
        self.titles.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
    }

    fn show_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn bind_keyboard(&mut self) {
        tracing::debug!("keyboard listener bound");
    }

    fn unbind_keyboard(&mut self) {
        tracing::debug!("keyboard listener released");
    }
}

impl fmt::Display for TextStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &active in &self.active {
            f.write_str(if active { "[#]" } else { "[ ]" })?;
        }
        let glyph = if self.playing { "||" } else { "|>" };
        write!(f, " {glyph} {}", self.active_title())
    }
}
