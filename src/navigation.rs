//! Scrolling the viewport.
//!
//! Every movement follows the same shape: pick a target window start, clamp
//! it between the top of the file and [`last_window_start`], seek there, read
//! at most one page, and only then move the window. A failed seek or read
//! leaves the window where it was.

use std::cmp;
use std::io::{Read, Seek};

use tracing::{debug, trace};

use crate::error::NavigationError;
use crate::modes::Command;
use crate::viewport::{last_window_start, Page, Viewport, ViewportGeometry, LINE_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    JumpToStart,
    JumpToEnd,
    PageForward,
    PageBackward,
    LineForward,
    LineBackward,
    /// Re-read the current window, re-clamped to the current geometry.
    Reload,
}

impl Navigation {
    /// Window start after this movement, already clamped.
    pub fn target(self, current: u64, file_size: u64, geometry: ViewportGeometry) -> u64 {
        let line = LINE_WIDTH as u64;
        let page = geometry.bytes();
        let requested = match self {
            Navigation::JumpToStart => 0,
            Navigation::JumpToEnd => u64::MAX,
            Navigation::PageForward => current.saturating_add(page),
            Navigation::PageBackward => current.saturating_sub(page),
            Navigation::LineForward => current.saturating_add(line),
            Navigation::LineBackward => current.saturating_sub(line),
            Navigation::Reload => current,
        };
        cmp::min(requested, last_window_start(file_size, geometry))
    }
}

impl Command {
    /// Movement bound to this command, if it moves the window at all.
    pub fn navigation(self) -> Option<Navigation> {
        match self {
            Command::MoveLineUp => Some(Navigation::LineBackward),
            Command::MoveLineDown => Some(Navigation::LineForward),
            Command::MovePageUp => Some(Navigation::PageBackward),
            Command::MovePageDown => Some(Navigation::PageForward),
            Command::JumpStart => Some(Navigation::JumpToStart),
            Command::JumpEnd => Some(Navigation::JumpToEnd),
            Command::EnterCommandMode | Command::EnterSearchMode | Command::Quit => None,
        }
    }
}

impl<R: Read + Seek> Viewport<R> {
    pub fn navigate(
        &mut self,
        navigation: Navigation,
        geometry: ViewportGeometry,
    ) -> Result<Page, NavigationError> {
        let file_size = self.file_size()?;
        if file_size == 0 {
            self.window_offset = 0;
            trace!(?navigation, "empty file, nothing to read");
            return Ok(Page::empty(0));
        }
        if geometry.lines == 0 {
            trace!(?navigation, "no rows to fill");
            return Ok(Page::empty(self.window_offset));
        }

        let target = navigation.target(self.window_offset, file_size, geometry);
        let len = cmp::min(geometry.bytes(), file_size - target) as usize;

        self.source
            .seek_to(target)
            .map_err(|source| NavigationError::Seek {
                offset: target,
                source,
            })?;
        let bytes = self
            .source
            .read_up_to(len)
            .map_err(|source| NavigationError::Read {
                offset: target,
                len,
                source,
            })?;

        debug!(
            ?navigation,
            from = self.window_offset,
            to = target,
            read = bytes.len(),
            file_size,
            "window moved"
        );
        self.window_offset = target;
        Ok(Page::new(target, bytes))
    }

    pub fn jump_to_start(&mut self, geometry: ViewportGeometry) -> Result<Page, NavigationError> {
        self.navigate(Navigation::JumpToStart, geometry)
    }

    pub fn jump_to_end(&mut self, geometry: ViewportGeometry) -> Result<Page, NavigationError> {
        self.navigate(Navigation::JumpToEnd, geometry)
    }

    pub fn page_forward(&mut self, geometry: ViewportGeometry) -> Result<Page, NavigationError> {
        self.navigate(Navigation::PageForward, geometry)
    }

    pub fn page_backward(&mut self, geometry: ViewportGeometry) -> Result<Page, NavigationError> {
        self.navigate(Navigation::PageBackward, geometry)
    }

    pub fn line_forward(&mut self, geometry: ViewportGeometry) -> Result<Page, NavigationError> {
        self.navigate(Navigation::LineForward, geometry)
    }

    pub fn line_backward(&mut self, geometry: ViewportGeometry) -> Result<Page, NavigationError> {
        self.navigate(Navigation::LineBackward, geometry)
    }
}
