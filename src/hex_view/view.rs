use std::io::{Read, Seek};

use crossterm::{event, event::Event, Result};
use tracing::{debug, info, warn};

use super::make_padding;
use super::screen::Screen;
use crate::modes::normal::Normal;
use crate::modes::Command;
use crate::navigation::Navigation;
use crate::viewport::{Page, Viewport, ViewportGeometry, RESERVED_ROWS};

const COMMAND_MODE_PENDING: &str = "command mode is not available yet";
const SEARCH_MODE_PENDING: &str = "search is not available yet";

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Ties the viewport to a screen: turns events into navigations and draws
/// the resulting page.
///
/// Rows `0..height-2` hold the page, the row after it is the status line and
/// the last row carries messages.
pub struct HexView<R, S> {
    viewport: Viewport<R>,
    screen: S,
    name: String,
    mode: Normal,
    page: Page,
    info: Option<String>,
}

impl<R: Read + Seek, S: Screen> HexView<R, S> {
    pub fn new(viewport: Viewport<R>, screen: S, name: impl Into<String>) -> HexView<R, S> {
        HexView {
            viewport,
            screen,
            name: name.into(),
            mode: Normal::new(),
            page: Page::default(),
            info: None,
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn viewport(&self) -> &Viewport<R> {
        &self.viewport
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Recomputed from the screen on every call so a resize takes effect on
    /// the next navigation.
    fn geometry(&self) -> Result<ViewportGeometry> {
        let (_, height) = self.screen.size()?;
        Ok(ViewportGeometry::from_terminal_height(height))
    }

    /// Moves the window and redraws. A failed move keeps the old page on
    /// screen and reports the error on the message row.
    pub fn navigate(&mut self, navigation: Navigation) -> Result<()> {
        let geometry = self.geometry()?;
        match self.viewport.navigate(navigation, geometry) {
            Ok(page) => self.page = page,
            Err(e) => {
                warn!(?navigation, error = %e, "navigation failed");
                self.info = Some(e.to_string());
            }
        }
        self.draw()
    }

    pub fn handle_event(&mut self, evt: &Event) -> Result<Flow> {
        if let Event::Resize(width, height) = evt {
            debug!(width, height, "terminal resized");
            self.navigate(Navigation::Reload)?;
            return Ok(Flow::Continue);
        }
        if let Event::Key(_) = evt {
            self.info = None;
        }

        match self.mode.transition(evt) {
            Some(command) => self.dispatch(command),
            None => {
                self.draw_statusline()?;
                self.screen.flush()?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        if let Some(navigation) = command.navigation() {
            self.navigate(navigation)?;
            return Ok(Flow::Continue);
        }
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::EnterCommandMode => self.enter_command_mode(),
            Command::EnterSearchMode => self.enter_search_mode(),
            _ => {}
        }
        self.draw_statusline()?;
        self.screen.flush()?;
        Ok(Flow::Continue)
    }

    /// Hook for the `:` prompt. Leaves the window where it is.
    fn enter_command_mode(&mut self) {
        info!("command mode requested");
        self.info = Some(COMMAND_MODE_PENDING.to_string());
    }

    /// Hook for the `/` prompt. Leaves the window where it is.
    fn enter_search_mode(&mut self) {
        info!("search mode requested");
        self.info = Some(SEARCH_MODE_PENDING.to_string());
    }

    pub fn draw(&mut self) -> Result<()> {
        self.screen.clear()?;
        for (row, line) in self.page.formatted_lines().enumerate() {
            self.screen.put_str(0, row as u16, &line)?;
        }
        self.draw_statusline()?;
        self.screen.flush()
    }

    fn statusline(&mut self) -> String {
        let position = match self.viewport.file_size() {
            Ok(0) => "empty".to_string(),
            Ok(size) => format!("{:08x}/{:08x}", self.viewport.window_offset(), size),
            Err(_) => format!("{:08x}/?", self.viewport.window_offset()),
        };
        format!(" {} | {} | {} ", self.name, self.mode.name(), position)
    }

    fn draw_statusline(&mut self) -> Result<()> {
        let (width, height) = self.screen.size()?;
        if height < RESERVED_ROWS {
            return Ok(());
        }
        let blank = make_padding(width as usize);
        let status = self.statusline();
        let status_row = height - RESERVED_ROWS;
        let info_row = height - 1;

        self.screen.put_str(0, status_row, &blank)?;
        self.screen.put_str(0, status_row, &status)?;
        self.screen.put_str(0, info_row, &blank)?;
        if let Some(info) = &self.info {
            self.screen.put_str(0, info_row, info)?;
        }
        Ok(())
    }

    /// Handles events until one asks to quit or the source runs dry.
    pub fn run(&mut self, events: impl IntoIterator<Item = Result<Event>>) -> Result<()> {
        for evt in events {
            if self.handle_event(&evt?)? == Flow::Quit {
                info!("quit requested");
                break;
            }
        }
        Ok(())
    }

    /// Draws the first page, then blocks on crossterm's event queue.
    pub fn run_event_loop(&mut self) -> Result<()> {
        self.navigate(Navigation::JumpToStart)?;
        self.run(std::iter::repeat_with(event::read))
    }
}
