//! The few terminal operations the viewer needs, behind a trait so the view
//! can draw into memory as easily as into a real terminal.

use std::io::{self, Write};

use crossterm::{cursor, execute, queue, style, terminal, Result};

pub trait Screen {
    /// `(width, height)` in cells.
    fn size(&self) -> Result<(u16, u16)>;
    fn clear(&mut self) -> Result<()>;
    fn set_cell(&mut self, x: u16, y: u16, ch: char) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Writes `text` into consecutive cells of row `y`, clipped at the right
    /// edge.
    fn put_str(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        let (width, _) = self.size()?;
        for (i, ch) in text.chars().take(width.saturating_sub(x) as usize).enumerate() {
            self.set_cell(x + i as u16, y, ch)?;
        }
        Ok(())
    }
}

/// Draws through crossterm. Commands are queued and only hit the terminal on
/// [`Screen::flush`].
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> TerminalScreen<W> {
        TerminalScreen { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size()
    }

    fn clear(&mut self) -> Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char) -> Result<()> {
        queue!(self.out, cursor::MoveTo(x, y), style::Print(ch))
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        let (width, _) = self.size()?;
        let clipped: String = text.chars().take(width.saturating_sub(x) as usize).collect();
        queue!(self.out, cursor::MoveTo(x, y), style::Print(clipped))
    }
}

/// Fixed-size character grid. Cells written outside it are dropped.
#[derive(Debug, Clone)]
pub struct MemoryScreen {
    width: u16,
    height: u16,
    cells: Vec<char>,
    flushes: usize,
}

impl MemoryScreen {
    pub fn new(width: u16, height: u16) -> MemoryScreen {
        MemoryScreen {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
            flushes: 0,
        }
    }

    /// Changes the reported size and blanks the grid, as a terminal resize
    /// would.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = MemoryScreen {
            flushes: self.flushes,
            ..MemoryScreen::new(width, height)
        };
    }

    /// Row `y` with trailing blanks trimmed.
    pub fn row(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        let row: String = self.cells[start..start + self.width as usize].iter().collect();
        row.trim_end().to_string()
    }

    pub fn rows(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row(y)).collect()
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Screen for MemoryScreen {
    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn clear(&mut self) -> Result<()> {
        self.cells.iter_mut().for_each(|cell| *cell = ' ');
        Ok(())
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char) -> Result<()> {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = ch;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Raw mode and the alternate screen for as long as the guard lives.
///
/// Dropping the guard restores the terminal, so an early return through `?`
/// still leaves the shell usable.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn enter() -> Result<TerminalGuard> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard { restored: false };
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }

    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
