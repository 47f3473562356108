use std::io::{Read, Seek};

use crate::byte_source::ByteSource;
use crate::error::NavigationError;
use crate::hex_view::line_format::format_line;

/// Raw bytes shown on one display row.
pub const LINE_WIDTH: usize = 16;

/// Terminal rows kept for the status line and the prompt below it.
pub const RESERVED_ROWS: u16 = 2;

/// How many lines one page holds. Rebuilt from the terminal height before
/// every navigation, never stored on the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportGeometry {
    pub lines: usize,
}

impl ViewportGeometry {
    pub fn new(lines: usize) -> ViewportGeometry {
        ViewportGeometry { lines }
    }

    pub fn from_terminal_height(height: u16) -> ViewportGeometry {
        ViewportGeometry::new(height.saturating_sub(RESERVED_ROWS) as usize)
    }

    /// Bytes in one full page.
    pub fn bytes(&self) -> u64 {
        (self.lines * LINE_WIDTH) as u64
    }
}

/// Last line-aligned window start that still shows the end of the file.
///
/// For a file whose size is a multiple of [`LINE_WIDTH`] this is
/// `max(0, file_size - page)`; otherwise the final line is short and the
/// window stays aligned.
pub fn last_window_start(file_size: u64, geometry: ViewportGeometry) -> u64 {
    let width = LINE_WIDTH as u64;
    let aligned_end = file_size.div_ceil(width) * width;
    aligned_end.saturating_sub(geometry.bytes())
}

/// Bytes read for one window, starting at `offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    offset: u64,
    bytes: Vec<u8>,
}

impl Page {
    pub fn new(offset: u64, bytes: Vec<u8>) -> Page {
        Page { offset, bytes }
    }

    pub fn empty(offset: u64) -> Page {
        Page::new(offset, Vec::new())
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `(offset, chunk)` per display line. Lines past the end of a short page
    /// are omitted, and only the final chunk may be shorter than a line.
    pub fn lines(&self) -> impl Iterator<Item = (u64, &[u8])> + '_ {
        self.bytes
            .chunks(LINE_WIDTH)
            .enumerate()
            .map(move |(i, chunk)| (self.offset + (i * LINE_WIDTH) as u64, chunk))
    }

    pub fn formatted_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines().map(|(offset, chunk)| format_line(offset, chunk))
    }
}

/// The file being viewed and where the window currently starts.
///
/// `window_offset` is always a multiple of [`LINE_WIDTH`] and only changes
/// once a navigation has read its page successfully.
pub struct Viewport<R> {
    pub(crate) source: ByteSource<R>,
    pub(crate) window_offset: u64,
}

impl<R: Read + Seek> Viewport<R> {
    pub fn new(source: ByteSource<R>) -> Viewport<R> {
        Viewport {
            source,
            window_offset: 0,
        }
    }

    pub fn window_offset(&self) -> u64 {
        self.window_offset
    }

    pub fn file_size(&mut self) -> Result<u64, NavigationError> {
        self.source.size().map_err(NavigationError::Size)
    }

    pub fn source_mut(&mut self) -> &mut ByteSource<R> {
        &mut self.source
    }

    pub fn into_source(self) -> ByteSource<R> {
        self.source
    }
}
