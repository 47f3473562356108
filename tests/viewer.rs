use std::io::Write;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tempfile::NamedTempFile;
use tofu_peek::hex_view::screen::MemoryScreen;
use tofu_peek::hex_view::view::HexView;
use tofu_peek::{ByteSource, Navigation, Viewport, ViewportGeometry, LINE_WIDTH};

fn file_with(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn missing_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ByteSource::open(dir.path().join("nope.bin")).is_err());
}

#[test]
fn pages_through_a_real_file() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    let file = file_with(&data);
    let mut viewport = Viewport::new(ByteSource::open(file.path()).unwrap());
    let geometry = ViewportGeometry::new(8);

    let first = viewport.jump_to_start(geometry).unwrap();
    assert_eq!(first.bytes(), &data[..128]);

    let second = viewport.page_forward(geometry).unwrap();
    assert_eq!(second.offset(), 128);
    assert_eq!(second.bytes(), &data[128..256]);

    let last = viewport.jump_to_end(geometry).unwrap();
    assert_eq!(last.offset(), 1008 - 128);
    assert_eq!(last.bytes(), &data[880..]);
    assert_eq!(viewport.window_offset() % LINE_WIDTH as u64, 0);

    let back = viewport.line_backward(geometry).unwrap();
    assert_eq!(back.bytes(), &data[864..992]);
}

#[test]
fn file_growing_between_keys_is_seen() {
    let mut file = file_with(&[0x41; 32]);
    let mut viewport = Viewport::new(ByteSource::open(file.path()).unwrap());
    let geometry = ViewportGeometry::new(2);

    viewport.jump_to_end(geometry).unwrap();
    assert_eq!(viewport.window_offset(), 0);

    file.write_all(&[0x42; 32]).unwrap();
    file.flush().unwrap();
    let page = viewport.navigate(Navigation::JumpToEnd, geometry).unwrap();
    assert_eq!(viewport.window_offset(), 32);
    assert_eq!(page.bytes(), &[0x42; 32][..]);
}

#[test]
fn ten_byte_file_on_one_line_terminal() {
    let file = file_with(b"0123456789");
    let viewport = Viewport::new(ByteSource::open(file.path()).unwrap());
    let mut view = HexView::new(viewport, MemoryScreen::new(80, 3), "ten.bin");
    view.navigate(Navigation::JumpToStart).unwrap();
    view.run([key('G'), key('g'), key('g')].into_iter().map(Ok)).unwrap();

    assert_eq!(view.viewport().window_offset(), 0);
    assert_eq!(
        view.screen().row(0),
        "00000000: 3031 3233 3435 3637 3839                 0123456789"
    );
    assert!(view.screen().row(1).contains("ten.bin"));
}
