pub mod line_format;
pub mod screen;
pub mod view;

pub fn make_padding(len: usize) -> String {
    " ".repeat(len)
}
