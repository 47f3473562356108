pub mod normal;

/// Everything the keyboard can ask the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLineUp,
    MoveLineDown,
    MovePageUp,
    MovePageDown,
    JumpStart,
    JumpEnd,
    EnterCommandMode,
    EnterSearchMode,
    Quit,
}
