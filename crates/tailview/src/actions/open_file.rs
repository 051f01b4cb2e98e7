//! Open file prompt actions

/// Actions for the open file prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenFileAction {
    /// Add a character to the path
    Char(char),
    /// Remove the last character
    Backspace,
    /// Clear the whole input
    ClearLine,
    /// Open the entered path
    Confirm,
    /// Close the prompt without changing the source
    Cancel,
}
