//! Open file prompt reducer
//!
//! Only edits the typed path. Opening the file is the job of the open file
//! middleware, which reads the input before this reducer resets it.

use crate::actions::OpenFileAction;
use crate::state::OpenFileState;

pub fn reduce_open_file(mut state: OpenFileState, action: &OpenFileAction) -> OpenFileState {
    match action {
        OpenFileAction::Char(c) => state.input.push(*c),
        OpenFileAction::Backspace => {
            state.input.pop();
        }
        OpenFileAction::ClearLine => state.input.clear(),
        OpenFileAction::Confirm | OpenFileAction::Cancel => state.reset(),
    }
    state
}
