use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    log_viewer_reducer::reduce_log_viewer, open_file_reducer::reduce_open_file,
    status_bar_reducer::reduce_status_bar,
};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(&mut state, global),
        Action::LogViewer(action) => {
            state.log_viewer = reduce_log_viewer(state.log_viewer, action);
        }
        Action::OpenFile(action) => {
            state.open_file = reduce_open_file(state.open_file, action);
        }
        Action::StatusBar(action) => {
            state.status_bar = reduce_status_bar(state.status_bar, action);
        }
        // Generic actions are translated by middleware; leftovers are ignored
        Action::Navigate(_) | Action::TextInput(_) => {}
    }

    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top closes it instead
            let is_duplicate = state
                .view_stack
                .last()
                .is_some_and(|top| top.view_id() == new_view.view_id());

            if is_duplicate {
                log::debug!("Popping view {:?}, it is on top already", new_view.view_id());
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            // Closing the last view quits the application
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::KeyPressed(_) | GlobalAction::Tick => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{LogViewerAction, OpenFileAction};
    use crate::views::{OpenFileView, ViewId};

    fn push_prompt() -> Action {
        Action::Global(GlobalAction::PushView(Box::new(OpenFileView::new())))
    }

    #[test]
    fn test_push_and_close_view() {
        let state = reduce(AppState::default(), &push_prompt());
        assert_eq!(state.active_view().view_id(), ViewId::OpenFile);

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(state.active_view().view_id(), ViewId::LogViewer);
        assert!(state.running);
    }

    #[test]
    fn test_pushing_the_top_view_again_closes_it() {
        let state = reduce(AppState::default(), &push_prompt());
        let state = reduce(state, &push_prompt());
        assert_eq!(state.view_stack.len(), 1);
    }

    #[test]
    fn test_closing_last_view_quits() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }

    #[test]
    fn test_sub_reducers_are_routed() {
        let state = reduce(
            AppState::default(),
            &Action::OpenFile(OpenFileAction::Char('x')),
        );
        assert_eq!(state.open_file.input, "x");

        let state = reduce(state, &Action::LogViewer(LogViewerAction::ToggleWrap));
        assert!(!state.log_viewer.wrap_lines);
    }
}
