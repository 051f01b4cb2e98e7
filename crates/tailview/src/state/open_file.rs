//! Open File Prompt State

use std::path::PathBuf;

/// State for the open file prompt
#[derive(Debug, Clone, Default)]
pub struct OpenFileState {
    /// Path as typed so far
    pub input: String,
}

impl OpenFileState {
    /// Reset the prompt to its default state
    pub fn reset(&mut self) {
        self.input.clear();
    }

    /// The entered path, or `None` if the prompt is empty (cancelled)
    ///
    /// A leading `~/` is expanded to the home directory.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let input = self.input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some(rest) = input.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Some(home.join(rest));
            }
        }

        Some(PathBuf::from(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(input: &str) -> OpenFileState {
        OpenFileState {
            input: input.to_string(),
        }
    }

    #[test]
    fn test_empty_input_is_cancel() {
        assert_eq!(state("").resolved_path(), None);
        assert_eq!(state("   ").resolved_path(), None);
    }

    #[test]
    fn test_plain_path_is_trimmed() {
        assert_eq!(
            state("  /var/log/app.log ").resolved_path(),
            Some(PathBuf::from("/var/log/app.log"))
        );
    }

    #[test]
    fn test_home_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(
            state("~/logs/app.log").resolved_path(),
            Some(home.join("logs/app.log"))
        );
    }
}
