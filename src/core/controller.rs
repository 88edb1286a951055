use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: RepositoryStore,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(branch),
            store,
        }
    }
}

// ConsoleError carries the line printed back to the menu user.
pub(crate) type ConsoleError = String;

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                "Book already exists!".to_string()
            }
            CommandError::NotFound { .. } => {
                "Book not found.".to_string()
            }
            CommandError::NoCopies { .. } => {
                "No copies available.".to_string()
            }
            CommandError::AtCapacity { .. } => {
                "All copies are already in library.".to_string()
            }
            CommandError::Validation { ref message, ref reason_code } => {
                match reason_code.as_deref() {
                    Some("copies") => "Copies must be greater than zero.".to_string(),
                    _ => message.to_string(),
                }
            }
            CommandError::Serialization { .. } => {
                format!("Unexpected error: {:?}", err)
            }
            CommandError::Runtime { .. } => {
                format!("Unexpected error: {:?}", err)
            }
            CommandError::Other { .. } => {
                format!("Unexpected error: {:?}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, ConsoleError};
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_app_state() {
        let state = AppState::new("test", RepositoryStore::InMemory);
        assert_eq!("test", state.config.branch_id.as_str());
        assert_eq!(RepositoryStore::InMemory, state.store);
    }

    #[tokio::test]
    async fn test_should_map_command_errors_to_console_messages() {
        assert_eq!("Book already exists!",
                   ConsoleError::from(CommandError::DuplicateKey { message: "dup".to_string() }));
        assert_eq!("Book not found.",
                   ConsoleError::from(CommandError::NotFound { message: "missing".to_string() }));
        assert_eq!("No copies available.",
                   ConsoleError::from(CommandError::NoCopies { message: "out".to_string() }));
        assert_eq!("All copies are already in library.",
                   ConsoleError::from(CommandError::AtCapacity { message: "full".to_string() }));
        assert_eq!("Copies must be greater than zero.",
                   ConsoleError::from(CommandError::Validation {
                       message: "invalid copies 0".to_string(),
                       reason_code: Some("copies".to_string()),
                   }));
        assert_eq!("bad field",
                   ConsoleError::from(CommandError::Validation {
                       message: "bad field".to_string(),
                       reason_code: None,
                   }));
    }
}
