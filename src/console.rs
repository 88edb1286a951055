use std::fmt;
use std::fmt::{Display, Formatter};

pub mod menu;
pub mod prompt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum MenuChoice {
    AddBook,
    CheckAvailability,
    IssueBook,
    ReturnBook,
    ListBooks,
    Exit,
    Unknown,
}

impl From<i64> for MenuChoice {
    fn from(n: i64) -> Self {
        match n {
            1 => MenuChoice::AddBook,
            2 => MenuChoice::CheckAvailability,
            3 => MenuChoice::IssueBook,
            4 => MenuChoice::ReturnBook,
            5 => MenuChoice::ListBooks,
            6 => MenuChoice::Exit,
            _ => MenuChoice::Unknown,
        }
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MenuChoice::AddBook => write!(f, "Add Book"),
            MenuChoice::CheckAvailability => write!(f, "Check Availability"),
            MenuChoice::IssueBook => write!(f, "Issue Book"),
            MenuChoice::ReturnBook => write!(f, "Return Book"),
            MenuChoice::ListBooks => write!(f, "Display All Books"),
            MenuChoice::Exit => write!(f, "Exit"),
            MenuChoice::Unknown => write!(f, "Unknown"),
        }
    }
}
