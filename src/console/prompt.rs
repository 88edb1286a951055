use crate::console::MenuChoice;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) fn parse_choice(line: &str) -> LibraryResult<MenuChoice> {
    let n: i64 = line.trim().parse().map_err(|_| {
        LibraryError::malformed_input(format!("not a number {:?}", line).as_str())
    })?;
    Ok(MenuChoice::from(n))
}

pub(crate) fn parse_copies(line: &str) -> LibraryResult<i64> {
    line.trim().parse().map_err(|_| {
        LibraryError::malformed_input(format!("not a number {:?}", line).as_str())
    })
}
