//! Main menu choices

/// One numbered entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Display,
    Search,
    Delete,
    Update,
    Exit,
    /// Anything that is not a number from 1 to 6
    Invalid,
}

impl MenuChoice {
    /// Parse one line of menu input; never fails
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(1) => MenuChoice::Add,
            Ok(2) => MenuChoice::Display,
            Ok(3) => MenuChoice::Search,
            Ok(4) => MenuChoice::Delete,
            Ok(5) => MenuChoice::Update,
            Ok(6) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Menu text shown before every choice
pub const MENU: &str = "\n--- Phone Contact Management System ---\n\
1. Add Contact\n\
2. Display All Contacts\n\
3. Search Contact\n\
4. Delete Contact\n\
5. Update Contact\n\
6. Exit\n";
