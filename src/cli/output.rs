//! Output formatting utilities

use crate::domain::Contact;

const SEPARATOR: &str = "-------------------";

/// Format every contact for display, each followed by a separator line
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let mut output = String::from("\n--- Contact List ---\n");
    for contact in contacts {
        output.push_str(&format!("{}\n{}\n", contact, SEPARATOR));
    }
    output
}

/// Format the result of a name search
pub fn format_search_result(contact: Option<&Contact>) -> String {
    match contact {
        Some(contact) => format!("Contact Found:\n{}\n", contact),
        None => "Contact not found.\n".to_string(),
    }
}
