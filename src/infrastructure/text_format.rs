//! Line-oriented text format of the contacts file
//!
//! Each record is exactly three lines in the fixed order name, phone, email.
//! Nothing is escaped: a field containing a newline shifts every following
//! record when read back.

use crate::domain::Contact;
use std::io::BufRead;
use tracing::warn;

/// Number of lines making up one record
pub const LINES_PER_RECORD: usize = 3;

/// Result of decoding a contacts file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Complete records in file order
    pub contacts: Vec<Contact>,
    /// Lines of a trailing partial record that were dropped
    pub discarded_lines: usize,
}

/// Serialize contacts in the given order, three newline-terminated lines each
pub fn encode_contacts<'a, I>(contacts: I) -> String
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut output = String::new();
    for contact in contacts {
        output.push_str(&contact.name);
        output.push('\n');
        output.push_str(&contact.phone);
        output.push('\n');
        output.push_str(&contact.email);
        output.push('\n');
    }
    output
}

/// Read records of three consecutive lines.
///
/// Only the `\n` terminator is removed, mirroring `encode_contacts`. Bytes
/// that are not valid UTF-8 are replaced rather than ending the read.
/// Reading stops at end of input or at the first I/O error; whatever is left
/// over after the last complete record is discarded.
pub fn decode_contacts<R: BufRead>(mut reader: R) -> Decoded {
    let mut decoded = Decoded::default();
    let mut pending: Vec<String> = Vec::with_capacity(LINES_PER_RECORD);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "stopped reading contacts file");
                break;
            }
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let line = String::from_utf8_lossy(&buf).into_owned();

        pending.push(line);
        if pending.len() == LINES_PER_RECORD {
            let mut fields = pending.drain(..);
            if let (Some(name), Some(phone), Some(email)) =
                (fields.next(), fields.next(), fields.next())
            {
                decoded.contacts.push(Contact::new(name, phone, email));
            }
        }
    }

    decoded.discarded_lines = pending.len();
    if decoded.discarded_lines > 0 {
        warn!(
            lines = decoded.discarded_lines,
            "discarded incomplete trailing record"
        );
    }

    decoded
}
