//! Masked secret entry.

use std::io::BufRead;

use console::{Key, Term};
use zeroize::Zeroizing;

use crate::error::{Result, SafeviewError};
use crate::secrets::SecretString;

use super::theme::SafeviewTheme;

/// Character echoed for every typed character.
pub const MASK_CHAR: char = '*';

/// End-of-transmission, sent by Ctrl-D in raw mode.
const EOT: char = '\u{4}';

/// What a single key press did to the entry buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyStep {
    Typed,
    Erased,
    Ignored,
    Submit,
    Cancel,
}

/// Apply one key press to `input`.
fn apply_key(input: &mut String, key: Key) -> KeyStep {
    match key {
        Key::Enter | Key::Char(EOT) => KeyStep::Submit,
        Key::CtrlC => KeyStep::Cancel,
        Key::Backspace => match input.pop() {
            Some(_) => KeyStep::Erased,
            None => KeyStep::Ignored,
        },
        Key::Char(c) if !c.is_control() => {
            input.push(c);
            KeyStep::Typed
        }
        _ => KeyStep::Ignored,
    }
}

/// Read a secret key by key, echoing [`MASK_CHAR`] instead of the input.
///
/// Enter or Ctrl-D finishes; Backspace erases the last character; Ctrl-C
/// cancels. Keys are read raw so Ctrl-C reaches us instead of raising
/// SIGINT.
pub fn read_masked(term: &Term, question: &str, theme: &SafeviewTheme) -> Result<SecretString> {
    term.write_str(&format!("{} ", theme.prompt.apply_to(question)))?;
    term.flush()?;

    let mut input = Zeroizing::new(String::new());
    loop {
        match apply_key(&mut input, term.read_key_raw()?) {
            KeyStep::Submit => break,
            KeyStep::Cancel => {
                term.write_line("")?;
                return Err(SafeviewError::PromptCancelled);
            }
            KeyStep::Typed => {
                term.write_str(&theme.mask.apply_to(MASK_CHAR).to_string())?;
            }
            KeyStep::Erased => term.clear_chars(1)?,
            KeyStep::Ignored => {}
        }
        term.flush()?;
    }

    term.write_line("")?;
    Ok(SecretString::new(std::mem::take(&mut *input)))
}

/// Read a secret as one line from `reader`.
///
/// The line terminator is dropped; nothing else is trimmed. Invalid UTF-8
/// is replaced rather than rejected. End-of-input yields an empty secret.
pub fn read_line_secret(reader: &mut dyn BufRead) -> Result<SecretString> {
    let mut line = Zeroizing::new(Vec::new());
    reader.read_until(b'\n', &mut line)?;

    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }
    Ok(SecretString::new(String::from_utf8_lossy(&line).into_owned()))
}
