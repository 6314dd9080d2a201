use std::io::Write;

/// Scan a message one character at a time, emitting diagnostic lines to `out`.
///
/// Each `'` produces `Quote in message`, each `P` produces `P in message`
/// (a character matches at most one of the two, quote first), and every
/// character is followed by an unconditional `Hullo` line. Write failures
/// are discarded and the scan continues with the next character.
pub fn scan_message<W: Write>(message: &str, out: &mut W) {
    for ch in message.chars() {
        match ch {
            '\'' => {
                let _ = writeln!(out, "Quote in message");
            }
            'P' => {
                let _ = writeln!(out, "P in message");
            }
            _ => {}
        }
        let _ = writeln!(out, "Hullo");
    }
}
