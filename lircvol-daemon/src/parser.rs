//! Parsing of lircd key-press notification lines

/// Extracts the key token from one lircd line.
///
/// lircd lines look like `"<id> <repeat> <key> <remote>"`; fields after the
/// key are free-form and ignored. Returns `None` for lines with fewer than
/// two spaces (or a non-UTF-8 key) — such lines are silently skipped, they
/// are not an error.
pub fn parse_key(line: &[u8]) -> Option<&str> {
    let after_id = &line[find_space(line)? + 1..];
    let after_repeat = &after_id[find_space(after_id)? + 1..];
    let key = match find_space(after_repeat) {
        Some(end) => &after_repeat[..end],
        None => after_repeat,
    };
    std::str::from_utf8(key).ok()
}

fn find_space(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b' ')
}
