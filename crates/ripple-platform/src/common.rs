use crate::*;

pub(crate) fn hit_by_id(frame: &Frame, id: u64) -> Option<&HitRegion> {
    frame.hit_regions.iter().find(|h| h.id == id)
}

/// Parses one line of terminal input.
///
/// Accepts `click <id>`, `c <id>`, a bare `<id>`, `redraw` / `r` and
/// `quit` / `q` / `exit`.
pub fn parse_command(line: &str) -> Result<HostEvent, HostError> {
    let unknown = || HostError::UnknownCommand(line.trim().to_string());
    let mut words = line.split_whitespace();
    let first = words.next().ok_or_else(unknown)?;
    let rest = words.next();
    if words.next().is_some() {
        return Err(unknown());
    }

    match (first, rest) {
        ("click" | "c", Some(id)) => id.parse().map(HostEvent::Click).map_err(|_| unknown()),
        ("redraw" | "r", None) => Ok(HostEvent::Redraw),
        ("quit" | "q" | "exit", None) => Ok(HostEvent::Quit),
        (id, None) => id.parse().map(HostEvent::Click).map_err(|_| unknown()),
        _ => Err(unknown()),
    }
}
