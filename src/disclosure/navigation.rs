//! Roving focus arithmetic
//!
//! Positions are always derived from the list as rendered at event time.
//! Nothing here caches an index between events.

/// Position of `id` within the rendered ids
pub fn position_of(rendered: &[&str], id: &str) -> Option<usize> {
    rendered.iter().position(|candidate| *candidate == id)
}

/// Index before `index`, wrapping to the last element
///
/// Returns `None` only for an empty list.
pub fn previous_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match index.checked_sub(1) {
        Some(prev) if prev < len => Some(prev),
        _ => Some(len - 1),
    }
}

/// Index after `index`, wrapping to the first element
///
/// Returns `None` only for an empty list.
pub fn next_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match index.checked_add(1) {
        Some(next) if next < len => Some(next),
        _ => Some(0),
    }
}

/// Direction of an arrow key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Id that receives focus when moving from `current` in `direction`
pub fn step<'a>(rendered: &[&'a str], current: &str, direction: Direction) -> Option<&'a str> {
    let index = position_of(rendered, current)?;
    let target = match direction {
        Direction::Up => previous_index(index, rendered.len())?,
        Direction::Down => next_index(index, rendered.len())?,
    };
    rendered.get(target).copied()
}
