//! Index math for the infinite-scroll illusion.
//!
//! A circular carousel of N > 1 items is rendered as N + 2 slides: a clone
//! of the last item in front, the real items, and a clone of the first item
//! at the back. Render indices address that padded sequence; logical indices
//! address the caller's items.

/// Builds the render sequence for `items`.
///
/// `[last, items.., first]` when there are at least two items, otherwise a
/// plain copy.
pub fn build_render_sequence<T: Clone>(items: &[T]) -> Vec<T> {
    match (items.first(), items.last()) {
        (Some(first), Some(last)) if items.len() > 1 => {
            let mut sequence = Vec::with_capacity(items.len() + 2);
            sequence.push(last.clone());
            sequence.extend_from_slice(items);
            sequence.push(first.clone());
            sequence
        }
        _ => items.to_vec(),
    }
}

/// Length of the render sequence for `len` items.
pub fn render_len(len: usize) -> usize {
    if len > 1 {
        len + 2
    } else {
        len
    }
}

/// Render index of a logical index.
pub fn render_index_of(logical: usize, len: usize) -> usize {
    if len > 1 {
        logical + 1
    } else {
        logical
    }
}

/// Logical index of a render index; clones map to their real item.
///
/// Returns `None` for out-of-range render indices.
pub fn logical_index_of(render_index: usize, len: usize) -> Option<usize> {
    if render_index >= render_len(len) {
        return None;
    }
    if len <= 1 {
        return Some(render_index);
    }
    Some(match render_index {
        0 => len - 1,
        i if i == len + 1 => 0,
        i => i - 1,
    })
}

/// Converts a horizontal offset to the nearest render index.
///
/// Rounding artifacts (negative offsets, overscroll past the end, a
/// degenerate stride) are clamped into `[0, render_len - 1]`.
pub fn nearest_render_index(offset_x: f32, stride: f32, render_len: usize) -> usize {
    if render_len == 0 {
        return 0;
    }
    let max = render_len - 1;
    if !(stride.is_finite() && stride > 0.0) || !offset_x.is_finite() {
        return 0;
    }
    let raw = (offset_x / stride).round();
    if raw <= 0.0 {
        0
    } else if raw >= max as f32 {
        max
    } else {
        raw as usize
    }
}

/// Horizontal offset of a render index.
pub fn offset_of(render_index: usize, stride: f32) -> f32 {
    render_index as f32 * stride
}
