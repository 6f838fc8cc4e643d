//! Vertical centering of a text block within its card frame

/// Compute the top padding that centers a measured text block in a cell.
///
/// `existing_top_pad` and `existing_bottom_pad` are the frame's base
/// paddings, passed fresh for every frame; the returned value applies to the
/// current frame only and is never carried over to the next one.
///
/// Note: only the top padding moves. The bottom padding keeps its prior
/// value, and the free-space term picks up the border padding twice plus a
/// one-point bias, so the result is not a symmetric center. This reproduces
/// the original layout formula verbatim; changing it shifts every text
/// frame in existing documents.
pub fn vertical_padding(
    cell_height: f32,
    measured_content_height: f32,
    existing_top_pad: f32,
    existing_bottom_pad: f32,
    border_pad: f32,
) -> f32 {
    let mut free_space = cell_height - existing_top_pad - existing_bottom_pad
        - measured_content_height
        + 2.0 * border_pad
        + 1.0;
    free_space += 2.0 * border_pad;
    free_space / 2.0
}
