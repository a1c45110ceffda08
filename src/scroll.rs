/// Scroll offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_OFFSET: f64 = 250.0;

/// Portion of the scrollable range covered so far, in percent.
///
/// The scrollable range is the document height minus the viewport; a
/// non-positive range (nothing to scroll) reads as 0% rather than
/// dividing by zero.
pub fn progress_percent(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if scrollable > 0.0 {
        (scroll_top / scrollable) * 100.0
    } else {
        0.0
    }
}

pub fn back_to_top_visible(scroll_top: f64) -> bool {
    scroll_top > BACK_TO_TOP_OFFSET
}
