//! Namespace tracking during descent.
//!
//! Entering an `<svg>` element from HTML switches to the SVG space for the
//! element and its descendants. The space is passed down by value, so
//! siblings always start from their parent's space.

use hyperhast_core::Space;

/// Tag that opens the SVG space
pub const SVG_ROOT: &str = "svg";

/// Space in effect for an element named `tag_name` whose parent is in `parent`
pub fn enter(parent: Space, tag_name: &str) -> Space {
    if parent == Space::Html && tag_name.eq_ignore_ascii_case(SVG_ROOT) {
        Space::Svg
    } else {
        parent
    }
}
