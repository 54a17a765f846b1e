pub mod dashboard;
pub mod guidance;
pub mod init;
pub mod likes;
pub mod profile;
pub mod quiz;
pub mod search;
pub mod show;
pub mod validate;

/// Marker shown next to liked items.
pub(crate) fn like_marker(liked: bool) -> &'static str {
    if liked {
        "♥"
    } else {
        ""
    }
}
