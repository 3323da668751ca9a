// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Failure path cleaning
//!
//! Xcode Server checks sources out under a per-bot directory, so failure
//! locations arrive as absolute paths such as
//! `/Library/Developer/XcodeServer/Integrations/Caches/XCSBuilder/Bots/<bot-id>/Source/<project>/Common/Unit Tests/Foo.swift`.
//! [`clean_file_name`] strips the checkout prefix together with the first
//! directory inside the project, leaving `Unit Tests/Foo.swift`.

use std::borrow::Cow;

/// Directory component that marks the start of a bot checkout
pub const BUILDER_MARKER: &str = "XCSBuilder";

/// Component expected immediately after [`BUILDER_MARKER`]
pub const BOTS_MARKER: &str = "Bots";

/// Offset from the marker of the last dropped component:
/// `XCSBuilder/Bots/<bot-id>/Source/<project>/<folder>`
pub const PREFIX_OFFSET: usize = 5;

/// Strip the bot checkout prefix from a failure file name
///
/// Returns the input unchanged when it does not contain an
/// `XCSBuilder/Bots` pair, or when nothing but empty components would
/// remain after the prefix.
///
/// ```
/// use xcbot_results::path::clean_file_name;
///
/// let raw = "/x/XCSBuilder/Bots/abc123/Source/Proj/Common/Unit Tests/Foo.swift";
/// assert_eq!(clean_file_name(raw), "Unit Tests/Foo.swift");
/// assert_eq!(clean_file_name("Sources/Foo.swift"), "Sources/Foo.swift");
/// ```
#[must_use]
pub fn clean_file_name(file_name: &str) -> Cow<'_, str> {
    let components: Vec<&str> = file_name.split('/').collect();

    let Some(marker) = components.iter().position(|c| *c == BUILDER_MARKER) else {
        return Cow::Borrowed(file_name);
    };
    if components.get(marker + 1) != Some(&BOTS_MARKER) {
        return Cow::Borrowed(file_name);
    }

    let start = marker + PREFIX_OFFSET + 1;
    let tail = components.get(start..).unwrap_or_default();
    if tail.iter().all(|c| c.is_empty()) {
        return Cow::Borrowed(file_name);
    }

    Cow::Owned(tail.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_clean_bot_path() {
        assert_eq!(
            clean_file_name("/x/XCSBuilder/Bots/id1/Source/P/M/Unit Tests/T.swift"),
            "Unit Tests/T.swift"
        );
    }

    #[test]
    fn test_clean_keeps_path_after_project() {
        let raw = "/Library/Developer/XcodeServer/Integrations/Caches/XCSBuilder/Bots/98677bd28b34731516fbc5e26d2f70c4/Source/MacDesigner/Common/Unit Tests/LayoutTests.swift";
        assert_eq!(clean_file_name(raw), "Unit Tests/LayoutTests.swift");
    }

    #[test]
    fn test_clean_without_marker_is_identity() {
        let raw = "/Users/dev/Project/Tests/FooTests.swift";
        assert!(matches!(clean_file_name(raw), Cow::Borrowed(_)));
        assert_eq!(clean_file_name(raw), raw);
    }

    #[test]
    fn test_clean_requires_bots_after_marker() {
        let raw = "/x/XCSBuilder/Other/id1/Source/P/T.swift";
        assert_eq!(clean_file_name(raw), raw);
    }

    #[test]
    fn test_clean_marker_as_last_component() {
        assert_eq!(clean_file_name("/x/XCSBuilder"), "/x/XCSBuilder");
    }

    #[test]
    fn test_clean_short_path_is_unchanged() {
        assert_eq!(
            clean_file_name("/x/XCSBuilder/Bots/id1/Source/P/M"),
            "/x/XCSBuilder/Bots/id1/Source/P/M"
        );
        assert_eq!(
            clean_file_name("XCSBuilder/Bots/id1"),
            "XCSBuilder/Bots/id1"
        );
    }

    #[test]
    fn test_clean_trailing_slash_short_path() {
        for raw in [
            "/x/XCSBuilder/Bots/id1/Source/P/M/",
            "/x/XCSBuilder/Bots/id1/Source/P/M//",
        ] {
            assert_eq!(clean_file_name(raw), raw);
        }
    }

    #[test]
    fn test_clean_uses_first_marker() {
        assert_eq!(
            clean_file_name("XCSBuilder/Bots/a/Source/P/M/XCSBuilder/Bots/T.swift"),
            "XCSBuilder/Bots/T.swift"
        );
    }

    #[test]
    fn test_clean_marker_must_be_whole_component() {
        let raw = "/x/MyXCSBuilder/Bots/id1/Source/P/T.swift";
        assert_eq!(clean_file_name(raw), raw);
    }

    #[test]
    fn test_clean_empty_string() {
        assert_eq!(clean_file_name(""), "");
    }
}
