use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that ErrorLocation renders as "[file:line:column]".
///
/// **WHY THIS MATTERS**: Every error in the workspace appends its location to the
/// message. A broken Display impl makes API failures impossible to trace back to
/// the resource call that raised them.
///
/// **BUG THIS CATCHES**: Would catch if the brackets, the file name or the
/// line/column separators disappear from the Display output.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation captured here
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: Should produce "[file:line:column]"
    assert!(formatted.starts_with('['));
    assert!(formatted.ends_with(']'));
    assert!(formatted.contains(location.file));
    assert_eq!(formatted.matches(':').count(), 2);
}

/// **VALUE**: Verifies that `#[track_caller]` helpers report their call sites.
///
/// **WHY THIS MATTERS**: Error constructors across the client are `#[track_caller]`.
/// If propagation broke, every error would point at the constructor instead of the
/// failing call.
///
/// **BUG THIS CATCHES**: Would catch if `ErrorLocation::from` stopped using the
/// propagated caller location.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    let first = capture_location();
    let second = capture_location();

    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line);
}
