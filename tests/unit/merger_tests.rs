/*!
 * Tests for merging subtitle tracks
 */

use subjoin::merger::{merge, SubtitleMerger};
use subjoin::subtitle::Subtitle;

fn track(entries: &[(usize, f64, f64, &str)]) -> Vec<Subtitle> {
    entries
        .iter()
        .map(|&(index, start, end, text)| Subtitle::from_seconds(index, start, end, text))
        .collect()
}

/// Test the two-file example with a 100 ms buffer
#[test]
fn test_merge_withTwoSingleEntryFiles_shouldStartSecondAfterBuffer() {
    let first = track(&[(1, 1.0, 4.0, "First subtitle")]);
    let second = track(&[(1, 1.0, 5.0, "Second file subtitle")]);

    let merged = SubtitleMerger::new(100).merge(vec![first, second]);

    assert_eq!(merged.len(), 2);
    assert_eq!((merged[0].start_time(), merged[0].end_time()), (1.0, 4.0));
    assert_eq!((merged[1].start_time(), merged[1].end_time()), (4.1, 8.1));
    assert_eq!(merged[1].index(), 2);
}

/// Test that intra-file spacing is preserved after shifting
#[test]
fn test_merge_withMultiEntryFiles_shouldKeepInternalGaps() {
    let first = track(&[(1, 0.0, 2.0, "a"), (2, 3.0, 5.0, "b")]);
    let second = track(&[(1, 2.0, 3.0, "c"), (2, 7.5, 9.0, "d")]);

    let merged = merge(vec![first, second], 1000);

    // offset = 5.0 + 1.0 - 2.0 = 4.0
    let starts: Vec<u64> = merged.iter().map(Subtitle::start_ms).collect();
    assert_eq!(starts, vec![0, 3000, 6000, 11_500]);
    assert_eq!(merged[3].end_ms() - merged[2].start_ms(), 7000);
}

/// Test renumbering when inputs carry arbitrary indices
#[test]
fn test_merge_withIndicesFiveTwelveThree_shouldRenumberOneToThree() {
    let merged = merge(
        vec![
            track(&[(5, 0.0, 1.0, "x")]),
            track(&[(12, 0.0, 1.0, "y")]),
            track(&[(3, 0.0, 1.0, "z")]),
        ],
        100,
    );

    let indices: Vec<usize> = merged.iter().map(Subtitle::index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    let texts: Vec<&str> = merged.iter().map(Subtitle::text).collect();
    assert_eq!(texts, vec!["x", "y", "z"]);
}

/// Test that a zero buffer butts files against each other
#[test]
fn test_merge_withZeroBuffer_shouldStartAtPreviousEnd() {
    let merged = merge(vec![track(&[(1, 0.5, 2.0, "a")]), track(&[(1, 0.0, 1.0, "b")])], 0);

    assert_eq!(merged[1].start_ms(), merged[0].end_ms());
}

/// Test that a file already far enough in the future is left alone
#[test]
fn test_merge_withGapAlreadySatisfied_shouldNotShift() {
    let merged = merge(vec![track(&[(1, 0.5, 2.0, "a")]), track(&[(1, 30.0, 31.0, "b")])], 100);

    assert_eq!(merged[1].start_time(), 30.0);
    assert_eq!(merged[1].end_time(), 31.0);
}

/// Test empty input
#[test]
fn test_merge_withNoSequences_shouldReturnEmpty() {
    assert!(merge(Vec::new(), 100).is_empty());
}
