use matching_end_engine::{
    MatchingEndFinder, NO_MATCH, Needle, Strategy, count_occurrences, find_matching_end,
    matching_end_index,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::nested_returns_outer("{{", "}}", "{{a{{b}}c}}", 2, Some(9))]
#[case::adjacent("{{", "}}", "{{}}", 2, Some(2))]
#[case::unbalanced("{{", "}}", "{{a", 2, None)]
#[case::inner_opener("{{", "}}", "{{a{{b}}c}}", 5, Some(6))]
#[case::single_char_markers("(", ")", "(a(b)c)", 1, Some(6))]
#[case::comment_markers("<!--", "-->", "<!--a<!--b-->c-->", 4, Some(14))]
#[case::end_short_only("[", "]]", "[a[b]]c]]", 1, Some(7))]
#[case::past_end("{{", "}}", "{{}}", 9, None)]
#[case::empty_text("{{", "}}", "", 0, None)]
fn finds_matching_end(
    #[case] start: &str,
    #[case] end: &str,
    #[case] text: &str,
    #[case] after_start: usize,
    #[case] expected: Option<usize>,
) {
    assert_eq!(find_matching_end(start, end, text, after_start), expected);
}

#[rstest]
#[case(-1)]
#[case(-2)]
#[case(i64::MIN)]
fn negative_start_is_no_match(#[case] after_start: i64) {
    assert_eq!(matching_end_index("{{", "}}", "{{a}}", after_start), NO_MATCH);
    assert_eq!(matching_end_index("<%", "%>", "<%a%>", after_start), NO_MATCH);
}

/// Every opener in a balanced text closes at its own closer.
#[test]
fn balanced_text_every_opener_finds_own_closer() {
    // Closer index for each opener, worked out by hand.
    let text = "{{a{{b}}{{c{{d}}}}e}}";
    let openers = [0, 3, 8, 11];
    let closers = [19, 6, 16, 14];
    for (open, close) in openers.iter().zip(closers) {
        assert_eq!(
            find_matching_end("{{", "}}", text, open + 2),
            Some(close),
            "opener at {open}"
        );
    }
}

/// Short and long scans agree on the same nesting structure.
#[rstest]
#[case("{{}}")]
#[case("{{a{{b}}c}}")]
#[case("{{a{{b}}{{c}}d}}")]
#[case("{{{{{{x}}}}}}")]
#[case("{{a}}{{b}}")]
#[case("{{a{{b}}")]
fn short_and_long_agree(#[case] template: &str) {
    let short_text = template.replace("{{", "((").replace("}}", "))");
    let long_text = template.replace("{{", "<%").replace("}}", "%>");
    assert!(matches!(
        MatchingEndFinder::new("((", "))").unwrap().strategy(),
        Strategy::Short { .. }
    ));
    assert_eq!(
        MatchingEndFinder::new("<%", "%>").unwrap().strategy(),
        Strategy::Long
    );
    assert_eq!(
        find_matching_end("((", "))", &short_text, 2),
        find_matching_end("<%", "%>", &long_text, 2),
        "template {template}"
    );
}

#[test]
fn repeated_calls_agree() {
    let text = "{{a{{b}}c}} {{d}}";
    let first = find_matching_end("{{", "}}", text, 2);
    for _ in 0..3 {
        assert_eq!(find_matching_end("{{", "}}", text, 2), first);
    }
    let finder = MatchingEndFinder::new("{{", "}}").unwrap();
    assert_eq!(finder.find(text, 2), first);
    assert_eq!(finder.find(text, 2), first);
}

#[test]
fn overlapping_needles_are_not_counted() {
    assert_eq!(count_occurrences("aaaa", 0, 4, Needle::Str("aa")), 2);
}

#[test]
fn results_are_char_boundaries() {
    let text = "««x ««ü»» y»»";
    let found = find_matching_end("««", "»»", text, "««".len()).unwrap();
    assert!(text.is_char_boundary(found));
    assert_eq!(&text[found..], "»»");
}

#[test]
fn mid_char_start_is_moved_forward() {
    // Offset 3 is inside the second '«'; scanning starts at 4 instead.
    assert_eq!(find_matching_end("««", "»»", "««x»»", 3), Some(5));
}

#[test]
fn finder_and_free_function_agree() {
    let finder = MatchingEndFinder::new("<!--", "-->").unwrap();
    let text = "<!--a<!--b-->c-->";
    assert_eq!(finder.find(text, 4), find_matching_end("<!--", "-->", text, 4));
}
