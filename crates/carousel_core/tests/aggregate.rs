use carousel_core::{
    aggregate, filter_entries, rating_average, rating_distribution, word_cloud, CoreError,
    FeedEntry, Palette, Rating, WORD_CLOUD_LIMIT,
};
use pretty_assertions::assert_eq;

fn entry(rating: u8, content: &str) -> FeedEntry {
    FeedEntry::new(Rating::new(rating).unwrap(), "someone", content)
}

fn ratings(values: &[u8]) -> Vec<FeedEntry> {
    values.iter().map(|&r| entry(r, "")).collect()
}

#[test]
fn rating_rejects_out_of_range_values() {
    assert!(Rating::new(0).is_none());
    assert!(Rating::new(6).is_none());
    assert_eq!(Rating::new(3).map(Rating::value), Some(3));
}

#[test]
fn happy_mode_keeps_only_ratings_above_two_in_order() {
    let input = vec![
        entry(1, "a"),
        entry(4, "b"),
        entry(2, "c"),
        entry(3, "d"),
        entry(5, "e"),
    ];

    let happy = filter_entries(&input, true);
    let contents: Vec<_> = happy.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["b", "d", "e"]);
    assert!(happy.iter().all(|e| e.rating.value() > 2));

    assert_eq!(filter_entries(&input, false), input);
}

#[test]
fn happy_mode_still_counts_low_ratings_in_statistics() {
    let input = ratings(&[1, 5]);
    let result = aggregate(&input, true, &Palette::default()).unwrap();

    assert_eq!(result.entries.len(), 1);
    let counted: u32 = result.distribution.iter().map(|b| b.count).sum();
    assert_eq!(counted, 2);
    assert_eq!(result.average, 3.0);
}

#[test]
fn repeated_words_double_their_weight() {
    let input = vec![
        entry(5, "Great great GREAT app"),
        entry(4, "Great stuff, really great."),
        entry(3, "great"),
    ];

    let cloud = word_cloud(&input);
    let weight_of = |word: &str| cloud.iter().find(|w| w.word == word).map(|w| w.weight);

    // "great" x3, "Great" x2: case-sensitive keys.
    assert_eq!(weight_of("great"), Some(5.0 * 2f64.powi(2)));
    assert_eq!(weight_of("Great"), Some(10.0));
    assert_eq!(weight_of("GREAT"), Some(5.0));
    assert_eq!(weight_of("stuff"), Some(5.0));
    // Too short.
    assert_eq!(weight_of("app"), None);
    assert_eq!(cloud[0].word, "great");
}

#[test]
fn word_cloud_ties_keep_first_occurrence_order() {
    let input = vec![entry(5, "zebra apple mango"), entry(4, "apple")];

    let words: Vec<_> = word_cloud(&input).into_iter().map(|w| w.word).collect();
    assert_eq!(words, vec!["apple", "zebra", "mango"]);
}

#[test]
fn word_cloud_is_capped_and_sorted() {
    let text: String = (0..300)
        .map(|i| format!("word{} ", "x".repeat(i % 7)))
        .chain((0..250).map(|i| format!("{} ", letters_for(i))))
        .collect();
    let input = vec![entry(5, &text)];

    let cloud = word_cloud(&input);
    assert_eq!(cloud.len(), WORD_CLOUD_LIMIT);
    assert!(cloud.windows(2).all(|pair| pair[0].weight >= pair[1].weight));
}

fn letters_for(mut i: usize) -> String {
    let mut out = String::from("uniq");
    loop {
        out.push((b'a' + (i % 26) as u8) as char);
        i /= 26;
        if i == 0 {
            break;
        }
    }
    out
}

#[test]
fn distribution_matches_reference_example() {
    let palette = Palette::default();
    let input = ratings(&[5, 5, 4, 3]);

    let result = aggregate(&input, false, &palette).unwrap();
    let buckets: Vec<_> = result
        .distribution
        .iter()
        .map(|b| (b.rating.value(), b.count, b.color.clone()))
        .collect();

    assert_eq!(
        buckets,
        vec![
            (3, 1, palette.colors()[2].clone()),
            (4, 1, palette.colors()[3].clone()),
            (5, 2, palette.colors()[4].clone()),
        ]
    );
    assert_eq!(result.average, 4.25);
}

#[test]
fn distribution_counts_every_entry_ascending() {
    let input = ratings(&[2, 1, 5, 1, 2, 2]);
    let buckets = rating_distribution(&input, &Palette::default());

    let pairs: Vec<_> = buckets.iter().map(|b| (b.rating.value(), b.count)).collect();
    assert_eq!(pairs, vec![(1, 2), (2, 3), (5, 1)]);
    assert_eq!(buckets.iter().map(|b| b.count).sum::<u32>(), 6);
}

#[test]
fn empty_feed_is_an_invalid_aggregation() {
    assert_eq!(
        aggregate(&[], false, &Palette::default()),
        Err(CoreError::InvalidAggregation)
    );
    assert_eq!(rating_average(&[]), Err(CoreError::InvalidAggregation));
}

#[test]
fn aggregate_is_idempotent() {
    let input = vec![
        entry(5, "Lovely lovely lovely"),
        entry(1, "Crashes every time, crashes!"),
        entry(3, "Okay I guess, could be better"),
    ];
    let palette = Palette::default();

    let first = aggregate(&input, true, &palette).unwrap();
    let second = aggregate(&input, true, &palette).unwrap();
    assert_eq!(first, second);
}
