// src/stats/mod.rs
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::mbnet::models::DrawRecord;
use crate::utils::error::StatsError;

/// Index of the first draw published on `date`, if any.
///
/// `draws` must already be sorted by sequence number; the aggregation below
/// treats index order as chronological order.
pub fn find_draw_index(date: NaiveDate, draws: &[DrawRecord]) -> Option<usize> {
    draws.iter().position(|draw| draw.date == date)
}

/// Tallies how often each number in `[min_number, max_number]` was drawn
/// between `start_date` and `end_date`, both boundary draws included.
///
/// Every number of the counted range appears in the result, zero when never
/// drawn; numbers outside the range are ignored. Both boundary dates must
/// match a published draw, otherwise the whole computation fails - there is
/// no fallback to the nearest available date.
pub fn number_frequencies(
    start_date: NaiveDate,
    end_date: NaiveDate,
    min_number: u32,
    max_number: u32,
    draws: &[DrawRecord],
) -> Result<HashMap<u32, u32>, StatsError> {
    let start_index = find_draw_index(start_date, draws).ok_or_else(|| {
        tracing::error!("cannot find draw from day {}", start_date);
        StatsError::DrawNotFound(start_date)
    })?;

    let end_index = find_draw_index(end_date, draws).ok_or_else(|| {
        tracing::error!("cannot find draw from day {}", end_date);
        StatsError::DrawNotFound(end_date)
    })?;

    let mut frequencies: HashMap<u32, u32> = (min_number..=max_number)
        .map(|number| (number, 0))
        .collect();

    if start_index <= end_index {
        for draw in &draws[start_index..=end_index] {
            for number in draw.numbers {
                // Numbers outside [min, max] have no bucket and stay uncounted.
                if let Some(count) = frequencies.get_mut(&number) {
                    *count += 1;
                }
            }
        }
    }

    Ok(frequencies)
}

/// Orders a frequency table by count, most frequent first. Equal counts are
/// ordered by ascending number, so the ranking is deterministic across runs.
pub fn rank_frequencies(frequencies: &HashMap<u32, u32>) -> Vec<(u32, u32)> {
    let mut ranked: Vec<(u32, u32)> = frequencies
        .iter()
        .map(|(&number, &count)| (number, count))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// Renders a ranked table as aligned text, one line per number: the number
/// right-justified, its count right-justified with a trailing `x`, then a bar
/// of one asterisk per occurrence.
///
/// Column widths come from the widest number and count present, so the full
/// ranked sequence is needed up front.
pub fn render_table(ranked: &[(u32, u32)]) -> String {
    let max_number = ranked.iter().map(|&(number, _)| number).max().unwrap_or(0);
    let max_count = ranked.iter().map(|&(_, count)| count).max().unwrap_or(0);

    let number_width = max_number.to_string().len();
    let count_width = max_count.to_string().len();

    let mut table = String::new();
    for &(number, count) in ranked {
        let bar = "*".repeat(count as usize);
        table.push_str(&format!(
            "{number:>number_width$}   {count:>count_width$}x      {bar}\n"
        ));
    }

    table
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn draw(seq_no: u32, on: NaiveDate, numbers: [u32; 6]) -> DrawRecord {
        DrawRecord {
            seq_no,
            date: on,
            numbers,
        }
    }

    fn january_draws() -> Vec<DrawRecord> {
        vec![
            draw(1, date(2024, 1, 1), [1, 2, 3, 4, 5, 6]),
            draw(2, date(2024, 1, 2), [1, 2, 3, 4, 5, 7]),
            draw(3, date(2024, 1, 3), [1, 2, 3, 4, 5, 8]),
        ]
    }

    #[test]
    fn finds_the_first_draw_matching_a_date() {
        let draws = january_draws();

        assert_eq!(find_draw_index(date(2024, 1, 2), &draws), Some(1));
        assert_eq!(find_draw_index(date(2024, 1, 4), &draws), None);
    }

    #[test]
    fn single_day_window_counts_exactly_one_draw() {
        let draws = january_draws();

        let frequencies =
            number_frequencies(date(2024, 1, 2), date(2024, 1, 2), 1, 8, &draws).unwrap();

        assert_eq!(frequencies[&1], 1);
        assert_eq!(frequencies[&5], 1);
        assert_eq!(frequencies[&7], 1);
        assert_eq!(frequencies[&6], 0);
        assert_eq!(frequencies.values().sum::<u32>(), 6);
    }

    #[test]
    fn missing_start_boundary_fails_even_with_data_in_range() {
        let draws = january_draws();

        let result = number_frequencies(date(2023, 12, 31), date(2024, 1, 3), 1, 8, &draws);

        assert!(matches!(result, Err(StatsError::DrawNotFound(d)) if d == date(2023, 12, 31)));
    }

    #[test]
    fn missing_end_boundary_fails_even_with_data_in_range() {
        let draws = january_draws();

        let result = number_frequencies(date(2024, 1, 1), date(2024, 1, 4), 1, 8, &draws);

        assert!(matches!(result, Err(StatsError::DrawNotFound(d)) if d == date(2024, 1, 4)));
    }

    #[test]
    fn table_covers_exactly_the_configured_range() {
        let draws = january_draws();

        let frequencies =
            number_frequencies(date(2024, 1, 1), date(2024, 1, 3), 1, 10, &draws).unwrap();

        assert_eq!(frequencies.len(), 10);
        for number in 1..=10 {
            assert!(frequencies.contains_key(&number));
        }
        assert_eq!(frequencies[&9], 0);
        assert_eq!(frequencies[&10], 0);
        assert!(!frequencies.contains_key(&0));
        assert!(!frequencies.contains_key(&11));
    }

    #[test]
    fn out_of_range_numbers_are_ignored() {
        let draws = vec![draw(1, date(2024, 1, 1), [1, 2, 3, 50, 60, 70])];

        let frequencies =
            number_frequencies(date(2024, 1, 1), date(2024, 1, 1), 1, 49, &draws).unwrap();

        assert_eq!(frequencies.values().sum::<u32>(), 3);
        assert!(!frequencies.contains_key(&50));
    }

    #[test]
    fn count_sum_is_six_per_draw_in_window() {
        let draws = january_draws();

        let frequencies =
            number_frequencies(date(2024, 1, 1), date(2024, 1, 3), 1, 8, &draws).unwrap();

        assert_eq!(frequencies.values().sum::<u32>(), 6 * 3);
    }

    #[test]
    fn ranking_descends_by_count_then_ascends_by_number() {
        let draws = january_draws();

        let frequencies =
            number_frequencies(date(2024, 1, 1), date(2024, 1, 3), 1, 8, &draws).unwrap();
        let ranked = rank_frequencies(&frequencies);

        assert_eq!(
            ranked,
            vec![
                (1, 3),
                (2, 3),
                (3, 3),
                (4, 3),
                (5, 3),
                (6, 1),
                (7, 1),
                (8, 1),
            ]
        );

        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn renders_an_aligned_table_with_bars() {
        let ranked = vec![(7, 12), (10, 3), (2, 0)];

        let table = render_table(&ranked);

        let expected = concat!(
            " 7   12x      ************\n",
            "10    3x      ***\n",
            " 2    0x      \n",
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn renders_nothing_for_an_empty_ranking() {
        assert_eq!(render_table(&[]), "");
    }
}
