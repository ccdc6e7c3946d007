use crate::leaderboard::member::{Member, ADVENT_DAYS};
use crate::util::dates;
use crate::{fmt, str};

/// Characters on a body line before the star strip starts:
/// rank (3) + ") " (2) + score (4) + space (1).
const STRIP_LEFT_PAD: usize = 3 + 2 + 4 + 1;

const DAY_SECONDS: i64 = 24 * 3600;

fn star_char(num_stars: usize) -> char {
    match num_stars {
        0 => ' ',
        1 => '.',
        2 => '*',
        _ => unreachable!("a day holds at most two stars"),
    }
}

/// Full leaderboard: a two-line day-number header, then one line per
/// member with rank, score, a 25-character star strip, and name.
///
///   1)  751 ****************          Cameron Aavik
pub fn format_full(ranked: &[Member]) -> String {
    let left_pad = " ".repeat(STRIP_LEFT_PAD);
    let header = fmt!(
        "{left_pad}         1111111111222222\n{left_pad}1234567890123456789012345\n"
    );

    let body: Vec<String> = ranked
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let strip: String = (1..=ADVENT_DAYS)
                .map(|d| star_char(m.stars_for_day(d)))
                .collect();
            fmt!("{:>3}) {:>4} {} {}", i + 1, m.score, strip, m.name)
        })
        .collect();

    header + &body.join("\n")
}

/// Single-day leaderboard: elapsed times for both parts and the delta,
/// measured from the puzzle's unlock instant.
///
///   1) 00:12:03 00:25:17  00:13:14  Name
pub fn format_day(ranked: &[Member], year: i32, day: usize) -> String {
    let day_start = dates::puzzle_day_start(year, day);
    let header = "      Part 1   Part 2     Delta \n";

    let body: Vec<String> = ranked
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let part_1 = format_timestamp(m.part_time(day, 1), day_start);
            let part_2 = format_timestamp(m.part_time(day, 2), day_start);
            let delta = format_elapsed(m.delta(day));
            fmt!("{:>3}) {:>8} {:>8}  {:>8}  {}", i + 1, part_1, part_2, delta, m.name)
        })
        .collect();

    header.to_string() + &body.join("\n")
}

/// Elapsed seconds as `H:MM:SS` with unpadded hours; `>24h` past a
/// full day; empty when undefined.
fn format_elapsed(seconds: Option<i64>) -> String {
    match seconds {
        None => String::new(),
        Some(s) if s > DAY_SECONDS => str!(">24h"),
        Some(s) => fmt!("{}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60),
    }
}

fn format_timestamp(timestamp: Option<i64>, day_start: i64) -> String {
    format_elapsed(timestamp.map(|t| t - day_start))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::util::dates::puzzle_day_start;

    fn member(name: &str, score: i64, times: &[(usize, usize, i64)]) -> Member {
        let mut completion = serde_json::Map::new();
        for &(day, star, ts) in times {
            let day_entry = completion
                .entry(day.to_string())
                .or_insert_with(|| json!({}));
            day_entry[star.to_string()] = json!({ "get_star_ts": ts });
        }

        Member::from_raw_record(
            name,
            &json!({
                "name": name,
                "local_score": score,
                "stars": 0,
                "completion_day_level": completion,
            }),
        )
        .unwrap()
    }

    #[test]
    fn full_output_has_two_header_lines_and_one_line_per_member() {
        let members = vec![
            member("Alpha", 120, &[(1, 1, 100), (1, 2, 200)]),
            member("Beta", 80, &[(2, 1, 100)]),
            member("Gamma", 10, &[]),
        ];

        let text = format_full(&members);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), members.len() + 2);

        for line in &lines[2..] {
            let strip = &line[STRIP_LEFT_PAD..STRIP_LEFT_PAD + ADVENT_DAYS];
            assert_eq!(strip.chars().count(), ADVENT_DAYS);
        }
    }

    #[test]
    fn star_strip_marks_zero_one_and_two_stars() {
        let members = vec![member(
            "Alpha",
            0,
            &[(1, 1, 100), (1, 2, 200), (2, 1, 300)],
        )];

        let text = format_full(&members);
        let line = text.lines().nth(2).unwrap();
        let strip = &line[STRIP_LEFT_PAD..STRIP_LEFT_PAD + ADVENT_DAYS];
        assert_eq!(strip, "*.                       ");
    }

    #[test]
    fn full_header_digits_align_with_the_strip() {
        let text = format_full(&[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " ".repeat(STRIP_LEFT_PAD + 9) + "1111111111222222");
        assert_eq!(lines[1], " ".repeat(STRIP_LEFT_PAD) + "1234567890123456789012345");
    }

    #[test]
    fn elapsed_times_render_as_clock_marker_or_empty() {
        let start = puzzle_day_start(2020, 3);
        let members = vec![member(
            "Alpha",
            0,
            &[(3, 1, start + 3600), (3, 2, start + 25 * 3600)],
        )];

        let text = format_day(&members, 2020, 3);
        let line = text.lines().nth(1).unwrap();
        // Delta is exactly 24h, which still renders as a clock value.
        assert_eq!(line, "  1)  1:00:00     >24h  24:00:00  Alpha");
    }

    #[test]
    fn unfinished_parts_render_as_empty_fields() {
        let start = puzzle_day_start(2020, 3);
        let members = vec![member("Solo", 0, &[(3, 1, start + 754)])];

        let text = format_day(&members, 2020, 3);
        let line = text.lines().nth(1).unwrap();
        let expected = fmt!("  1)  0:12:34{}Solo", " ".repeat(21));
        assert_eq!(line, expected);
    }

    #[test]
    fn day_header_labels_the_time_columns() {
        let text = format_day(&[], 2020, 1);
        assert_eq!(text.lines().next().unwrap(), "      Part 1   Part 2     Delta ");
    }
}
