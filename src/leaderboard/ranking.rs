use crate::leaderboard::member::Member;
use crate::leaderboard::metric::SortMetric;

/// Orders the full leaderboard: descending by local score, ties broken
/// by total stars, further ties keep their payload order.
pub fn rank_full(members: &mut [Member]) {
    members.sort_by(|a, b| (b.score, b.stars).cmp(&(a.score, a.stars)));
}

/// Orders a single day's leaderboard by `metric`, ascending. Members
/// with no completion that day are dropped; members whose metric is
/// undefined (part 2 or delta not yet earned) sort strictly after
/// every member with a defined value.
pub fn rank_by_day(members: Vec<Member>, day: usize, metric: SortMetric) -> Vec<Member> {
    let mut ranked: Vec<Member> = members
        .into_iter()
        .filter(|m| m.stars_for_day(day) > 0)
        .collect();

    ranked.sort_by_key(|m| {
        let value = metric.value_for(m, day);
        (value.is_none(), value)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn member(name: &str, score: i64, stars: i64, times: &[(usize, usize, i64)]) -> Member {
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
                "stars": stars,
                "completion_day_level": completion,
            }),
        )
        .unwrap()
    }

    fn names(members: &[Member]) -> Vec<&str> {
        members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn full_ranking_is_descending_on_score_then_stars() {
        let mut members = vec![
            member("A", 751, 40, &[]),
            member("B", 751, 38, &[]),
            member("C", 800, 10, &[]),
        ];

        rank_full(&mut members);
        assert_eq!(names(&members), vec!["C", "A", "B"]);
    }

    #[test]
    fn full_ranking_keeps_original_order_on_ties() {
        let mut members = vec![
            member("first", 100, 20, &[]),
            member("second", 100, 20, &[]),
            member("third", 100, 20, &[]),
        ];

        rank_full(&mut members);
        assert_eq!(names(&members), vec!["first", "second", "third"]);
    }

    #[test]
    fn day_ranking_excludes_non_starters_and_sorts_undefined_last() {
        let members = vec![
            member("X", 0, 0, &[(5, 1, 60), (5, 2, 100)]),
            member("Y", 0, 0, &[(5, 1, 50)]),
            member("Z", 0, 0, &[(5, 1, 40), (5, 2, 80)]),
            member("W", 0, 0, &[(4, 1, 10)]),
        ];

        let ranked = rank_by_day(members, 5, SortMetric::Part2);
        assert_eq!(names(&ranked), vec!["Z", "X", "Y"]);
    }

    #[test]
    fn day_ranking_by_delta() {
        let members = vec![
            member("slow", 0, 0, &[(1, 1, 100), (1, 2, 400)]),
            member("fast", 0, 0, &[(1, 1, 200), (1, 2, 260)]),
            member("partial", 0, 0, &[(1, 1, 10)]),
        ];

        let ranked = rank_by_day(members, 1, SortMetric::Delta);
        assert_eq!(names(&ranked), vec!["fast", "slow", "partial"]);
    }
}
