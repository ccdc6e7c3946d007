use tracing::info;

use crate::leaderboard::member::RawLeaderboard;

const BASE_URL: &str = "https://adventofcode.com";

/// Fetches the private leaderboard JSON for `year`/`code`.
///
/// The site answers a bad session cookie with an HTML login page, so
/// an invalid session surfaces here as a JSON decode error rather than
/// an HTTP status.
#[tracing::instrument(level = "trace", skip(session))]
pub(crate) async fn get_leaderboard(
    year: i32,
    code: u64,
    session: &str,
) -> Result<RawLeaderboard, reqwest::Error> {
    let url = format!("{BASE_URL}/{year}/leaderboard/private/view/{code}.json");
    info!(year, code, url, "Fetching private leaderboard");

    let response = reqwest::Client::new()
        .get(url)
        .header(reqwest::header::COOKIE, format!("session={session}"))
        .send()
        .await?
        .error_for_status()?;

    let leaderboard = response.json::<RawLeaderboard>().await?;
    info!(
        year,
        code,
        member_count = leaderboard.members.len(),
        "Fetched leaderboard payload"
    );

    Ok(leaderboard)
}
