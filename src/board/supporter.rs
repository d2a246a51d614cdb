/**
 * Supporter Panel
 *
 * The donation thank-you panel rendered at the bottom of the board for
 * supporters. Purely presentational: it computes the relative distance
 * from the last donation to now and has no state of its own.
 */

use chrono::Utc;

use crate::board::dates::format_distance;
use crate::board::task::BoardUser;

/// The "last donation" line for a supporter, `None` for everyone else
///
/// Also `None` for a supporter whose session carries no donation
/// timestamp; the panel then shows only the thank-you heading.
pub fn donation_line(user: &BoardUser) -> Option<String> {
    if !user.vip {
        return None;
    }

    user.last_donate.map(|last_donate| {
        format!(
            "Última doação foi a {}",
            format_distance(last_donate, Utc::now())
        )
    })
}
