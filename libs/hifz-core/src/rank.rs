//! XP ranks and levels.

use serde::Serialize;

/// A named rank reached at `min_xp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rank {
    pub name: &'static str,
    pub min_xp: u64,
}

/// All ranks, ascending by `min_xp`. The first starts at 0.
#[rustfmt::skip]
pub const RANKS: [Rank; 6] = [
    Rank { name: "Seeker of Light", min_xp: 0 },
    Rank { name: "Novice Reciter", min_xp: 500 },
    Rank { name: "Juz Explorer", min_xp: 2_000 },
    Rank { name: "Guardian of Prayer", min_xp: 5_000 },
    Rank { name: "Eloquent Master", min_xp: 10_000 },
    Rank { name: "Hafiz Candidate", min_xp: 25_000 },
];

/// Where a student's XP places them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankProgress {
    pub xp: u64,
    pub level: u32,
    pub current_rank: Rank,
    pub next_rank: Option<Rank>,
    /// Percent of the way from `current_rank` to `next_rank`, 0–100.
    /// Always 100 at the top rank.
    pub progress_to_next: f64,
}

impl RankProgress {
    pub fn from_xp(xp: u64) -> Self {
        let index = RANKS.iter().rposition(|r| xp >= r.min_xp).unwrap_or(0);
        let current_rank = RANKS[index];
        let next_rank = RANKS.get(index + 1).copied();

        let progress_to_next = match next_rank {
            None => 100.0,
            Some(next) => {
                let range = (next.min_xp - current_rank.min_xp) as f64;
                let gained = (xp - current_rank.min_xp) as f64;
                (gained / range * 100.0).clamp(0.0, 100.0)
            }
        };

        Self {
            xp,
            level: level(xp),
            current_rank,
            next_rank,
            progress_to_next,
        }
    }
}

/// `floor(sqrt(xp / 100)) + 1`
pub fn level(xp: u64) -> u32 {
    (xp as f64 / 100.0).sqrt().floor() as u32 + 1
}
