// src/records.rs
//
// Streak leaderboards over a rebuilt league.
use crate::config::consts::{DEFAULT_RECORD_COUNT, THOUSAND_POINTS};
use crate::data::{GameId, League, TeamId, WeekId};
use crate::error::Result;
use crate::streak::streaks;

/// Display text for a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreakRecord {
    /// Number of games in the streak
    pub value: usize,
    pub team: TeamId,
    pub from: WeekId,
    pub to: WeekId,
}

pub trait StreakRecordProvider {
    fn descriptor(&self) -> &'static Descriptor;
    fn records(&self, league: &League) -> Result<Vec<StreakRecord>>;
}

/// Every qualifying run of every team, each paired with the team it was found for.
fn team_streaks<F>(league: &League, pred: F) -> Vec<(TeamId, Vec<GameId>)>
where
    F: Fn(&League, TeamId, GameId) -> bool,
{
    let mut all = Vec::new();
    for (team, _) in league.teams() {
        let games = league.ordered_games(team);
        for run in streaks(&games, |g| pred(league, team, *g)) {
            all.push((team, run.to_vec()));
        }
    }
    all
}

fn last_year(league: &League, run: &[GameId]) -> i32 {
    run.last().map_or(0, |g| league.season_of(*g).year)
}

fn record(league: &League, team: TeamId, run: &[GameId]) -> Option<StreakRecord> {
    let (first, last) = (run.first()?, run.last()?);
    Some(StreakRecord {
        value: run.len(),
        team,
        from: league.game(*first).week,
        to: league.game(*last).week,
    })
}

/// Longest first; equal lengths put the more recent streak first.
fn rank_recent_first(league: &League, all: &mut [(TeamId, Vec<GameId>)]) {
    all.sort_by(|a, b| {
        b.1.len()
            .cmp(&a.1.len())
            .then_with(|| last_year(league, &b.1).cmp(&last_year(league, &a.1)))
    });
}

static WINNING: Descriptor = Descriptor {
    title: "Longest Winning Streaks",
    summary: "Unstoppable! These teams strung together the longest winning streaks, proving their dominance week after week!",
};

static LOSING: Descriptor = Descriptor {
    title: "Longest Losing Streaks",
    summary: "Endurance through adversity: the longest losing streaks, where teams battled through tough times and kept fighting!",
};

static THOUSAND: Descriptor = Descriptor {
    title: "Longest 1000-Point Streaks",
    summary: "Sustained excellence! These teams delivered 1000-point games in consecutive weeks.",
};

#[derive(Clone, Copy, Debug)]
pub struct LongestWinningStreaks {
    count: usize,
}

impl LongestWinningStreaks {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for LongestWinningStreaks {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_COUNT)
    }
}

impl StreakRecordProvider for LongestWinningStreaks {
    fn descriptor(&self) -> &'static Descriptor {
        &WINNING
    }

    fn records(&self, league: &League) -> Result<Vec<StreakRecord>> {
        let mut all = team_streaks(league, |l, t, g| l.game(g).is_winner(t));
        rank_recent_first(league, &mut all);

        let mut out = Vec::new();
        for (_, run) in all.iter().take(self.count) {
            let winner = league.game(run[0]).winner(league)?.team;
            out.extend(record(league, winner, run));
        }
        Ok(out)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LongestLosingStreaks {
    count: usize,
}

impl LongestLosingStreaks {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for LongestLosingStreaks {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_COUNT)
    }
}

impl StreakRecordProvider for LongestLosingStreaks {
    fn descriptor(&self) -> &'static Descriptor {
        &LOSING
    }

    fn records(&self, league: &League) -> Result<Vec<StreakRecord>> {
        let mut all = team_streaks(league, |l, t, g| l.game(g).is_loser(t));
        rank_recent_first(league, &mut all);

        let mut out = Vec::new();
        for (_, run) in all.iter().take(self.count) {
            let loser = league.game(run[0]).loser(league)?.team;
            out.extend(record(league, loser, run));
        }
        Ok(out)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Longest1000PointStreaks {
    count: usize,
}

impl Longest1000PointStreaks {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for Longest1000PointStreaks {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_COUNT)
    }
}

impl StreakRecordProvider for Longest1000PointStreaks {
    fn descriptor(&self) -> &'static Descriptor {
        &THOUSAND
    }

    fn records(&self, league: &League) -> Result<Vec<StreakRecord>> {
        let mut all = team_streaks(league, |l, t, g| {
            l.game(g).score_of(t).is_some_and(|s| s >= THOUSAND_POINTS)
        });
        // Length only; equal lengths keep team order.
        all.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        Ok(all
            .iter()
            .take(self.count)
            .filter_map(|(team, run)| record(league, *team, run))
            .collect())
    }
}
