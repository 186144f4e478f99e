// src/data.rs
//
// The rebuilt league: League → Season → Week → Game → TeamScore → Team.
//
// The League owns every entity in flat arenas; all cross references are
// copyable ids into those arenas. Back-references (week → season,
// game → week) and the team → games index are plain ids, so the graph has
// no ownership cycles. Entities are appended during a parse and never
// mutated afterwards, which keeps ids stable.

use std::collections::HashMap;

use crate::config::consts::REGULAR_WEEK_PREFIX;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeasonId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Season {
    pub year: i32,
    pub weeks: Vec<WeekId>,
    pub playoffs: Vec<WeekId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Week {
    pub name: String,
    pub season: SeasonId,
    pub games: Vec<GameId>,
}

impl Week {
    /// The one place regular vs. playoff is decided: "Week <n>" is regular.
    pub fn is_regular(&self) -> bool {
        self.name.starts_with(REGULAR_WEEK_PREFIX)
    }

    pub fn is_playoff(&self) -> bool {
        !self.is_regular()
    }

    /// "Week 3 2004"
    pub fn display_name(&self, league: &League) -> String {
        join!(&self.name, " ", &league.season(self.season).year.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamScore {
    pub team: TeamId,
    pub score: u32,
    pub game: GameId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub week: WeekId,
    pub home: TeamScore,
    pub away: TeamScore,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub owner: Option<String>,
    /// Every game this team played, in the order the games were created.
    pub games: Vec<GameId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub fn percentage(&self) -> f64 {
        let played = self.wins + self.losses;
        if played == 0 { 0.0 } else { f64::from(self.wins) / f64::from(played) }
    }
}

impl Game {
    pub fn involves(&self, team: TeamId) -> bool {
        self.home.team == team || self.away.team == team
    }

    fn side(&self, team: TeamId) -> Option<(&TeamScore, &TeamScore)> {
        if self.home.team == team {
            Some((&self.home, &self.away))
        } else if self.away.team == team {
            Some((&self.away, &self.home))
        } else {
            None
        }
    }

    pub fn score_of(&self, team: TeamId) -> Option<u32> {
        self.side(team).map(|(own, _)| own.score)
    }

    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        self.side(team).map(|(_, other)| other.team)
    }

    /// False on a tie, and for a team not in this game.
    pub fn is_winner(&self, team: TeamId) -> bool {
        self.side(team).is_some_and(|(own, other)| own.score > other.score)
    }

    /// False on a tie, and for a team not in this game.
    pub fn is_loser(&self, team: TeamId) -> bool {
        self.side(team).is_some_and(|(own, other)| own.score < other.score)
    }

    pub fn is_tie(&self) -> bool {
        self.home.score == self.away.score
    }

    pub fn winner(&self, league: &League) -> Result<&TeamScore> {
        if self.home.score > self.away.score {
            Ok(&self.home)
        } else if self.away.score > self.home.score {
            Ok(&self.away)
        } else {
            Err(self.tied(league))
        }
    }

    pub fn loser(&self, league: &League) -> Result<&TeamScore> {
        if self.home.score < self.away.score {
            Ok(&self.home)
        } else if self.away.score < self.home.score {
            Ok(&self.away)
        } else {
            Err(self.tied(league))
        }
    }

    fn tied(&self, league: &League) -> Error {
        Error::TiedGameQuery {
            home: league.team(self.home.team).name.clone(),
            away: league.team(self.away.team).name.clone(),
            score: self.home.score,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    seasons: usize,
    weeks: usize,
    games: usize,
    teams: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct League {
    seasons: Vec<Season>,
    weeks: Vec<Week>,
    games: Vec<Game>,
    teams: Vec<Team>,
    /// Lowercased team name → team
    by_name: HashMap<String, TeamId>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    /* ---------------- building ---------------- */

    pub fn add_season(&mut self, year: i32) -> SeasonId {
        self.seasons.push(Season { year, weeks: Vec::new(), playoffs: Vec::new() });
        SeasonId(self.seasons.len() - 1)
    }

    /// Append a week to its season's regular or playoff list, decided by
    /// which table it was read from.
    pub fn add_week(&mut self, season: SeasonId, name: &str, playoff: bool) -> WeekId {
        let id = WeekId(self.weeks.len());
        self.weeks.push(Week { name: s!(name), season, games: Vec::new() });
        let s = &mut self.seasons[season.0];
        if playoff { s.playoffs.push(id) } else { s.weeks.push(id) }
        id
    }

    pub fn add_team(&mut self, name: &str, owner: Option<&str>) -> TeamId {
        let id = TeamId(self.teams.len());
        self.teams.push(Team { name: s!(name), owner: owner.map(String::from), games: Vec::new() });
        self.by_name.insert(name.to_lowercase(), id);
        id
    }

    /// Record a played game and index it under both teams.
    /// Callers guarantee `home != away`.
    pub fn add_game(&mut self, week: WeekId, home: (TeamId, u32), away: (TeamId, u32)) -> GameId {
        debug_assert_ne!(home.0, away.0);
        let id = GameId(self.games.len());
        self.games.push(Game {
            week,
            home: TeamScore { team: home.0, score: home.1, game: id },
            away: TeamScore { team: away.0, score: away.1, game: id },
        });
        self.weeks[week.0].games.push(id);
        self.teams[home.0.0].games.push(id);
        self.teams[away.0.0].games.push(id);
        id
    }

    /// Arena sizes at this moment, for undoing a failed parse.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            seasons: self.seasons.len(),
            weeks: self.weeks.len(),
            games: self.games.len(),
            teams: self.teams.len(),
        }
    }

    /// Drop everything added since `cp`, including game links on older entities.
    pub fn rollback(&mut self, cp: Checkpoint) {
        self.seasons.truncate(cp.seasons);
        self.weeks.truncate(cp.weeks);
        self.games.truncate(cp.games);
        self.teams.truncate(cp.teams);
        self.by_name.retain(|_, id| id.0 < cp.teams);

        for season in &mut self.seasons {
            season.weeks.retain(|w| w.0 < cp.weeks);
            season.playoffs.retain(|w| w.0 < cp.weeks);
        }
        for week in &mut self.weeks {
            week.games.retain(|g| g.0 < cp.games);
        }
        for team in &mut self.teams {
            team.games.retain(|g| g.0 < cp.games);
        }
    }

    /* ---------------- reading ---------------- */

    /// Seasons in the order they were parsed, which is ascending year.
    pub fn seasons(&self) -> impl Iterator<Item = (SeasonId, &Season)> {
        self.seasons.iter().enumerate().map(|(i, s)| (SeasonId(i), s))
    }

    pub fn teams(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams.iter().enumerate().map(|(i, t)| (TeamId(i), t))
    }

    pub fn games(&self) -> impl Iterator<Item = (GameId, &Game)> {
        self.games.iter().enumerate().map(|(i, g)| (GameId(i), g))
    }

    pub fn season(&self, id: SeasonId) -> &Season { &self.seasons[id.0] }
    pub fn week(&self, id: WeekId) -> &Week { &self.weeks[id.0] }
    pub fn game(&self, id: GameId) -> &Game { &self.games[id.0] }
    pub fn team(&self, id: TeamId) -> &Team { &self.teams[id.0] }

    pub fn team_count(&self) -> usize { self.teams.len() }
    pub fn game_count(&self) -> usize { self.games.len() }

    /// Case-insensitive lookup by canonical name.
    pub fn find_team(&self, name: &str) -> Option<TeamId> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    pub fn season_of(&self, game: GameId) -> &Season {
        let week = self.week(self.game(game).week);
        self.season(week.season)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.find_team(name).map(|id| self.team(id))
    }

    pub fn week_display_name(&self, id: WeekId) -> String {
        self.week(id).display_name(self)
    }

    /// A team's games grouped by season year, preserving play order inside a season.
    pub fn ordered_games(&self, team: TeamId) -> Vec<GameId> {
        let mut games = self.team(team).games.clone();
        games.sort_by_key(|g| self.season_of(*g).year);
        games
    }

    /// Wins and losses over every game, playoffs included. Ties count as neither.
    pub fn record(&self, team: TeamId) -> Record {
        self.team(team).games.iter().fold(Record::default(), |mut r, g| {
            let game = self.game(*g);
            if game.is_winner(team) { r.wins += 1; }
            if game.is_loser(team) { r.losses += 1; }
            r
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> (League, TeamId, TeamId, GameId) {
        let mut league = League::new();
        let s = league.add_season(2004);
        let w = league.add_week(s, "Week 3", false);
        let a = league.add_team("Team Bean", Some("Pat"));
        let b = league.add_team("Wolves", None);
        let g = league.add_game(w, (a, 661), (b, 510));
        (league, a, b, g)
    }

    #[test]
    fn game_is_indexed_under_both_teams_and_week() {
        let (league, a, b, g) = tiny();
        assert_eq!(league.team(a).games, vec![g]);
        assert_eq!(league.team(b).games, vec![g]);
        let week = league.game(g).week;
        assert_eq!(league.week(week).games, vec![g]);
        assert_eq!(league.week_display_name(week), "Week 3 2004");
    }

    #[test]
    fn side_queries() {
        let (league, a, b, g) = tiny();
        let game = league.game(g);
        assert_eq!(game.score_of(a), Some(661));
        assert_eq!(game.opponent_of(b), Some(a));
        assert!(game.is_winner(a));
        assert!(game.is_loser(b));
        assert_eq!(game.winner(&league).unwrap().team, a);
        assert_eq!(game.loser(&league).unwrap().team, b);
        assert_eq!(league.record(a), Record { wins: 1, losses: 0 });
    }

    #[test]
    fn tie_has_no_winner() {
        let mut league = League::new();
        let s = league.add_season(1999);
        let w = league.add_week(s, "Week 1", false);
        let a = league.add_team("A", None);
        let b = league.add_team("B", None);
        let g = league.add_game(w, (a, 500), (b, 500));
        let game = league.game(g);
        assert!(matches!(game.winner(&league), Err(Error::TiedGameQuery { score: 500, .. })));
        assert!(game.loser(&league).is_err());
        assert!(!game.is_winner(a) && !game.is_loser(a));
        assert_eq!(league.record(a), Record::default());
    }

    #[test]
    fn regular_week_is_a_name_prefix() {
        let mut league = League::new();
        let s = league.add_season(2010);
        let reg = league.add_week(s, "Week 12", false);
        let wc = league.add_week(s, "Wild Card Week", true);
        let fb = league.add_week(s, "Fantasy Bowl XV", true);
        assert!(league.week(reg).is_regular());
        assert!(league.week(wc).is_playoff());
        assert!(league.week(fb).is_playoff());
        assert!(!Week { name: s!("Weekend"), season: s, games: vec![] }.is_regular());
        assert_eq!(league.season(s).weeks, vec![reg]);
        assert_eq!(league.season(s).playoffs, vec![wc, fb]);
    }

    #[test]
    fn lookup_ignores_case() {
        let (league, a, _, _) = tiny();
        assert_eq!(league.find_team("TEAM BEAN"), Some(a));
        assert_eq!(league.find_team("team bean "), None);
        assert_eq!(league.team(a).owner.as_deref(), Some("Pat"));
        assert_eq!(league.team_by_name("wolves").map(|t| t.name.as_str()), Some("Wolves"));
    }

    #[test]
    fn rollback_restores_the_checkpointed_league() {
        let (mut league, a, b, _) = tiny();
        let before = league.clone();
        let cp = league.checkpoint();

        let s = league.add_season(2005);
        let w = league.add_week(s, "Week 1", false);
        let c = league.add_team("Newcomers", None);
        league.add_game(w, (a, 1), (c, 2));
        league.add_game(w, (b, 3), (c, 4));

        league.rollback(cp);
        assert_eq!(league, before);
        assert_eq!(league.find_team("newcomers"), None);
    }

    #[test]
    fn ordered_games_group_by_year() {
        let mut league = League::new();
        let a = league.add_team("A", None);
        let b = league.add_team("B", None);
        let s1 = league.add_season(2001);
        let s2 = league.add_season(2002);
        let w2 = league.add_week(s2, "Week 1", false);
        let w1 = league.add_week(s1, "Week 1", false);
        let late = league.add_game(w2, (a, 1), (b, 2));
        let early = league.add_game(w1, (a, 3), (b, 2));
        assert_eq!(league.ordered_games(a), vec![early, late]);
    }
}
