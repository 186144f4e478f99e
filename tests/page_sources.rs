// tests/page_sources.rs
use std::cell::RefCell;

use waffl_history::config::reference::ReferenceData;
use waffl_history::data::League;
use waffl_history::progress::{NullProgress, Progress};
use waffl_history::source::PageSource;
use waffl_history::store::CachedPageSource;
use waffl_history::{Error, LeagueParser};

fn page(team_a: &str) -> String {
    format!(
        r#"<html><table width="600">
<tr><td>Week 1 - Sep 1</td></tr>
<tr><td><div>{team_a} 10, Team B 20</div><div>Team C 1, Team D 2</div><div>Team E 3, Team F 4</div></td></tr>
</table>
<table width="600">
<tr><th>Semi-Finals</th></tr>
<tr><td><div>Team B 50, Team D 40</div></td></tr>
</table></html>"#
    )
}

#[derive(Default)]
struct Recorder {
    total: usize,
    years: Vec<i32>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn year_done(&mut self, year: i32) {
        self.years.push(year);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

/// Serves pages from memory and remembers the order they were asked for.
struct Scripted {
    asked: RefCell<Vec<i32>>,
}

impl PageSource for Scripted {
    fn standings_text(&self, year: i32) -> waffl_history::Result<String> {
        self.asked.borrow_mut().push(year);
        match year {
            2001 => Ok(page("Team A")),
            2002 => Ok(page("team a")),
            _ => Err(Error::Source(format!("no page for {year}"))),
        }
    }
}

#[test]
fn years_are_read_oldest_first() {
    let source = Scripted { asked: RefCell::new(Vec::new()) };
    let mut league = League::new();
    let mut parser = LeagueParser::new(ReferenceData::default());
    let mut progress = Recorder::default();

    parser
        .parse(&source, &mut league, [2002, 2001], Some(&mut progress))
        .unwrap();

    assert_eq!(*source.asked.borrow(), vec![2001, 2002]);
    assert_eq!(progress.total, 2);
    assert_eq!(progress.years, vec![2001, 2002]);
    assert!(progress.finished);

    let years: Vec<i32> = league.seasons().map(|(_, s)| s.year).collect();
    assert_eq!(years, vec![2001, 2002]);

    // Same franchise across years despite the spelling change.
    assert_eq!(league.team_count(), 6);
    let a = league.team_by_name("Team A").unwrap();
    assert_eq!(a.name, "Team A");
    assert_eq!(a.games.len(), 2);

    let spellings: Vec<(&str, usize)> = parser
        .resolver()
        .spellings()
        .filter(|(s, _)| s.to_lowercase() == "team a")
        .collect();
    assert_eq!(spellings, vec![("Team A", 1), ("team a", 1)]);
}

#[test]
fn postseason_headers_may_be_th() {
    let source = Scripted { asked: RefCell::new(Vec::new()) };
    let mut league = League::new();
    let mut parser = LeagueParser::new(ReferenceData::default());
    parser.parse(&source, &mut league, [2001], None).unwrap();

    let (_, season) = league.seasons().next().unwrap();
    assert_eq!(season.playoffs.len(), 1);
    assert_eq!(league.week(season.playoffs[0]).name, "Semi-Finals");
    assert_eq!(league.week_display_name(season.playoffs[0]), "Semi-Finals 2001");
}

#[test]
fn first_failing_year_stops_the_run() {
    let source = Scripted { asked: RefCell::new(Vec::new()) };
    let mut league = League::new();
    let mut parser = LeagueParser::new(ReferenceData::default());
    let mut progress = Recorder::default();

    let err = parser
        .parse(&source, &mut league, 2001..=2004, Some(&mut progress))
        .unwrap_err();

    assert!(matches!(err, Error::Season { year: 2003, .. }));
    assert!(err.to_string().contains("no page for 2003"));
    assert_eq!(*source.asked.borrow(), vec![2001, 2002, 2003]);
    assert_eq!(progress.years, vec![2001, 2002]);
    assert!(progress.finished);

    // Seasons read before the failure are not left behind.
    assert_eq!(league.seasons().count(), 0);
    assert_eq!(league.team_count(), 0);
    assert_eq!(league.game_count(), 0);
}

#[test]
fn failed_run_keeps_what_the_league_held_before() {
    let source = Scripted { asked: RefCell::new(Vec::new()) };
    let mut league = League::new();
    let mut parser = LeagueParser::new(ReferenceData::default());
    parser.parse(&source, &mut league, [2001], None).unwrap();
    let before = league.clone();

    assert!(parser.parse(&source, &mut league, [2002, 2003], None).is_err());
    assert_eq!(league, before);
}

#[test]
fn cached_pages_parse_offline() {
    let tmp = tempfile::tempdir().unwrap();
    let cache = CachedPageSource::new(tmp.path());
    cache.cache(2010, &page("Team A")).unwrap();

    let mut league = League::new();
    let mut parser = LeagueParser::new(ReferenceData::bundled().unwrap());
    let mut progress = NullProgress;
    parser.parse(&cache, &mut league, [2010], Some(&mut progress)).unwrap();
    assert_eq!(league.game_count(), 4);

    let err = parser.parse(&cache, &mut League::new(), [2011], None).unwrap_err();
    assert!(matches!(err.root(), Error::Source(_)));
}

#[test]
fn refresh_copies_pages_into_the_cache() {
    let tmp = tempfile::tempdir().unwrap();
    let cache = CachedPageSource::new(tmp.path().join("nested").join("pages"));
    let online = Scripted { asked: RefCell::new(Vec::new()) };

    assert_eq!(cache.refresh(&online, 2001..=2002).unwrap(), 2);
    assert_eq!(cache.standings_text(2002).unwrap(), page("team a"));

    let err = cache.refresh(&online, [2005]).unwrap_err();
    assert!(matches!(err, Error::Season { year: 2005, .. }));
}
