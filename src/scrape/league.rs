// src/scrape/league.rs
//
// Rebuild the league one season at a time. Team identity depends on which
// teams already exist, so years are always read oldest first, and each year
// reads its regular season before its playoffs.
use scraper::ElementRef;

use crate::{
    config::consts::{POSTSEASON_KEYWORDS, SEASON_KEYWORDS},
    config::reference::ReferenceData,
    core::{html::locate_table, sanitize::normalize_markup, tree::{parse_fragment, table_root}},
    data::{League, SeasonId},
    error::Result,
    progress::Progress,
    source::PageSource,
    specs::{postseason, season, SeasonContext},
    teams::TeamResolver,
};

type Extract = fn(ElementRef<'_>, &mut SeasonContext<'_>) -> Result<()>;

pub struct LeagueParser {
    reference: ReferenceData,
    resolver: TeamResolver,
}

impl LeagueParser {
    pub fn new(reference: ReferenceData) -> Self {
        let resolver = TeamResolver::from_reference(&reference);
        Self { reference, resolver }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn resolver(&self) -> &TeamResolver {
        &self.resolver
    }

    /// Read every year from `source` into `league`. The first failure ends the
    /// run and leaves `league` as it was before the call.
    pub fn parse(
        &mut self,
        source: &dyn PageSource,
        league: &mut League,
        years: impl IntoIterator<Item = i32>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<()> {
        let mut years: Vec<i32> = years.into_iter().collect();
        years.sort_unstable();
        years.dedup();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(years.len());
        }

        let cp = league.checkpoint();
        let saved = self.resolver.clone();
        let mut result = Ok(());
        for year in years {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Parsing {year}"));
            }
            result = source
                .standings_text(year)
                .map_err(|e| e.in_season(year))
                .and_then(|raw| self.parse_year(league, year, &raw).map(|_| ()));
            if result.is_err() {
                league.rollback(cp);
                self.resolver = saved;
                break;
            }
            if let Some(p) = progress.as_deref_mut() {
                p.year_done(year);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        result
    }

    /// Read one year's raw page text into a new season. On failure nothing
    /// of that year stays in `league`.
    pub fn parse_year(&mut self, league: &mut League, year: i32, raw: &str) -> Result<SeasonId> {
        let cp = league.checkpoint();
        let saved = self.resolver.clone();
        self.read_year(league, year, raw).map_err(|e| {
            league.rollback(cp);
            self.resolver = saved;
            e.in_season(year)
        })
    }

    fn read_year(&mut self, league: &mut League, year: i32, raw: &str) -> Result<SeasonId> {
        let season = league.add_season(year);
        let mut ctx = SeasonContext {
            league,
            resolver: &mut self.resolver,
            reference: &self.reference,
            year,
            season,
        };

        read_table(raw, SEASON_KEYWORDS, season::extract, &mut ctx)?;
        read_table(raw, POSTSEASON_KEYWORDS, postseason::extract, &mut ctx)?;

        let s = ctx.league.season(season);
        let games: usize = s.weeks.iter().chain(&s.playoffs).map(|w| ctx.league.week(*w).games.len()).sum();
        logf!("{year}: {} weeks, {} playoff rounds, {games} games", s.weeks.len(), s.playoffs.len());
        Ok(season)
    }
}

fn read_table(raw: &str, keywords: &[&str], extract: Extract, ctx: &mut SeasonContext<'_>) -> Result<()> {
    let fragment = locate_table(raw, keywords)?;
    let markup = normalize_markup(fragment);
    let doc = parse_fragment(&markup);
    let table = table_root(&doc)?;
    extract(table, ctx)
}
