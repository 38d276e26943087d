// src/teams.rs
//
// Full franchise names → three-letter codes. One table drives both resolver
// modes; the mode only picks which code column is read.

use std::fmt;

/// Three-letter team code. Only the resolver hands these out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamCode(&'static str);

impl TeamCode {
    pub fn as_str(&self) -> &'static str { self.0 }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Code used to mark the "Playoffs" separator rows in `Distinct` mode.
pub const PLAYOFFS: TeamCode = TeamCode("PLY");
const PLAYOFFS_NAME: &str = "Playoffs";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ResolverMode {
    /// Relocated/renamed franchises collapse onto the modern code.
    /// No "Playoffs" entry, so a table carrying the separator is rejected.
    #[default]
    Merged,
    /// Every historical code kept apart, plus the `PLAYOFFS` sentinel.
    ///
    /// Lookup is by name only, so "Charlotte Hornets" is always `CHO`. Rows
    /// from 2001-02 and earlier belong to the first Hornets franchise (`CHH`
    /// on the site) and come out as `CHO` too.
    Distinct,
}

impl ResolverMode {
    pub fn label(&self) -> &'static str {
        match self {
            ResolverMode::Merged => "merged",
            ResolverMode::Distinct => "distinct",
        }
    }
}

impl std::str::FromStr for ResolverMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "merged" => Ok(ResolverMode::Merged),
            "distinct" => Ok(ResolverMode::Distinct),
            other => Err(format!("Unknown resolver mode: {other}")),
        }
    }
}

struct Entry {
    name: &'static str,
    historical: &'static str,
    merged: &'static str,
    /// Franchise code in team page URLs, only for teams active today.
    franchise: Option<&'static str>,
}

const fn team(name: &'static str, historical: &'static str, merged: &'static str, franchise: Option<&'static str>) -> Entry {
    Entry { name, historical, merged, franchise }
}

#[rustfmt::skip]
static ENTRIES: &[Entry] = &[
    team("Atlanta Hawks",                     "ATL", "ATL", Some("ATL")),
    team("Boston Celtics",                    "BOS", "BOS", Some("BOS")),
    team("Brooklyn Nets",                     "BRK", "BRK", Some("NJN")),
    team("New Jersey Nets",                   "NJN", "BRK", None), // 1977-78 to 2011-12
    team("Charlotte Hornets",                 "CHO", "CHA", Some("CHA")),
    team("Charlotte Bobcats",                 "CHA", "CHA", None), // 2004-05 to 2013-14
    team("Chicago Bulls",                     "CHI", "CHI", Some("CHI")),
    team("Cleveland Cavaliers",               "CLE", "CLE", Some("CLE")),
    team("Dallas Mavericks",                  "DAL", "DAL", Some("DAL")),
    team("Denver Nuggets",                    "DEN", "DEN", Some("DEN")),
    team("Detroit Pistons",                   "DET", "DET", Some("DET")),
    team("Golden State Warriors",             "GSW", "GSW", Some("GSW")),
    team("Houston Rockets",                   "HOU", "HOU", Some("HOU")),
    team("Indiana Pacers",                    "IND", "IND", Some("IND")),
    team("Los Angeles Clippers",              "LAC", "LAC", Some("LAC")),
    team("Los Angeles Lakers",                "LAL", "LAL", Some("LAL")),
    team("Memphis Grizzlies",                 "MEM", "MEM", Some("MEM")),
    team("Vancouver Grizzlies",               "VAN", "MEM", None), // 1995-96 to 2000-01
    team("Miami Heat",                        "MIA", "MIA", Some("MIA")),
    team("Milwaukee Bucks",                   "MIL", "MIL", Some("MIL")),
    team("Minnesota Timberwolves",            "MIN", "MIN", Some("MIN")),
    team("New Orleans Pelicans",              "NOP", "NOP", Some("NOH")),
    team("New Orleans/Oklahoma City Hornets", "NOK", "NOP", None), // 2005-06 to 2006-07
    team("New Orleans Hornets",               "NOH", "NOP", None), // 2002-03 to 2012-13
    team("New York Knicks",                   "NYK", "NYK", Some("NYK")),
    team("Oklahoma City Thunder",             "OKC", "OKC", Some("OKC")),
    team("Seattle SuperSonics",               "SEA", "OKC", None), // 1967-68 to 2007-08
    team("Orlando Magic",                     "ORL", "ORL", Some("ORL")),
    team("Philadelphia 76ers",                "PHI", "PHI", Some("PHI")),
    team("Phoenix Suns",                      "PHO", "PHO", Some("PHO")),
    team("Portland Trail Blazers",            "POR", "POR", Some("POR")),
    team("Sacramento Kings",                  "SAC", "SAC", Some("SAC")),
    team("San Antonio Spurs",                 "SAS", "SAS", Some("SAS")),
    team("Toronto Raptors",                   "TOR", "TOR", Some("TOR")),
    team("Utah Jazz",                         "UTA", "UTA", Some("UTA")),
    team("Washington Wizards",                "WAS", "WAS", Some("WAS")),
];

/// Immutable name → code lookup for one mode. Cheap to copy around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamResolver {
    mode: ResolverMode,
}

impl TeamResolver {
    pub fn new(mode: ResolverMode) -> Self { Self { mode } }

    pub fn mode(&self) -> ResolverMode { self.mode }

    /// `None` means the name is outside the mapping for this mode.
    pub fn resolve(&self, name: &str) -> Option<TeamCode> {
        let name = name.trim();
        if name == PLAYOFFS_NAME {
            return match self.mode {
                ResolverMode::Distinct => Some(PLAYOFFS),
                ResolverMode::Merged => None,
            };
        }
        ENTRIES.iter()
            .find(|e| e.name == name)
            .map(|e| match self.mode {
                ResolverMode::Merged => TeamCode(e.merged),
                ResolverMode::Distinct => TeamCode(e.historical),
            })
    }

    pub fn is_sentinel(&self, code: TeamCode) -> bool {
        self.mode == ResolverMode::Distinct && code == PLAYOFFS
    }

    /// Every (name, code) pair this mode knows, in table order.
    pub fn mapping(&self) -> Vec<(&'static str, TeamCode)> {
        let mut out: Vec<_> = ENTRIES.iter()
            .filter_map(|e| self.resolve(e.name).map(|c| (e.name, c)))
            .collect();
        if self.mode == ResolverMode::Distinct {
            out.push((PLAYOFFS_NAME, PLAYOFFS));
        }
        out
    }

    /// The 30 current franchises as (full name, franchise code). The franchise
    /// code is what the team stat page URLs use and is the key predictions are
    /// made under.
    pub fn active_teams() -> Vec<(&'static str, TeamCode)> {
        ENTRIES.iter()
            .filter_map(|e| e.franchise.map(|f| (e.name, TeamCode(f))))
            .collect()
    }

    /// Franchise code for a current team name.
    pub fn franchise(name: &str) -> Option<TeamCode> {
        let name = name.trim();
        ENTRIES.iter()
            .find(|e| e.name == name)
            .and_then(|e| e.franchise)
            .map(TeamCode)
    }
}
