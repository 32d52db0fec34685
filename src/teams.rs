use phf::phf_map;

/// Glyph shown next to every recognised franchise
pub const TEAM_GLYPH: &str = "🏀";

/// Placeholder used when a team name is empty
const EMPTY_NAME_PLACEHOLDER: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamInfo {
    pub common_name: &'static str,
    pub abbrev: &'static str,
    pub city: &'static str,
}

/// Franchises keyed by common name ("Lakers", "Trail Blazers")
static TEAMS: phf::Map<&'static str, TeamInfo> = phf_map! {
    "Hawks" => TeamInfo { common_name: "Hawks", abbrev: "ATL", city: "Atlanta" },
    "Celtics" => TeamInfo { common_name: "Celtics", abbrev: "BOS", city: "Boston" },
    "Nets" => TeamInfo { common_name: "Nets", abbrev: "BKN", city: "Brooklyn" },
    "Hornets" => TeamInfo { common_name: "Hornets", abbrev: "CHA", city: "Charlotte" },
    "Bulls" => TeamInfo { common_name: "Bulls", abbrev: "CHI", city: "Chicago" },
    "Cavaliers" => TeamInfo { common_name: "Cavaliers", abbrev: "CLE", city: "Cleveland" },
    "Mavericks" => TeamInfo { common_name: "Mavericks", abbrev: "DAL", city: "Dallas" },
    "Nuggets" => TeamInfo { common_name: "Nuggets", abbrev: "DEN", city: "Denver" },
    "Pistons" => TeamInfo { common_name: "Pistons", abbrev: "DET", city: "Detroit" },
    "Warriors" => TeamInfo { common_name: "Warriors", abbrev: "GSW", city: "Golden State" },
    "Rockets" => TeamInfo { common_name: "Rockets", abbrev: "HOU", city: "Houston" },
    "Pacers" => TeamInfo { common_name: "Pacers", abbrev: "IND", city: "Indiana" },
    "Clippers" => TeamInfo { common_name: "Clippers", abbrev: "LAC", city: "Los Angeles" },
    "Lakers" => TeamInfo { common_name: "Lakers", abbrev: "LAL", city: "Los Angeles" },
    "Grizzlies" => TeamInfo { common_name: "Grizzlies", abbrev: "MEM", city: "Memphis" },
    "Heat" => TeamInfo { common_name: "Heat", abbrev: "MIA", city: "Miami" },
    "Bucks" => TeamInfo { common_name: "Bucks", abbrev: "MIL", city: "Milwaukee" },
    "Timberwolves" => TeamInfo { common_name: "Timberwolves", abbrev: "MIN", city: "Minnesota" },
    "Pelicans" => TeamInfo { common_name: "Pelicans", abbrev: "NOP", city: "New Orleans" },
    "Knicks" => TeamInfo { common_name: "Knicks", abbrev: "NYK", city: "New York" },
    "Thunder" => TeamInfo { common_name: "Thunder", abbrev: "OKC", city: "Oklahoma City" },
    "Magic" => TeamInfo { common_name: "Magic", abbrev: "ORL", city: "Orlando" },
    "76ers" => TeamInfo { common_name: "76ers", abbrev: "PHI", city: "Philadelphia" },
    "Suns" => TeamInfo { common_name: "Suns", abbrev: "PHX", city: "Phoenix" },
    "Trail Blazers" => TeamInfo { common_name: "Trail Blazers", abbrev: "POR", city: "Portland" },
    "Kings" => TeamInfo { common_name: "Kings", abbrev: "SAC", city: "Sacramento" },
    "Spurs" => TeamInfo { common_name: "Spurs", abbrev: "SAS", city: "San Antonio" },
    "Raptors" => TeamInfo { common_name: "Raptors", abbrev: "TOR", city: "Toronto" },
    "Jazz" => TeamInfo { common_name: "Jazz", abbrev: "UTA", city: "Utah" },
    "Wizards" => TeamInfo { common_name: "Wizards", abbrev: "WAS", city: "Washington" },
};

/// Schedule-site full names mapped to common names
static FULL_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "Atlanta Hawks" => "Hawks",
    "Boston Celtics" => "Celtics",
    "Brooklyn Nets" => "Nets",
    "Charlotte Hornets" => "Hornets",
    "Chicago Bulls" => "Bulls",
    "Cleveland Cavaliers" => "Cavaliers",
    "Dallas Mavericks" => "Mavericks",
    "Denver Nuggets" => "Nuggets",
    "Detroit Pistons" => "Pistons",
    "Golden State Warriors" => "Warriors",
    "Houston Rockets" => "Rockets",
    "Indiana Pacers" => "Pacers",
    "LA Clippers" => "Clippers",
    "Los Angeles Clippers" => "Clippers",
    "Los Angeles Lakers" => "Lakers",
    "Memphis Grizzlies" => "Grizzlies",
    "Miami Heat" => "Heat",
    "Milwaukee Bucks" => "Bucks",
    "Minnesota Timberwolves" => "Timberwolves",
    "New Orleans Pelicans" => "Pelicans",
    "New York Knicks" => "Knicks",
    "Oklahoma City Thunder" => "Thunder",
    "Orlando Magic" => "Magic",
    "Philadelphia 76ers" => "76ers",
    "Phoenix Suns" => "Suns",
    "Portland Trail Blazers" => "Trail Blazers",
    "Sacramento Kings" => "Kings",
    "San Antonio Spurs" => "Spurs",
    "Toronto Raptors" => "Raptors",
    "Utah Jazz" => "Jazz",
    "Washington Wizards" => "Wizards",
};

/// Logo to show for a team name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamLogo {
    Known(&'static TeamInfo),
    /// First character of an unrecognised name
    Placeholder(char),
}

impl TeamLogo {
    pub fn glyph(&self) -> String {
        match self {
            TeamLogo::Known(_) => TEAM_GLYPH.to_string(),
            TeamLogo::Placeholder(c) => c.to_string(),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, TeamLogo::Known(_))
    }
}

/// Look up a team by common name
///
/// Matching is case- and string-exact. Names outside the table never fail;
/// they get a placeholder built from their first character.
pub fn team_logo(name: &str) -> TeamLogo {
    match TEAMS.get(name) {
        Some(info) => TeamLogo::Known(info),
        None => TeamLogo::Placeholder(name.chars().next().unwrap_or(EMPTY_NAME_PLACEHOLDER)),
    }
}

pub fn team_info(common_name: &str) -> Option<&'static TeamInfo> {
    TEAMS.get(common_name)
}

/// Map team common name ("Knicks") to its 3-letter abbreviation ("NYK")
pub fn common_name_to_abbrev(common_name: &str) -> Option<&'static str> {
    TEAMS.get(common_name).map(|t| t.abbrev)
}

/// Map a full franchise name ("New York Knicks") to its common name ("Knicks")
pub fn full_name_to_common(full_name: &str) -> Option<&'static str> {
    FULL_NAMES.get(full_name).copied()
}

/// All franchises, sorted by abbreviation
pub fn all_teams() -> Vec<&'static TeamInfo> {
    let mut teams: Vec<_> = TEAMS.values().collect();
    teams.sort_by_key(|t| t.abbrev);
    teams
}
