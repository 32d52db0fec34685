use crate::teams::{all_teams, TEAM_GLYPH};

pub fn format_teams() -> String {
    let mut output = String::from("\nNBA Teams\n=========\n\n");
    output.push_str(&format!("{:<6} {:<16} {}\n", "Abbr", "City", "Team"));
    output.push_str(&format!("{}\n", "─".repeat(40)));
    for team in all_teams() {
        output.push_str(&format!(
            "{:<6} {:<16} {} {}\n",
            team.abbrev, team.city, TEAM_GLYPH, team.common_name
        ));
    }
    output
}

pub fn run() {
    print!("{}", format_teams());
    println!();
}
