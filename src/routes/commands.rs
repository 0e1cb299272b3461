use std::str::FromStr;

use crate::models::SortOrder;

/// One line of input on the search page
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Breed(Option<String>),
    Zip(Option<String>),
    Sort(SortOrder),
    More,
    Favorite(String),
    Favorites,
    Match,
    ClearMatch,
    Reset,
    Retry,
    Breeds,
    Near { lat: f64, lon: f64, radius_km: f64 },
    Logout,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  breed <name>|all      filter by breed
  zip <code>|all        filter by zip code
  sort <field:dir>      breed|name|age : asc|desc
  more                  load the next page
  fav <id>              toggle a favorite
  favs                  list favorites
  match                 find your match among favorites
  clear-match           dismiss the match
  reset                 clear filters and search again
  retry                 dismiss the error and search again
  breeds                list known breeds
  near <lat> <lon> <km> shelters near a point
  logout | quit";

/// `all`, `any` and empty all mean no filter
fn optional_arg(rest: &str) -> Option<String> {
    match rest.trim() {
        "" => None,
        v if v.eq_ignore_ascii_case("all") || v.eq_ignore_ascii_case("any") => None,
        v => Some(v.to_string()),
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match verb.to_lowercase().as_str() {
            "breed" => Ok(Command::Breed(optional_arg(rest))),
            "zip" => Ok(Command::Zip(optional_arg(rest))),
            "sort" => rest.parse().map(Command::Sort),
            "more" => Ok(Command::More),
            "fav" => match rest.trim() {
                "" => Err("Usage: fav <id>".to_string()),
                id => Ok(Command::Favorite(id.to_string())),
            },
            "favs" => Ok(Command::Favorites),
            "match" => Ok(Command::Match),
            "clear-match" => Ok(Command::ClearMatch),
            "reset" => Ok(Command::Reset),
            "retry" => Ok(Command::Retry),
            "breeds" => Ok(Command::Breeds),
            "near" => {
                let numbers: Vec<f64> = rest
                    .split_whitespace()
                    .map(|n| n.parse::<f64>())
                    .collect::<Result<_, _>>()
                    .map_err(|e| format!("Usage: near <lat> <lon> <km> ({})", e))?;
                match numbers[..] {
                    [lat, lon, radius_km] if radius_km > 0.0 => Ok(Command::Near { lat, lon, radius_km }),
                    _ => Err("Usage: near <lat> <lon> <km>".to_string()),
                }
            }
            "logout" => Ok(Command::Logout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("Type `help` for commands".to_string()),
            other => Err(format!("Unknown command '{}'. Type `help` for commands", other)),
        }
    }
}
