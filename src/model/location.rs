// File: ./src/model/location.rs
//! Building/room resolution for the location field of a meeting pattern.
//!
//! Exports have used several location layouts over the years:
//!
//! - `HENN - Room 200` (legacy dash format)
//! - `UBCV | Hennings Building (HENN) | Floor: 2 | Room: 200` (bracketed code)
//! - `Online`, or nothing at all
//!
//! The building code is the only anchor present in every layout. It is looked
//! up in the [`AddressTable`]; room and display name are best-effort.
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

pub const UNKNOWN_ADDRESS: &str = "Unknown Address";

static BRACKETED_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([A-Za-z0-9]+)\)").unwrap());
static ROOM_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bRoom:\s*([^\s|,()]+)").unwrap());
static TRAILING_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^()]*\)\s*$").unwrap());
static LEADING_ROOM_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^room\b\s*").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub name: String,
    pub address: String,
}

/// Read-only map from upper-cased building code to its name and street address.
#[derive(Debug, Clone, Default)]
pub struct AddressTable {
    buildings: HashMap<String, Building>,
}

impl AddressTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &str, name: &str, address: &str) {
        self.buildings.insert(
            code.trim().to_uppercase(),
            Building {
                name: name.trim().to_string(),
                address: address.trim().to_string(),
            },
        );
    }

    pub fn get(&self, code: &str) -> Option<&Building> {
        self.buildings.get(&code.trim().to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

impl<C, N, A> FromIterator<(C, N, A)> for AddressTable
where
    C: AsRef<str>,
    N: AsRef<str>,
    A: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (C, N, A)>>(iter: I) -> Self {
        let mut table = AddressTable::new();
        for (code, name, address) in iter {
            table.insert(code.as_ref(), name.as_ref(), address.as_ref());
        }
        table
    }
}

/// Classification of a location token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLocation {
    Online,
    Unknown,
    Resolved {
        code: String,
        room: Option<String>,
        name: String,
        address: String,
    },
}

/// Code and room pulled out of a location token by one matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    pub code: String,
    pub room: Option<String>,
}

type Matcher = fn(&str) -> Option<LocationMatch>;

/// Matchers in priority order. The first one returning a code wins.
const MATCHERS: &[(&str, Matcher)] = &[
    ("bracketed-code", match_bracketed_code),
    ("legacy-dash", match_legacy_dash),
];

/// `... Hennings Building (HENN) | Floor: 2 | Room: 200`
pub fn match_bracketed_code(token: &str) -> Option<LocationMatch> {
    let code = BRACKETED_CODE.captures(token)?.get(1)?.as_str().to_uppercase();
    let room = ROOM_LABEL
        .captures(token)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());
    Some(LocationMatch { code, room })
}

/// `HENN - Room 200`
pub fn match_legacy_dash(token: &str) -> Option<LocationMatch> {
    let segments: Vec<&str> = token.split('-').collect();
    let code = segments.first()?.trim().to_uppercase();
    if code.is_empty() {
        return None;
    }
    let room = if segments.len() > 1 {
        segments
            .last()
            .map(|last| LEADING_ROOM_WORD.replace(last.trim(), "").trim().to_string())
            .filter(|r| !r.is_empty())
    } else {
        None
    };
    Some(LocationMatch { code, room })
}

fn match_location(token: &str) -> Option<LocationMatch> {
    MATCHERS.iter().find_map(|(name, matcher)| {
        let found = matcher(token);
        if let Some(m) = &found {
            log::debug!("Location '{}' matched {} as {}", token, name, m.code);
        }
        found
    })
}

fn is_online(token: &str) -> bool {
    token.trim().to_lowercase().starts_with("online")
}

/// Second `|` segment of a pipe-delimited location, without its `(CODE)` suffix.
fn override_name(token: &str) -> Option<String> {
    let segments: Vec<&str> = token.split('|').collect();
    if segments.len() < 2 {
        return None;
    }
    let name = TRAILING_CODE.replace(segments[1].trim(), "").trim().to_string();
    if name.is_empty() { None } else { Some(name) }
}

/// Resolves location tokens against an address table.
///
/// Resolution never fails; unknown buildings degrade to [`UNKNOWN_ADDRESS`]
/// or to the raw token.
#[derive(Debug, Clone)]
pub struct LocationResolver<'a> {
    table: &'a AddressTable,
    city_region: String,
    country: String,
    online_label: String,
}

impl<'a> LocationResolver<'a> {
    pub fn new(table: &'a AddressTable, city_region: &str, country: &str, online_label: &str) -> Self {
        Self {
            table,
            city_region: city_region.to_string(),
            country: country.to_string(),
            online_label: online_label.to_string(),
        }
    }

    pub fn table(&self) -> &AddressTable {
        self.table
    }

    pub fn resolve(&self, token: &str) -> ResolvedLocation {
        let token = token.trim();
        if token.is_empty() {
            return ResolvedLocation::Unknown;
        }
        if is_online(token) {
            return ResolvedLocation::Online;
        }
        let Some(found) = match_location(token) else {
            return ResolvedLocation::Unknown;
        };
        match self.table.get(&found.code) {
            Some(building) => ResolvedLocation::Resolved {
                code: found.code,
                room: found.room,
                name: building.name.clone(),
                address: building.address.clone(),
            },
            None => {
                log::debug!("Building code '{}' not in address table", found.code);
                ResolvedLocation::Unknown
            }
        }
    }

    /// Postal-style address text for the event's LOCATION field.
    pub fn resolve_address(&self, token: &str) -> String {
        match self.resolve(token) {
            ResolvedLocation::Online => format!("Online - Virtual Class\n{}", self.country),
            ResolvedLocation::Unknown => UNKNOWN_ADDRESS.to_string(),
            ResolvedLocation::Resolved { room, address, .. } => match room {
                Some(room) => format!(
                    "{}-{}\n{}\n{}",
                    room, address, self.city_region, self.country
                ),
                None => format!("{}\n{}\n{}", address, self.city_region, self.country),
            },
        }
    }

    /// Human-readable label such as `Hennings Building (HENN) - Room 200`.
    pub fn resolve_display_name(&self, token: &str) -> String {
        let token = token.trim();
        if token.is_empty() || is_online(token) {
            return self.online_label.clone();
        }
        let Some(found) = match_location(token) else {
            return token.to_string();
        };
        let room_suffix = found
            .room
            .as_ref()
            .map(|r| format!(" - Room {}", r))
            .unwrap_or_default();

        match self.table.get(&found.code) {
            Some(building) => {
                let name = override_name(token).unwrap_or_else(|| building.name.clone());
                format!("{} ({}){}", name, found.code, room_suffix)
            }
            None if found.room.is_some() => format!("{}{}", found.code, room_suffix),
            None => token.to_string(),
        }
    }
}
