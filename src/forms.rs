//! Typed request bodies for the create/edit forms.
//!
//! Submissions arrive as raw `application/x-www-form-urlencoded` pairs so that
//! repeated `genres` keys survive. The raw draft (`*Fields`) keeps whatever the
//! user typed for re-rendering; `validate` turns it into a typed form or the
//! list of problems.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::db::{
    entities::{artist, venue},
    enums::{is_us_state, Genre},
};

pub type FormPairs = Vec<(String, String)>;

const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

fn first_value(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
        .unwrap_or_default()
}

fn all_values(pairs: &[(String, String)], key: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Raw values of the venue/artist form. `address` is unused for artists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub facebook_link: String,
    pub image_link: String,
    pub genres: Vec<String>,
}

impl ProfileFields {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: first_value(pairs, "name"),
            city: first_value(pairs, "city"),
            state: first_value(pairs, "state").to_ascii_uppercase(),
            address: first_value(pairs, "address"),
            phone: first_value(pairs, "phone"),
            facebook_link: first_value(pairs, "facebook_link"),
            image_link: first_value(pairs, "image_link"),
            genres: all_values(pairs, "genres"),
        }
    }

    pub fn from_venue(venue: &venue::Model) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            genres: venue.genre_list().unwrap_or_default(),
        }
    }

    pub fn from_artist(artist: &artist::Model) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            address: String::new(),
            phone: artist.phone.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            genres: artist.genre_list().unwrap_or_default(),
        }
    }

    pub fn validate_venue(&self) -> Result<VenueForm, Vec<String>> {
        let mut problems = Vec::new();
        let common = self.validate_common(&mut problems);

        if self.address.is_empty() {
            problems.push("Address is required".to_string());
        }

        match common {
            Some(common) if problems.is_empty() => Ok(VenueForm {
                name: common.name,
                city: common.city,
                state: common.state,
                address: self.address.clone(),
                phone: common.phone,
                facebook_link: common.facebook_link,
                image_link: common.image_link,
                genres: common.genres,
            }),
            _ => Err(problems),
        }
    }

    pub fn validate_artist(&self) -> Result<ArtistForm, Vec<String>> {
        let mut problems = Vec::new();
        let common = self.validate_common(&mut problems);

        match common {
            Some(common) if problems.is_empty() => Ok(ArtistForm {
                name: common.name,
                city: common.city,
                state: common.state,
                phone: common.phone,
                facebook_link: common.facebook_link,
                image_link: common.image_link,
                genres: common.genres,
            }),
            _ => Err(problems),
        }
    }

    fn validate_common(&self, problems: &mut Vec<String>) -> Option<CommonFields> {
        let before = problems.len();

        if self.name.is_empty() {
            problems.push("Name is required".to_string());
        }
        if self.city.is_empty() {
            problems.push("City is required".to_string());
        }
        if self.state.is_empty() {
            problems.push("State is required".to_string());
        } else if !is_us_state(&self.state) {
            problems.push(format!("Unknown state: {}", self.state));
        }
        if !self.phone.is_empty() && !is_valid_phone(&self.phone) {
            problems.push(format!("Invalid phone number: {}", self.phone));
        }
        if !self.facebook_link.is_empty() && !is_http_url(&self.facebook_link) {
            problems.push("Facebook link must start with http:// or https://".to_string());
        }
        if !self.image_link.is_empty() && !is_http_url(&self.image_link) {
            problems.push("Image link must start with http:// or https://".to_string());
        }

        let mut genres = Vec::with_capacity(self.genres.len());
        if self.genres.is_empty() {
            problems.push("Select at least one genre".to_string());
        }
        for raw in &self.genres {
            match Genre::from_str(raw) {
                Some(genre) if !genres.contains(&genre) => genres.push(genre),
                Some(_) => {}
                None => problems.push(format!("Unknown genre: {}", raw)),
            }
        }

        if problems.len() > before {
            return None;
        }

        Some(CommonFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: optional(&self.phone),
            facebook_link: optional(&self.facebook_link),
            image_link: optional(&self.image_link),
            genres,
        })
    }
}

struct CommonFields {
    name: String,
    city: String,
    state: String,
    phone: Option<String>,
    facebook_link: Option<String>,
    image_link: Option<String>,
    genres: Vec<Genre>,
}

fn is_valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'));
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    allowed && (7..=15).contains(&digits)
}

fn is_http_url(link: &str) -> bool {
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowFields {
    pub venue_id: String,
    pub artist_id: String,
    pub start_time: String,
}

impl ShowFields {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            venue_id: first_value(pairs, "venue_id"),
            artist_id: first_value(pairs, "artist_id"),
            start_time: first_value(pairs, "start_time"),
        }
    }

    pub fn validate(&self) -> Result<ShowForm, Vec<String>> {
        let mut problems = Vec::new();

        let venue_id = parse_id(&self.venue_id, "Venue ID", &mut problems);
        let artist_id = parse_id(&self.artist_id, "Artist ID", &mut problems);
        let start_time = if self.start_time.is_empty() {
            problems.push("Start time is required".to_string());
            None
        } else {
            let parsed = parse_start_time(&self.start_time);
            if parsed.is_none() {
                problems.push(format!("Invalid start time: {}", self.start_time));
            }
            parsed
        };

        match (venue_id, artist_id, start_time) {
            (Some(venue_id), Some(artist_id), Some(start_time)) if problems.is_empty() => {
                Ok(ShowForm {
                    venue_id,
                    artist_id,
                    start_time,
                })
            }
            _ => Err(problems),
        }
    }
}

fn parse_id(raw: &str, label: &str, problems: &mut Vec<String>) -> Option<i32> {
    if raw.is_empty() {
        problems.push(format!("{} is required", label));
        return None;
    }
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            problems.push(format!("{} must be a positive whole number", label));
            None
        }
    }
}

/// Naive timestamps from the form are taken as UTC.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub search_term: Option<String>,
}

impl SearchForm {
    pub fn term(&self) -> &str {
        self.search_term.as_deref().unwrap_or("")
    }
}
