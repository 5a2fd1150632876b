#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RnB,
    Reggae,
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 19] = [
        Self::Alternative,
        Self::Blues,
        Self::Classical,
        Self::Country,
        Self::Electronic,
        Self::Folk,
        Self::Funk,
        Self::HipHop,
        Self::HeavyMetal,
        Self::Instrumental,
        Self::Jazz,
        Self::MusicalTheatre,
        Self::Pop,
        Self::Punk,
        Self::RnB,
        Self::Reggae,
        Self::RockNRoll,
        Self::Soul,
        Self::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Alternative => "Alternative",
            Self::Blues => "Blues",
            Self::Classical => "Classical",
            Self::Country => "Country",
            Self::Electronic => "Electronic",
            Self::Folk => "Folk",
            Self::Funk => "Funk",
            Self::HipHop => "Hip-Hop",
            Self::HeavyMetal => "Heavy Metal",
            Self::Instrumental => "Instrumental",
            Self::Jazz => "Jazz",
            Self::MusicalTheatre => "Musical Theatre",
            Self::Pop => "Pop",
            Self::Punk => "Punk",
            Self::RnB => "R&B",
            Self::Reggae => "Reggae",
            Self::RockNRoll => "Rock n Roll",
            Self::Soul => "Soul",
            Self::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.as_str() == s)
    }
}

/// Canonical stored form of a genre list: a JSON array of display names.
pub fn encode_genres(genres: &[Genre]) -> Result<String, serde_json::Error> {
    let names: Vec<&str> = genres.iter().map(|g| g.as_str()).collect();
    serde_json::to_string(&names)
}

pub fn decode_genres(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Two-letter codes accepted in the `state` field.
pub const US_STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub fn is_us_state(code: &str) -> bool {
    US_STATES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_names_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_str(genre.as_str()), Some(genre));
        }
        assert_eq!(Genre::from_str("rock n roll"), None);
    }

    #[test]
    fn genres_are_stored_as_json_array() {
        let encoded = encode_genres(&[Genre::Jazz, Genre::RnB]).unwrap();
        assert_eq!(encoded, r#"["Jazz","R&B"]"#);
        assert_eq!(decode_genres(&encoded).unwrap(), vec!["Jazz", "R&B"]);
    }

    #[test]
    fn legacy_stringified_lists_are_rejected() {
        assert!(decode_genres("['Jazz', 'Blues']").is_err());
    }

    #[test]
    fn empty_genre_list_encodes_to_empty_array() {
        assert_eq!(encode_genres(&[]).unwrap(), "[]");
    }

    #[test]
    fn state_codes() {
        assert!(is_us_state("CA"));
        assert!(is_us_state("DC"));
        assert!(!is_us_state("ca"));
        assert!(!is_us_state("XX"));
    }
}
