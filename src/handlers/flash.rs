use axum::response::Redirect;
use serde::Deserialize;

use crate::templates::{Flash, FlashLevel};

/// Flash carried across a redirect as `?flash=<message>&level=<success|error>`.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
    pub level: Option<String>,
}

impl FlashQuery {
    pub fn into_flash(self) -> Option<Flash> {
        let message = self.flash.filter(|m| !m.trim().is_empty())?;
        let level = match self.level.as_deref() {
            Some("error") => FlashLevel::Error,
            _ => FlashLevel::Success,
        };
        Some(Flash { level, message })
    }
}

pub fn flash_location(path: &str, flash: &Flash) -> String {
    format!(
        "{}?flash={}&level={}",
        path,
        urlencoding::encode(&flash.message),
        flash.level.as_str()
    )
}

pub fn redirect_with_flash(path: &str, flash: &Flash) -> Redirect {
    Redirect::to(&flash_location(path, flash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_encodes_message() {
        let location = flash_location("/venues/4", &Flash::success("Venue A & B was updated!"));
        assert_eq!(
            location,
            "/venues/4?flash=Venue%20A%20%26%20B%20was%20updated%21&level=success"
        );
    }

    #[test]
    fn query_round_trip() {
        let query = FlashQuery {
            flash: Some("An error occurred.".to_string()),
            level: Some("error".to_string()),
        };
        assert_eq!(query.into_flash(), Some(Flash::error("An error occurred.")));
    }

    #[test]
    fn unknown_level_falls_back_to_success_and_blank_is_ignored() {
        let query = FlashQuery {
            flash: Some("Saved".to_string()),
            level: Some("shout".to_string()),
        };
        assert_eq!(query.into_flash(), Some(Flash::success("Saved")));

        let blank = FlashQuery {
            flash: Some("  ".to_string()),
            level: None,
        };
        assert_eq!(blank.into_flash(), None);
    }
}
