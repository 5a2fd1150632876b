use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::services::{ScheduledShow, ShowSchedule};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One-shot status message shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

pub fn flash_area(flash: Option<&Flash>) -> Markup {
    html! {
        @if let Some(flash) = flash {
            (notification(&flash.message, flash.level.as_str()))
        }
    }
}

pub fn notification(message: &str, notification_type: &str) -> Markup {
    let (bg_color, text_color, icon) = match notification_type {
        "success" => ("bg-green-50", "text-green-800", "✓"),
        "error" => ("bg-red-50", "text-red-800", "✗"),
        _ => ("bg-gray-50", "text-gray-800", "•"),
    };

    html! {
        div class={(format!("flash p-4 rounded-md {} {}", bg_color, text_color))} {
            div class="flex items-center" {
                span class="font-bold mr-2" { (icon) }
                span { (message) }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Monday October, 19, 2026 at 8:00PM`
    Full,
    /// `Mon 10, 19, 2026 8:00PM`
    Medium,
}

pub fn format_datetime(value: &DateTime<Utc>, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

pub fn genre_tags(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="genre px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded" { (genre) }
            }
        }
    }
}

/// Card for a show on a detail page. `link_prefix` is `/artists` on venue
/// pages and `/venues` on artist pages.
pub fn scheduled_show_card(show: &ScheduledShow, link_prefix: &str) -> Markup {
    let image = show
        .counterpart_image_link
        .as_deref()
        .unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        div class="show-card flex items-center bg-white rounded-lg shadow-sm p-3 space-x-4" {
            img src=(image) alt=(show.counterpart_name) class="w-16 h-16 object-cover rounded";
            div {
                a href={(format!("{}/{}", link_prefix, show.counterpart_id))}
                  class="font-semibold text-gray-900 hover:underline" {
                    (show.counterpart_name)
                }
                p class="text-sm text-gray-600" {
                    (format_datetime(&show.start_time, DateFormat::Full))
                }
            }
        }
    }
}

fn show_section(heading: &str, count: usize, shows: &[ScheduledShow], link_prefix: &str) -> Markup {
    html! {
        section class="mt-8" {
            h2 class="text-xl font-semibold mb-4" {
                (count) " " (heading)
                @if count == 1 { " Show" } @else { " Shows" }
            }
            @if shows.is_empty() {
                p class="text-gray-500" { "Nothing scheduled." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                    @for show in shows {
                        (scheduled_show_card(show, link_prefix))
                    }
                }
            }
        }
    }
}

/// Upcoming and past sections of a detail page.
pub fn schedule_sections(schedule: &ShowSchedule, link_prefix: &str) -> Markup {
    html! {
        @if schedule.is_empty() {
            p class="mt-8 text-gray-500 no-shows" { "No shows booked yet." }
        }
        (show_section("Upcoming", schedule.upcoming_count(), &schedule.upcoming, link_prefix))
        (show_section("Past", schedule.past_count(), &schedule.past, link_prefix))
    }
}

pub fn search_box(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) class="flex space-x-2 mb-6" {
            input
                type="search"
                name="search_term"
                value=(term)
                placeholder=(placeholder)
                class="flex-grow px-3 py-2 border border-gray-300 rounded-md";
            button type="submit" class="px-4 py-2 bg-primary text-white rounded-md" { "Search" }
        }
    }
}

pub fn profile_image(link: Option<&str>, alt: &str) -> Markup {
    html! {
        img
            src=(link.unwrap_or(PLACEHOLDER_IMAGE))
            alt=(alt)
            class="w-full md:w-64 rounded-lg shadow-md";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn full_and_medium_date_formats() {
        let value = Utc.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap();
        assert_eq!(
            format_datetime(&value, DateFormat::Full),
            "Monday October, 19, 2026 at 8:00PM"
        );
        assert_eq!(
            format_datetime(&value, DateFormat::Medium),
            "Mon 10, 19, 2026 8:00PM"
        );
    }

    #[test]
    fn flash_markup_escapes_message() {
        let markup = flash_area(Some(&Flash::error("<script>x</script>"))).into_string();
        assert!(markup.contains("&lt;script&gt;"));
        assert!(markup.contains("text-red-800"));
    }

    #[test]
    fn no_flash_renders_nothing() {
        assert_eq!(flash_area(None).into_string(), "");
    }

    #[test]
    fn schedule_sections_pluralise() {
        let show = ScheduledShow {
            show_id: 1,
            counterpart_id: 7,
            counterpart_name: "Guns N Petals".to_string(),
            counterpart_image_link: None,
            start_time: Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap(),
        };

        let schedule = ShowSchedule {
            upcoming: vec![show],
            past: Vec::new(),
        };
        let html = schedule_sections(&schedule, "/artists").into_string();
        assert!(html.contains("1 Upcoming Show<"));
        assert!(html.contains("href=\"/artists/7\""));
        assert!(html.contains("0 Past Shows"));
        assert!(html.contains("Nothing scheduled."));
        assert!(!html.contains("No shows booked yet."));

        let empty = schedule_sections(&ShowSchedule::default(), "/venues").into_string();
        assert!(empty.contains("No shows booked yet."));
        assert!(empty.contains("0 Upcoming Shows"));
    }
}
