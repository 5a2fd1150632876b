use maud::{html, Markup};

use super::components::{
    format_datetime, genre_tags, profile_image, schedule_sections, search_box, DateFormat, Flash,
};
use super::layout::base_layout;
use crate::{
    db::{
        entities::{artist, venue},
        repositories::{CityArea, SearchResults, ShowListing},
    },
    services::ShowSchedule,
};

pub fn home_page(flash: Option<&Flash>) -> Markup {
    base_layout(
        "Home",
        flash,
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "Gigbook" }
                p class="text-gray-600 mb-8" {
                    "Find a venue, book an artist, put the show on the calendar."
                }
                div class="flex justify-center space-x-4" {
                    a href="/venues/create" class="btn" { "Post a venue" }
                    a href="/artists/create" class="btn" { "Post an artist" }
                    a href="/shows/create" class="btn" { "List a show" }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[CityArea], flash: Option<&Flash>) -> Markup {
    base_layout(
        "Venues",
        flash,
        html! {
            (search_box("/venues/search", "Find a venue", ""))

            @if areas.is_empty() {
                p class="text-gray-600" { "No venues listed yet." }
            }

            @for area in areas {
                section class="area mb-8" {
                    h2 class="text-2xl font-semibold text-gray-900 mb-2" {
                        (area.city) ", " (area.state)
                    }
                    ul class="space-y-1" {
                        @for venue in &area.venues {
                            li {
                                a href={(format!("/venues/{}", venue.id))} class="hover:underline" {
                                    (venue.name)
                                }
                                @if venue.num_upcoming_shows > 0 {
                                    span class="ml-2 text-sm text-gray-500" {
                                        "(" (venue.num_upcoming_shows) " upcoming)"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artists_page(artists: &[artist::Model], flash: Option<&Flash>) -> Markup {
    base_layout(
        "Artists",
        flash,
        html! {
            (search_box("/artists/search", "Find an artist", ""))

            @if artists.is_empty() {
                p class="text-gray-600" { "No artists listed yet." }
            } @else {
                ul class="space-y-1" {
                    @for artist in artists {
                        li {
                            a href={(format!("/artists/{}", artist.id))} class="hover:underline" {
                                (artist.name)
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Which listing a search ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Venues,
    Artists,
}

impl SearchKind {
    fn path(&self) -> &str {
        match self {
            Self::Venues => "/venues",
            Self::Artists => "/artists",
        }
    }

    fn title(&self) -> &str {
        match self {
            Self::Venues => "Venue search",
            Self::Artists => "Artist search",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
}

impl From<venue::Model> for SearchHit {
    fn from(venue: venue::Model) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
        }
    }
}

impl From<artist::Model> for SearchHit {
    fn from(artist: artist::Model) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
        }
    }
}

pub fn search_results_page(
    kind: SearchKind,
    search_term: &str,
    results: &SearchResults<SearchHit>,
) -> Markup {
    let action = format!("{}/search", kind.path());

    base_layout(
        kind.title(),
        None,
        html! {
            (search_box(&action, "Search by name", search_term))

            h1 class="text-2xl font-semibold mb-4" {
                "Number of search results for \"" (search_term) "\": "
                span class="result-count" { (results.count) }
            }

            ul class="space-y-1" {
                @for hit in &results.items {
                    li {
                        a href={(format!("{}/{}", kind.path(), hit.id))} class="hover:underline" {
                            (hit.name)
                        }
                    }
                }
            }
        },
    )
}

pub struct VenueDetail {
    pub venue: venue::Model,
    pub genres: Vec<String>,
    pub schedule: ShowSchedule,
}

pub fn venue_detail_page(detail: &VenueDetail, flash: Option<&Flash>) -> Markup {
    let venue = &detail.venue;

    base_layout(
        &venue.name,
        flash,
        html! {
            div class="flex flex-col md:flex-row gap-6" {
                div class="flex-grow" {
                    h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                    p class="text-sm text-gray-500 mb-4" { "ID: " (venue.id) }
                    (genre_tags(&detail.genres))

                    dl class="mt-4 space-y-2" {
                        div { dt class="sr-only" { "Location" } dd { (venue.city) ", " (venue.state) } }
                        div { dt class="sr-only" { "Address" } dd { (venue.address) } }
                        @if let Some(phone) = &venue.phone {
                            div { dt class="sr-only" { "Phone" } dd { (phone) } }
                        }
                        @if let Some(link) = &venue.facebook_link {
                            div {
                                dt class="sr-only" { "Facebook" }
                                dd { a href=(link) target="_blank" rel="noopener" { (link) } }
                            }
                        }
                    }

                    div class="mt-6 flex space-x-3" {
                        a href={(format!("/venues/{}/edit", venue.id))} class="btn" { "Edit" }
                        button
                            class="btn btn-danger"
                            hx-delete={(format!("/venues/{}", venue.id))}
                            hx-confirm="Delete this venue and all of its shows?"
                            hx-target="#notification-area"
                            hx-swap="innerHTML" {
                            "Delete"
                        }
                    }
                }
                div class="flex-shrink-0" {
                    (profile_image(venue.image_link.as_deref(), &venue.name))
                }
            }

            (schedule_sections(&detail.schedule, "/artists"))
        },
    )
}

pub struct ArtistDetail {
    pub artist: artist::Model,
    pub genres: Vec<String>,
    pub schedule: ShowSchedule,
}

pub fn artist_detail_page(detail: &ArtistDetail, flash: Option<&Flash>) -> Markup {
    let artist = &detail.artist;

    base_layout(
        &artist.name,
        flash,
        html! {
            div class="flex flex-col md:flex-row gap-6" {
                div class="flex-grow" {
                    h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                    p class="text-sm text-gray-500 mb-4" { "ID: " (artist.id) }
                    (genre_tags(&detail.genres))

                    dl class="mt-4 space-y-2" {
                        div { dt class="sr-only" { "Location" } dd { (artist.city) ", " (artist.state) } }
                        @if let Some(phone) = &artist.phone {
                            div { dt class="sr-only" { "Phone" } dd { (phone) } }
                        }
                        @if let Some(link) = &artist.facebook_link {
                            div {
                                dt class="sr-only" { "Facebook" }
                                dd { a href=(link) target="_blank" rel="noopener" { (link) } }
                            }
                        }
                    }

                    div class="mt-6" {
                        a href={(format!("/artists/{}/edit", artist.id))} class="btn" { "Edit" }
                    }
                }
                div class="flex-shrink-0" {
                    (profile_image(artist.image_link.as_deref(), &artist.name))
                }
            }

            (schedule_sections(&detail.schedule, "/venues"))
        },
    )
}

pub fn shows_page(shows: &[ShowListing], flash: Option<&Flash>) -> Markup {
    base_layout(
        "Shows",
        flash,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Shows" }

            @if shows.is_empty() {
                p class="text-gray-600" { "No shows listed yet." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                    @for show in shows {
                        div class="show-card bg-white rounded-lg shadow-md p-4" {
                            @if let Some(image) = &show.artist_image_link {
                                img src=(image) alt=(show.artist_name) class="w-full h-40 object-cover rounded mb-3";
                            }
                            p class="text-sm text-gray-500" {
                                (format_datetime(&show.start_time, DateFormat::Medium))
                            }
                            a href={(format!("/artists/{}", show.artist_id))} class="block font-semibold hover:underline" {
                                (show.artist_name)
                            }
                            p class="text-sm text-gray-600" {
                                "playing at "
                                a href={(format!("/venues/{}", show.venue_id))} class="hover:underline" {
                                    (show.venue_name)
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    base_layout(
        "Not Found",
        None,
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "404" }
                p class="text-gray-600" { "Sorry, we couldn't find that page." }
                a href="/" class="text-primary hover:underline" { "Back home" }
            }
        },
    )
}

pub fn server_error_page() -> Markup {
    base_layout(
        "Server Error",
        None,
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "500" }
                p class="text-gray-600" { "Something went wrong on our end. Please try again." }
                a href="/" class="text-primary hover:underline" { "Back home" }
            }
        },
    )
}

pub fn invalid_submission_page(problems: &[String]) -> Markup {
    base_layout(
        "Invalid Submission",
        None,
        html! {
            div class="py-12" {
                h1 class="text-2xl font-bold text-gray-900 mb-4" { "The submission could not be accepted" }
                ul class="list-disc ml-6 text-red-700" {
                    @for problem in problems {
                        li { (problem) }
                    }
                }
            }
        },
    )
}
