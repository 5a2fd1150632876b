use maud::{html, Markup};

use super::components::{notification, Flash};
use super::layout::base_layout;
use crate::{
    db::{
        entities::{artist, venue},
        enums::{Genre, US_STATES},
    },
    forms::{ProfileFields, ShowFields},
};

/// Whether a form posts a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

fn problem_list(problems: &[String]) -> Markup {
    html! {
        @if !problems.is_empty() {
            div class="form-errors mb-4" {
                (notification("Please fix the following:", "error"))
                ul class="list-disc ml-6 mt-2 text-red-700" {
                    @for problem in problems {
                        li { (problem) }
                    }
                }
            }
        }
    }
}

fn text_input(label: &str, name: &str, value: &str, required: bool) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700 mb-2" for=(name) { (label) }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value)
                required[required]
                class="w-full px-3 py-2 border border-gray-300 rounded-md";
        }
    }
}

fn state_select(selected: &str) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700 mb-2" for="state" { "State" }
            select id="state" name="state" required class="w-full px-3 py-2 border border-gray-300 rounded-md" {
                option value="" { "Choose a state" }
                @for code in US_STATES {
                    option value=(code) selected[code == selected] { (code) }
                }
            }
        }
    }
}

fn genre_select(selected: &[String]) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700 mb-2" for="genres" { "Genres" }
            select id="genres" name="genres" multiple required class="w-full px-3 py-2 border border-gray-300 rounded-md" {
                @for genre in Genre::ALL {
                    option value=(genre.as_str()) selected[selected.iter().any(|s| s == genre.as_str())] {
                        (genre.as_str())
                    }
                }
            }
        }
    }
}

fn profile_inputs(fields: &ProfileFields, with_address: bool) -> Markup {
    html! {
        div class="space-y-4" {
            (text_input("Name", "name", &fields.name, true))
            (text_input("City", "city", &fields.city, true))
            (state_select(&fields.state))
            @if with_address {
                (text_input("Address", "address", &fields.address, true))
            }
            (text_input("Phone", "phone", &fields.phone, false))
            (genre_select(&fields.genres))
            (text_input("Facebook link", "facebook_link", &fields.facebook_link, false))
            (text_input("Image link", "image_link", &fields.image_link, false))
        }
    }
}

pub fn venue_form_page(mode: FormMode, fields: &ProfileFields, problems: &[String]) -> Markup {
    let (title, action) = match mode {
        FormMode::Create => ("List a new venue".to_string(), "/venues/create".to_string()),
        FormMode::Edit(id) => (format!("Edit venue {}", fields.name), format!("/venues/{}/edit", id)),
    };

    base_layout(
        &title,
        None,
        html! {
            div class="max-w-2xl mx-auto bg-white rounded-lg shadow-sm p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }
                (problem_list(problems))
                form method="post" action=(action) {
                    (profile_inputs(fields, true))
                    button type="submit" class="mt-6 btn" {
                        @match mode {
                            FormMode::Create => { "Create Venue" }
                            FormMode::Edit(_) => { "Save Changes" }
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_form_page(mode: FormMode, fields: &ProfileFields, problems: &[String]) -> Markup {
    let (title, action) = match mode {
        FormMode::Create => ("List a new artist".to_string(), "/artists/create".to_string()),
        FormMode::Edit(id) => (format!("Edit artist {}", fields.name), format!("/artists/{}/edit", id)),
    };

    base_layout(
        &title,
        None,
        html! {
            div class="max-w-2xl mx-auto bg-white rounded-lg shadow-sm p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }
                (problem_list(problems))
                form method="post" action=(action) {
                    (profile_inputs(fields, false))
                    button type="submit" class="mt-6 btn" {
                        @match mode {
                            FormMode::Create => { "Create Artist" }
                            FormMode::Edit(_) => { "Save Changes" }
                        }
                    }
                }
            }
        },
    )
}

pub fn show_form_page(
    fields: &ShowFields,
    problems: &[String],
    venues: &[venue::Model],
    artists: &[artist::Model],
    flash: Option<&Flash>,
) -> Markup {
    base_layout(
        "List a new show",
        flash,
        html! {
            div class="max-w-2xl mx-auto bg-white rounded-lg shadow-sm p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { "List a new show" }
                (problem_list(problems))
                form method="post" action="/shows/create" {
                    div class="space-y-4" {
                        div {
                            label class="block text-sm font-medium text-gray-700 mb-2" for="artist_id" { "Artist" }
                            select id="artist_id" name="artist_id" required class="w-full px-3 py-2 border border-gray-300 rounded-md" {
                                option value="" { "Choose an artist" }
                                @for artist in artists {
                                    @let id = artist.id.to_string();
                                    option value=(id) selected[id == fields.artist_id] {
                                        (artist.name) " (#" (artist.id) ")"
                                    }
                                }
                            }
                        }
                        div {
                            label class="block text-sm font-medium text-gray-700 mb-2" for="venue_id" { "Venue" }
                            select id="venue_id" name="venue_id" required class="w-full px-3 py-2 border border-gray-300 rounded-md" {
                                option value="" { "Choose a venue" }
                                @for venue in venues {
                                    @let id = venue.id.to_string();
                                    option value=(id) selected[id == fields.venue_id] {
                                        (venue.name) " (#" (venue.id) ")"
                                    }
                                }
                            }
                        }
                        div {
                            label class="block text-sm font-medium text-gray-700 mb-2" for="start_time" { "Start time" }
                            input
                                type="datetime-local"
                                id="start_time"
                                name="start_time"
                                value=(fields.start_time)
                                required
                                class="w-full px-3 py-2 border border-gray-300 rounded-md";
                        }
                    }
                    button type="submit" class="mt-6 btn" { "Create Show" }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_prefills_values() {
        let fields = ProfileFields {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            ..Default::default()
        };

        let html = venue_form_page(FormMode::Edit(3), &fields, &[]).into_string();

        assert!(html.contains(r#"action="/venues/3/edit""#));
        assert!(html.contains(r#"value="The Musical Hop""#));
        assert!(html.contains(r#"<option value="CA" selected>"#));
        assert!(html.contains(r#"<option value="Jazz" selected>"#));
        assert!(html.contains(r#"<option value="Blues">"#));
        assert!(!html.contains("form-errors"));
    }

    #[test]
    fn artist_form_has_no_address_and_lists_problems() {
        let problems = vec!["Name is required".to_string()];
        let html = artist_form_page(FormMode::Create, &ProfileFields::default(), &problems)
            .into_string();

        assert!(html.contains(r#"action="/artists/create""#));
        assert!(!html.contains(r#"name="address""#));
        assert!(html.contains("Name is required"));
    }
}
