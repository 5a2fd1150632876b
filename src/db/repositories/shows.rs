use chrono::{DateTime, Utc};
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    db::entities::{artist, show, venue},
    error::Result,
    forms::ShowForm,
    services::ScheduledShow,
};

/// A show with both sides resolved, for the global listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a show. Venue and artist existence is left to the foreign keys.
    pub async fn create(&self, form: &ShowForm) -> Result<show::Model> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let txn = self.db.begin().await?;
        let show = show::ActiveModel {
            venue_id: Set(form.venue_id),
            artist_id: Set(form.artist_id),
            start_time: Set(form.start_time.into()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        tracing::info!(
            show_id = show.id,
            venue_id = show.venue_id,
            artist_id = show.artist_id,
            "Show created"
        );
        Ok(show)
    }

    /// Every show, earliest first.
    pub async fn list_all(&self) -> Result<Vec<ShowListing>> {
        let shows = show::Entity::find()
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await?;

        let venues = shows.load_one(venue::Entity, &self.db).await?;
        let artists = shows.load_one(artist::Entity, &self.db).await?;

        let mut listings: Vec<ShowListing> = shows
            .into_iter()
            .zip(venues)
            .zip(artists)
            .filter_map(|((show, venue), artist)| match (venue, artist) {
                (Some(venue), Some(artist)) => Some(ShowListing {
                    show_id: show.id,
                    venue_id: venue.id,
                    venue_name: venue.name,
                    artist_id: artist.id,
                    artist_name: artist.name,
                    artist_image_link: artist.image_link,
                    start_time: show.start_time.with_timezone(&Utc),
                }),
                _ => {
                    tracing::warn!(show_id = show.id, "Show references a missing venue or artist");
                    None
                }
            })
            .collect();

        listings.sort_by_key(|l| (l.start_time, l.show_id));
        Ok(listings)
    }

    /// Shows at a venue, with the performing artist as counterpart.
    pub async fn for_venue(&self, venue_id: i32) -> Result<Vec<ScheduledShow>> {
        let rows = show::Entity::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .find_also_related(artist::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, artist)| {
                artist.map(|artist| ScheduledShow {
                    show_id: show.id,
                    counterpart_id: artist.id,
                    counterpart_name: artist.name,
                    counterpart_image_link: artist.image_link,
                    start_time: show.start_time.with_timezone(&Utc),
                })
            })
            .collect())
    }

    /// Shows by an artist, with the hosting venue as counterpart.
    pub async fn for_artist(&self, artist_id: i32) -> Result<Vec<ScheduledShow>> {
        let rows = show::Entity::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .find_also_related(venue::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, venue)| {
                venue.map(|venue| ScheduledShow {
                    show_id: show.id,
                    counterpart_id: venue.id,
                    counterpart_name: venue.name,
                    counterpart_image_link: venue.image_link,
                    start_time: show.start_time.with_timezone(&Utc),
                })
            })
            .collect())
    }
}
