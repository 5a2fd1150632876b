use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use super::{name_contains, SearchResults};
use crate::{
    db::{
        entities::{show, venue},
        enums::encode_genres,
    },
    error::{AppError, Result},
    forms::VenueForm,
    services::is_upcoming,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Groups venues by (city, state). Input order is preserved inside each area
/// and areas appear in the order their first venue does.
pub fn group_by_city(
    venues: Vec<venue::Model>,
    upcoming_counts: &HashMap<i32, usize>,
) -> Vec<CityArea> {
    let mut areas: Vec<CityArea> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming_counts.get(&venue.id).copied().unwrap_or(0),
        };

        let key = (venue.city, venue.state);
        match index.get(&key) {
            Some(&i) => areas[i].venues.push(summary),
            None => {
                index.insert(key.clone(), areas.len());
                areas.push(CityArea {
                    city: key.0,
                    state: key.1,
                    venues: vec![summary],
                });
            }
        }
    }

    areas
}

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<venue::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))
    }

    pub async fn list_all(&self) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn list_grouped_by_city(&self) -> Result<Vec<CityArea>> {
        let venues = self.list_all().await?;

        let starts: Vec<(i32, DateTimeWithTimeZone)> = show::Entity::find()
            .select_only()
            .column(show::Column::VenueId)
            .column(show::Column::StartTime)
            .into_tuple()
            .all(&self.db)
            .await?;

        let now = Utc::now();
        let mut upcoming_counts: HashMap<i32, usize> = HashMap::new();
        for (venue_id, start_time) in starts {
            if is_upcoming(start_time.with_timezone(&Utc), now) {
                *upcoming_counts.entry(venue_id).or_insert(0) += 1;
            }
        }

        Ok(group_by_city(venues, &upcoming_counts))
    }

    pub async fn search_by_name(&self, term: &str) -> Result<SearchResults<venue::Model>> {
        let venues = venue::Entity::find()
            .filter(name_contains(venue::Column::Name, term))
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?;

        Ok(SearchResults::new(venues))
    }

    pub async fn create(&self, form: &VenueForm) -> Result<venue::Model> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let genres = encode_genres(&form.genres)?;

        let txn = self.db.begin().await?;
        let venue = venue::ActiveModel {
            name: Set(form.name.clone()),
            city: Set(form.city.clone()),
            state: Set(form.state.clone()),
            address: Set(form.address.clone()),
            phone: Set(form.phone.clone()),
            facebook_link: Set(form.facebook_link.clone()),
            image_link: Set(form.image_link.clone()),
            genres: Set(genres),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        tracing::info!(venue_id = venue.id, "Venue created");
        Ok(venue)
    }

    /// Overwrites every mutable field of an existing venue.
    pub async fn update(&self, id: i32, form: &VenueForm) -> Result<venue::Model> {
        let genres = encode_genres(&form.genres)?;

        let txn = self.db.begin().await?;
        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

        let mut active: venue::ActiveModel = existing.into();
        active.name = Set(form.name.clone());
        active.city = Set(form.city.clone());
        active.state = Set(form.state.clone());
        active.address = Set(form.address.clone());
        active.phone = Set(form.phone.clone());
        active.facebook_link = Set(form.facebook_link.clone());
        active.image_link = Set(form.image_link.clone());
        active.genres = Set(genres);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(venue_id = id, "Venue updated");
        Ok(updated)
    }

    /// Deletes a venue and, through the foreign key, its shows.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;
        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

        existing.delete(&txn).await?;
        txn.commit().await?;

        tracing::info!(venue_id = id, "Venue deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn venue(id: i32, name: &str, city: &str, state: &str) -> venue::Model {
        let now: DateTimeWithTimeZone = Utc::now().into();
        venue::Model {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main St".to_string(),
            phone: None,
            facebook_link: None,
            image_link: None,
            genres: "[]".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn groups_by_city_and_state_in_first_seen_order() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            venue(4, "Springfield Hall", "Springfield", "IL"),
            venue(5, "Springfield Barn", "Springfield", "MO"),
        ];
        let counts = HashMap::from([(3, 2)]);

        let areas = group_by_city(venues, &counts);

        let keys: Vec<(&str, &str)> = areas
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("San Francisco", "CA"),
                ("New York", "NY"),
                ("Springfield", "IL"),
                ("Springfield", "MO"),
            ]
        );

        assert_eq!(
            areas[0].venues,
            vec![
                VenueSummary {
                    id: 1,
                    name: "The Musical Hop".to_string(),
                    num_upcoming_shows: 0,
                },
                VenueSummary {
                    id: 3,
                    name: "Park Square Live Music & Coffee".to_string(),
                    num_upcoming_shows: 2,
                },
            ]
        );
    }

    #[test]
    fn no_venues_no_areas() {
        assert!(group_by_city(Vec::new(), &HashMap::new()).is_empty());
    }
}
