use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::{name_contains, SearchResults};
use crate::{
    db::{entities::artist, enums::encode_genres},
    error::{AppError, Result},
    forms::ArtistForm,
};

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<artist::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))
    }

    pub async fn list_all(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn search_by_name(&self, term: &str) -> Result<SearchResults<artist::Model>> {
        let artists = artist::Entity::find()
            .filter(name_contains(artist::Column::Name, term))
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?;

        Ok(SearchResults::new(artists))
    }

    pub async fn create(&self, form: &ArtistForm) -> Result<artist::Model> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let genres = encode_genres(&form.genres)?;

        let txn = self.db.begin().await?;
        let artist = artist::ActiveModel {
            name: Set(form.name.clone()),
            city: Set(form.city.clone()),
            state: Set(form.state.clone()),
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

        tracing::info!(artist_id = artist.id, "Artist created");
        Ok(artist)
    }

    pub async fn update(&self, id: i32, form: &ArtistForm) -> Result<artist::Model> {
        let genres = encode_genres(&form.genres)?;

        let txn = self.db.begin().await?;
        let existing = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

        let mut active: artist::ActiveModel = existing.into();
        active.name = Set(form.name.clone());
        active.city = Set(form.city.clone());
        active.state = Set(form.state.clone());
        active.phone = Set(form.phone.clone());
        active.facebook_link = Set(form.facebook_link.clone());
        active.image_link = Set(form.image_link.clone());
        active.genres = Set(genres);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(artist_id = id, "Artist updated");
        Ok(updated)
    }
}
