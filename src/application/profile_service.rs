use crate::domain::api::UserProfileApi;
use crate::domain::error::DomainError;
use crate::domain::profile::{UserProfile, UserProfileCreate, UserProfileList, UserProfileUpdate};
use crate::domain::query::{ListQuery, UserFilter};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub fn page_count(list: &UserProfileList, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    list.count.div_ceil(per_page)
}

pub struct ProfileService<A: UserProfileApi> {
    api: Arc<A>,
}

impl<A: UserProfileApi> ProfileService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    #[instrument(skip(self, filter))]
    pub async fn list_page(
        &self,
        page: u64,
        per_page: u64,
        filter: &UserFilter,
        ordering: Option<&str>,
    ) -> Result<UserProfileList> {
        if page == 0 || per_page == 0 {
            warn!(page, per_page, "Rejecting empty page request");
            return Err(DomainError::InvalidQuery(
                "page and per_page must be at least 1".to_string(),
            )
            .into());
        }

        let query = ListQuery {
            ordering: ordering.map(str::to_string),
            offset: (page - 1).saturating_mul(per_page),
            limit: per_page,
        };
        let list = self.api.list(&query, filter).await?;
        debug!(count = list.count, returned = list.len(), "Fetched profile page");
        Ok(list)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<UserProfile> {
        self.api
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()).into())
    }

    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn create(&self, payload: UserProfileCreate) -> Result<UserProfile> {
        let profile = self.api.create(payload).await?;
        info!(user_id = %profile.id, email = %profile.email, "Profile created");
        Ok(profile)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: &str, payload: UserProfileUpdate) -> Result<UserProfile> {
        let profile = self.api.update(id, payload).await?;
        info!(user_id = %profile.id, "Profile updated");
        Ok(profile)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<UserProfile> {
        let profile = self.api.remove(id).await?;
        info!(user_id = %profile.id, email = %profile.email, "Profile removed");
        Ok(profile)
    }

    #[instrument(skip(self, current, password), fields(user_id = %current.id))]
    pub async fn update_own_profile(
        &self,
        current: &UserProfile,
        full_name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<UserProfile> {
        let mut payload = UserProfileUpdate::from(current);
        if full_name.is_some() {
            payload.full_name = full_name;
        }
        if email.is_some() {
            payload.email = email;
        }
        payload.password = password;
        self.update(&current.id, payload).await
    }
}
