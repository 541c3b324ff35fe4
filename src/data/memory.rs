use crate::domain::api::UserProfileApi;
use crate::domain::error::DomainError;
use crate::domain::profile::{UserProfile, UserProfileCreate, UserProfileList, UserProfileUpdate};
use crate::domain::query::{ListQuery, UserFilter};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, trace, warn};
use uuid::Uuid;

// Insertion order is the listing order when no ordering is requested.
#[derive(Clone)]
pub struct InMemoryUserProfileApi {
    storage: Arc<RwLock<Vec<UserProfile>>>,
}

impl InMemoryUserProfileApi {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryUserProfileApi {
    fn default() -> Self {
        Self::new()
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl UserProfileApi for InMemoryUserProfileApi {
    #[instrument(skip(self), fields(offset = query.offset, limit = query.limit))]
    async fn list(&self, query: &ListQuery, filter: &UserFilter) -> Result<UserProfileList> {
        let order_by = query.order_by()?;
        trace!("Acquiring read lock for profile storage");
        let storage = self.storage.read().await;

        let mut matching: Vec<UserProfile> = storage
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        if let Some(order_by) = &order_by {
            matching.sort_by(|a, b| order_by.compare(a, b));
        }

        let count = matching.len() as u64;
        let data: Vec<UserProfile> = matching
            .into_iter()
            .skip(to_usize(query.offset))
            .take(to_usize(query.limit))
            .collect();
        debug!(count, returned = data.len(), "Listed profiles");
        Ok(UserProfileList { count, data })
    }

    #[instrument(skip(self), fields(user_id = id))]
    async fn get(&self, id: &str) -> Result<Option<UserProfile>> {
        let storage = self.storage.read().await;
        let profile = storage.iter().find(|p| p.id == id).cloned();
        if profile.is_none() {
            trace!(user_id = id, "Profile not found in storage");
        }
        Ok(profile)
    }

    #[instrument(skip(self), fields(email = email))]
    async fn get_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
        let storage = self.storage.read().await;
        let profile = storage.iter().find(|p| p.email == email).cloned();
        if profile.is_none() {
            trace!(email = email, "Profile not found in storage");
        }
        Ok(profile)
    }

    #[instrument(skip(self, payload), fields(email = %payload.email))]
    async fn create(&self, payload: UserProfileCreate) -> Result<UserProfile> {
        trace!("Acquiring write lock for profile storage");
        let mut storage = self.storage.write().await;
        if storage.iter().any(|p| p.email == payload.email) {
            warn!(email = %payload.email, "Profile with this email already exists");
            return Err(DomainError::Conflict(
                "The user with this username already exists in the system".to_string(),
            )
            .into());
        }

        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            email: payload.email,
            full_name: payload.full_name.unwrap_or_default(),
            is_active: payload.is_active.unwrap_or(true),
            is_superuser: payload.is_superuser.unwrap_or(false),
        };
        storage.push(profile.clone());
        debug!(user_id = %profile.id, email = %profile.email, "Profile created");
        Ok(profile)
    }

    #[instrument(skip(self, payload), fields(user_id = id))]
    async fn update(&self, id: &str, payload: UserProfileUpdate) -> Result<UserProfile> {
        trace!("Acquiring write lock for profile storage");
        let mut storage = self.storage.write().await;
        let index = storage.iter().position(|p| p.id == id).ok_or_else(|| {
            warn!(user_id = id, "Profile not found for update");
            DomainError::NotFound(
                "The user with this username does not exist in the system".to_string(),
            )
        })?;

        if payload.is_empty() {
            trace!(user_id = id, "Empty update, returning current profile");
            return Ok(storage[index].clone());
        }

        if let Some(email) = &payload.email {
            if storage.iter().any(|p| p.id != id && p.email == *email) {
                warn!(user_id = id, email = %email, "Email already taken by another profile");
                return Err(DomainError::Conflict(
                    "The user with this username already exists in the system".to_string(),
                )
                .into());
            }
        }

        let current = &storage[index];
        let updated = UserProfile {
            id: current.id.clone(),
            email: payload.email.unwrap_or_else(|| current.email.clone()),
            full_name: payload.full_name.unwrap_or_else(|| current.full_name.clone()),
            is_active: payload.is_active.unwrap_or(current.is_active),
            is_superuser: payload.is_superuser.unwrap_or(current.is_superuser),
        };
        storage[index] = updated.clone();
        debug!(user_id = %updated.id, email = %updated.email, "Profile updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(user_id = id))]
    async fn remove(&self, id: &str) -> Result<UserProfile> {
        trace!("Acquiring write lock for profile storage");
        let mut storage = self.storage.write().await;
        let index = storage.iter().position(|p| p.id == id).ok_or_else(|| {
            warn!(user_id = id, "Profile not found for removal");
            DomainError::NotFound("User not found".to_string())
        })?;

        let removed = storage.remove(index);
        debug!(user_id = %removed.id, email = %removed.email, "Profile removed");
        Ok(removed)
    }
}
