use crate::domain::profile::{UserProfile, UserProfileCreate, UserProfileList, UserProfileUpdate};
use crate::domain::query::{ListQuery, UserFilter};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserProfileApi: Send + Sync {
    async fn list(&self, query: &ListQuery, filter: &UserFilter) -> Result<UserProfileList>;
    async fn get(&self, id: &str) -> Result<Option<UserProfile>>;
    async fn get_by_email(&self, email: &str) -> Result<Option<UserProfile>>;
    async fn create(&self, payload: UserProfileCreate) -> Result<UserProfile>;
    async fn update(&self, id: &str, payload: UserProfileUpdate) -> Result<UserProfile>;
    async fn remove(&self, id: &str) -> Result<UserProfile>;
}
