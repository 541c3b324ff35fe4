use std::sync::Arc;
use tracing::{info, instrument};
use user_profile_contract::application::profile_service::{ProfileService, page_count};
use user_profile_contract::data::memory::InMemoryUserProfileApi;
use user_profile_contract::domain::profile::UserProfileCreate;
use user_profile_contract::domain::query::UserFilter;
use user_profile_contract::infrastructure::codec::to_json;
use user_profile_contract::infrastructure::config::Settings;
use user_profile_contract::infrastructure::logging::init_logging;

#[tokio::main]
#[instrument]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;
    info!(log_level = %settings.log_level, "Logging initialized successfully");

    info!(
        first_superuser = %settings.first_superuser,
        page_size = settings.default_page_size,
        "Settings loaded"
    );

    let service = ProfileService::new(Arc::new(InMemoryUserProfileApi::new()));

    info!(email = %settings.first_superuser, "Creating initial superuser");
    service
        .create(UserProfileCreate {
            full_name: Some(settings.first_superuser_name.clone()),
            is_superuser: Some(true),
            ..UserProfileCreate::new(settings.first_superuser.clone())
        })
        .await?;

    let list = service
        .list_page(1, settings.default_page_size, &UserFilter::default(), None)
        .await?;
    info!(
        count = list.count,
        pages = page_count(&list, settings.default_page_size),
        "Listing profiles"
    );

    println!("{}", to_json(&list)?);
    Ok(())
}
