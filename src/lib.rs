pub mod application {
    pub mod profile_service;
}

pub mod data {
    pub mod memory;
}

pub mod domain {
    pub mod api;
    pub mod error;
    pub mod profile;
    pub mod query;
}

pub mod infrastructure {
    pub mod codec;
    pub mod config;
    pub mod logging;
}
