//! Storage layer: domain models and the SeaORM database backend

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{
    Campaign, CampaignStatus, InteractionKind, InteractionLog, NewCampaign, NewRecipient,
    ParticipantList, PhishingEmail, StorageConfig,
};
