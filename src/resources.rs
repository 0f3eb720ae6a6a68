// ABOUTME: Centralized resource container built once at startup
// ABOUTME: Wires configuration, the JSON store, account services and the compliance pipeline together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use recipe_providers::{
    initialize_shared_client, DisabledProvider, RecipeProvider, SpoonacularProvider,
};
use tracing::info;

use crate::auth::AuthService;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::recipes::{load_substitution_table, ComplianceService, RecipeCatalog, RecipeResolver};
use crate::services::{HistoryService, PreferencesService};
use crate::storage::JsonStore;

/// Everything a command needs, assembled from one [`AppConfig`]
///
/// The catalog and substitution table are loaded once here and shared
/// read-only for the life of the process.
#[derive(Clone)]
pub struct AppResources {
    /// Configuration the resources were built from
    pub config: Arc<AppConfig>,
    /// Data directory access
    pub store: JsonStore,
    /// Registration and login
    pub auth: AuthService,
    /// Dietary preferences
    pub preferences: PreferencesService,
    /// Recipe history
    pub history: HistoryService,
    /// The compliance pipeline
    pub compliance: ComplianceService,
}

impl AppResources {
    /// Build resources with the provider selected by configuration
    ///
    /// Spoonacular is used when an API key is configured; otherwise lookups
    /// that miss the local catalog report not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or substitution file cannot be read
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        initialize_shared_client(config.http_client);

        let provider: Arc<dyn RecipeProvider> = match &config.spoonacular {
            Some(settings) => Arc::new(SpoonacularProvider::new(settings.provider_config())),
            None => Arc::new(DisabledProvider),
        };

        Self::with_provider(config, provider).await
    }

    /// Build resources around an explicit provider
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or substitution file cannot be read
    pub async fn with_provider(
        config: AppConfig,
        provider: Arc<dyn RecipeProvider>,
    ) -> AppResult<Self> {
        let store = JsonStore::new(config.data_dir.clone());

        let catalog = RecipeCatalog::load(&store).await?;
        let substitutions = Arc::new(load_substitution_table(&store).await?);

        info!(
            data_dir = %store.data_dir().display(),
            provider = provider.name(),
            policy = %config.substitution_policy,
            "Resources initialized"
        );

        let compliance = ComplianceService::new(
            RecipeResolver::new(catalog, provider),
            substitutions,
            config.substitution_policy,
        );

        Ok(Self {
            auth: AuthService::new(store.clone(), config.bcrypt_cost),
            preferences: PreferencesService::new(store.clone()),
            history: HistoryService::new(store.clone()),
            compliance,
            store,
            config: Arc::new(config),
        })
    }
}
