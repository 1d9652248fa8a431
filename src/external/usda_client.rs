// ABOUTME: USDA FoodData Central API client for food-name nutrition lookup
// ABOUTME: Food search, detail retrieval, per-100g macro summary, caching and rate limiting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! USDA `FoodData` Central API Client
//!
//! Answers "how much protein is in chicken breast" style questions: search by name,
//! take the best hit, fetch its details and reduce the nutrient list to calories,
//! protein, fat and carbohydrates per 100 g.
//!
//! # Features
//! - Food search and detail retrieval
//! - TTL caching of both
//! - Rate limiting (requests per minute)
//! - Mock client for offline tests
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>

use async_trait::async_trait;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use super::http_client::{send_with_retry, shared_client};
use super::FoodDataSource;
use crate::config::{HttpClientSettings, UsdaApiConfig};
use crate::errors::{AppError, AppResult};
use nutri_core::constants::service_names::USDA_API;

/// Nutrient ids used for the macro summary
mod nutrient_ids {
    pub const PROTEIN: u32 = 1003;
    pub const FAT: u32 = 1004;
    pub const CARBS: u32 = 1005;
    pub const ENERGY_KCAL: u32 = 1008;
}

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for USDA API (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Cache TTL in seconds (default: 86400 = 24 hours)
    pub cache_ttl_secs: u64,
    /// Rate limit per minute (default: 30)
    pub rate_limit_per_minute: u32,
    /// Entries kept per cache before least-recently-used eviction (default: 1000)
    pub cache_max_entries: usize,
    /// Retries on transient HTTP statuses
    pub max_retries: u32,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: crate::config::environment::DEFAULT_USDA_BASE_URL.to_owned(),
            cache_ttl_secs: 86400,
            rate_limit_per_minute: 30,
            cache_max_entries: 1000,
            max_retries: HttpClientSettings::default().max_retries,
        }
    }
}

impl UsdaClientConfig {
    /// Build from environment-loaded settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no API key is configured
    pub fn from_settings(api: &UsdaApiConfig, http: &HttpClientSettings) -> AppResult<Self> {
        let api_key = api
            .api_key
            .clone()
            .ok_or_else(|| AppError::config_missing("USDA_API_KEY is not set"))?;
        Ok(Self {
            api_key,
            base_url: api.base_url.clone(),
            max_retries: http.max_retries,
            ..Self::default()
        })
    }
}

/// USDA Food Search Result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSearchResult {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description
    pub description: String,
    /// Data type (e.g., "Survey (FNDDS)", "Foundation", "SR Legacy")
    pub data_type: String,
    /// Brand owner (for branded foods)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_owner: Option<String>,
}

/// USDA Food Nutrient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodNutrient {
    /// Nutrient ID
    pub nutrient_id: u32,
    /// Nutrient name (e.g., "Protein", "Energy")
    pub nutrient_name: String,
    /// Nutrient unit (e.g., "g", "kcal", "mg")
    pub unit_name: String,
    /// Amount per 100g
    pub amount: f64,
}

/// Detailed USDA Food Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDetails {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description
    pub description: String,
    /// Data type
    pub data_type: String,
    /// List of nutrients with amounts
    pub food_nutrients: Vec<FoodNutrient>,
}

impl FoodDetails {
    fn amount_of(&self, nutrient_id: u32) -> f64 {
        self.food_nutrients
            .iter()
            .find(|n| n.nutrient_id == nutrient_id)
            .map_or(0.0, |n| n.amount)
    }

    /// Reduce the nutrient list to the four values the advisor reports
    #[must_use]
    pub fn summary(&self) -> FoodNutritionSummary {
        FoodNutritionSummary {
            fdc_id: self.fdc_id,
            description: self.description.clone(),
            calories_kcal: self.amount_of(nutrient_ids::ENERGY_KCAL),
            protein_g: self.amount_of(nutrient_ids::PROTEIN),
            fat_g: self.amount_of(nutrient_ids::FAT),
            carbs_g: self.amount_of(nutrient_ids::CARBS),
        }
    }
}

/// Calories and macros per 100 g of a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodNutritionSummary {
    /// `FoodData` Central ID of the matched food
    pub fdc_id: u64,
    /// Matched food description
    pub description: String,
    /// Energy (kcal per 100 g)
    pub calories_kcal: f64,
    /// Protein (g per 100 g)
    pub protein_g: f64,
    /// Fat (g per 100 g)
    pub fat_g: f64,
    /// Carbohydrates (g per 100 g)
    pub carbs_g: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    foods: Vec<SearchFoodResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFoodResponse {
    fdc_id: u64,
    description: String,
    #[serde(default)]
    data_type: String,
    brand_owner: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodDetailsResponse {
    fdc_id: u64,
    description: String,
    #[serde(default)]
    data_type: String,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrientResponse>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrientResponse {
    nutrient: Option<NutrientInfo>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NutrientInfo {
    id: u32,
    name: String,
    #[serde(rename = "unitName")]
    unit_name: String,
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// TTL cache bounded by LRU eviction
type TtlCache<K, V> = Arc<RwLock<LruCache<K, CacheEntry<V>>>>;

/// Capacity used when the configured size is zero
const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => unreachable!(),
};

fn new_cache<K: Hash + Eq, V>(max_entries: usize) -> TtlCache<K, V> {
    let capacity = NonZeroUsize::new(max_entries).unwrap_or(DEFAULT_CACHE_CAPACITY);
    Arc::new(RwLock::new(LruCache::new(capacity)))
}

/// Fresh cached value, dropping the entry once it has expired
async fn cache_get<K: Hash + Eq, V: Clone>(cache: &TtlCache<K, V>, key: &K) -> Option<V> {
    let mut store = cache.write().await;
    // LruCache::get is mutable (updates access order)
    let fresh = match store.get(key) {
        Some(entry) if !entry.is_expired() => Some(entry.data.clone()),
        Some(_) => {
            store.pop(key);
            None
        }
        None => None,
    };
    drop(store);
    fresh
}

/// Insert a value; the least recently used entry is evicted when full
async fn cache_put<K: Hash + Eq, V>(cache: &TtlCache<K, V>, key: K, data: V, ttl: Duration) {
    cache.write().await.push(
        key,
        CacheEntry {
            data,
            expires_at: Instant::now() + ttl,
        },
    );
}

/// Sliding-window rate limiter
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    const fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit,
            window,
        }
    }

    fn can_request(&mut self) -> bool {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        self.requests.len() < self.limit as usize
    }

    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }

    async fn wait_if_needed(&mut self) {
        while !self.can_request() {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaClientConfig,
    search_cache: TtlCache<String, Vec<FoodSearchResult>>,
    details_cache: TtlCache<u64, FoodDetails>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl UsdaClient {
    /// Create a new USDA API client
    #[must_use]
    pub fn new(config: UsdaClientConfig) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));

        Self {
            search_cache: new_cache(config.cache_max_entries),
            details_cache: new_cache(config.cache_max_entries),
            config,
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        }
    }

    async fn throttle(&self) {
        let mut limiter = self.rate_limiter.write().await;
        limiter.wait_if_needed().await;
        limiter.record_request();
    }

    const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_secs)
    }

    /// Search for foods by query string
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty, the page size is outside 1-200 or
    /// the API request fails
    pub async fn search_foods(
        &self,
        query: &str,
        page_size: u32,
    ) -> AppResult<Vec<FoodSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }
        if page_size == 0 || page_size > 200 {
            return Err(AppError::invalid_input(
                "Page size must be between 1 and 200",
            ));
        }

        let cache_key = format!("{}:{page_size}", query.to_lowercase());
        if let Some(hit) = cache_get(&self.search_cache, &cache_key).await {
            debug!(query, "USDA search cache hit");
            return Ok(hit);
        }

        self.throttle().await;

        let url = format!("{}/foods/search", self.config.base_url);
        let page_size = page_size.to_string();
        let response = send_with_retry(
            || {
                shared_client().get(&url).query(&[
                    ("query", query),
                    ("pageSize", page_size.as_str()),
                    ("api_key", self.config.api_key.as_str()),
                ])
            },
            USDA_API,
            self.config.max_retries,
        )
        .await?;

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service(USDA_API, format!("JSON parse error: {e}"))
        })?;

        let foods: Vec<FoodSearchResult> = search_response
            .foods
            .into_iter()
            .map(|f| FoodSearchResult {
                fdc_id: f.fdc_id,
                description: f.description,
                data_type: f.data_type,
                brand_owner: f.brand_owner,
            })
            .collect();

        cache_put(&self.search_cache, cache_key, foods.clone(), self.cache_ttl()).await;

        Ok(foods)
    }

    /// Get detailed information for a specific food by FDC ID
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot be parsed
    pub async fn get_food_details(&self, fdc_id: u64) -> AppResult<FoodDetails> {
        if let Some(hit) = cache_get(&self.details_cache, &fdc_id).await {
            return Ok(hit);
        }

        self.throttle().await;

        let url = format!("{}/food/{fdc_id}", self.config.base_url);
        let response = send_with_retry(
            || {
                shared_client()
                    .get(&url)
                    .query(&[("api_key", self.config.api_key.as_str())])
            },
            USDA_API,
            self.config.max_retries,
        )
        .await?;

        let details_response: FoodDetailsResponse = response.json().await.map_err(|e| {
            AppError::external_service(USDA_API, format!("JSON parse error: {e}"))
        })?;

        let food_nutrients = details_response
            .food_nutrients
            .into_iter()
            .filter_map(|n| {
                let nutrient = n.nutrient?;
                Some(FoodNutrient {
                    nutrient_id: nutrient.id,
                    nutrient_name: nutrient.name,
                    unit_name: nutrient.unit_name,
                    amount: n.amount.unwrap_or(0.0),
                })
            })
            .collect();

        let food_details = FoodDetails {
            fdc_id: details_response.fdc_id,
            description: details_response.description,
            data_type: details_response.data_type,
            food_nutrients,
        };

        cache_put(
            &self.details_cache,
            fdc_id,
            food_details.clone(),
            self.cache_ttl(),
        )
        .await;

        Ok(food_details)
    }
}

#[async_trait]
impl FoodDataSource for UsdaClient {
    async fn lookup_by_name(&self, food_name: &str) -> AppResult<FoodNutritionSummary> {
        let hits = self.search_foods(food_name, 1).await?;
        let first = hits
            .first()
            .ok_or_else(|| AppError::not_found(format!("Food matching '{food_name}'")))?;
        Ok(self.get_food_details(first.fdc_id).await?.summary())
    }
}

/// Mock USDA client for testing (no API calls)
pub struct MockUsdaClient {
    mock_foods: HashMap<u64, FoodDetails>,
}

impl MockUsdaClient {
    /// Create a new mock client with predefined test data
    #[must_use]
    pub fn new() -> Self {
        let foods = [
            mock_food(
                171_477,
                "Chicken, breast, meat only, cooked, roasted",
                [165.0, 31.02, 3.57, 0.0],
            ),
            mock_food(171_688, "Apples, raw, with skin", [52.0, 0.26, 0.17, 13.81]),
            mock_food(
                168_878,
                "Rice, white, long-grain, regular, cooked",
                [130.0, 2.69, 0.28, 28.17],
            ),
        ];

        Self {
            mock_foods: foods.into_iter().map(|f| (f.fdc_id, f)).collect(),
        }
    }

    /// Mock search: case-insensitive substring match on the description
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the query is empty
    pub fn search_foods(&self, query: &str) -> AppResult<Vec<FoodSearchResult>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let mut results: Vec<FoodSearchResult> = self
            .mock_foods
            .values()
            .filter(|food| food.description.to_lowercase().contains(&query))
            .map(|food| FoodSearchResult {
                fdc_id: food.fdc_id,
                description: food.description.clone(),
                data_type: food.data_type.clone(),
                brand_owner: None,
            })
            .collect();
        results.sort_by_key(|r| r.fdc_id);
        Ok(results)
    }

    /// Mock details lookup
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the FDC ID is unknown
    pub fn get_food_details(&self, fdc_id: u64) -> AppResult<FoodDetails> {
        self.mock_foods
            .get(&fdc_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Food with FDC ID {fdc_id}")))
    }
}

impl Default for MockUsdaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodDataSource for MockUsdaClient {
    async fn lookup_by_name(&self, food_name: &str) -> AppResult<FoodNutritionSummary> {
        let hits = self.search_foods(food_name)?;
        let first = hits
            .first()
            .ok_or_else(|| AppError::not_found(format!("Food matching '{food_name}'")))?;
        Ok(self.get_food_details(first.fdc_id)?.summary())
    }
}

/// Build mock details from `[kcal, protein, fat, carbs]` per 100 g
fn mock_food(fdc_id: u64, description: &str, per_100g: [f64; 4]) -> FoodDetails {
    let [kcal, protein, fat, carbs] = per_100g;
    let nutrient = |id, name: &str, unit: &str, amount| FoodNutrient {
        nutrient_id: id,
        nutrient_name: name.to_owned(),
        unit_name: unit.to_owned(),
        amount,
    };
    FoodDetails {
        fdc_id,
        description: description.to_owned(),
        data_type: "SR Legacy".to_owned(),
        food_nutrients: vec![
            nutrient(nutrient_ids::PROTEIN, "Protein", "g", protein),
            nutrient(nutrient_ids::FAT, "Total lipid (fat)", "g", fat),
            nutrient(nutrient_ids::CARBS, "Carbohydrate, by difference", "g", carbs),
            nutrient(nutrient_ids::ENERGY_KCAL, "Energy", "kcal", kcal),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_lookup_by_name() {
        let client = MockUsdaClient::new();
        let summary = client.lookup_by_name("chicken breast").await;
        // "chicken breast" is not a substring of the description
        assert!(summary.is_err());

        let summary = client.lookup_by_name("Chicken").await.unwrap();
        assert_eq!(summary.fdc_id, 171_477);
        assert!((summary.protein_g - 31.02).abs() < f64::EPSILON);
        assert!((summary.calories_kcal - 165.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_missing_nutrient_is_zero() {
        let details = FoodDetails {
            fdc_id: 1,
            description: "Water".to_owned(),
            data_type: "Foundation".to_owned(),
            food_nutrients: vec![],
        };
        let summary = details.summary();
        assert!(summary.calories_kcal.abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_api_key_is_config_missing() {
        let err = UsdaClientConfig::from_settings(
            &UsdaApiConfig::default(),
            &HttpClientSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ConfigMissing);
    }

    #[tokio::test]
    async fn test_cache_size_is_bounded() {
        let cache: TtlCache<u64, u64> = new_cache(3);
        for id in 0..10 {
            cache_put(&cache, id, id * 2, Duration::from_secs(60)).await;
        }
        assert_eq!(cache.read().await.len(), 3);
        assert_eq!(cache_get(&cache, &9).await, Some(18));
        assert_eq!(cache_get(&cache, &0).await, None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_removed() {
        let cache: TtlCache<String, u64> = new_cache(0);
        cache_put(&cache, "apple".to_owned(), 1, Duration::ZERO).await;
        assert_eq!(cache_get(&cache, &"apple".to_owned()).await, None);
        assert!(cache.read().await.is_empty());

        cache_put(&cache, "pear".to_owned(), 2, Duration::from_secs(60)).await;
        assert_eq!(cache_get(&cache, &"pear".to_owned()).await, Some(2));
    }

    #[tokio::test]
    async fn test_empty_query_rejected_before_network() {
        let client = UsdaClient::new(UsdaClientConfig::default());
        let err = client.search_foods("   ", 5).await.unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
    }
}
