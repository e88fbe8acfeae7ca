//! In-memory port implementations for service tests.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{RecommendationConfig, entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    jwt::{entities::JwtClaim, ports::TokenSigner},
    recipe::ports::RecipeSource,
    user::{entities::User, ports::UserRepository},
    vote::{entities::Vote, ports::VoteRepository},
};

pub type FakeService = Service<
    InMemoryUserRepository,
    InMemoryVoteRepository,
    FakeHasher,
    FakeSigner,
    FakeRecipeSource,
    FakeHealthCheck,
>;

pub fn fake_service() -> FakeService {
    fake_service_with_recipes(json!({ "results": [] }))
}

pub fn fake_service_with_recipes(response: Value) -> FakeService {
    Service::new(
        InMemoryUserRepository::default(),
        InMemoryVoteRepository::default(),
        FakeHasher,
        FakeSigner,
        FakeRecipeSource::new(response),
        FakeHealthCheck,
        RecommendationConfig::default(),
        30,
    )
}

pub fn identity_for(user: &User) -> Identity {
    Identity::from(user)
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let mut users = self.users.lock().map_err(|_| CoreError::InternalServerError)?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(CoreError::AlreadyExists);
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        let users = self.users.lock().map_err(|_| CoreError::InternalServerError)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        let users = self.users.lock().map_err(|_| CoreError::InternalServerError)?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryVoteRepository {
    votes: Arc<Mutex<Vec<Vote>>>,
}

impl VoteRepository for InMemoryVoteRepository {
    async fn get_vote(&self, user_id: Uuid, recipe_id: i64) -> Result<Option<Vote>, CoreError> {
        let votes = self.votes.lock().map_err(|_| CoreError::InternalServerError)?;
        Ok(votes
            .iter()
            .find(|v| v.user_id == user_id && v.recipe_id == recipe_id)
            .cloned())
    }

    async fn create_vote(&self, vote: Vote) -> Result<Vote, CoreError> {
        let mut votes = self.votes.lock().map_err(|_| CoreError::InternalServerError)?;
        if votes
            .iter()
            .any(|v| v.user_id == vote.user_id && v.recipe_id == vote.recipe_id)
        {
            return Err(CoreError::AlreadyExists);
        }
        votes.push(vote.clone());
        Ok(vote)
    }

    async fn update_vote(&self, vote: Vote) -> Result<Vote, CoreError> {
        let mut votes = self.votes.lock().map_err(|_| CoreError::InternalServerError)?;
        let existing = votes
            .iter_mut()
            .find(|v| v.user_id == vote.user_id && v.recipe_id == vote.recipe_id)
            .ok_or(CoreError::NotFound)?;
        existing.direction = vote.direction;
        Ok(vote)
    }

    async fn delete_vote(&self, user_id: Uuid, recipe_id: i64) -> Result<(), CoreError> {
        let mut votes = self.votes.lock().map_err(|_| CoreError::InternalServerError)?;
        votes.retain(|v| !(v.user_id == user_id && v.recipe_id == recipe_id));
        Ok(())
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Vote>, CoreError> {
        let votes = self.votes.lock().map_err(|_| CoreError::InternalServerError)?;
        Ok(votes.iter().filter(|v| v.user_id == user_id).cloned().collect())
    }
}

#[derive(Clone)]
pub struct FakeHasher;

impl HasherRepository for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool, CoreError> {
        Ok(password_hash == format!("hashed:{password}"))
    }
}

/// Tokens look like `token:<user id>`.
#[derive(Clone)]
pub struct FakeSigner;

impl TokenSigner for FakeSigner {
    fn sign(&self, claim: &JwtClaim) -> Result<String, CoreError> {
        Ok(format!("token:{}", claim.user_id))
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let user_id = token
            .strip_prefix("token:")
            .and_then(|id| Uuid::parse_str(id).ok())
            .ok_or(CoreError::InvalidToken)?;
        Ok(JwtClaim::new(user_id, 30))
    }
}

/// Answers every search with the same response and records the requests.
#[derive(Clone)]
pub struct FakeRecipeSource {
    response: Value,
    requests: Arc<Mutex<Vec<(String, u32)>>>,
}

impl FakeRecipeSource {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl RecipeSource for FakeRecipeSource {
    async fn search_recipes(&self, ingredients: &str, number: u32) -> Result<Value, CoreError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((ingredients.to_string(), number));
        }
        Ok(self.response.clone())
    }
}

#[derive(Clone)]
pub struct FakeHealthCheck;

impl HealthCheckRepository for FakeHealthCheck {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            status: "healthy".to_string(),
            database: "memory".to_string(),
            response_time_ms: 1,
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }
}
