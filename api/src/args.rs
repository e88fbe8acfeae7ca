use clap::{Args as ClapArgs, Parser};
use spoonderful_core::domain::common::{
    AuthConfig, DatabaseConfig, RecipeSourceConfig, RecommendationConfig, SpoonderfulConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "spoonderful", version, about = "Ingredient-based recipe recommendations")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub spoonacular: SpoonacularArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub recommendation: RecommendationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "spoonderful")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SpoonacularArgs {
    #[arg(
        long = "spoonacular-base-url",
        env = "SPOONACULAR_BASE_URL",
        default_value = "https://spoonacular-recipe-food-nutrition-v1.p.rapidapi.com/"
    )]
    pub base_url: String,

    #[arg(
        id = "spoonacular-host",
        long = "spoonacular-host",
        env = "SPOONACULAR_HOST",
        default_value = "spoonacular-recipe-food-nutrition-v1.p.rapidapi.com"
    )]
    pub host: String,

    #[arg(long = "spoonacular-key", env = "SPOONACULAR_KEY")]
    pub key: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    #[arg(long = "secret-key", env = "SECRET_KEY")]
    pub secret_key: String,

    #[arg(long = "signing-algorithm", env = "SIGNING_ALGORITHM", default_value = "HS256")]
    pub signing_algorithm: String,

    #[arg(
        long = "access-token-duration-minutes",
        env = "ACCESS_TOKEN_DURATION_MINUTES",
        default_value_t = 30
    )]
    pub access_token_duration_minutes: i64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecommendationArgs {
    /// Highest number of missing ingredients a recipe may have.
    #[arg(long = "missed-ingredient-tolerance", env = "MISSED_INGREDIENT_TOLERANCE", default_value_t = 2)]
    pub missed_ingredient_tolerance: u32,

    #[arg(long = "simple-candidate-count", env = "SIMPLE_CANDIDATE_COUNT", default_value_t = 5)]
    pub simple_candidate_count: u32,

    #[arg(long = "varied-candidate-count", env = "VARIED_CANDIDATE_COUNT", default_value_t = 100)]
    pub varied_candidate_count: u32,

    #[arg(long = "clustering-seed", env = "CLUSTERING_SEED", default_value_t = 42)]
    pub seed: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for SpoonderfulConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            recipe_source: RecipeSourceConfig {
                base_url: args.spoonacular.base_url,
                host: args.spoonacular.host,
                api_key: args.spoonacular.key,
            },
            auth: AuthConfig {
                secret_key: args.auth.secret_key,
                signing_algorithm: args.auth.signing_algorithm,
                access_token_duration_minutes: args.auth.access_token_duration_minutes,
            },
            recommendation: RecommendationConfig {
                missed_ingredient_tolerance: args.recommendation.missed_ingredient_tolerance,
                simple_candidate_count: args.recommendation.simple_candidate_count,
                varied_candidate_count: args.recommendation.varied_candidate_count,
                seed: args.recommendation.seed,
            },
        }
    }
}
