use clap::Parser;
use once_cell::sync::Lazy;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 3000)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    /// Base URL of the auth backend, including the API prefix
    #[clap(long, env, default_value = "http://localhost:8080/api/v1")]
    pub api_url: String,

    /// Where the session gate sends browsers that have no usable credentials
    #[clap(long, env, default_value = "/auth/login")]
    pub login_path: String,

    /// Pages that need a signed-in user, matched exactly
    #[clap(long, env, value_delimiter = ',', default_values = ["/pages/profile", "/chatbox"])]
    pub user_paths: Vec<String>,

    /// Page prefixes reserved for the ADMIN role
    #[clap(long, env, value_delimiter = ',', default_values = ["/admin"])]
    pub admin_paths: Vec<String>,

    /// Pages signed-in users are bounced away from
    #[clap(long, env, value_delimiter = ',', default_values = ["/auth/login"])]
    pub public_only_paths: Vec<String>,

    #[clap(long, env, default_value = "/")]
    pub home_path: String,

    #[clap(long, env, default_value_t = false)]
    pub cookie_secure: bool,

    #[clap(long, env, default_value_t = 10)]
    pub backend_timeout_secs: u64,
}
