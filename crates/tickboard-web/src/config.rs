use clap::Parser;

use tickboard_core::Role;

/// Dashboard server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "tickboard", about = "Market dashboard API server")]
pub struct ServeArgs {
    /// Bind address.
    #[arg(long, default_value = "127.0.0.1", env = "TICKBOARD_BIND")]
    pub bind: String,

    /// Listen port.
    #[arg(long, default_value_t = 8080, env = "TICKBOARD_PORT")]
    pub port: u16,

    /// Alpha Vantage API key. When absent the server falls back to the
    /// deterministic sample source.
    #[arg(long, env = "TICKBOARD_ALPHAVANTAGE_API_KEY")]
    pub alphavantage_key: Option<String>,

    /// Force the offline sample source even when an API key is configured.
    #[arg(long, env = "TICKBOARD_OFFLINE")]
    pub offline: bool,

    /// Dashboard viewer credential, as "username:password".
    #[arg(long, default_value = "viewer:viewer", env = "TICKBOARD_USER_LOGIN")]
    pub user_login: String,

    /// Admin credential, as "username:password".
    #[arg(long, default_value = "admin:admin", env = "TICKBOARD_ADMIN_LOGIN")]
    pub admin_login: String,
}

/// Login credential seeded into the session store at startup.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Credential {
    /// Parses a "username:password" pair; a missing separator leaves the
    /// password empty.
    pub fn parse(raw: &str, role: Role) -> Self {
        let (username, password) = raw.split_once(':').unwrap_or((raw, ""));
        Self {
            username: username.trim().to_owned(),
            password: password.to_owned(),
            role,
        }
    }
}

impl ServeArgs {
    pub fn credentials(&self) -> Vec<Credential> {
        vec![
            Credential::parse(&self.user_login, Role::User),
            Credential::parse(&self.admin_login, Role::Admin),
        ]
    }
}
