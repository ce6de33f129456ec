//! Provider-side configuration fragments: network (VPC) and database

use serde::{Deserialize, Serialize};

/// AWS virtual network settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpcConfig {
    pub region: String,
    pub cidr_block: String,
    pub availability_zones: Vec<String>,
}

/// Database engine backing the deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbEngine {
    #[default]
    Postgresql,
    Mysql,
}

impl DbEngine {
    pub const ALL: [DbEngine; 2] = [DbEngine::Postgresql, DbEngine::Mysql];

    pub fn display_name(&self) -> &'static str {
        match self {
            DbEngine::Postgresql => "PostgreSQL",
            DbEngine::Mysql => "MySQL",
        }
    }
}

/// Database settings, stored under `credentials.db`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub engine: DbEngine,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("engine", &self.engine)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
