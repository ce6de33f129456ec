//! ConfigDocument entity - the deployment configuration accumulated by a command
//!
//! Created by the root initializer, grown by the active subcommand and read
//! by the finalizer. Fields are only ever added: every setter refuses to
//! overwrite a field that is already present.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{AppConfig, DbConfig, VpcConfig};
use crate::domain::value_objects::{PayloadEncoding, Provider};
use crate::error::{PygridError, PygridResult};

/// Version stamped into persisted documents
pub const SCHEMA_VERSION: u32 = 1;

/// Secret material, collected apart from the document and attached on submit
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Raw contents of the provider credentials file
    pub cloud: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db: Option<DbConfig>,
}

impl Credentials {
    pub fn new(cloud: Value) -> Self {
        Self { cloud, db: None }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("cloud", &"<redacted>")
            .field("db", &self.db)
            .finish()
    }
}

/// The deployment configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    api_url: String,
    pygrid_root_path: String,
    output_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    provider: Option<Provider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    app: Option<AppConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    serverless: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    websockets: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vpc: Option<VpcConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credentials: Option<Credentials>,
}

fn set_once<T>(slot: &mut Option<T>, value: T, field: &'static str) -> PygridResult<()> {
    if slot.is_some() {
        return Err(PygridError::FieldAlreadySet { field });
    }
    *slot = Some(value);
    Ok(())
}

impl ConfigDocument {
    pub fn new(
        api_url: impl Into<String>,
        pygrid_root_path: impl Into<String>,
        output_file: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            pygrid_root_path: pygrid_root_path.into(),
            output_file: output_file.into(),
            provider: None,
            app: None,
            serverless: None,
            websockets: None,
            vpc: None,
            credentials: None,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn pygrid_root_path(&self) -> &str {
        &self.pygrid_root_path
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    pub fn provider(&self) -> Option<Provider> {
        self.provider
    }

    pub fn app(&self) -> Option<&AppConfig> {
        self.app.as_ref()
    }

    pub fn serverless(&self) -> Option<bool> {
        self.serverless
    }

    pub fn websockets(&self) -> Option<bool> {
        self.websockets
    }

    pub fn vpc(&self) -> Option<&VpcConfig> {
        self.vpc.as_ref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn set_provider(&mut self, provider: Provider) -> PygridResult<()> {
        set_once(&mut self.provider, provider, "provider")
    }

    pub fn set_serverless(&mut self, serverless: bool) -> PygridResult<()> {
        set_once(&mut self.serverless, serverless, "serverless")
    }

    pub fn set_websockets(&mut self, websockets: bool) -> PygridResult<()> {
        set_once(&mut self.websockets, websockets, "websockets")
    }

    /// Record the application. Must come after the serverless flag.
    pub fn set_app(&mut self, app: AppConfig) -> PygridResult<()> {
        let serverless = self.serverless.ok_or_else(|| {
            PygridError::Invariant("serverless must be decided before the app record".into())
        })?;
        if !app.matches_serverless(serverless) {
            return Err(PygridError::Invariant(format!(
                "{} record does not match serverless={}",
                app.name(),
                serverless
            )));
        }
        set_once(&mut self.app, app, "app")
    }

    /// Attach VPC settings. Only AWS deployments carry a VPC.
    pub fn attach_vpc(&mut self, vpc: VpcConfig) -> PygridResult<()> {
        match self.provider {
            Some(p) if p.requires_vpc() => set_once(&mut self.vpc, vpc, "vpc"),
            Some(p) => Err(PygridError::Invariant(format!(
                "provider '{}' does not take a VPC configuration",
                p
            ))),
            None => Err(PygridError::Invariant(
                "provider must be chosen before the VPC".into(),
            )),
        }
    }

    pub fn attach_credentials(&mut self, credentials: Credentials) -> PygridResult<()> {
        set_once(&mut self.credentials, credentials, "credentials")
    }

    /// Check the document is complete and consistent, ready to be POSTed.
    pub fn submission(&self) -> PygridResult<Submission<'_>> {
        let provider = self
            .provider
            .ok_or_else(|| PygridError::Invariant("provider is missing".into()))?;
        let app = self
            .app
            .as_ref()
            .ok_or_else(|| PygridError::Invariant("app is missing".into()))?;
        let serverless = self
            .serverless
            .ok_or_else(|| PygridError::Invariant("serverless is missing".into()))?;
        if self.websockets.is_none() {
            return Err(PygridError::Invariant("websockets is missing".into()));
        }
        if self.vpc.is_some() != provider.requires_vpc() {
            return Err(PygridError::Invariant(format!(
                "vpc must be present if and only if provider is aws (provider: {})",
                provider
            )));
        }
        if !app.matches_serverless(serverless) {
            return Err(PygridError::Invariant(format!(
                "{} record does not match serverless={}",
                app.name(),
                serverless
            )));
        }
        match &self.credentials {
            Some(c) if c.db.is_some() => {}
            Some(_) => return Err(PygridError::Invariant("database settings are missing".into())),
            None => return Err(PygridError::Invariant("credentials are missing".into())),
        }
        Ok(Submission { document: self })
    }

    /// Canonical JSON rendering (2-space indentation)
    pub fn to_pretty_json(&self) -> PygridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON rendering for the output file, stamped with [`SCHEMA_VERSION`]
    pub fn to_persisted_json(&self) -> PygridResult<String> {
        let persisted = PersistedRef {
            schema_version: SCHEMA_VERSION,
            document: self,
        };
        Ok(serde_json::to_string_pretty(&persisted)?)
    }

    /// Parse a document written by [`ConfigDocument::to_persisted_json`]
    pub fn from_persisted_json(content: &str) -> PygridResult<(u32, ConfigDocument)> {
        let persisted: PersistedOwned = serde_json::from_str(content)?;
        Ok((persisted.schema_version, persisted.document))
    }
}

#[derive(Serialize)]
struct PersistedRef<'a> {
    schema_version: u32,
    #[serde(flatten)]
    document: &'a ConfigDocument,
}

#[derive(Deserialize)]
struct PersistedOwned {
    schema_version: u32,
    #[serde(flatten)]
    document: ConfigDocument,
}

/// A validated, complete document
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    document: &'a ConfigDocument,
}

impl Submission<'_> {
    pub fn document(&self) -> &ConfigDocument {
        self.document
    }

    /// Request body for `POST /deploy`
    pub fn body(&self, encoding: PayloadEncoding) -> PygridResult<Value> {
        match encoding {
            PayloadEncoding::Object => Ok(serde_json::to_value(self.document)?),
            PayloadEncoding::String => Ok(Value::String(self.document.to_pretty_json()?)),
        }
    }
}
