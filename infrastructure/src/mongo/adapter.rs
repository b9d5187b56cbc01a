//! MongoDB implementation of [`BackendAdmin`].
//!
//! Talks to the `admin` database through the official driver: `{ ping: 1 }`
//! for the liveness probe and `{ replSetInitiate: <config> }` for
//! initiation. Driver errors are mapped into the port's [`AdminError`]
//! taxonomy; server-side command errors keep their structured code so the
//! domain can classify the already-initialized signal without inspecting
//! message wording.

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::{Error as DriverError, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::Client;
use replset_application::ports::backend_admin::{AdminError, BackendAdmin, InitiateAck};
use replset_domain::ClusterConfig;
use std::time::Duration;
use tracing::debug;

/// Backend administrative adapter over the MongoDB driver.
pub struct MongoBackendAdmin {
    client: Client,
}

impl MongoBackendAdmin {
    /// Connect to the backend at `uri`.
    ///
    /// `probe_timeout` bounds server selection, so an unreachable backend
    /// fails the liveness probe instead of hanging.
    pub async fn connect(uri: &str, probe_timeout: Duration) -> Result<Self, AdminError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AdminError::Other(format!("invalid connection uri: {}", e)))?;
        options.server_selection_timeout = Some(probe_timeout);
        options.connect_timeout = Some(probe_timeout);

        let client = Client::with_options(options)
            .map_err(|e| AdminError::Other(format!("client construction failed: {}", e)))?;

        debug!("MongoDB client configured for {}", uri);
        Ok(Self { client })
    }

    fn admin(&self) -> mongodb::Database {
        self.client.database("admin")
    }
}

#[async_trait]
impl BackendAdmin for MongoBackendAdmin {
    async fn ping(&self) -> Result<(), AdminError> {
        self.admin()
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| AdminError::Connectivity(e.to_string()))
    }

    async fn initiate(&self, config: &ClusterConfig) -> Result<InitiateAck, AdminError> {
        let command = build_initiate_command(config)?;
        match self.admin().run_command(command).await {
            Ok(reply) => Ok(parse_ack(&reply)),
            Err(e) => Err(map_initiate_error(e)),
        }
    }
}

/// Build the `replSetInitiate` command from a cluster configuration.
///
/// The domain type serializes directly to the document shape the server
/// expects (`_id` + `members[]`).
fn build_initiate_command(config: &ClusterConfig) -> Result<Document, AdminError> {
    let config_doc = mongodb::bson::to_document(config)
        .map_err(|e| AdminError::Other(format!("config serialization failed: {}", e)))?;
    Ok(doc! { "replSetInitiate": config_doc })
}

/// Convert a command reply into the port's acknowledgment type.
///
/// The driver raises `ok: 0` replies as command errors, so replies that
/// reach here normally acknowledge; the flag is still read rather than
/// assumed.
fn parse_ack(reply: &Document) -> InitiateAck {
    let ok = reply.get("ok").is_some_and(ok_flag);
    let response = serde_json::to_value(reply).unwrap_or(serde_json::Value::Null);
    if ok {
        InitiateAck::acknowledged(response)
    } else {
        InitiateAck::declined(response)
    }
}

/// Interpret the server's `ok` field, which may arrive as double, int, or
/// bool depending on server version.
fn ok_flag(value: &Bson) -> bool {
    match value {
        Bson::Double(d) => *d == 1.0,
        Bson::Int32(i) => *i == 1,
        Bson::Int64(i) => *i == 1,
        Bson::Boolean(b) => *b,
        _ => false,
    }
}

/// Map a driver error from the initiation request into the port taxonomy.
///
/// Server-side command errors keep their code for structured
/// classification; everything else is opaque.
fn map_initiate_error(error: DriverError) -> AdminError {
    match *error.kind {
        ErrorKind::Command(ref command_error) => AdminError::Command {
            code: Some(command_error.code),
            message: command_error.message.clone(),
        },
        _ => AdminError::Other(error.to_string()),
    }
}
