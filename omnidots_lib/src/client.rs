//! HTTP client for the Omnidots Honeycomb REST API.

use crate::error::Error;
use crate::request::{self, GetPeakRecordsParams};
use crate::response::{ApiResponse, GetPeakRecordsResponse, ListSensorsResponse};
use crate::transport::Transport;
use reqwest::Request;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Mutation hook applied to every outgoing request before dispatch. Used to
/// inject cross-cutting data such as the auth token.
pub type RequestEditorFn = Arc<dyn Fn(&mut Request) -> Result<(), Error> + Send + Sync>;

/// Low-level Honeycomb client: builds requests, runs the editor chain, and
/// hands off to the transport. Returns raw HTTP responses.
///
/// Configuration (server URL, transport, editors) is fixed at construction;
/// one instance can serve concurrent calls as long as the transport can
/// (the default [`reqwest::Client`] can).
#[derive(Clone)]
pub struct Client {
    server: Url,
    transport: Arc<dyn Transport>,
    editors: Vec<RequestEditorFn>,
}

impl Client {
    /// Create a client against `server` with the default transport.
    pub fn new(server: &str) -> Result<Self, Error> {
        Self::builder(server).build()
    }

    /// Start building a client with a custom transport or request editors.
    pub fn builder(server: &str) -> ClientBuilder {
        ClientBuilder {
            server: server.to_owned(),
            transport: None,
            editors: Vec::new(),
        }
    }

    /// The normalized base URL requests resolve against.
    pub fn server(&self) -> &Url {
        &self.server
    }

    /// Issue a `list_sensors` request and return the raw response.
    pub async fn list_sensors(&self) -> Result<reqwest::Response, Error> {
        let req = request::list_sensors_request(&self.server)?;
        self.dispatch(req).await
    }

    /// Issue a `get_peak_records` request and return the raw response.
    pub async fn get_peak_records(
        &self,
        params: &GetPeakRecordsParams,
    ) -> Result<reqwest::Response, Error> {
        let req = request::get_peak_records_request(&self.server, params)?;
        self.dispatch(req).await
    }

    async fn dispatch(&self, mut req: Request) -> Result<reqwest::Response, Error> {
        for editor in &self.editors {
            editor(&mut req)?;
        }
        // Path only; the edited query string carries the token.
        debug!(method = %req.method(), path = req.url().path(), "dispatching request");
        self.transport.send(req).await
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    server: String,
    transport: Option<Arc<dyn Transport>>,
    editors: Vec<RequestEditorFn>,
}

impl ClientBuilder {
    /// Override the transport. Useful for tests.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Register a request editor. Editors run in registration order.
    pub fn with_request_editor(
        mut self,
        editor: impl Fn(&mut Request) -> Result<(), Error> + Send + Sync + 'static,
    ) -> Self {
        self.editors.push(Arc::new(editor));
        self
    }

    /// Finish building. The server URL is normalized to end with a trailing
    /// slash so operation paths join below it.
    pub fn build(self) -> Result<Client, Error> {
        let mut server = self.server;
        if !server.ends_with('/') {
            server.push('/');
        }
        let server = Url::parse(&server)?;
        Ok(Client {
            server,
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(reqwest::Client::new())),
            editors: self.editors,
        })
    }
}

/// Authenticated, typed Honeycomb client.
///
/// Wraps [`Client`], stamping `token=<value>` onto the query string of every
/// request after all user-configured editors, and decodes responses into the
/// typed envelopes. The token is not validated client-side; an empty token is
/// sent as-is and rejected by the server.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
}

impl ApiClient {
    /// Create an authenticated client against `server`.
    pub fn new(server: &str, token: &str) -> Result<Self, Error> {
        Self::from_builder(Client::builder(server), token)
    }

    /// Create an authenticated client from a pre-configured builder. The
    /// token editor is appended after any editors already registered.
    pub fn from_builder(builder: ClientBuilder, token: &str) -> Result<Self, Error> {
        let token = token.to_owned();
        let inner = builder
            .with_request_editor(move |req| {
                set_token_param(req, &token);
                Ok(())
            })
            .build()?;
        Ok(Self { inner })
    }

    /// Access the underlying raw client.
    pub fn client(&self) -> &Client {
        &self.inner
    }

    /// List all sensors visible to the token.
    pub async fn list_sensors(&self) -> Result<ListSensorsResponse, Error> {
        let rsp = self.inner.list_sensors().await?;
        ApiResponse::from_http("list_sensors", rsp).await
    }

    /// Fetch peak vibration records for one measuring point.
    pub async fn get_peak_records(
        &self,
        params: &GetPeakRecordsParams,
    ) -> Result<GetPeakRecordsResponse, Error> {
        let rsp = self.inner.get_peak_records(params).await?;
        ApiResponse::from_http("get_peak_records", rsp).await
    }
}

/// Set `token=<value>` on the request's query string, replacing any token
/// already present and keeping all other parameters.
fn set_token_param(req: &mut Request, token: &str) {
    let url = req.url_mut();
    let existing: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "token")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let mut query = url.query_pairs_mut();
    query.clear();
    for (key, value) in &existing {
        query.append_pair(key, value);
    }
    query.append_pair("token", token);
}
