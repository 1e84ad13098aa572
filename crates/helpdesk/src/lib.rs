mod api;

pub use api::{CustomField, TicketRequest};

use log::{debug, error, warn};
use reqwest::blocking;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// Base URL or access token absent; no network call was attempted.
    #[error("helpdesk URL or access token not configured")]
    MissingConfig,

    #[error("error reaching the helpdesk: {}", .0)]
    Transport(#[from] reqwest::Error),

    #[error("unparseable create-ticket response: {}", .0)]
    BadResponse(#[from] serde_json::Error),
}

/// A client for the helpdesk's ticketing API.
///
/// Configuration is explicit and optional: a client built without a base URL
/// or token still constructs, and every operation on it fails with
/// [`Error::MissingConfig`] before touching the network.
pub struct Client {
    base_url: Option<String>,
    token: Option<String>,
    http: blocking::Client,
}

impl Client {
    pub fn new(base_url: Option<String>, token: Option<String>) -> Self {
        Self {
            base_url,
            token,
            http: blocking::Client::new(),
        }
    }

    fn api_details(&self) -> Result<(&str, &str)> {
        match (self.base_url.as_deref(), self.token.as_deref()) {
            (Some(url), Some(token)) => Ok((url.trim_end_matches('/'), token)),
            _ => {
                error!("helpdesk ticket requested, but the proxy is not configured");
                Err(Error::MissingConfig)
            }
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    /// Create a ticket, returning the ticketing service's status code.
    ///
    /// Upstream rejections (4xx/5xx) are not errors here: the status comes
    /// back unchanged and the caller decides what to do. No retries. When the
    /// request names a group and creation succeeded, the group is resolved
    /// and assigned with a follow-up update; the returned status is still the
    /// creation call's.
    pub fn try_create_ticket(&self, ticket: &TicketRequest) -> Result<StatusCode> {
        let (base, token) = self.api_details()?;

        debug!("creating helpdesk ticket: {}", ticket.subject);
        let resp = self
            .http
            .post(format!("{base}/api/v2/tickets.json"))
            .header(AUTHORIZATION, Self::bearer(token))
            .json(&api::CreateTicket::from_request(ticket))
            .send()?;

        let status = resp.status();
        if let Some(group) = ticket.group.as_deref() {
            if status.is_success() {
                self.assign_group(base, token, &resp.text()?, group)?;
            }
        }
        Ok(status)
    }

    /// The status-code contract used by the proxy views: 503 when
    /// unconfigured, 500 for anything that went wrong on our side, otherwise
    /// whatever the ticketing service said.
    pub fn create_ticket(&self, ticket: &TicketRequest) -> u16 {
        match self.try_create_ticket(ticket) {
            Ok(status) => status.as_u16(),
            Err(Error::MissingConfig) => 503,
            Err(e) => {
                error!("error creating helpdesk ticket: {e}");
                500
            }
        }
    }

    fn assign_group(
        &self,
        base: &str,
        token: &str,
        created_body: &str,
        group: &str,
    ) -> Result<()> {
        let Some(group_id) = self.group_id_by_name(group)? else {
            warn!("no helpdesk group named {group}; leaving ticket unassigned");
            return Ok(());
        };
        let created: api::CreatedTicket = serde_json::from_str(created_body)?;

        let resp = self
            .http
            .put(format!("{base}/api/v2/tickets/{}.json", created.ticket.id))
            .header(AUTHORIZATION, Self::bearer(token))
            .json(&api::UpdateTicket::group(group_id))
            .send()?;
        if !resp.status().is_success() {
            warn!("helpdesk group assignment returned {}", resp.status());
        }
        Ok(())
    }

    /// Id of the first group whose name matches, or `None` when no group
    /// does.
    pub fn group_id_by_name(&self, name: &str) -> Result<Option<u64>> {
        let (base, token) = self.api_details()?;

        let resp: api::GroupsResp = self
            .http
            .get(format!("{base}/api/v2/groups.json"))
            .header(AUTHORIZATION, Self::bearer(token))
            .send()?
            .json()?;

        Ok(resp
            .groups
            .into_iter()
            .find(|group| group.name == name)
            .map(|group| group.id))
    }
}
