use serde::{Deserialize, Serialize};

/// Everything needed to open a ticket on a user's behalf.
#[derive(Debug, Clone, Default)]
pub struct TicketRequest {
    pub requester_name: String,
    pub requester_email: String,
    pub subject: String,
    pub body: String,
    /// Support group to assign the ticket to, by display name.
    pub group: Option<String>,
    /// Extra key/value context appended to the comment body.
    pub additional_info: Vec<(String, String)>,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u64,
    pub value: String,
}

#[derive(Serialize)]
pub(crate) struct CreateTicket {
    ticket: NewTicket,
}

#[derive(Serialize)]
struct NewTicket {
    requester: Requester,
    subject: String,
    comment: Comment,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    custom_fields: Vec<CustomField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

#[derive(Serialize)]
struct Requester {
    name: String,
    email: String,
}

#[derive(Serialize)]
struct Comment {
    body: String,
}

impl CreateTicket {
    pub(crate) fn from_request(req: &TicketRequest) -> Self {
        let mut body = req.body.clone();
        if !req.additional_info.is_empty() {
            body.push_str("\n\nAdditional information:\n");
            for (key, value) in &req.additional_info {
                body.push_str(&format!("\n{key}: {value}"));
            }
        }

        Self {
            ticket: NewTicket {
                requester: Requester {
                    name: req.requester_name.clone(),
                    email: req.requester_email.clone(),
                },
                subject: req.subject.clone(),
                comment: Comment { body },
                custom_fields: req.custom_fields.clone(),
                tags: req.tags.clone(),
            },
        }
    }
}

/// The slice of the creation response we need for the group follow-up.
#[derive(Deserialize)]
pub(crate) struct CreatedTicket {
    pub(crate) ticket: TicketId,
}

#[derive(Deserialize)]
pub(crate) struct TicketId {
    pub(crate) id: u64,
}

#[derive(Serialize)]
pub(crate) struct UpdateTicket {
    ticket: GroupAssignment,
}

#[derive(Serialize)]
struct GroupAssignment {
    group_id: u64,
}

impl UpdateTicket {
    pub(crate) fn group(group_id: u64) -> Self {
        Self {
            ticket: GroupAssignment { group_id },
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct GroupsResp {
    pub(crate) groups: Vec<Group>,
}

#[derive(Deserialize)]
pub(crate) struct Group {
    pub(crate) id: u64,
    pub(crate) name: String,
}
