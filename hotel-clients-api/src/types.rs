use serde::{Deserialize, Serialize};

// ============ Client ============

/// A hotel client as stored by the remote API.
///
/// There is no server-side identifier in the wire format: the
/// `(first_name, middle_name, last_name)` triple doubles as the lookup key,
/// so two guests with the same full name are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Given name.
    pub first_name: String,
    /// First surname.
    pub middle_name: String,
    /// Second surname.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Room number.
    pub room: i64,
}

impl Client {
    /// Full name as "first middle last", skipping empty parts.
    pub fn full_name(&self) -> String {
        [
            self.first_name.as_str(),
            self.middle_name.as_str(),
            self.last_name.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Body of the `/search` response: `{"data": Client | null}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    /// Matched client, if any.
    #[serde(default)]
    pub data: Option<Client>,
}

// ============ Requests ============

/// JSON body shared by the create and update operations.
///
/// `room` travels as text: the forms send whatever the user typed and the
/// server is responsible for rejecting non-numeric rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPayload {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub room: String,
}

impl ClientPayload {
    /// Update payload: identity from the matched record, attributes from the form.
    pub fn for_update(original: &Client, email: &str, room: &str) -> Self {
        Self {
            first_name: original.first_name.clone(),
            middle_name: original.middle_name.clone(),
            last_name: original.last_name.clone(),
            email: email.to_string(),
            room: room.to_string(),
        }
    }
}

/// Name-based criteria for the search and delete operations.
///
/// Empty inputs are dropped entirely rather than sent as `key=`, so an
/// omitted field never matches against an empty string server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl NameQuery {
    /// Build a query from the three raw form inputs, keeping non-empty ones.
    pub fn from_fields(first_name: &str, middle_name: &str, last_name: &str) -> Self {
        fn keep(value: &str) -> Option<String> {
            (!value.is_empty()).then(|| value.to_string())
        }

        Self {
            first_name: keep(first_name),
            middle_name: keep(middle_name),
            last_name: keep(last_name),
        }
    }

    /// Query pairs in wire order, absent criteria skipped.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("first_name", self.first_name.as_deref()),
            ("middle_name", self.middle_name.as_deref()),
            ("last_name", self.last_name.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    /// `true` when no criterion is present.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.middle_name.is_none() && self.last_name.is_none()
    }
}

// ============ Operations ============

/// One request against the operations API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `POST /add`
    Create(ClientPayload),
    /// `GET /search`
    Search(NameQuery),
    /// `PUT /update`
    Update(ClientPayload),
    /// `DELETE /delete`
    Delete(NameQuery),
}

impl Operation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Search(_) => "search",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// HTTP method name.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Create(_) => "POST",
            Self::Search(_) => "GET",
            Self::Update(_) => "PUT",
            Self::Delete(_) => "DELETE",
        }
    }

    /// Path below the operations prefix.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Create(_) => "/add",
            Self::Search(_) => "/search",
            Self::Update(_) => "/update",
            Self::Delete(_) => "/delete",
        }
    }
}

/// Successful result of an [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Create answered 201.
    Created,
    /// Search answered 200 (payload may be null) or 404 (`None`).
    Found(Option<Client>),
    /// Update answered 200.
    Updated,
    /// Delete answered 200.
    Deleted,
}
