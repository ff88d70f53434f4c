//! Session data types
//!
//! - `SessionRecord`: the persisted "who is logged in" record
//! - `Role`: account role tag
//! - `SessionState`: explicit Loading / Anonymous / Authenticated state
//! - `SignupRequest`: input for account creation

use serde::{Deserialize, Serialize};

/// Storage key holding the serialized session record
pub const SESSION_KEY: &str = "mediclean_user";

/// Role attached to a session record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Service operator
    Admin,
    /// Account representing a medical facility
    Facility,
    /// Staff member of a facility
    Staff,
}

impl Role {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Facility => "Facility",
            Role::Staff => "Staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Facility => write!(f, "facility"),
            Role::Staff => write!(f, "staff"),
        }
    }
}

/// The locally stored representation of who is logged in.
///
/// Serialized as `{"id","email","name","facilityName"?,"role"}` under
/// [`SESSION_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Opaque account identifier
    pub id: String,
    pub email: String,
    /// Display name
    pub name: String,
    /// Affiliated facility, if any
    #[serde(default, alias = "organizationName", skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    pub role: Role,
}

impl SessionRecord {
    /// Name shown in page headers: the facility when present, else the user
    pub fn display_name(&self) -> &str {
        self.facility_name.as_deref().unwrap_or(&self.name)
    }

    /// First letter of the user's name, for avatar badges
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Session lifecycle state.
///
/// `Loading` lasts until the startup restore has run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Authenticated(SessionRecord),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The current record, if authenticated
    pub fn user(&self) -> Option<&SessionRecord> {
        match self {
            SessionState::Authenticated(record) => Some(record),
            _ => None,
        }
    }
}

/// Which auth form produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
}

/// Input for account creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub facility_name: Option<String>,
}

impl SignupRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            facility_name: None,
        }
    }

    /// Builder method: set the facility name. Blank names are dropped.
    pub fn facility(mut self, facility_name: impl Into<String>) -> Self {
        let facility_name = facility_name.into();
        self.facility_name = if facility_name.trim().is_empty() {
            None
        } else {
            Some(facility_name)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SessionRecord {
        SessionRecord {
            id: "user-123".to_string(),
            email: "jane@example.com".to_string(),
            name: "Dr. Jane Smith".to_string(),
            facility_name: Some("City Medical Center".to_string()),
            role: Role::Facility,
        }
    }

    #[test]
    fn test_record_json_layout() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["id"], "user-123");
        assert_eq!(json["facilityName"], "City Medical Center");
        assert_eq!(json["role"], "facility");
    }

    #[test]
    fn test_record_without_facility_omits_key() {
        let mut r = record();
        r.facility_name = None;
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("facilityName"));
    }

    #[test]
    fn test_record_accepts_organization_alias() {
        let json = r#"{"id":"u1","email":"a@b.c","name":"A","organizationName":"Clinic","role":"staff"}"#;
        let r: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.facility_name.as_deref(), Some("Clinic"));
        assert_eq!(r.role, Role::Staff);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"id":"u1","email":"a@b.c","name":"A","role":"superuser"}"#;
        assert!(serde_json::from_str::<SessionRecord>(json).is_err());
    }

    #[test]
    fn test_state_accessors() {
        assert!(SessionState::default().is_loading());
        assert!(!SessionState::Anonymous.is_authenticated());

        let state = SessionState::Authenticated(record());
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().name, "Dr. Jane Smith");
    }

    #[test]
    fn test_display_name_and_initial() {
        let mut r = record();
        assert_eq!(r.display_name(), "City Medical Center");
        assert_eq!(r.initial(), 'D');
        r.facility_name = None;
        assert_eq!(r.display_name(), "Dr. Jane Smith");
        r.name = "  sam".to_string();
        assert_eq!(r.initial(), 'S');
        assert_eq!(r.role.label(), "Facility");
    }

    #[test]
    fn test_signup_request_drops_blank_facility() {
        let req = SignupRequest::new("a@b.c", "pw", "A").facility("   ");
        assert_eq!(req.facility_name, None);
        let req = SignupRequest::new("a@b.c", "pw", "A").facility("Clinic");
        assert_eq!(req.facility_name.as_deref(), Some("Clinic"));
    }
}
