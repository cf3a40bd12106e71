use serde::{Deserialize, Serialize};

use crate::AppError;

/// Clinic role controlling which dashboards and menu entries are reachable.
///
/// - `Admin`: system overview, user directory.
/// - `Doctor`: appointment queue, status decisions, patient vitals.
/// - `Patient`: own appointments, booking, medical records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Doctor, Role::Patient];

impl Role {
    /// Parse a role string case-insensitively. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "patient" => Some(Role::Patient),
            _ => None,
        }
    }

    /// Wire representation (`ADMIN`, `DOCTOR`, `PATIENT`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Doctor => "DOCTOR",
            Role::Patient => "PATIENT",
        }
    }

    /// Lowercase path segment used for the role's route prefix.
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
        }
    }

    /// Landing path after sign-in.
    pub fn home_path(&self) -> String {
        format!("/{}/dashboard", self.slug())
    }
}

/// The authenticated user as the dashboard knows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

impl Identity {
    /// First letter of the display name, used for avatar placeholders.
    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

/// Uppercased first character of a name, `?` when empty.
pub fn initial_of(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Response body of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

impl AuthResponse {
    /// Split into the identity to store and the bearer token to persist.
    ///
    /// Fails when the backend answers with an empty token or a role the
    /// dashboard has no views for; no partial identity is produced.
    pub fn into_credentials(self) -> Result<(Identity, String), AppError> {
        if self.token.trim().is_empty() {
            return Err(AppError::decode("Authentication response did not include a token"));
        }
        let role = Role::parse(&self.role).ok_or_else(|| {
            AppError::decode(format!("Unsupported role in authentication response: {}", self.role))
        })?;
        let identity = Identity {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
        };
        Ok((identity, self.token))
    }
}

/// Nested user summary carried inside doctor and patient payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A row of the admin user directory (`GET /admin/users`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Platform-wide counters from `GET /admin/stats`.
///
/// The backend has shipped both `users` and `totalUsers` spellings; both are
/// accepted. Missing counters read as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    #[serde(default, alias = "totalUsers")]
    pub users: u64,
    #[serde(default, alias = "totalDoctors")]
    pub doctors: u64,
    #[serde(default, alias = "totalPatients")]
    pub patients: u64,
    #[serde(default, alias = "totalAppointments")]
    pub appointments: u64,
}

/// One slice of the user-population breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleShare {
    pub role: Role,
    pub count: u64,
    /// Whole-number percentage of all users, 0 when there are none.
    pub percent: u8,
}

impl DashboardStats {
    /// Users per role. Admins are whatever remains after doctors and patients.
    pub fn role_breakdown(&self) -> Vec<RoleShare> {
        let admins = self
            .users
            .saturating_sub(self.doctors)
            .saturating_sub(self.patients);
        let total = self.users.max(self.doctors.saturating_add(self.patients));

        [
            (Role::Doctor, self.doctors),
            (Role::Patient, self.patients),
            (Role::Admin, admins),
        ]
        .into_iter()
        .map(|(role, count)| RoleShare {
            role,
            count,
            percent: if total == 0 {
                0
            } else {
                let (count, total) = (u128::from(count), u128::from(total));
                ((count * 100 + total / 2) / total).min(100) as u8
            },
        })
        .collect()
    }
}
