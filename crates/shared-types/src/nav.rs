use crate::models::Role;

/// Icon identifiers for menu entries. The UI layer maps them to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Users,
    Calendar,
    Activity,
    FileText,
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: MenuIcon,
    pub path: &'static str,
}

const fn item(label: &'static str, icon: MenuIcon, path: &'static str) -> MenuItem {
    MenuItem { label, icon, path }
}

const ADMIN_MENU: &[MenuItem] = &[
    item("Overview", MenuIcon::Dashboard, "/admin/dashboard"),
    item("Users", MenuIcon::Users, "/admin/users"),
    item("System Health", MenuIcon::Calendar, "/admin/stats"),
];

const DOCTOR_MENU: &[MenuItem] = &[
    item("Dashboard", MenuIcon::Dashboard, "/doctor/dashboard"),
    item("Appointments", MenuIcon::Calendar, "/doctor/appointments"),
    item("Patient Vitals", MenuIcon::Activity, "/doctor/vitals"),
];

const PATIENT_MENU: &[MenuItem] = &[
    item("My Health", MenuIcon::Dashboard, "/patient/dashboard"),
    item("Book Appointment", MenuIcon::Calendar, "/patient/book"),
    item("Medical Records", MenuIcon::FileText, "/patient/records"),
];

/// Fixed menu for a role, in display order.
pub fn menu_for(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Doctor => DOCTOR_MENU,
        Role::Patient => PATIENT_MENU,
    }
}

/// Menu for a raw role string. Unknown or empty roles get no entries.
pub fn menu_for_role(role: &str) -> &'static [MenuItem] {
    Role::parse(role).map(menu_for).unwrap_or(&[])
}

/// Which role's area a path belongs to, judged by its first segment.
pub fn role_for_path(path: &str) -> Option<Role> {
    let first = path.trim_start_matches('/').split('/').next()?;
    match first {
        "admin" => Some(Role::Admin),
        "doctor" => Some(Role::Doctor),
        "patient" => Some(Role::Patient),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.label).collect()
    }

    #[test]
    fn doctor_menu_in_fixed_order() {
        let menu = menu_for_role("DOCTOR");
        assert_eq!(labels(menu), vec!["Dashboard", "Appointments", "Patient Vitals"]);
        assert_eq!(
            menu.iter().map(|i| i.path).collect::<Vec<_>>(),
            vec!["/doctor/dashboard", "/doctor/appointments", "/doctor/vitals"]
        );
    }

    #[test]
    fn role_string_is_case_insensitive() {
        assert_eq!(menu_for_role("patient"), menu_for(Role::Patient));
        assert_eq!(menu_for_role("Admin"), menu_for(Role::Admin));
    }

    #[test]
    fn unknown_role_yields_empty_menu() {
        assert!(menu_for_role("").is_empty());
        assert!(menu_for_role("RECEPTIONIST").is_empty());
    }

    #[test]
    fn every_menu_stays_inside_its_role_area() {
        for role in crate::ALL_ROLES {
            for entry in menu_for(*role) {
                assert_eq!(role_for_path(entry.path), Some(*role), "{}", entry.path);
            }
        }
    }

    #[test]
    fn first_entry_is_the_role_home() {
        for role in crate::ALL_ROLES {
            assert_eq!(menu_for(*role)[0].path, role.home_path());
        }
    }

    #[test]
    fn role_for_path_ignores_public_paths() {
        assert_eq!(role_for_path("/"), None);
        assert_eq!(role_for_path("/login"), None);
        assert_eq!(role_for_path("/patient/book"), Some(Role::Patient));
    }
}
