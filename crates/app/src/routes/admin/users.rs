use crate::auth::{use_api, use_auth};
use crate::fetch::{current, use_fetch};
use client::{list_state, FetchState};
use dioxus::prelude::*;
use shared_types::{Role, UserAccount};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Banner, Button, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    Input, PageHeader, PageSubtitle, PageTitle, SkeletonList, ToastOptions,
};

/// Case-insensitive match on name, email or role.
pub(crate) fn filter_users(users: &[UserAccount], query: &str) -> Vec<UserAccount> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
                || u.role.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

fn role_variant(role: &str) -> BadgeVariant {
    match Role::parse(role) {
        Some(Role::Admin) => BadgeVariant::Destructive,
        Some(Role::Doctor) => BadgeVariant::Primary,
        Some(Role::Patient) => BadgeVariant::Success,
        None => BadgeVariant::Outline,
    }
}

/// User directory with account removal.
#[component]
pub fn AdminUsers() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let mut search = use_signal(String::new);
    let mut deleting = use_signal(|| Option::<String>::None);

    let mut users = use_fetch({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { list_state(api.admin_users().await) }
        }
    });

    let delete = use_callback(move |user_id: String| {
        let api = api.clone();
        deleting.set(Some(user_id.clone()));
        spawn(async move {
            match api.delete_user(&user_id).await {
                Ok(()) => {
                    users.restart();
                    toast.success("User removed".to_string(), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(err.friendly_message(), ToastOptions::new());
                }
            }
            deleting.set(None);
        });
    });

    let self_id = auth.user_id();

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Users" }
                    PageSubtitle { "Every account registered on the platform" }
                }
            }

            Input {
                placeholder: "Search by name, email or role...",
                value: search(),
                on_input: move |e: FormEvent| search.set(e.value()),
            }

            match current(&users) {
                FetchState::Loading => rsx! { SkeletonList { rows: 5 } },
                FetchState::Failed(err) => rsx! { Banner { message: err.friendly_message() } },
                FetchState::Ready(list) => {
                    let visible = filter_users(&list, &search());
                    rsx! {
                        Card {
                            CardContent {
                                DataTable {
                                    DataTableHeader {
                                        DataTableColumn { "Name" }
                                        DataTableColumn { "Email" }
                                        DataTableColumn { "Role" }
                                        DataTableColumn { "" }
                                    }
                                    DataTableBody {
                                        if visible.is_empty() {
                                            DataTableEmpty { columns: 4, message: "No users match." }
                                        }
                                        for user in visible {
                                            DataTableRow { key: "{user.id}",
                                                DataTableCell { "{user.name}" }
                                                DataTableCell { "{user.email}" }
                                                DataTableCell {
                                                    Badge { variant: role_variant(&user.role), "{user.role}" }
                                                }
                                                DataTableCell {
                                                    Button {
                                                        variant: ButtonVariant::Destructive,
                                                        disabled: user.id == self_id,
                                                        loading: deleting.read().as_deref() == Some(user.id.as_str()),
                                                        onclick: {
                                                            let id = user.id.clone();
                                                            move |_| delete.call(id.clone())
                                                        },
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(id: &str, name: &str, email: &str, role: &str) -> UserAccount {
        UserAccount {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    #[test]
    fn search_matches_name_email_and_role() {
        let users = vec![
            user("1", "Sarah Wilson", "sarah@clinic.test", "DOCTOR"),
            user("2", "Jane Roe", "jane@mail.test", "PATIENT"),
        ];
        assert_eq!(filter_users(&users, "wilson").len(), 1);
        assert_eq!(filter_users(&users, "MAIL.TEST")[0].id, "2");
        assert_eq!(filter_users(&users, "patient")[0].name, "Jane Roe");
        assert_eq!(filter_users(&users, "  ").len(), 2);
        assert!(filter_users(&users, "nobody").is_empty());
    }

    #[test]
    fn unknown_roles_get_outline_badge() {
        assert_eq!(role_variant("doctor"), BadgeVariant::Primary);
        assert_eq!(role_variant("nurse"), BadgeVariant::Outline);
    }
}
