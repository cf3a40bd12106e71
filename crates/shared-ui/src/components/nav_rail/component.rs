use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the rail is expanded. On narrow screens "open" means the
/// overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavRailState {
    pub open: bool,
}

#[component]
pub fn NavRailProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| NavRailState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "nav-rail-provider",
            "data-rail-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_nav_rail() -> Signal<NavRailState> {
    use_context::<Signal<NavRailState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

/// The side navigation column.
#[component]
pub fn NavRail(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_nav_rail();
    let is_open = state().open;

    let base = vec![
        Attribute::new("class", "nav-rail", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "nav-rail-backdrop",
                onclick: move |_| state.set(NavRailState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Brand block at the top of the rail.
#[component]
pub fn NavRailHeader(children: Element) -> Element {
    rsx! {
        div { class: "nav-rail-header", {children} }
    }
}

#[component]
pub fn NavRailMenu(children: Element) -> Element {
    rsx! {
        nav { class: "nav-rail-menu",
            ul { {children} }
        }
    }
}

/// One menu entry. Clicking closes the overlay on narrow screens.
#[component]
pub fn NavRailItem(
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let mut state = use_nav_rail();

    rsx! {
        li { class: "nav-rail-item",
            button {
                r#type: "button",
                class: "nav-rail-button",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| {
                    state.set(NavRailState { open: false });
                    onclick.call(evt);
                },
                {children}
            }
        }
    }
}

#[component]
pub fn NavRailFooter(children: Element) -> Element {
    rsx! {
        div { class: "nav-rail-footer", {children} }
    }
}

/// Hamburger button that flips the rail open or closed.
#[component]
pub fn NavRailToggle(children: Element) -> Element {
    let mut state = use_nav_rail();

    rsx! {
        button {
            r#type: "button",
            class: "nav-rail-toggle",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let current = state().open;
                state.set(NavRailState { open: !current });
            },
            {children}
        }
    }
}

/// Main content column beside the rail.
#[component]
pub fn NavRailInset(children: Element) -> Element {
    rsx! {
        main { class: "nav-rail-inset", {children} }
    }
}
