use dioxus::prelude::*;

/// Colour schemes the dashboard ships with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Palette {
    /// Light, blue-accented default.
    #[default]
    Clinic,
    /// Dark variant for night shifts.
    Night,
}

pub const ALL_PALETTES: &[Palette] = &[Palette::Clinic, Palette::Night];

/// `localStorage` key remembering the chosen palette.
pub const THEME_STORAGE_KEY: &str = "medvault-theme";

impl Palette {
    /// Value written to `<html data-theme>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Clinic => "clinic",
            Palette::Night => "night",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Palette::Clinic => "Light",
            Palette::Night => "Dark",
        }
    }

    /// Parse a stored key, falling back to Clinic.
    pub fn from_key(s: &str) -> Self {
        match s {
            "night" => Palette::Night,
            _ => Palette::Clinic,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Palette::Night)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Palette::Clinic => Palette::Night,
            Palette::Night => Palette::Clinic,
        }
    }
}

/// Palette signal shared through context so the nav rail toggle and the
/// document stay in sync.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub palette: Signal<Palette>,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        let next = self.palette.read().toggled();
        self.palette.set(next);
        set_theme(next);
    }
}

/// Apply the persisted palette on startup and provide [`ThemeState`] to
/// everything below it.
///
/// Mount once, wrapping the router.
#[component]
pub fn ThemeSeed(children: Element) -> Element {
    let mut palette = use_signal(Palette::default);
    use_context_provider(|| ThemeState { palette });

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&format!(
                r#"
                var theme = 'clinic';
                try {{ theme = window.localStorage.getItem('{THEME_STORAGE_KEY}') || 'clinic'; }} catch (e) {{}}
                document.documentElement.setAttribute('data-theme', theme);
                dioxus.send(theme);
                "#
            ));
            if let Ok(key) = eval.recv::<String>().await {
                palette.set(Palette::from_key(&key));
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Persist `palette` and apply it to the document root.
pub fn set_theme(palette: Palette) {
    let theme = palette.as_str();
    document::eval(&format!(
        r#"
        try {{ window.localStorage.setItem('{THEME_STORAGE_KEY}', '{theme}'); }} catch (e) {{}}
        document.documentElement.setAttribute('data-theme', '{theme}');
        "#,
    ));
}
