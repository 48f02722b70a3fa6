use leptos::*;

/// Outline icons drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    AlertTriangle,
    AlertCircle,
    Shield,
    Info,
    Search,
    FileUp,
    LogOut,
}

impl IconKind {
    pub fn name(self) -> &'static str {
        match self {
            IconKind::AlertTriangle => "alert-triangle",
            IconKind::AlertCircle => "alert-circle",
            IconKind::Shield => "shield",
            IconKind::Info => "info",
            IconKind::Search => "search",
            IconKind::FileUp => "file-up",
            IconKind::LogOut => "log-out",
        }
    }
}

fn icon_shapes(kind: IconKind) -> View {
    match kind {
        IconKind::AlertTriangle => view! {
            <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"></path>
            <line x1="12" y1="9" x2="12" y2="13"></line>
            <line x1="12" y1="17" x2="12.01" y2="17"></line>
        }
        .into_view(),
        IconKind::AlertCircle => view! {
            <circle cx="12" cy="12" r="10"></circle>
            <line x1="12" y1="8" x2="12" y2="12"></line>
            <line x1="12" y1="16" x2="12.01" y2="16"></line>
        }
        .into_view(),
        IconKind::Shield => view! {
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"></path>
        }
        .into_view(),
        IconKind::Info => view! {
            <circle cx="12" cy="12" r="10"></circle>
            <line x1="12" y1="16" x2="12" y2="12"></line>
            <line x1="12" y1="8" x2="12.01" y2="8"></line>
        }
        .into_view(),
        IconKind::Search => view! {
            <circle cx="11" cy="11" r="8"></circle>
            <line x1="21" y1="21" x2="16.65" y2="16.65"></line>
        }
        .into_view(),
        IconKind::FileUp => view! {
            <path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"></path>
            <polyline points="14 2 14 8 20 8"></polyline>
            <path d="M12 12v6"></path>
            <path d="m15 15-3-3-3 3"></path>
        }
        .into_view(),
        IconKind::LogOut => view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"></path>
            <polyline points="16 17 21 12 16 7"></polyline>
            <line x1="21" y1="12" x2="9" y2="12"></line>
        }
        .into_view(),
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=kind.name()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_shapes(kind)}
        </svg>
    }
}
