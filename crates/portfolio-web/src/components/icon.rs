use leptos::prelude::*;

/// Outline icons drawn on a 24x24 grid with `currentColor` strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Mail,
    Linkedin,
    Github,
    File,
}

#[component]
pub fn Icon(kind: IconKind, #[prop(default = 24)] size: u32, #[prop(optional, into)] class: String) -> impl IntoView {
    let shapes = match kind {
        IconKind::ArrowRight => view! {
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        }
        .into_any(),
        IconKind::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        }
        .into_any(),
        IconKind::Linkedin => view! {
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect width="4" height="12" x="2" y="9" />
            <circle cx="4" cy="4" r="2" />
        }
        .into_any(),
        IconKind::Github => view! {
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-8-2" />
        }
        .into_any(),
        IconKind::File => view! {
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
            <path d="M14 2v4a2 2 0 0 0 2 2h4" />
        }
        .into_any(),
    };

    let size = size.to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {shapes}
        </svg>
    }
}
