//! Announcements page: search box above the feed.

use dioxus::prelude::*;
use tablon_shared::{filter_announcements, Announcement};

use crate::components::announcements::AnnouncementsFeed;
use crate::components::ui::SearchInput;
use crate::storage;

fn results_label(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{total} anuncios")
    } else {
        format!("{shown} de {total} anuncios")
    }
}

/// Filters `items` by the search query and hands the result to the feed.
/// The query is restored from storage on mount and saved on every change.
#[component]
pub fn AnnouncementsPage(items: Vec<Announcement>) -> Element {
    let mut query = use_signal(storage::load_search_query);

    let filtered = filter_announcements(&items, &query.read());
    let label = results_label(filtered.len(), items.len());

    rsx! {
        main { class: "mx-auto max-w-5xl space-y-6 px-4 py-10",
            header { class: "space-y-1",
                h1 { class: "text-2xl font-bold text-slate-900", "Anuncios" }
                p { class: "text-sm text-slate-500", "{label}" }
            }
            SearchInput {
                value: query(),
                placeholder: "Buscar por título, categoría o logro".to_string(),
                oninput: move |value: String| {
                    storage::save_search_query(&value);
                    query.set(value);
                },
            }
            AnnouncementsFeed { items: filtered }
        }
    }
}
