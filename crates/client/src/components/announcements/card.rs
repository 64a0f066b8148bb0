//! Announcement summary card.

use dioxus::prelude::*;
use tablon_shared::{Announcement, CategoryCatalog};

use crate::components::ui::{Button, ButtonVariant};

pub const VIEW_DETAIL_LABEL: &str = "Ver detalle";

fn achievement_count_label(count: usize) -> String {
    match count {
        0 => "Sin logros".to_string(),
        1 => "1 logro".to_string(),
        n => format!("{n} logros"),
    }
}

/// AnnouncementCard - one summary tile in the feed grid.
///
/// ```text
/// +--------------------------------------------+
/// |  [Logro]                      28 feb 2025  |
/// |  Equipo finalista en la hackathon          |
/// |  El equipo de la cohorte de invierno...    |
/// |--------------------------------------------|
/// |  3 logros                   [Ver detalle]  |
/// +--------------------------------------------+
/// ```
///
/// `on_view_detail` receives exactly the rendered item.
#[component]
pub fn AnnouncementCard(item: Announcement, on_view_detail: EventHandler<Announcement>) -> Element {
    let catalog = try_use_context::<CategoryCatalog>().unwrap_or_default();
    let category = catalog.lookup(&item.category);
    let badge_class = category.variant.badge_class();
    let count_label = achievement_count_label(item.achievements.len());

    rsx! {
        article { class: "flex flex-col rounded-2xl border border-slate-200 bg-white p-5 shadow-sm",
            div { class: "mb-3 flex items-center justify-between gap-2",
                span { class: "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium ring-1 {badge_class}",
                    "{category.label}"
                }
                span { class: "text-xs text-slate-500", "{item.date_label}" }
            }
            h3 { class: "text-base font-semibold text-slate-900", "{item.title}" }
            p { class: "mt-2 line-clamp-3 flex-1 text-sm text-slate-600", "{item.summary}" }
            div { class: "mt-4 flex items-center justify-between border-t border-slate-100 pt-3",
                span { class: "text-xs text-slate-500", "{count_label}" }
                Button {
                    variant: ButtonVariant::Subtle,
                    onclick: {
                        let item = item.clone();
                        move |_| on_view_detail.call(item.clone())
                    },
                    {VIEW_DETAIL_LABEL}
                }
            }
        }
    }
}
