//! Body of the announcement detail modal.

use dioxus::prelude::*;
use tablon_shared::Announcement;

pub const ACHIEVEMENTS_HEADING: &str = "Logros asociados";
pub const NO_ACHIEVEMENTS_MESSAGE: &str = "Este anuncio no tiene logros asociados.";

/// AnnouncementDetail - meta line, summary and the achievement list.
///
/// `achievement_class` is appended to every achievement entry.
#[component]
pub fn AnnouncementDetail(announcement: Announcement, achievement_class: &'static str) -> Element {
    rsx! {
        div { class: "space-y-4",
            div { class: "text-xs text-slate-500",
                "{announcement.category} • {announcement.date_label}"
            }
            p { class: "text-sm text-slate-700", "{announcement.summary}" }
            div { class: "pt-2",
                h3 { class: "mb-2 text-sm font-semibold text-slate-900", {ACHIEVEMENTS_HEADING} }
                if announcement.has_achievements() {
                    ul { class: "space-y-3",
                        for (index, achievement) in announcement.achievements.iter().enumerate() {
                            li {
                                key: "{index}",
                                class: "rounded-xl border p-3 {achievement_class}",
                                p { class: "font-medium text-slate-900", "{achievement.name}" }
                                p { class: "text-xs text-slate-700", "Dificultad: {achievement.difficulty}" }
                                p { class: "text-xs text-slate-700", "Potencial: {achievement.potential}" }
                            }
                        }
                    }
                } else {
                    p { class: "text-sm text-slate-500", {NO_ACHIEVEMENTS_MESSAGE} }
                }
            }
        }
    }
}
