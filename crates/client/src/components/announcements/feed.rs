//! Announcements feed: card grid plus the detail modal.

use dioxus::prelude::*;
use tablon_shared::{Announcement, CategoryCatalog};

use super::{achievement_style, AnnouncementCard, AnnouncementDetail, FeedSelection};
use crate::components::ui::Modal;

pub const EMPTY_FEED_MESSAGE: &str = "No hay anuncios que coincidan con tu búsqueda.";

/// AnnouncementsFeed - renders `items` as cards in the given order and
/// shows the detail of the card the user picked.
///
/// Category styles come from the [`CategoryCatalog`] in context, or the
/// built-in catalog when none is provided.
#[component]
pub fn AnnouncementsFeed(items: Vec<Announcement>) -> Element {
    let selection = use_signal(FeedSelection::default);

    rsx! {
        FeedView { items, selection }
    }
}

#[component]
fn FeedView(items: Vec<Announcement>, selection: Signal<FeedSelection>) -> Element {
    let catalog = try_use_context::<CategoryCatalog>().unwrap_or_default();
    let mut selection = selection;

    if items.is_empty() {
        return rsx! {
            div { class: "rounded-2xl border border-slate-200 bg-white p-8 text-center text-sm text-slate-600 shadow-sm",
                {EMPTY_FEED_MESSAGE}
            }
        };
    }

    let is_open = selection.read().is_open();
    let current = selection.read().selected().cloned();
    let title = current.as_ref().map(|a| a.title.clone()).unwrap_or_default();

    rsx! {
        div { class: "grid gap-4 lg:grid-cols-2",
            for item in items {
                AnnouncementCard {
                    key: "{item.id}",
                    item: item.clone(),
                    on_view_detail: move |item: Announcement| {
                        crate::log_debug!("Opening detail for announcement {}", item.id);
                        selection.write().select(item);
                    },
                }
            }
        }
        Modal {
            is_open,
            title,
            on_close: move |_| {
                crate::log_debug!("Closing announcement detail");
                selection.write().close();
            },
            if let Some(announcement) = current {
                AnnouncementDetail {
                    achievement_class: achievement_style(Some(&announcement), &catalog),
                    announcement,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablon_shared::{Achievement, CategoryConfig, CategoryVariant};

    use crate::components::ui::CLOSE_LABEL;
    use crate::test_utils::{click, listeners};

    fn announcement(id: &str, title: &str, category: &str) -> Announcement {
        Announcement {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            date_label: "Hoy".to_string(),
            summary: format!("Resumen {id}"),
            achievements: vec![Achievement {
                name: format!("Logro {id}"),
                difficulty: "Media".to_string(),
                potential: "Alto".to_string(),
            }],
        }
    }

    fn render(items: Vec<Announcement>) -> String {
        let mut dom = VirtualDom::new_with_props(AnnouncementsFeed, AnnouncementsFeedProps { items });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Feed whose selection was already set, the way a card click sets it.
    #[component]
    fn Preselected(items: Vec<Announcement>, selected: Option<Announcement>, closed: bool) -> Element {
        use_context_provider(|| {
            let mut catalog = CategoryCatalog::builtin();
            catalog.insert("c1", CategoryConfig::new("Uno", CategoryVariant::Success));
            catalog
        });
        let selection = use_signal(|| {
            let mut selection = FeedSelection::default();
            if let Some(item) = selected.clone() {
                selection.select(item);
            }
            if closed {
                selection.close();
            }
            selection
        });

        rsx! {
            FeedView { items, selection }
        }
    }

    fn render_selected(items: Vec<Announcement>, selected: Announcement, closed: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            Preselected,
            PreselectedProps {
                items,
                selected: Some(selected),
                closed,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn empty_feed_renders_only_the_message() {
        let html = render(Vec::new());
        assert!(html.contains(EMPTY_FEED_MESSAGE));
        assert!(!html.contains("<article"));
        assert!(!html.contains(CLOSE_LABEL));
    }

    #[test]
    fn one_card_per_item_in_order() {
        let html = render(vec![
            announcement("1", "Primero", "general"),
            announcement("2", "Segundo", "aviso"),
            announcement("3", "Tercero", "general"),
        ]);

        assert!(!html.contains(EMPTY_FEED_MESSAGE));
        assert_eq!(html.matches("<article").count(), 3);

        let positions: Vec<usize> = ["Primero", "Segundo", "Tercero"]
            .iter()
            .map(|t| html.find(t).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn modal_is_closed_until_a_card_is_picked() {
        let html = render(vec![announcement("1", "Primero", "general")]);
        assert!(!html.contains(CLOSE_LABEL));
        assert!(!html.contains("Logro 1"));
    }

    #[test]
    fn selected_item_opens_detail_with_category_style() {
        let item = announcement("1", "Primero", "c1");
        let html = render_selected(vec![item.clone()], item, false);

        assert!(html.contains(CLOSE_LABEL));
        assert_eq!(html.matches("Primero").count(), 2);
        assert!(html.contains("c1 • Hoy"));
        assert!(html.contains("Resumen 1"));
        assert!(html.contains("Logro 1"));
        assert!(html.contains("border-emerald-200"));
        assert!(html.contains("Dificultad: Media"));
        assert!(html.contains("Potencial: Alto"));
    }

    #[test]
    fn closed_selection_renders_no_modal_content() {
        let item = announcement("1", "Primero", "c1");
        let html = render_selected(vec![item.clone()], item, true);

        assert!(!html.contains(CLOSE_LABEL));
        assert!(!html.contains("c1 • Hoy"));
        assert!(!html.contains("Logro 1"));
    }

    #[test]
    fn selection_outlives_replaced_items() {
        let stale = announcement("9", "Retirado", "aviso");
        let html = render_selected(vec![announcement("1", "Primero", "general")], stale, false);

        assert_eq!(html.matches("<article").count(), 1);
        assert!(html.contains(CLOSE_LABEL));
        assert!(html.contains("Retirado"));
        assert!(html.contains("border-amber-200"));
    }

    #[test]
    fn empty_items_hide_an_open_selection() {
        let item = announcement("1", "Primero", "general");
        let html = render_selected(Vec::new(), item, false);

        assert!(html.contains(EMPTY_FEED_MESSAGE));
        assert!(!html.contains(CLOSE_LABEL));
    }

    #[test]
    fn clicking_a_card_opens_its_detail_and_close_control_clears_it() {
        let items = vec![
            announcement("1", "Primero", "general"),
            announcement("2", "Segundo", "logro"),
        ];
        let mut dom = VirtualDom::new_with_props(AnnouncementsFeed, AnnouncementsFeedProps { items });
        let cards = listeners(&dom.rebuild_to_vec(), "click");
        assert_eq!(cards.len(), 2);

        let opened = click(&mut dom, cards[1]);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(CLOSE_LABEL));
        assert_eq!(html.matches("Segundo").count(), 2);
        assert_eq!(html.matches("Primero").count(), 1);
        assert!(html.contains("logro • Hoy"));
        assert!(html.contains("Resumen 2"));
        assert!(html.contains("Logro 2"));
        assert!(!html.contains("Logro 1"));
        assert!(html.contains("border-emerald-200"));

        let close = listeners(&opened, "click");
        assert_eq!(close.len(), 1);
        click(&mut dom, close[0]);
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains(CLOSE_LABEL));
        assert!(!html.contains("Logro 2"));
        assert_eq!(html.matches("<article").count(), 2);

        click(&mut dom, cards[0]);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(CLOSE_LABEL));
        assert!(html.contains("general • Hoy"));
        assert!(html.contains("Logro 1"));
        assert!(html.contains("border-blue-200"));
    }
}
