//! Helpers for driving components through real DOM events in tests.

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};

/// Ids of the elements that gained a `name` listener in `mutations`, in
/// creation order.
pub fn listeners(mutations: &Mutations, name: &str) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name: n, id } if n == name => Some(*id),
            _ => None,
        })
        .collect()
}

/// Click the element `id`, then re-render and return the resulting edits.
pub fn click(dom: &mut VirtualDom, id: ElementId) -> Mutations {
    set_event_converter(Box::new(SerializedHtmlEventConverter));

    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event("click", event, id);
    dom.process_events();
    dom.render_immediate_to_vec()
}
