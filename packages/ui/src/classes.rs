//! Class list state.
//!
//! Holds the classes the current user can see. The store trusts its callers:
//! validation happens in the action handlers, and concurrent fetches land in
//! completion order (last write wins, no sequencing guarantee).

use dioxus::prelude::*;
use model::{ClassInfo, Outcome};

use crate::client::to_client_error;
use crate::ServerClient;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassState {
    pub classes: Vec<ClassInfo>,
    pub loading: bool,
    /// Message from the last failed list fetch, cleared by the next
    /// successful one.
    pub error: Option<String>,
}

/// Get the class list state from context.
pub fn use_classes() -> Signal<ClassState> {
    use_context::<Signal<ClassState>>()
}

/// Provider component holding the class list for the pages beneath it.
#[component]
pub fn ClassesProvider(children: Element) -> Element {
    let state = use_signal(ClassState::default);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Replace the whole class list.
pub fn set_classes(mut state: Signal<ClassState>, classes: Vec<ClassInfo>) {
    let current = state();
    state.set(ClassState {
        classes,
        error: None,
        ..current
    });
}

/// Load the user's classes into the store.
pub async fn load_classes(mut state: Signal<ClassState>) {
    state.set(ClassState {
        loading: true,
        ..state()
    });
    let result = api::list_classes().await;
    let previous = state().classes;
    state.set(loaded(result, previous));
}

/// Fold a list fetch into the next store state. A failure keeps whatever
/// list is already shown and records a user-visible message instead of
/// rendering as an empty list.
fn loaded(
    result: Result<Vec<ClassInfo>, ServerFnError>,
    previous: Vec<ClassInfo>,
) -> ClassState {
    match result {
        Ok(classes) => ClassState {
            classes,
            loading: false,
            error: None,
        },
        Err(e) => ClassState {
            classes: previous,
            loading: false,
            error: Some(to_client_error(e).to_string()),
        },
    }
}

/// Fetch one class and merge it into the list: an existing entry with the
/// same id is replaced in place, otherwise the class is appended.
pub async fn get_class_by_id(mut state: Signal<ClassState>, id: &str) -> Outcome<ClassInfo> {
    let outcome = actions::classes::fetch_class_by_id(&ServerClient, id).await;
    if let Some(class) = &outcome.data {
        let mut current = state();
        upsert_class(&mut current.classes, class.clone());
        state.set(current);
    }
    outcome
}

fn upsert_class(classes: &mut Vec<ClassInfo>, class: ClassInfo) {
    match classes.iter_mut().find(|c| c.id == class.id) {
        Some(existing) => *existing = class,
        None => classes.push(class),
    }
}

#[cfg(test)]
mod tests {
    use super::{loaded, upsert_class};
    use dioxus::prelude::ServerFnError;
    use model::ClassInfo;

    fn class(id: &str, title: &str) -> ClassInfo {
        ClassInfo {
            id: id.into(),
            title: title.into(),
            subject: "Mathematics".into(),
            meeting_time: "Mon 09:00".into(),
            creator_id: "u1".into(),
            members: vec!["u1".into()],
        }
    }

    #[test]
    fn existing_id_is_replaced_in_place() {
        let mut list = vec![class("c1", "Algebra"), class("c5", "Geometry")];
        upsert_class(&mut list, class("c5", "Geometry II"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].title, "Geometry II");
    }

    #[test]
    fn new_id_is_appended() {
        let mut list = vec![class("c1", "Algebra")];
        upsert_class(&mut list, class("c2", "Calculus"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, "c2");
    }

    #[test]
    fn failed_load_keeps_the_list_and_records_the_error() {
        let previous = vec![class("c1", "Algebra")];
        let state = loaded(
            Err(ServerFnError::ServerError("You must be signed in".into())),
            previous.clone(),
        );
        assert_eq!(state.classes, previous);
        assert_eq!(state.error, Some("You must be signed in".to_string()));
        assert!(!state.loading);
    }

    #[test]
    fn successful_load_clears_a_previous_error() {
        let state = loaded(Ok(vec![class("c2", "Calculus")]), vec![]);
        assert_eq!(state.error, None);
        assert_eq!(state.classes.len(), 1);
    }
}
