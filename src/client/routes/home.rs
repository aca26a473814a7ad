use std::rc::Rc;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use serde_json::Value;

use crate::client::{app::AppClient, components::Page};

/// Display name of an activity record, whichever shape the API returned
fn activity_name(activity: &Value) -> &str {
    activity
        .get("activity_name")
        .or_else(|| activity.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("Unnamed activity")
}

#[component]
pub fn ActivityList() -> Element {
    let client = use_context::<Rc<AppClient>>();

    let activities = use_resource(move || {
        let client = Rc::clone(&client);
        async move { client.get_all_activities().await }
    });

    match &*activities.read_unchecked() {
        Some(Ok(Value::Array(items))) => rsx!(
            ul { class: "list bg-base-100 rounded-box shadow-md",
                for activity in items.iter() {
                    li { class: "list-row",
                        div {
                            p { class: "font-semibold", {activity_name(activity).to_string()} }
                            if let Some(description) = activity.get("description").and_then(Value::as_str) {
                                p { class: "text-sm opacity-70", "{description}" }
                            }
                        }
                    }
                }
            }
        ),
        Some(Ok(_)) => rsx!(
            p { "No activities found." }
        ),
        // The data access layer has already shown the error
        Some(Err(_)) => rsx!(
            p { class: "text-error", "Activities could not be loaded." }
        ),
        None => rsx!(
            div { class: "skeleton h-32 w-full" }
        ),
    }
}

#[component]
fn ActivityOverview() -> Element {
    rsx!(
        Title { "Activities | Youth Permission Tracker" }
        Meta {
            name: "description",
            content: "Activities, permissions and needs for youth groups."
        }
        Page {
            h1 { class: "text-2xl font-bold mb-4", "Activities" }
            ActivityList {}
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(ActivityOverview {})
}

#[component]
pub fn Index() -> Element {
    rsx!(ActivityOverview {})
}
