use std::rc::Rc;

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{app::AppClient, components::Page, platform},
    model::{api::LoginForm, session::SessionRecord},
};

#[component]
pub fn Login() -> Element {
    let client = use_context::<Rc<AppClient>>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let client = Rc::clone(&client);
        let form = LoginForm {
            username: username(),
            password: password(),
        };

        spawn(async move {
            pending.set(true);

            // Failures are already shown as a toast
            if let Ok(token) = client.login(&form).await {
                tracing::info!("Logged in as {}", form.username);

                platform::persist_login(&SessionRecord::from_login(&form.username, &token));
            }

            pending.set(false);
        });
    };

    rsx!(
        Title { "Login | Youth Permission Tracker" }
        Page { class: "justify-center",
            form {
                class: "card bg-base-100 shadow-md w-full max-w-96 mx-auto",
                onsubmit: submit,
                div { class: "card-body gap-4",
                    h1 { class: "card-title", "Login" }
                    input {
                        class: "input w-full",
                        r#type: "text",
                        name: "username",
                        placeholder: "Email",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |event| username.set(event.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        name: "password",
                        placeholder: "Password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |event| password.set(event.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() { "Logging in..." } else { "Login" }
                    }
                }
            }
        }
    )
}
