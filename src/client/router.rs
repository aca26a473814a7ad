use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, Index, Login, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/index.html")]
    Index {},

    #[route("/login.html")]
    Login {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
