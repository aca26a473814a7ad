#![allow(non_snake_case)]

fn main() {
    dioxus::launch(permit_tracker::client::App);
}
