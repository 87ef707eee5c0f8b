//! Entry point for the WASM application

use cineseek::{init_client, App};
use leptos::*;

pub fn main() {
    init_client();

    mount_to_body(|| view! { <App/> })
}
