mod api;
mod app;
mod components;
mod pages;

use shared::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::info_1(&format!("{}: reading stats from {}", CONFIG.title, CONFIG.api_url).into());
    leptos::mount::mount_to_body(app::App);
}
