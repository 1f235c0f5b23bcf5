use dioxus::prelude::*;
use pagination_ui::theme::ThemeSeed;

mod demo;
mod flash;

use demo::PaginationDemo;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeSeed {}
        PaginationDemo {}
    }
}
