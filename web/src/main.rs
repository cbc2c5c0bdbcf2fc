use dioxus::prelude::*;

use ui::views::Dashboard;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Shared theme, inlined so web and desktop render identically.
        document::Style { "{MAIN_CSS_INLINE}" }
        document::Title { "Fleetdesk" }

        Dashboard {}
    }
}
