use dioxus::prelude::*;
use ganes_dev::configs::SiteConfig;
use ganes_dev::content;
use ganes_dev::utils::ThemeStore;
use ganes_dev::Route;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = SiteConfig::resolve();
    let store = ThemeStore::browser(config.theme_storage_key.clone());
    let default_dark = config.default_dark;

    use_context_provider(|| config);
    use_context_provider(content::load_or_default);
    use_context_provider({
        let store = store.clone();
        move || store
    });
    let theme = use_signal(move || store.load(default_dark));
    use_context_provider(|| theme);

    rsx! {
        div {
            class: if theme().is_dark { "dark" } else { "" },
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
