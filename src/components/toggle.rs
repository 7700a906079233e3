use dioxus::prelude::*;

pub const SUN_ICON: Asset = asset!("/assets/icons/sun.svg");
pub const MOON_ICON: Asset = asset!("/assets/icons/moon.svg");

/// The two faces of the theme switch: `checked` shows while dark mode is on.
#[derive(Clone, Copy, PartialEq)]
pub struct IconPair {
    pub checked: Asset,
    pub unchecked: Asset,
}

impl IconPair {
    pub fn moon_and_sun() -> Self {
        Self {
            checked: MOON_ICON,
            unchecked: SUN_ICON,
        }
    }
}

/// Icon shown for a given preference; exhaustive over the two states.
pub fn icon_for(icons: IconPair, is_dark: bool) -> Asset {
    if is_dark {
        icons.checked
    } else {
        icons.unchecked
    }
}

#[component]
pub fn ThemeToggle(checked: bool, icons: IconPair, onchange: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "theme-toggle",
            role: "switch",
            aria_checked: checked,
            onclick: move |_| onchange.call(()),
            img {
                src: icon_for(icons, checked),
                alt: if checked { "dark mode" } else { "light mode" },
            }
        }
    }
}
