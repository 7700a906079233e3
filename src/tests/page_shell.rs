use crate::components::{icon_for, IconPair, MOON_ICON, SUN_ICON};
use crate::configs::SiteConfig;
use crate::utils::{rhythm, scale};
use crate::views::HeadingVariant;

#[test]
fn root_path_selects_primary_heading() {
    assert_eq!(HeadingVariant::select("/", "/"), HeadingVariant::Primary);
}

#[test]
fn subpages_select_secondary_heading() {
    assert_eq!(
        HeadingVariant::select("/posts/my-post/", "/"),
        HeadingVariant::Secondary
    );
    assert_eq!(HeadingVariant::select("/about", "/"), HeadingVariant::Secondary);
}

#[test]
fn prefixed_deployments_compare_against_their_own_root() {
    let config = SiteConfig {
        path_prefix: "/blog".to_string(),
        ..SiteConfig::default()
    };
    assert_eq!(
        HeadingVariant::select("/blog/", &config.root_path()),
        HeadingVariant::Primary
    );
    assert_eq!(
        HeadingVariant::select("/", &config.root_path()),
        HeadingVariant::Secondary
    );
}

#[test]
fn heading_styles_come_from_variant_presets() {
    assert!(HeadingVariant::Primary.style().contains(&scale(1.0).font_size));
    assert!(HeadingVariant::Secondary.style().contains("Montserrat"));
}

#[test]
fn icon_binding_is_exhaustive() {
    let icons = IconPair::moon_and_sun();
    assert!(icon_for(icons, true) == MOON_ICON);
    assert!(icon_for(icons, false) == SUN_ICON);
}

#[test]
fn rhythm_scales_linearly_on_the_baseline() {
    assert_eq!(rhythm(1.0), "1.75rem");
    assert_eq!(rhythm(24.0), "42rem");
    assert_eq!(rhythm(0.0), "0rem");
}

#[test]
fn scale_is_pure() {
    let first = scale(1.0);
    let second = scale(1.0);
    assert_eq!(first.font_size, second.font_size);
    assert_eq!(first.line_height, second.line_height);
}
