//! End-to-end configurator scenarios exercised through the library API.

use bbqp_configurator::catalog::OptionCatalog;
use bbqp_configurator::order::OrderMessage;
use bbqp_configurator::pricing;

fn catalog() -> OptionCatalog {
    OptionCatalog::load().expect("embedded catalog should load")
}

#[test]
fn default_configuration_totals_base_price() {
    let catalog = catalog();
    let config = catalog.default_configuration();

    assert_eq!(pricing::total(&catalog, &config).unwrap(), 25_000);
}

#[test]
fn stainless_with_thermometer_scenario() {
    let catalog = catalog();
    let mut config = catalog.default_configuration();

    catalog
        .apply_selection(&mut config, "material", "stainless")
        .unwrap();
    catalog
        .apply_selection(&mut config, "thermometer", "installed")
        .unwrap();

    assert_eq!(pricing::total(&catalog, &config).unwrap(), 46_500);
}

#[test]
fn fully_loaded_configuration_scenario() {
    let catalog = catalog();
    let mut config = catalog.default_configuration();

    for (category, value) in [
        ("material", "stainless"),
        ("style", "military"),
        ("thermometer", "installed"),
        ("tray", "drawer"),
        ("skewers", "10pcs"),
        ("stone", "yes"),
        ("grids", "yes"),
    ] {
        catalog.apply_selection(&mut config, category, value).unwrap();
    }

    assert_eq!(pricing::total(&catalog, &config).unwrap(), 64_500);
}

#[test]
fn reselecting_the_same_option_is_idempotent() {
    let catalog = catalog();
    let mut config = catalog.default_configuration();

    catalog
        .apply_selection(&mut config, "material", "stainless")
        .unwrap();
    let first = pricing::total(&catalog, &config).unwrap();

    catalog
        .apply_selection(&mut config, "material", "stainless")
        .unwrap();
    let second = pricing::total(&catalog, &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(config.selection("material").unwrap().value, "stainless");
}

#[test]
fn selections_do_not_leak_across_categories() {
    let catalog = catalog();
    let mut config = catalog.default_configuration();

    catalog
        .apply_selection(&mut config, "skewers", "6pcs")
        .unwrap();

    // Every other category keeps its default
    for category in catalog.categories() {
        if category.id == "skewers" {
            continue;
        }
        assert_eq!(
            config.selection(&category.id).unwrap().value,
            category.default_option().value
        );
    }
}

#[test]
fn independent_configurations_do_not_share_state() {
    let catalog = catalog();
    let mut first = catalog.default_configuration();
    let second = catalog.default_configuration();

    catalog
        .apply_selection(&mut first, "material", "stainless")
        .unwrap();

    assert_eq!(second.selection("material").unwrap().value, "steel");
    assert_eq!(pricing::total(&catalog, &second).unwrap(), 25_000);
}

#[test]
fn message_line_count_matches_categories_plus_total_plus_attachment() {
    let catalog = catalog();
    let categories = catalog.categories().len();

    // No engraving: categories + total
    let config = catalog.default_configuration();
    let message = OrderMessage::build(&catalog, &config).unwrap();
    assert_eq!(message.lines().len(), categories + 1);

    // Engraving without a file: still categories + total
    let mut config = catalog.default_configuration();
    catalog
        .apply_selection(&mut config, "style", "engraving")
        .unwrap();
    let message = OrderMessage::build(&catalog, &config).unwrap();
    assert_eq!(message.lines().len(), categories + 1);

    // Engraving with a file: categories + total + attachment
    config.attach_engraving_file("logo.png");
    let message = OrderMessage::build(&catalog, &config).unwrap();
    assert_eq!(message.lines().len(), categories + 2);
    assert!(message.lines().last().unwrap().contains("logo.png"));
}

#[test]
fn switching_away_from_engraving_drops_the_attachment_line() {
    let catalog = catalog();
    let mut config = catalog.default_configuration();

    catalog
        .apply_selection(&mut config, "style", "engraving")
        .unwrap();
    config.attach_engraving_file("logo.png");

    let with_engraving = OrderMessage::build(&catalog, &config).unwrap();
    assert!(with_engraving.to_text().contains("logo.png"));

    // The attachment stays stored but stops appearing in the message
    catalog
        .apply_selection(&mut config, "style", "military")
        .unwrap();
    let without_engraving = OrderMessage::build(&catalog, &config).unwrap();
    assert!(!without_engraving.to_text().contains("logo.png"));
    assert!(config.engraving_attachment().is_some());

    // Selecting engraving again brings it back without re-attaching
    catalog
        .apply_selection(&mut config, "style", "engraving")
        .unwrap();
    let again = OrderMessage::build(&catalog, &config).unwrap();
    assert!(again.to_text().contains("logo.png"));
}

#[test]
fn message_total_tracks_price_aggregator() {
    let catalog = catalog();
    let mut config = catalog.default_configuration();
    catalog
        .apply_selection(&mut config, "grids", "yes")
        .unwrap();

    let total = pricing::total(&catalog, &config).unwrap();
    let message = OrderMessage::build(&catalog, &config).unwrap();

    let total_line = format!("Estimated price: {}", pricing::format_price(total));
    assert!(message.lines().contains(&total_line));
}
