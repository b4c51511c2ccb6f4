mod common;

use bevy::prelude::*;
use common::record_links;
use portfolio::links::LinkButton;
use pretty_assertions::assert_eq;

fn setup() -> (App, common::RecordingOpener) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    let opener = record_links(&mut app);
    (app, opener)
}

#[test]
fn pressing_a_contact_card_opens_one_link() {
    let (mut app, opener) = setup();
    let card = app
        .world_mut()
        .spawn((Interaction::Pressed, LinkButton::new("mailto:someone@example.com")))
        .id();

    app.update();
    app.update();
    assert_eq!(opener.opened(), vec!["mailto:someone@example.com".to_string()]);

    // Hovering after the press must not open it again.
    *app.world_mut().get_mut::<Interaction>(card).unwrap() = Interaction::Hovered;
    app.update();
    assert_eq!(opener.opened().len(), 1);
}

#[test]
fn hovering_opens_nothing() {
    let (mut app, opener) = setup();
    app.world_mut()
        .spawn((Interaction::Hovered, LinkButton::new("https://example.com")));

    app.update();
    assert!(opener.opened().is_empty());
}

#[test]
fn unsupported_schemes_are_not_opened() {
    let (mut app, opener) = setup();
    app.world_mut()
        .spawn((Interaction::Pressed, LinkButton::new("javascript:alert(1)")));
    app.world_mut().spawn((Interaction::Pressed, LinkButton::new("")));
    app.world_mut()
        .spawn((Interaction::Pressed, LinkButton::new("tel:+10000000000")));

    app.update();
    assert_eq!(opener.opened(), vec!["tel:+10000000000".to_string()]);
}
