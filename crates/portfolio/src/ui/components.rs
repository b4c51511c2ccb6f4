use bevy::prelude::*;

/// UI color constants for buttons
pub const NORMAL_BUTTON: Color = Color::srgba(0.0, 0.0, 0.0, 0.2);
pub const HOVERED_BUTTON: Color = Color::srgba(0.0, 1.0, 1.0, 0.12);
pub const PRESSED_BUTTON: Color = Color::srgba(0.0, 1.0, 1.0, 0.3);

pub const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.4);
pub const PANEL_BORDER: Color = Color::srgba(0.0, 1.0, 1.0, 0.3);
pub const CYAN: Color = Color::srgb(0.13, 0.83, 0.93);
pub const ONLINE_GREEN: Color = Color::srgb(0.29, 0.87, 0.5);
pub const WARNING_YELLOW: Color = Color::srgb(0.98, 0.8, 0.08);
pub const MUTED_TEXT: Color = Color::srgb(0.61, 0.64, 0.69);

/// Hover/press colours for a `Button`; applied by [`style_buttons`].
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonPalette {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub border: Color,
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self {
            normal: NORMAL_BUTTON,
            hovered: HOVERED_BUTTON,
            pressed: PRESSED_BUTTON,
            border: PANEL_BORDER,
        }
    }
}

impl ButtonPalette {
    pub fn with_border(border: Color) -> Self {
        Self {
            border,
            ..default()
        }
    }
}

/// Handles button interactions (hover, press) for every styled button.
pub fn style_buttons(
    mut buttons: Query<
        (
            &Interaction,
            &ButtonPalette,
            &mut BackgroundColor,
            &mut BorderColor,
        ),
        Changed<Interaction>,
    >,
) {
    for (interaction, palette, mut color, mut border_color) in &mut buttons {
        match *interaction {
            Interaction::Pressed => {
                *color = palette.pressed.into();
                *border_color = BorderColor::all(palette.border);
            }
            Interaction::Hovered => {
                *color = palette.hovered.into();
                *border_color = BorderColor::all(palette.border);
            }
            Interaction::None => {
                *color = palette.normal.into();
                *border_color = BorderColor::all(palette.border.with_alpha(0.5));
            }
        }
    }
}

/// Layout shared by overlay panels; override fields with `..panel_node()`.
pub fn panel_node() -> Node {
    Node {
        border: UiRect::all(Val::Px(1.0)),
        padding: UiRect::all(Val::Px(16.0)),
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(6.0),
        ..default()
    }
}

/// Translucent bordered box shared by every overlay panel.
pub fn panel(node: Node) -> impl Bundle {
    (
        node,
        BackgroundColor(PANEL_BACKGROUND),
        BorderColor::all(PANEL_BORDER),
        BorderRadius::all(Val::Px(8.0)),
    )
}

/// Monospace-sized label.
pub fn label(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

/// Assigns only when the value differs, so unchanged text is not re-laid out.
pub fn set_text(text: &mut Mut<Text>, value: &str) {
    if text.0 != value {
        text.0 = value.to_string();
    }
}

/// `Display::Flex` when `shown`, `Display::None` otherwise; reports changes.
pub fn set_shown(node: &mut Mut<Node>, shown: bool) -> bool {
    let display = if shown { Display::Flex } else { Display::None };
    if node.display != display {
        node.display = display;
        return true;
    }
    false
}
