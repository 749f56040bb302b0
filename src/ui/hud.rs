//! UI domain: health bar, damage flash overlay and banner text nodes.

use bevy::prelude::*;

use crate::feedback::HealthSlider;

pub(crate) const HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const HEALTHBAR_PADDING: f32 = 16.0;

/// Marker for the fill element inside a health bar
#[derive(Component)]
pub struct HealthBarFill;

/// Entities spawned by `spawn_hud`, handed to the mechanics as their
/// presentation targets.
#[derive(Debug, Clone, Copy)]
pub struct Hud {
    pub health_slider: Entity,
    pub flash_overlay: Entity,
    pub game_over_text: Entity,
    pub level_complete_text: Entity,
}

pub fn spawn_hud(commands: &mut Commands) -> Hud {
    // Drawn first so the banners sit on top of it
    let flash_overlay = commands
        .spawn((
            Name::new("Damage Flash"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::NONE),
            ZIndex(10),
        ))
        .id();

    let health_slider = commands
        .spawn((
            Name::new("Health Bar"),
            HealthSlider::new(1.0),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HEALTHBAR_PADDING),
                top: Val::Px(HEALTHBAR_PADDING),
                width: Val::Px(HEALTHBAR_WIDTH),
                height: Val::Px(HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
            ZIndex(20),
        ))
        .with_children(|parent| {
            parent.spawn((
                HealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        })
        .id();

    let game_over_text = spawn_banner(
        commands,
        "Game Over Text",
        Color::srgb(0.8, 0.15, 0.15),
    );
    let level_complete_text = spawn_banner(
        commands,
        "Level Complete Text",
        Color::srgb(0.95, 0.85, 0.3),
    );

    Hud {
        health_slider,
        flash_overlay,
        game_over_text,
        level_complete_text,
    }
}

/// Centered, initially hidden text node filled in by a `ShowBanner`.
fn spawn_banner(commands: &mut Commands, name: &'static str, color: Color) -> Entity {
    let mut text = Entity::PLACEHOLDER;
    commands
        .spawn((
            Name::new(name),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ZIndex(100),
        ))
        .with_children(|parent| {
            text = parent
                .spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 72.0,
                        ..default()
                    },
                    TextColor(color),
                    Visibility::Hidden,
                ))
                .id();
        });
    text
}

/// Green above half, sliding through yellow to red as health drops.
pub(crate) fn health_bar_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        let t = (fraction - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = fraction * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn update_health_bars(
    sliders: Query<(&HealthSlider, &Children), Changed<HealthSlider>>,
    mut fills: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
) {
    for (slider, children) in &sliders {
        let fraction = slider.fraction();
        for child in children.iter() {
            let Ok((mut node, mut bg_color)) = fills.get_mut(child) else {
                continue;
            };
            node.width = Val::Percent(fraction * 100.0);
            bg_color.0 = health_bar_color(fraction);
        }
    }
}
