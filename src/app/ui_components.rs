//! Reusable widget styling keyed off the active [`AppTheme`].

use crate::app::{Banner, BannerSeverity, Message};
use crate::theme::AppTheme;
use iced::widget::{
    button, container, pick_list, progress_bar, row, scrollable, slider, text, text_editor,
    text_input, toggler,
};
use iced::{Alignment, Border, Color, Element, Gradient, Length, Shadow, Vector};

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

pub fn sidebar_container(theme: &AppTheme) -> container::Style {
    let gradient = Gradient::Linear(
        iced::gradient::Linear::new(0.0)
            .add_stop(0.0, theme.bg_sidebar)
            .add_stop(
                1.0,
                Color {
                    r: (theme.bg_sidebar.r * 1.25).min(1.0),
                    g: (theme.bg_sidebar.g * 1.25).min(1.0),
                    b: (theme.bg_sidebar.b * 1.25).min(1.0),
                    ..theme.bg_sidebar
                },
            ),
    );

    container::Style {
        background: Some(gradient.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Result panel below a tool's inputs. Accent border signals "this is the
/// answer" without stealing focus from the form.
pub fn result_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_active.into()),
        border: Border {
            color: theme.accent,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn section_header_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.02,
                ..theme.fg_primary
            }
            .into(),
        ),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.accent.into()),
        text_color: theme.fg_on_accent,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.accent_hover.into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(
                Color {
                    r: (theme.accent.r * 0.95).min(1.0),
                    g: (theme.accent.g * 0.95).min(1.0),
                    b: (theme.accent.b * 0.95).min(1.0),
                    ..theme.accent
                }
                .into(),
            ),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(
                Color {
                    a: 0.5,
                    ..theme.accent
                }
                .into(),
            ),
            text_color: Color {
                a: 0.5,
                ..theme.fg_on_accent
            },
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_surface.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(theme.bg_active.into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(
                Color {
                    a: 0.5,
                    ..theme.bg_surface
                }
                .into(),
            ),
            text_color: theme.fg_muted,
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

/// Home-grid and sidebar tool cards.
pub fn card_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let c = card_container(theme);
    let base = button::Style {
        background: c.background,
        text_color: theme.fg_primary,
        border: c.border,
        shadow: c.shadow,
        snap: true,
    };

    match status {
        button::Status::Hovered => button::Style {
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 3.0),
                blur_radius: 6.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..base
        },
        button::Status::Active | button::Status::Disabled => base,
    }
}

/// Variant of [`card_button`] for the currently open tool.
pub fn active_card_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_active.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.accent,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        snap: true,
    };

    match status {
        button::Status::Hovered => button::Style {
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 3.0),
                blur_radius: 6.0,
            },
            ..base
        },
        _ => base,
    }
}

/// Mode/shape tab row: the selected tab.
pub fn active_tab_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_elevated.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.accent,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            ..base
        },
        _ => base,
    }
}

pub fn themed_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    match status {
        text_input::Status::Active => text_input::Style {
            background: theme.bg_elevated.into(),
            border: Border {
                color: theme.border,
                width: 1.0,
                radius: 4.0.into(),
            },
            icon: theme.fg_muted,
            placeholder: theme.fg_muted,
            value: theme.fg_primary,
            selection: theme.accent,
        },
        text_input::Status::Hovered => text_input::Style {
            background: theme.bg_hover.into(),
            border: Border {
                color: theme.border_strong,
                width: 1.0,
                radius: 4.0.into(),
            },
            icon: theme.fg_secondary,
            placeholder: theme.fg_muted,
            value: theme.fg_primary,
            selection: theme.accent,
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: theme.bg_elevated.into(),
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 4.0.into(),
            },
            icon: theme.accent,
            placeholder: theme.fg_muted,
            value: theme.fg_primary,
            selection: theme.accent,
        },
        text_input::Status::Disabled => text_input::Style {
            background: Color {
                a: 0.5,
                ..theme.bg_elevated
            }
            .into(),
            border: Border {
                color: Color {
                    a: 0.3,
                    ..theme.border
                },
                width: 1.0,
                radius: 4.0.into(),
            },
            icon: theme.fg_muted,
            placeholder: theme.fg_muted,
            value: theme.fg_muted,
            selection: theme.accent,
        },
    }
}

pub fn themed_pick_list(theme: &AppTheme, status: pick_list::Status) -> pick_list::Style {
    match status {
        pick_list::Status::Active => pick_list::Style {
            background: theme.bg_elevated.into(),
            border: Border {
                color: theme.border,
                width: 1.0,
                radius: 4.0.into(),
            },
            handle_color: theme.fg_secondary,
            placeholder_color: theme.fg_muted,
            text_color: theme.fg_primary,
        },
        pick_list::Status::Hovered => pick_list::Style {
            background: theme.bg_hover.into(),
            border: Border {
                color: theme.border_strong,
                width: 1.0,
                radius: 4.0.into(),
            },
            handle_color: theme.fg_primary,
            placeholder_color: theme.fg_muted,
            text_color: theme.fg_primary,
        },
        pick_list::Status::Opened { .. } => pick_list::Style {
            background: theme.bg_elevated.into(),
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 4.0.into(),
            },
            handle_color: theme.accent,
            placeholder_color: theme.fg_muted,
            text_color: theme.fg_primary,
        },
    }
}

pub fn themed_pick_list_menu(theme: &AppTheme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        text_color: theme.fg_primary,
        selected_background: theme.bg_hover.into(),
        selected_text_color: theme.fg_primary,
    }
}

pub fn themed_slider(theme: &AppTheme, status: slider::Status) -> slider::Style {
    let rail = slider::Rail {
        backgrounds: (theme.bg_hover.into(), theme.accent.into()),
        width: 4.0,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 2.0.into(),
        },
    };

    let handle = slider::Handle {
        shape: slider::HandleShape::Circle { radius: 8.0 },
        background: theme.accent.into(),
        border_color: theme.bg_elevated,
        border_width: 2.0,
    };

    match status {
        slider::Status::Active => slider::Style { rail, handle },
        slider::Status::Hovered => slider::Style {
            rail,
            handle: slider::Handle {
                background: theme.accent_hover.into(),
                ..handle
            },
        },
        slider::Status::Dragged => slider::Style {
            rail: slider::Rail {
                backgrounds: (theme.bg_hover.into(), theme.accent_hover.into()),
                ..rail
            },
            handle: slider::Handle {
                background: theme.accent_hover.into(),
                border_width: 3.0,
                ..handle
            },
        },
    }
}

pub fn themed_toggler(theme: &AppTheme, status: toggler::Status) -> toggler::Style {
    let base = toggler::Style {
        background: theme.bg_elevated.into(),
        background_border_width: 1.0,
        background_border_color: theme.border,
        border_radius: Some(10.0.into()),
        foreground: theme.fg_muted.into(),
        foreground_border_width: 0.0,
        foreground_border_color: Color::TRANSPARENT,
        padding_ratio: 0.5,
        text_color: Some(theme.fg_primary),
    };

    match status {
        toggler::Status::Active { is_toggled } | toggler::Status::Hovered { is_toggled }
            if is_toggled =>
        {
            toggler::Style {
                background: theme.accent.into(),
                background_border_color: theme.accent,
                foreground: theme.fg_on_accent.into(),
                ..base
            }
        }
        toggler::Status::Hovered { .. } => toggler::Style {
            background: theme.bg_hover.into(),
            background_border_color: theme.border_strong,
            ..base
        },
        toggler::Status::Disabled { .. } => toggler::Style {
            background: Color {
                a: 0.5,
                ..theme.bg_elevated
            }
            .into(),
            foreground: theme.fg_muted.into(),
            ..base
        },
        toggler::Status::Active { .. } => base,
    }
}

pub fn themed_scrollable(theme: &AppTheme, status: scrollable::Status) -> scrollable::Style {
    let auto_scroll = scrollable::AutoScroll {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        icon: theme.fg_primary,
    };

    let scroller_color = match status {
        scrollable::Status::Dragged { .. } => theme.accent,
        scrollable::Status::Hovered {
            is_horizontal_scrollbar_hovered,
            is_vertical_scrollbar_hovered,
            ..
        } if is_horizontal_scrollbar_hovered || is_vertical_scrollbar_hovered => theme.fg_secondary,
        _ => theme.fg_muted,
    };

    let rail = scrollable::Rail {
        background: Some(theme.bg_elevated.into()),
        border: Border {
            color: theme.border,
            width: 0.0,
            radius: 4.0.into(),
        },
        scroller: scrollable::Scroller {
            background: scroller_color.into(),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll,
    }
}

/// Multi-line editor used by the word counter.
pub fn themed_text_editor(theme: &AppTheme, status: text_editor::Status) -> text_editor::Style {
    let border = match status {
        text_editor::Status::Focused { .. } => Border {
            color: theme.accent,
            width: 2.0,
            radius: 4.0.into(),
        },
        text_editor::Status::Hovered => Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 4.0.into(),
        },
        _ => Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
    };

    text_editor::Style {
        background: theme.bg_elevated.into(),
        border,
        placeholder: theme.fg_muted,
        value: theme.fg_primary,
        selection: theme.accent,
    }
}

/// Proportional split bar (principal vs. interest in the EMI tool).
pub fn themed_progress_bar(theme: &AppTheme) -> progress_bar::Style {
    progress_bar::Style {
        background: theme.bg_hover.into(),
        bar: theme.accent.into(),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
    }
}

/// One floating notification. Severity picks the accent stripe; the close
/// button dismisses by index.
pub fn notification_banner<'a>(
    banner: &'a Banner,
    theme: &AppTheme,
    index: usize,
) -> Element<'a, Message> {
    let accent = match banner.severity {
        BannerSeverity::Info => theme.info,
        BannerSeverity::Success => theme.success,
        BannerSeverity::Warning => theme.warning,
        BannerSeverity::Error => theme.danger,
    };
    let bg = theme.bg_elevated;
    let fg = theme.fg_primary;

    let content = row![
        text(&banner.message).size(13).color(fg),
        button(text("✕").size(12).color(fg))
            .on_press(Message::DismissBanner(index))
            .padding([2, 6])
            .style(move |_, _| button::Style {
                background: None,
                text_color: fg,
                ..Default::default()
            }),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .padding([10, 14])
        .max_width(420)
        .width(Length::Shrink)
        .style(move |_| container::Style {
            background: Some(bg.into()),
            border: Border {
                color: accent,
                width: 1.5,
                radius: 6.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                offset: Vector::new(0.0, 3.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
