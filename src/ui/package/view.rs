// SPDX-License-Identifier: MPL-2.0
//! Sealed package rendering: cardboard body, shipping stickers and the
//! draggable tear strip.

use crate::config;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{container, mouse_area, Column, Row, Space, Text};
use iced::{alignment, mouse, Background, Border, Color, Element, Length, Padding, Shadow, Vector};

use super::component::{Message, State};

/// Renders the closed package with its tear strip.
pub fn view(state: &State) -> Element<'_, Message> {
    // Only leftward travel counts toward the tear; rightward drags pin the
    // strip at rest.
    let pull = (-state.tear_offset().x).max(0.0);
    let alpha = (1.0 - pull / config::TEAR_STRIP_FADE_DISTANCE).clamp(0.0, 1.0);
    let shift = pull.min(sizing::BOX_WIDTH - sizing::PULL_TAB - spacing::LG * 2.0);

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .push(stickers())
        .push(Space::with_height(Length::Fill))
        .push(tear_strip(alpha, shift))
        .push(Space::with_height(Length::Fill))
        .push(footer());

    container(content)
        .width(Length::Fixed(sizing::BOX_WIDTH))
        .height(Length::Fixed(sizing::BOX_HEIGHT))
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(palette::CARDBOARD)),
            border: Border {
                color: palette::BLACK,
                width: 3.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color {
                    a: 0.35,
                    ..palette::CARDBOARD_SHADOW
                },
                offset: Vector::new(8.0, 8.0),
                blur_radius: 0.0,
            },
            ..Default::default()
        })
        .into()
}

fn stickers<'a>() -> Element<'a, Message> {
    Row::new()
        .width(Length::Fill)
        .push(sticker("FRAGILE", palette::STICKER_RED))
        .push(Space::with_width(Length::Fill))
        .push(sticker("PRIORITY", palette::BLACK))
        .into()
}

fn sticker<'a>(label: &'a str, background: Color) -> Element<'a, Message> {
    container(
        Text::new(label)
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .padding([spacing::XS, spacing::SM])
    .style(move |_theme: &iced::Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: palette::BLACK,
            width: 2.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

fn tear_strip<'a>(alpha: f32, shift: f32) -> Element<'a, Message> {
    let tab = mouse_area(
        container(
            Text::new("\u{25C2}")
                .size(typography::TITLE)
                .color(faded(palette::WHITE, alpha)),
        )
        .center(Length::Fixed(sizing::PULL_TAB))
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(faded(palette::PRIMARY_PINK, alpha))),
            border: Border {
                color: faded(palette::BLACK, alpha),
                width: 2.0,
                radius: (sizing::PULL_TAB / 2.0).into(),
            },
            ..Default::default()
        }),
    )
    .interaction(mouse::Interaction::Grab)
    .on_press(Message::PullGrabbed);

    let strip = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::SM)
        .push(
            Text::new("TEAR HERE")
                .size(typography::CAPTION)
                .color(faded(palette::GRAY_700, alpha)),
        )
        .push(
            Text::new("- - - - - - - - - - - -")
                .size(typography::CAPTION)
                .color(faded(palette::GRAY_400, alpha)),
        )
        .push(tab);

    container(strip)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(Padding {
            top: 0.0,
            right: spacing::MD + shift,
            bottom: 0.0,
            left: spacing::MD,
        })
        .into()
}

fn footer<'a>() -> Element<'a, Message> {
    Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new("PAR AVION \u{2708}")
                .size(typography::CAPTION)
                .color(palette::GRAY_700),
        )
        .push(Space::with_width(Length::Fill))
        .push(
            Text::new("HANDLE WITH LOVE")
                .size(typography::MONO_SMALL)
                .color(palette::GRAY_400),
        )
        .into()
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
