// SPDX-License-Identifier: MPL-2.0
//! Card stack rendering.
//!
//! Cards are drawn bottom-to-top; only the top card is wrapped in a
//! `mouse_area`, since pointer motion and release are routed globally by the
//! application subscription.

use crate::config;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gate;
use crate::ui::state::{CardDescriptor, CardKind};
use iced::widget::{button, container, mouse_area, text_input, Column, Row, Space, Stack, Text};
use iced::{alignment, mouse, Background, Border, Color, Element, Length, Padding, Shadow, Vector};

use super::component::{Message, State};

/// Renders the deck. `zoom` scales the cards for the revealed view.
pub fn view(state: &State, zoom: f32) -> Element<'_, Message> {
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    let count = state.deck().len();
    for (index, card) in state.deck().iter().enumerate() {
        let is_top = index + 1 == count;
        let offset = if is_top {
            state.drag_offset()
        } else {
            Vector::new(0.0, 0.0)
        };

        let mut face = shell(face_content(state, card, zoom), zoom);
        if is_top {
            face = mouse_area(face)
                .interaction(if state.is_interactive() {
                    mouse::Interaction::Grab
                } else {
                    mouse::Interaction::default()
                })
                .on_press(Message::CardGrabbed)
                .into();
        }

        // Resting tilt becomes a small horizontal stagger so the stack reads
        // as hand-placed rather than perfectly aligned.
        let dx = card.base_rotation * 3.0 + offset.x;
        stack = stack.push(placed(face, dx, offset.y));
    }

    stack.into()
}

fn placed(content: Element<'_, Message>, dx: f32, dy: f32) -> Element<'_, Message> {
    // Symmetric doubled padding around a centered child shifts it by
    // (dx, dy) without absolute positioning.
    let pad = Padding {
        left: dx.max(0.0) * 2.0,
        right: (-dx).max(0.0) * 2.0,
        top: dy.max(0.0) * 2.0,
        bottom: (-dy).max(0.0) * 2.0,
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(pad)
        .into()
}

fn shell(content: Element<'_, Message>, zoom: f32) -> Element<'_, Message> {
    container(content)
        .width(Length::Fixed(sizing::CARD_WIDTH * zoom))
        .height(Length::Fixed(sizing::CARD_HEIGHT * zoom))
        .padding(spacing::MD)
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(palette::PAPER)),
            border: Border {
                color: palette::BLACK,
                width: 3.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color {
                    a: 0.25,
                    ..palette::BLACK
                },
                offset: Vector::new(5.0, 5.0),
                blur_radius: 0.0,
            },
            ..Default::default()
        })
        .into()
}

fn face_content<'a>(state: &'a State, card: &CardDescriptor, zoom: f32) -> Element<'a, Message> {
    match card.kind {
        CardKind::Omg => centered(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(title("OMG!", palette::PRIMARY_PINK, zoom))
                .push(body("You actually opened it.", zoom))
                .push(caption("(swipe for the next one)", zoom)),
        ),
        CardKind::Memory => centered(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(photo_frame(zoom))
                .push(caption("That day. You know the one.", zoom)),
        ),
        CardKind::Letter => centered(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(title("Thinking of you", palette::BLACK, zoom))
                .push(body("Some things are better on paper.", zoom))
                .push(caption("xoxo", zoom)),
        ),
        CardKind::Message(n) => centered(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(title_owned(format!("Note #{n}"), palette::BLACK, zoom))
                .push(body("A little something, just because.", zoom)),
        ),
        CardKind::Advice => centered(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(title("ADVICE", palette::BLACK, zoom))
                .push(body("Rule #1: The Wife is always right.", zoom))
                .push(body("Rule #2: See Rule #1.", zoom)),
        ),
        CardKind::LockedGift => {
            if state.gate().is_unlocked() {
                voucher(zoom)
            } else {
                pin_entry(state.gate(), zoom)
            }
        }
    }
}

fn pin_entry<'a>(gate_state: &'a gate::State, zoom: f32) -> Element<'a, Message> {
    let input = text_input("4 DIGIT PIN", gate_state.buffer())
        .on_input(|raw| Message::Gate(gate::Message::InputChanged(raw)))
        .on_submit(Message::Gate(gate::Message::Submit))
        .size(typography::BODY * zoom)
        .width(Length::Fixed(140.0 * zoom));

    let unlock = button(
        Text::new("UNLOCK")
            .size(typography::CAPTION * zoom)
            .color(palette::WHITE),
    )
    .padding([spacing::SM, spacing::MD])
    .on_press(Message::Gate(gate::Message::Submit))
    .style(|_theme: &iced::Theme, _status| button::Style {
        background: Some(Background::Color(palette::PRIMARY_PINK)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::BLACK,
            width: 2.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    });

    centered(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title("\u{1F512} LOCKED", palette::BLACK, zoom))
            .push(caption("One last thing needs a code.", zoom))
            .push(input)
            .push(unlock),
    )
}

fn voucher<'a>(zoom: f32) -> Element<'a, Message> {
    centered(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(title("GIFT VOUCHER", palette::PRIMARY_PINK, zoom))
            .push(
                Text::new(config::VOUCHER_AMOUNT)
                    .size(typography::TITLE * 1.4 * zoom)
                    .color(palette::BLACK),
            )
            .push(Space::with_height(Length::Fixed(spacing::MD)))
            .push(labeled("CODE", config::VOUCHER_CODE, zoom))
            .push(labeled("PIN", config::VOUCHER_PIN, zoom))
            .push(Space::with_height(Length::Fixed(spacing::MD)))
            .push(caption("Go get yourself something nice.", zoom)),
    )
}

fn labeled<'a>(label: &'a str, value: &'a str, zoom: f32) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(label)
                .size(typography::CAPTION * zoom)
                .color(palette::GRAY_700),
        )
        .push(
            Text::new(value)
                .size(typography::MONO_SMALL * zoom)
                .color(palette::BLACK),
        )
        .into()
}

fn photo_frame<'a>(zoom: f32) -> Element<'a, Message> {
    container(Space::new(
        Length::Fixed(140.0 * zoom),
        Length::Fixed(140.0 * zoom),
    ))
    .style(|_theme: &iced::Theme| container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_400,
            width: 2.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content.into())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn title<'a>(label: &'a str, color: Color, zoom: f32) -> Text<'a> {
    Text::new(label).size(typography::TITLE * zoom).color(color)
}

fn title_owned<'a>(label: String, color: Color, zoom: f32) -> Text<'a> {
    Text::new(label).size(typography::TITLE * zoom).color(color)
}

fn body<'a>(label: &'a str, zoom: f32) -> Text<'a> {
    Text::new(label)
        .size(typography::BODY * zoom)
        .color(palette::GRAY_700)
}

fn caption<'a>(label: &'a str, zoom: f32) -> Text<'a> {
    Text::new(label)
        .size(typography::CAPTION * zoom)
        .color(palette::GRAY_400)
}
