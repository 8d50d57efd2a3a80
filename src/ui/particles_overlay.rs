// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay that draws the live confetti field.

use crate::effects::ParticleField;
use iced::widget::canvas;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme, Vector};

/// Confetti overlay widget borrowing the effects bus particle field.
#[derive(Debug)]
pub struct ParticlesOverlay<'a> {
    field: &'a ParticleField,
}

impl<'a> ParticlesOverlay<'a> {
    #[must_use]
    pub fn new(field: &'a ParticleField) -> Self {
        Self { field }
    }
}

impl<Message> canvas::Program<Message> for ParticlesOverlay<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        for particle in self.field.iter() {
            let alpha = 1.0 - particle.progress();
            let color = Color {
                a: particle.color.a * alpha,
                ..particle.color
            };
            let center = Vector::new(
                particle.position.0 * bounds.width,
                particle.position.1 * bounds.height,
            );
            let half = particle.size / 2.0;

            frame.with_save(|frame| {
                frame.translate(center);
                frame.rotate(particle.rotation());
                let path = canvas::Path::rectangle(
                    Point::new(-half, -half),
                    Size::new(particle.size, particle.size),
                );
                frame.fill(&path, color);
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Full-window confetti layer for stacking above the scene.
pub fn view<Message: 'static>(field: &ParticleField) -> Element<'_, Message> {
    canvas::Canvas::new(ParticlesOverlay::new(field))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
