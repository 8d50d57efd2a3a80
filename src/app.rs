// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the package seal, the
//! card deck, and the effects bus.
//!
//! Components commit their own transitions and report [`Effect`]s; this file
//! maps those effects onto the bus after the commit, so a failed or missing
//! capability can never roll back or block a transition. Raw pointer events
//! arrive through a global subscription and are fanned out to both gesture
//! components, which guard themselves against input they did not start.

use crate::config;
use crate::effects::{self, CueId, EffectsBus};
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::state::{DeckState, SealPhase};
use crate::ui::{cards, package, particles_overlay};
use iced::widget::{container, Space, Stack};
use iced::{
    alignment, event, mouse, time, window, Background, Border, Element, Length, Point,
    Subscription, Task, Theme,
};
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;

/// Root Iced application state.
pub struct App {
    package: package::State,
    cards: cards::State,
    effects: EffectsBus,
    /// Timestamp of the previous particle tick, for frame-delta integration.
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.package.phase())
            .field("effects", &self.effects)
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Package(package::Message),
    Cards(cards::Message),
    /// Raw cursor movement, fanned out to both gesture components.
    PointerMoved(Point),
    /// Raw left-button release, fanned out to both gesture components.
    PointerReleased,
    /// Periodic tick driving the particle simulation.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to an alternate `settings.toml`.
    pub config_path: Option<String>,
    /// Disables the audio cue player entirely.
    pub muted: bool,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl App {
    /// Initializes application state from persisted overrides and the
    /// launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(Path::new(path)).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };

        let tear_threshold = config
            .tear_open_threshold
            .unwrap_or(config::DEFAULT_TEAR_OPEN_THRESHOLD);
        let swipe_threshold = config
            .swipe_advance_threshold
            .unwrap_or(config::DEFAULT_SWIPE_ADVANCE_THRESHOLD);
        let reveal_delay = Duration::from_millis(
            config
                .reveal_delay_ms
                .unwrap_or(config::DEFAULT_REVEAL_DELAY_MS),
        );
        let lock_pin = config
            .lock_pin
            .map(config::sanitize_lock_pin)
            .unwrap_or_else(|| config::DEFAULT_LOCK_PIN.to_string());
        let volume =
            config::clamp_volume(config.audio_volume.unwrap_or(config::DEFAULT_AUDIO_VOLUME));

        let app = App {
            package: package::State::new(tear_threshold, reveal_delay),
            cards: cards::State::new(DeckState::authored(), swipe_threshold, lock_pin),
            effects: EffectsBus::desktop(volume, flags.muted),
            last_tick: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Unboxed")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Package(msg) => self.update_package(msg),
            Message::Cards(msg) => {
                let effect = self.cards.update(msg);
                self.apply_cards_effect(effect);
                Task::none()
            }
            Message::PointerMoved(position) => {
                let task = self.update_package(package::Message::PointerMoved(position));
                let effect = self.cards.update(cards::Message::PointerMoved(position));
                self.apply_cards_effect(effect);
                task
            }
            Message::PointerReleased => {
                let task = self.update_package(package::Message::PullReleased);
                let effect = self.cards.update(cards::Message::CardReleased);
                self.apply_cards_effect(effect);
                task
            }
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|prev| now.duration_since(prev).as_secs_f32())
                    .unwrap_or(1.0 / 60.0)
                    .min(0.1);
                self.effects.tick(dt);
                self.last_tick = if self.effects.particles().is_active() {
                    Some(now)
                } else {
                    None
                };
                Task::none()
            }
        }
    }

    fn update_package(&mut self, msg: package::Message) -> Task<Message> {
        let (effect, task) = self.package.update(msg);
        self.apply_package_effect(effect);
        task.map(Message::Package)
    }

    /// Dispatches package effects after the transition has committed.
    fn apply_package_effect(&mut self, effect: package::Effect) {
        match effect {
            package::Effect::None | package::Effect::Revealed => {}
            package::Effect::TearStarted => self.effects.play_audio_cue(CueId::TearStrip),
            package::Effect::TearTick => self.effects.haptic_pulse(config::HAPTIC_TICK_PATTERN),
            package::Effect::Opened => {
                self.effects.haptic_pulse(config::OPEN_HAPTIC_PATTERN);
                self.effects.burst_particles(&effects::open_burst());
                self.cards.set_interactive(true);
            }
        }
    }

    fn apply_cards_effect(&mut self, effect: cards::Effect) {
        match effect {
            cards::Effect::None | cards::Effect::Advanced => {}
            cards::Effect::Unlocked => self.effects.burst_particles(&effects::unlock_burst()),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Pointer motion and release are routed globally so drags keep
        // tracking even when the cursor leaves the widget that started them.
        let pointer = event::listen_with(|event, _status, _window| match event {
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::PointerReleased)
            }
            _ => None,
        });

        let particle_ticks = if self.effects.particles().is_active() {
            time::every(Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([pointer, particle_ticks])
    }

    fn view(&self) -> Element<'_, Message> {
        let scene: Element<'_, Message> = match self.package.phase() {
            SealPhase::Closed | SealPhase::Tearing => {
                centered(package::view::view(&self.package).map(Message::Package))
            }
            SealPhase::Open => {
                // The torn box stays visible behind the deck until the
                // reveal delay elapses.
                Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(centered(open_box()))
                    .push(cards::view::view(&self.cards, 1.0).map(Message::Cards))
                    .into()
            }
            SealPhase::Revealed => {
                cards::view::view(&self.cards, sizing::REVEAL_ZOOM).map(Message::Cards)
            }
        };

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(scene);
        if self.effects.particles().is_active() {
            layers = layers.push(particles_overlay::view(self.effects.particles()));
        }

        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(palette::PAPER)),
                ..Default::default()
            })
            .into()
    }
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Empty torn-open box drawn behind the deck during the reveal delay.
fn open_box<'a>() -> Element<'a, Message> {
    container(Space::new(
        Length::Fixed(sizing::BOX_WIDTH),
        Length::Fixed(sizing::BOX_HEIGHT),
    ))
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::CARDBOARD_SHADOW)),
        border: Border {
            color: palette::BLACK,
            width: 3.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    })
    .into()
}
