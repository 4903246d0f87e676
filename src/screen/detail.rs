use crate::pokedex::pokemon::{self, Detail, Stat};
use crate::pokedex::{Error, Session};
use crate::widget;

use iced::animation;
use iced::border;
use iced::task;
use iced::time::{Instant, milliseconds};
use iced::widget::{
    button, center, center_x, column, container, image, mouse_area, opaque,
    right, row, scrollable, space, stack, text,
};
use iced::{Animation, Center, Color, ContentFit, Element, Fill, Length, Task, Theme};

use function::Binary;
use tokio::time;

/// How long the overlay takes to fade out before its content is cleared.
const TRANSITION: u64 = 300;

pub struct Overlay {
    state: State,
    fade: Animation<bool>,
    now: Instant,
}

enum State {
    Closed,
    Open {
        content: Content,
        task: Option<task::Handle>,
    },
    Closing {
        _clear: task::Handle,
    },
}

enum Content {
    Loading(pokemon::Id),
    Populated(Detail),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(pokemon::Id, Result<Detail, Error>),
    Close,
    Cleared,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            state: State::Closed,
            fade: Animation::new(false),
            now: Instant::now(),
        }
    }

    /// Shows the overlay and starts fetching the [`Detail`] of a Pokémon.
    ///
    /// Any fetch still in flight is aborted, so only the latest one is ever shown.
    pub fn open(&mut self, id: pokemon::Id, session: &Session) -> Task<Message> {
        let session = session.clone();

        let (fetch, handle) = Task::perform(
            async move { pokemon::fetch_detail(&session, id).await },
            Message::Loaded.with(id),
        )
        .abortable();

        self.state = State::Open {
            content: Content::Loading(id),
            task: Some(handle.abort_on_drop()),
        };

        self.fade = Animation::new(false)
            .easing(animation::Easing::EaseInOut)
            .quick()
            .go(true, Instant::now());

        fetch
    }

    pub fn close(&mut self) -> Task<Message> {
        let State::Open { .. } = self.state else {
            return Task::none();
        };

        let (clear, handle) = Task::perform(
            async { time::sleep(milliseconds(TRANSITION)).await },
            |_| Message::Cleared,
        )
        .abortable();

        self.state = State::Closing {
            _clear: handle.abort_on_drop(),
        };
        self.fade.go_mut(false, Instant::now());

        clear
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(id, result) => {
                let State::Open { content, task } = &mut self.state else {
                    return Task::none();
                };

                let Content::Loading(loading) = content else {
                    return Task::none();
                };

                if *loading != id {
                    log::debug!("Ignoring stale details of {id}");

                    return Task::none();
                }

                *task = None;
                *content = match result {
                    Ok(detail) => Content::Populated(detail),
                    Err(error) => {
                        log::error!("Error fetching details: {error}");

                        Content::Errored
                    }
                };

                Task::none()
            }
            Message::Close => self.close(),
            Message::Cleared => {
                if let State::Closing { .. } = self.state {
                    self.state = State::Closed;
                }

                Task::none()
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.now = now;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_animating(self.now)
    }

    /// The Pokémon being shown, if any.
    pub fn pokemon(&self) -> Option<pokemon::Id> {
        match &self.state {
            State::Open {
                content: Content::Loading(id),
                ..
            } => Some(*id),
            State::Open {
                content: Content::Populated(detail),
                ..
            } => Some(detail.id),
            _ => None,
        }
    }

    pub fn view<'a>(&'a self, sprite: Option<&'a image::Handle>) -> Option<Element<'a, Message>> {
        let opacity = self.fade.interpolate(0.0, 1.0, self.now);

        let panel: Option<Element<'a, Message>> = match &self.state {
            State::Closed => return None,
            State::Closing { .. } => None,
            State::Open { content, .. } => Some(match content {
                Content::Loading(_) => widget::placeholder("Loading details..."),
                Content::Populated(detail) => details(detail, sprite),
                Content::Errored => widget::placeholder("Failed to load details."),
            }),
        };

        let backdrop = mouse_area(
            container(space::horizontal())
                .width(Fill)
                .height(Fill)
                .style(move |_theme| {
                    container::Style::default().background(Color::BLACK.scale_alpha(0.8 * opacity))
                }),
        )
        .on_press(Message::Close);

        let panel = panel.map(|panel| {
            center(opaque(
                container(column![
                    right(
                        button(text("×").size(24))
                            .on_press(Message::Close)
                            .style(button::text)
                    ),
                    panel
                ])
                .max_width(560)
                .max_height(820)
                .style(|theme| container::dark(theme).border(border::rounded(12))),
            ))
            .padding(40)
        });

        Some(opaque(stack![backdrop].push(panel)).into())
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

fn details<'a>(detail: &'a Detail, sprite: Option<&'a image::Handle>) -> Element<'a, Message> {
    let color = widget::type_color(detail.primary_type());

    let header = container(center_x(match sprite {
        Some(handle) => Element::from(
            image(handle)
                .width(200)
                .height(200)
                .content_fit(ContentFit::Contain),
        ),
        None => widget::pokeball(120),
    }))
    .padding(20)
    .width(Fill)
    .style(move |_theme| {
        container::Style::default()
            .background(color)
            .border(border::rounded(12))
    });

    let title = column![
        row![
            text(&detail.name).size(28),
            text(detail.id.to_string()).size(18).style(muted),
        ]
        .spacing(10)
        .align_y(Center),
        widget::types(&detail.types),
    ]
    .spacing(10)
    .align_x(Center);

    let about = {
        let item = |label: &'a str, value: String| {
            column![text(label).size(12).style(muted), text(value)].spacing(4)
        };

        column![
            text("About").size(18),
            row![
                item("Height", detail.height()).width(Fill),
                item("Weight", detail.weight()).width(Fill),
            ],
            item("Abilities", detail.abilities()),
        ]
        .spacing(10)
    };

    let stats = column![text("Base Stats").size(18)]
        .extend(detail.stats.iter().map(|stat| stat_row(stat, color)))
        .spacing(8);

    column![
        header,
        scrollable(column![title, about, stats].spacing(20).padding(20)).height(Fill)
    ]
    .into()
}

fn stat_row<'a>(stat: &Stat, color: Color) -> Element<'a, Message> {
    row![
        text(stat.label()).size(12).width(70),
        text(stat.base.to_string()).size(12).width(40),
        bar(stat.percent(), color),
    ]
    .spacing(10)
    .align_y(Center)
    .into()
}

fn bar<'a>(percent: f32, color: Color) -> Element<'a, Message> {
    let filled = (percent.clamp(0.0, 100.0) * 10.0).round() as u16;

    let segments = [(filled, color), (1000 - filled, Color::BLACK.scale_alpha(0.3))]
        .into_iter()
        .filter(|(portion, _)| *portion > 0)
        .map(|(portion, color)| {
            container(space::horizontal())
                .width(Length::FillPortion(portion))
                .height(8)
                .style(move |_theme| {
                    container::Style::default()
                        .background(color)
                        .border(border::rounded(4))
                })
                .into()
        });

    row(segments).width(Fill).height(8).into()
}

fn muted(theme: &Theme) -> text::Style {
    let palette = theme.extended_palette();

    text::Style {
        color: Some(palette.background.strong.color),
    }
}
