use pokedex;

mod config;
mod favorites;
mod screen;
mod sprite;
mod widget;

use crate::config::Config;
use crate::pokedex::{Generation, Roster, Session};
use crate::screen::catalog;
use crate::widget::{logo, pokeball};

use iced::widget::{button, column, container, row, text};
use iced::{Center, Element, Fill, Font, Subscription, Task, Theme};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokegallery::new, Pokegallery::update, Pokegallery::view)
        .subscription(Pokegallery::subscription)
        .theme(Pokegallery::theme)
        .default_font(Font::MONOSPACE)
        .window_size((1400.0, 900.0))
        .run()
}

struct Pokegallery {
    session: Session,
    store: favorites::Store,
    screen: screen::Catalog,
}

#[derive(Debug, Clone)]
enum Message {
    Catalog(catalog::Message),
    OpenGallery,
    OpenFavorites,
}

impl Pokegallery {
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        log::info!("Storing favorites in {}", config.data_dir.display());

        let session = Session::new(&config.api_url);
        let store = favorites::Store::new(&config.data_dir);

        let (screen, task) = screen::Catalog::new(Roster::Generation(Generation::I), &store);

        (
            Self {
                session,
                store,
                screen,
            },
            task.map(Message::Catalog),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Catalog(message) => self
                .screen
                .update(message, &self.store, &self.session)
                .map(Message::Catalog),
            Message::OpenGallery => self.open(Roster::Generation(Generation::I)),
            Message::OpenFavorites => self.open(Roster::Favorites),
        }
    }

    fn open(&mut self, roster: Roster) -> Task<Message> {
        if matches!(
            (self.screen.roster(), roster),
            (Roster::Generation(_), Roster::Generation(_)) | (Roster::Favorites, Roster::Favorites)
        ) {
            return Task::none();
        }

        let (screen, task) = screen::Catalog::new(roster, &self.store);
        self.screen = screen;

        task.map(Message::Catalog)
    }

    fn view(&self) -> Element<'_, Message> {
        let current = self.screen.roster();

        let tabs = [
            (
                "Gallery",
                Message::OpenGallery,
                matches!(current, Roster::Generation(_)),
            ),
            (
                "Favorites",
                Message::OpenFavorites,
                matches!(current, Roster::Favorites),
            ),
        ]
        .into_iter()
        .map(|(label, on_click, is_active)| {
            button(text(label).size(14))
                .style(move |theme: &Theme, status| {
                    if is_active {
                        let palette = theme.extended_palette();

                        button::Style {
                            background: Some(palette.background.base.color.into()),
                            text_color: palette.background.base.text,
                            ..button::text(theme, status)
                        }
                    } else {
                        button::text(theme, status)
                    }
                })
                .padding([8, 15])
                .on_press(on_click)
                .into()
        });

        let navbar = container(
            row![pokeball(14), logo(14), row(tabs)]
                .spacing(10)
                .width(Fill)
                .align_y(Center),
        )
        .padding([0, 10])
        .style(container::dark);

        column![
            container(self.screen.view().map(Message::Catalog)).height(Fill),
            navbar
        ]
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.screen.subscription().map(Message::Catalog)
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}
