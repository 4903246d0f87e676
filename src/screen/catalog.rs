use crate::favorites::{self, Favorites};
use crate::pokedex;
use crate::pokedex::catalog::{self, Card, Favorite, Loaded};
use crate::pokedex::pokemon::{self, Summary};
use crate::pokedex::roster::Decoration;
use crate::pokedex::{Error, Generation, Roster, Search, Session};
use crate::screen::detail::{self, Overlay};
use crate::sprite::Sprite;
use crate::widget;

use iced::border;
use iced::keyboard;
use iced::task;
use iced::time::Instant;
use iced::widget::{
    button, center, column, container, grid, image, pick_list, right, row, scrollable, sensor,
    space, stack, text, text_input,
};
use iced::window;
use iced::{Center, Color, ContentFit, Element, Fill, Subscription, Task, Theme};

use function::Binary;
use std::collections::HashMap;

/// A grid of Pokémon cards drawn from a [`Roster`].
pub struct Catalog {
    roster: Roster,
    state: State,
    favorites: Favorites,
    search: String,
    sprites: HashMap<pokemon::Id, Thumbnail>,
    overlay: Overlay,
}

enum State {
    Loading { _task: Option<task::Handle> },
    Loaded {
        pokemon: pokedex::Catalog,
        visible: Search<Summary>,
    },
    Empty,
    Errored,
}

enum Thumbnail {
    Loading,
    Loaded(image::Handle),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    FavoritesLoaded(Result<Favorites, anywho::Error>),
    PokemonLoaded(Roster, Result<Loaded, Error>),
    GenerationSelected(Generation),
    SearchChanged(String),
    CardShown(pokemon::Id),
    SpriteFetched(pokemon::Id, Result<Sprite, anywho::Error>),
    Open(pokemon::Id),
    ToggleFavorite(pokemon::Id),
    FavoritesSaved(Result<Favorites, anywho::Error>),
    Overlay(detail::Message),
    EscapePressed,
    Tick(Instant),
}

impl Catalog {
    pub fn new(roster: Roster, store: &favorites::Store) -> (Self, Task<Message>) {
        (
            Self {
                roster,
                state: State::Loading { _task: None },
                favorites: Favorites::new(),
                search: String::new(),
                sprites: HashMap::new(),
                overlay: Overlay::new(),
            },
            Task::perform(store.load(), Message::FavoritesLoaded),
        )
    }

    pub fn roster(&self) -> Roster {
        self.roster
    }

    pub fn update(
        &mut self,
        message: Message,
        store: &favorites::Store,
        session: &Session,
    ) -> Task<Message> {
        match message {
            Message::FavoritesLoaded(Ok(favorites)) => {
                self.favorites = favorites;

                self.load(session)
            }
            Message::FavoritesLoaded(Err(error)) => {
                log::error!("Error loading favorites: {error}");

                match self.roster {
                    Roster::Favorites => {
                        self.state = State::Errored;

                        Task::none()
                    }
                    Roster::Generation(_) => self.load(session),
                }
            }
            Message::PokemonLoaded(roster, _) if roster != self.roster => {
                log::debug!("Ignoring Pokémon loaded for {roster:?}");

                Task::none()
            }
            Message::PokemonLoaded(_, Ok(Loaded::Pokemon(pokemon))) => {
                let visible = pokemon.search(&self.search);

                self.state = State::Loaded { pokemon, visible };

                Task::none()
            }
            Message::PokemonLoaded(_, Ok(Loaded::Empty)) => {
                self.state = State::Empty;

                Task::none()
            }
            Message::PokemonLoaded(_, Err(error)) => {
                log::error!("Error fetching Pokémon: {error}");

                self.state = State::Errored;

                Task::none()
            }
            Message::GenerationSelected(generation) => {
                let roster = Roster::Generation(generation);

                if roster == self.roster {
                    return Task::none();
                }

                self.roster = roster;

                self.load(session)
            }
            Message::SearchChanged(search) => {
                if let State::Loaded { pokemon, visible } = &mut self.state {
                    *visible = pokemon.search(&search);
                }

                self.search = search;

                Task::none()
            }
            Message::CardShown(id) => self.fetch_sprite(id, session),
            Message::SpriteFetched(id, Ok(sprite)) => {
                let _ = self.sprites.insert(
                    id,
                    Thumbnail::Loaded(image::Handle::from_rgba(
                        sprite.width,
                        sprite.height,
                        sprite.rgba,
                    )),
                );

                Task::none()
            }
            Message::SpriteFetched(id, Err(error)) => {
                log::warn!("Error fetching sprite of {id}: {error}");

                let _ = self.sprites.insert(id, Thumbnail::Errored);

                Task::none()
            }
            Message::Open(id) => Task::batch([
                self.overlay.open(id, session).map(Message::Overlay),
                self.fetch_sprite(id, session),
            ]),
            Message::ToggleFavorite(id) => match self.roster.decoration() {
                Decoration::Toggle => {
                    self.favorites.toggle(id);

                    Task::perform(store.toggle(id), Message::FavoritesSaved)
                }
                Decoration::Remove => {
                    self.favorites.remove(id);
                    self.state = State::Loading { _task: None };

                    Task::perform(store.remove(id), Message::FavoritesSaved)
                }
            },
            Message::FavoritesSaved(Ok(favorites)) => {
                log::debug!("{} favorite(s) saved", favorites.len());

                match self.roster.decoration() {
                    Decoration::Toggle => Task::none(),
                    Decoration::Remove => self.load(session),
                }
            }
            Message::FavoritesSaved(Err(error)) => {
                log::error!("Error saving favorites: {error}");

                if self.roster.decoration() == Decoration::Remove {
                    self.state = State::Errored;
                }

                Task::none()
            }
            Message::Overlay(message) => self.overlay.update(message).map(Message::Overlay),
            Message::EscapePressed => self.overlay.close().map(Message::Overlay),
            Message::Tick(now) => {
                self.overlay.tick(now);

                Task::none()
            }
        }
    }

    fn fetch_sprite(&mut self, id: pokemon::Id, session: &Session) -> Task<Message> {
        if self.sprites.contains_key(&id) {
            return Task::none();
        }

        let State::Loaded { pokemon, .. } = &self.state else {
            return Task::none();
        };

        let Some(summary) = pokemon.get(id) else {
            return Task::none();
        };

        let _ = self.sprites.insert(id, Thumbnail::Loading);

        Task::perform(
            Sprite::fetch(summary, session),
            Message::SpriteFetched.with(id),
        )
    }

    /// Fetches every Pokémon of the current [`Roster`], discarding any load in flight.
    fn load(&mut self, session: &Session) -> Task<Message> {
        let roster = self.roster;
        let favorites = self.favorites.clone();
        let session = session.clone();

        let (load, handle) = Task::perform(
            async move { catalog::load(&session, roster, &favorites).await },
            Message::PokemonLoaded.with(roster),
        )
        .abortable();

        self.state = State::Loading {
            _task: Some(handle.abort_on_drop()),
        };

        load
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = {
            let generation: Element<'_, Message> = match self.roster {
                Roster::Generation(generation) => pick_list(
                    Generation::ALL,
                    Some(generation),
                    Message::GenerationSelected,
                )
                .padding([5, 10])
                .text_size(12)
                .into(),
                Roster::Favorites => text("Your favorites").size(16).into(),
            };

            let search = text_input("Search by name or number...", &self.search)
                .on_input(Message::SearchChanged)
                .padding([5, 10])
                .size(12)
                .width(300);

            let total = match &self.state {
                State::Loaded { pokemon, visible } => {
                    text!("{} / {} Pokémon", visible.matches.len(), pokemon.len()).size(12)
                }
                _ => text("").size(12),
            };

            row![generation, space::horizontal(), total, search]
                .spacing(20)
                .height(30)
                .align_y(Center)
        };

        let content: Element<'_, Message> = match &self.state {
            State::Loading { .. } => widget::placeholder(self.roster.loading()),
            State::Errored => widget::placeholder(self.roster.failed()),
            State::Empty => widget::placeholder(self.roster.empty()),
            State::Loaded { visible, .. } if visible.is_empty() => {
                widget::placeholder(self.roster.no_results())
            }
            State::Loaded { visible, .. } => scrollable(
                grid(
                    catalog::cards(&visible.matches, self.roster.decoration(), &self.favorites)
                        .map(|card| self.card(card)),
                )
                .fluid(220)
                .height(grid::aspect_ratio(3, 4))
                .spacing(10),
            )
            .width(Fill)
            .height(Fill)
            .spacing(10)
            .into(),
        };

        let page = column![header, content].spacing(10).padding(10);

        let sprite = self.overlay.pokemon().and_then(|id| match self.sprites.get(&id) {
            Some(Thumbnail::Loaded(handle)) => Some(handle),
            _ => None,
        });

        stack![page]
            .push(self.overlay.view(sprite).map(|overlay| overlay.map(Message::Overlay)))
            .into()
    }

    fn card<'a>(&'a self, card: Card<'a>) -> Element<'a, Message> {
        let summary = card.summary;
        let color = widget::type_color(card.primary_type());

        let artwork: Element<'_, Message> = match self.sprites.get(&summary.id) {
            Some(Thumbnail::Loaded(handle)) => image(handle)
                .width(Fill)
                .height(Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            Some(Thumbnail::Errored) => center(text(&summary.name).size(14)).into(),
            _ => center(widget::pokeball(32)).into(),
        };

        let body = button(
            column![
                text(card.label).size(12),
                container(artwork).height(Fill).width(Fill),
                text(&summary.name).size(18),
                widget::types(&summary.types),
            ]
            .spacing(8)
            .align_x(Center),
        )
        .on_press(Message::Open(summary.id))
        .padding(10)
        .style(button::text);

        let (glyph, active) = match card.favorite {
            Favorite::Toggle { active } => (if active { "♥" } else { "♡" }, active),
            Favorite::Remove => ("♥", true),
        };

        let favorite = right(
            button(text(glyph).size(18).style(move |_theme: &Theme| text::Style {
                color: Some(if active {
                    Color::from_rgb8(0xE6, 0x39, 0x46)
                } else {
                    Color::WHITE
                }),
            }))
            .on_press(Message::ToggleFavorite(summary.id))
            .padding([2, 8])
            .style(|theme, status| {
                button::text(theme, status).with_background(Color::BLACK.scale_alpha(0.3))
            }),
        )
        .padding(6);

        sensor(container(stack![widget::slot(body, color), favorite]).style(|_theme| {
            container::Style::default().border(border::rounded(8))
        }))
        .on_show(move |_size| Message::CardShown(summary.id))
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let hotkeys = if self.overlay.is_open() {
            keyboard::listen().filter_map(|event| {
                use keyboard::key::{Key, Named};

                let keyboard::Event::KeyPressed { key, .. } = event else {
                    return None;
                };

                match key.as_ref() {
                    Key::Named(Named::Escape) => Some(Message::EscapePressed),
                    _ => None,
                }
            })
        } else {
            Subscription::none()
        };

        let animation = if self.overlay.is_animating() {
            window::frames().map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([hotkeys, animation])
    }
}
