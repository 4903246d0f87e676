use crate::pokedex::pokemon;

use iced::border;
use iced::widget::{canvas, container, row, text};
use iced::{Color, Element, Pixels, Theme};

pub fn logo<'a, Message>(size: impl Into<Pixels>) -> Element<'a, Message> {
    text("Pokégallery").size(size).into()
}

pub fn pokeball<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    use iced::mouse;
    use iced::{Point, Rectangle, Renderer, Size};

    struct Pokeball;

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const LINE: f32 = 30.0;

                let palette = theme.palette();

                let center = Point::new(RADIUS, RADIUS);
                let outer_circle = canvas::Path::circle(center, RADIUS);
                let inner_circle = canvas::Path::circle(center, RADIUS / 2.0);
                let button = canvas::Path::circle(center, RADIUS / 4.0);

                let line = Rectangle::new(
                    Point::new(0.0, RADIUS - LINE / 2.0),
                    Size::new(2.0 * RADIUS, LINE),
                );

                frame.scale((bounds.width - 0.5) / (2.0 * RADIUS));

                frame.fill(&outer_circle, palette.danger);
                frame.fill(&inner_circle, palette.background);
                frame.fill_rectangle(line.position(), line.size(), palette.background);
                frame.fill(&button, palette.text);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball).width(size).height(size).into()
}

/// The theme color of a Pokémon type.
pub fn type_color(type_: Option<&pokemon::Type>) -> Color {
    let Some(type_) = type_ else {
        return Color::from_rgb8(0x68, 0x68, 0x68);
    };

    match type_.as_str() {
        "normal" => Color::from_rgb8(0xA8, 0xA7, 0x7A),
        "fire" => Color::from_rgb8(0xEE, 0x81, 0x30),
        "water" => Color::from_rgb8(0x63, 0x90, 0xF0),
        "electric" => Color::from_rgb8(0xF7, 0xD0, 0x2C),
        "grass" => Color::from_rgb8(0x7A, 0xC7, 0x4C),
        "ice" => Color::from_rgb8(0x96, 0xD9, 0xD6),
        "fighting" => Color::from_rgb8(0xC2, 0x2E, 0x28),
        "poison" => Color::from_rgb8(0xA3, 0x3E, 0xA1),
        "ground" => Color::from_rgb8(0xE2, 0xBF, 0x65),
        "flying" => Color::from_rgb8(0xA9, 0x8F, 0xF3),
        "psychic" => Color::from_rgb8(0xF9, 0x55, 0x87),
        "bug" => Color::from_rgb8(0xA6, 0xB9, 0x1A),
        "rock" => Color::from_rgb8(0xB6, 0xA1, 0x36),
        "ghost" => Color::from_rgb8(0x73, 0x57, 0x97),
        "dragon" => Color::from_rgb8(0x6F, 0x35, 0xFC),
        "dark" => Color::from_rgb8(0x70, 0x57, 0x46),
        "steel" => Color::from_rgb8(0xB7, 0xB7, 0xCE),
        "fairy" => Color::from_rgb8(0xD6, 0x85, 0xAD),
        _ => Color::from_rgb8(0x68, 0x68, 0x68),
    }
}

pub fn types<'a, Message: 'a>(types: &'a [pokemon::Type]) -> Element<'a, Message> {
    row(types.iter().map(|type_| {
        let color = type_color(Some(type_));

        container(text(type_.as_str()).size(10))
            .padding([2, 8])
            .style(move |_theme| {
                container::Style::default()
                    .background(color)
                    .border(border::rounded(8))
            })
            .into()
    }))
    .spacing(5)
    .into()
}

/// A boxed message centered in the available space.
pub fn placeholder<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    iced::widget::center(
        container(text(message))
            .padding(10)
            .style(container::bordered_box),
    )
    .into()
}

pub fn slot<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    color: Color,
) -> Element<'a, Message> {
    container(content)
        .style(move |theme: &Theme| {
            container::dark(theme)
                .background(color.scale_alpha(0.35))
                .border(border::rounded(8))
        })
        .into()
}
