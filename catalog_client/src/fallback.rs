//! Sample pages served when the catalog API cannot be reached or answers
//! with something other than an envelope.

use once_cell::sync::Lazy;

use crate::{
    models::{
        Character, CharacterAttributes, Concept, ConceptAttributes, Coordinates, Entity,
        Location, LocationAttributes, Storyline, StorylineAttributes,
    },
    responses::{DEFAULT_PAGE_SIZE, Envelope, Pagination},
};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn sample<T>(entity: T, total: u32) -> Envelope<T> {
    Envelope::new(vec![entity], Pagination::new(total, 1, DEFAULT_PAGE_SIZE))
}

pub static FALLBACK_CHARACTERS: Lazy<Envelope<Character>> = Lazy::new(|| {
    sample(
        Entity {
            id: 1,
            attributes: CharacterAttributes {
                name: "Batman".into(),
                alias: "Bruce Wayne".into(),
                description: "The Dark Knight of Gotham City".into(),
                first_appearance: "Detective Comics #27".into(),
                alive: Some(true),
                role: "Hero".into(),
                creator: "Bob Kane, Bill Finger".into(),
                gender: "Male".into(),
                abilities: strings(&["Martial Arts", "Detective Skills", "Gadgets"]),
                image_url: PLACEHOLDER_IMAGE.into(),
            },
        },
        3,
    )
});

pub static FALLBACK_LOCATIONS: Lazy<Envelope<Location>> = Lazy::new(|| {
    sample(
        Entity {
            id: 1,
            attributes: LocationAttributes {
                name: "Batcave".into(),
                description: "Batman's secret headquarters beneath Wayne Manor".into(),
                coordinates: Some(Coordinates {
                    latitude: 40.7128,
                    longitude: -74.0060,
                }),
                creator: "Bob Kane, Bill Finger".into(),
                first_appearance: "Detective Comics #27".into(),
                notable_events: strings(&[
                    "First appearance of Batman",
                    "Battle with the Joker",
                    "The first Batmobile arrival",
                ]),
                related_characters: strings(&["Batman", "Robin", "Alfred Pennyworth"]),
                location_type: "Secret Headquarters".into(),
                image_url: Some(PLACEHOLDER_IMAGE.into()),
            },
        },
        3,
    )
});

pub static FALLBACK_CONCEPTS: Lazy<Envelope<Concept>> = Lazy::new(|| {
    sample(
        Entity {
            id: 1,
            attributes: ConceptAttributes {
                name: "The Batcave".into(),
                description:
                    "The Batcave is Batman's secret hideout, located beneath Wayne Manor.".into(),
                first_appearance: Some("Detective Comics #27".into()),
                creator: "Bob Kane".into(),
                related_characters: strings(&["Batman", "Robin"]),
                related_locations: strings(&["Gotham City"]),
            },
        },
        3,
    )
});

pub static FALLBACK_STORYLINES: Lazy<Envelope<Storyline>> = Lazy::new(|| {
    sample(
        Entity {
            id: 1,
            attributes: StorylineAttributes {
                name: "Hush".into(),
                description: "A mysterious figure known as Hush manipulates Batman's foes."
                    .into(),
                issues: strings(&["Batman #608–619"]),
                publication_date: "2002-10-01".into(),
                writer: "Jeph Loeb".into(),
                artist: "Jim Lee".into(),
                characters: strings(&["Batman", "Catwoman", "Hush"]),
                locations: strings(&["Gotham City", "Batcave"]),
                image_url: PLACEHOLDER_IMAGE.into(),
            },
        },
        1,
    )
});
