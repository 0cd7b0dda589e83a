use serde::{Serialize, de::DeserializeOwned};

use crate::{
    components::Card,
    fallback::{FALLBACK_CHARACTERS, FALLBACK_CONCEPTS, FALLBACK_LOCATIONS, FALLBACK_STORYLINES},
    models::{Character, Concept, Location, Storyline},
    requests::ResourceKind,
    responses::{AnyEnvelope, Envelope},
};

/// Everything the client and the grid need to know about one resource kind.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Page returned in place of a failed fetch.
    fn fallback() -> Envelope<Self>;

    fn card(&self) -> Card;

    fn erase(envelope: Envelope<Self>) -> AnyEnvelope;
}

impl Resource for Character {
    const KIND: ResourceKind = ResourceKind::Characters;

    fn fallback() -> Envelope<Self> {
        FALLBACK_CHARACTERS.clone()
    }

    fn card(&self) -> Card {
        let attributes = &self.attributes;
        Card::new(self.id, &attributes.name)
            .body(&attributes.description)
            .text("Alias", &attributes.alias)
            .text("First Appearance", &attributes.first_appearance)
            .flag("Alive", attributes.alive)
            .text("Role", &attributes.role)
            .text("Creator", &attributes.creator)
            .text("Gender", &attributes.gender)
            .list("Abilities", &attributes.abilities)
    }

    fn erase(envelope: Envelope<Self>) -> AnyEnvelope {
        AnyEnvelope::Characters(envelope)
    }
}

impl Resource for Location {
    const KIND: ResourceKind = ResourceKind::Locations;

    fn fallback() -> Envelope<Self> {
        FALLBACK_LOCATIONS.clone()
    }

    fn card(&self) -> Card {
        let attributes = &self.attributes;
        Card::new(self.id, &attributes.name)
            .body(&attributes.description)
            .text("First Appearance", &attributes.first_appearance)
            .text("Creator", &attributes.creator)
            .text("Type", &attributes.location_type)
            .list("Notable Events", &attributes.notable_events)
            .list("Related Characters", &attributes.related_characters)
    }

    fn erase(envelope: Envelope<Self>) -> AnyEnvelope {
        AnyEnvelope::Locations(envelope)
    }
}

impl Resource for Concept {
    const KIND: ResourceKind = ResourceKind::Concepts;

    fn fallback() -> Envelope<Self> {
        FALLBACK_CONCEPTS.clone()
    }

    fn card(&self) -> Card {
        let attributes = &self.attributes;
        Card::new(self.id, &attributes.name)
            .body(&attributes.description)
            .text("Creator", &attributes.creator)
            .optional_text("First appearance", attributes.first_appearance.as_deref())
            .list_or(
                "Related Characters",
                &attributes.related_characters,
                "No related characters",
            )
            .list_or(
                "Related Locations",
                &attributes.related_locations,
                "No related locations",
            )
    }

    fn erase(envelope: Envelope<Self>) -> AnyEnvelope {
        AnyEnvelope::Concepts(envelope)
    }
}

impl Resource for Storyline {
    const KIND: ResourceKind = ResourceKind::Storylines;

    fn fallback() -> Envelope<Self> {
        FALLBACK_STORYLINES.clone()
    }

    fn card(&self) -> Card {
        let attributes = &self.attributes;
        Card::new(self.id, &attributes.name)
            .text("Description", &attributes.description)
            .text("Publication date", &attributes.publication_date)
            .text("Writer", &attributes.writer)
            .list("Characters", &attributes.characters)
            .list("Locations", &attributes.locations)
            .list("Issues", &attributes.issues)
            .always("Artist", &attributes.artist)
    }

    fn erase(envelope: Envelope<Self>) -> AnyEnvelope {
        AnyEnvelope::Storylines(envelope)
    }
}
