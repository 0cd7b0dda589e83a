/// A rendered entity: a title followed by the fields worth showing.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub fields: Vec<CardField>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardField {
    /// Free text without a label, e.g. a description.
    Body(String),
    Text { label: &'static str, value: String },
    List { label: &'static str, items: Vec<String> },
}

impl CardField {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Body(_) => None,
            Self::Text { label, .. } | Self::List { label, .. } => Some(*label),
        }
    }
}

impl Card {
    pub fn new(id: u32, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn body(mut self, value: &str) -> Self {
        if !value.is_empty() {
            self.fields.push(CardField::Body(value.to_string()));
        }
        self
    }

    pub fn text(self, label: &'static str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.always(label, value)
    }

    pub fn optional_text(self, label: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text(label, value),
            None => self,
        }
    }

    /// Pushes the field even when `value` is empty.
    pub fn always(mut self, label: &'static str, value: &str) -> Self {
        self.fields.push(CardField::Text {
            label,
            value: value.to_string(),
        });
        self
    }

    pub fn flag(self, label: &'static str, value: Option<bool>) -> Self {
        match value {
            Some(true) => self.always(label, "Yes"),
            Some(false) => self.always(label, "No"),
            None => self,
        }
    }

    pub fn list(self, label: &'static str, items: &[String]) -> Self {
        if items.is_empty() {
            return self;
        }
        self.push_list(label, items.to_vec())
    }

    /// Like [`Card::list`], but shows `placeholder` as the only item when
    /// `items` is empty.
    pub fn list_or(self, label: &'static str, items: &[String], placeholder: &str) -> Self {
        if items.is_empty() {
            return self.push_list(label, vec![placeholder.to_string()]);
        }
        self.push_list(label, items.to_vec())
    }

    fn push_list(mut self, label: &'static str, items: Vec<String>) -> Self {
        self.fields.push(CardField::List { label, items });
        self
    }

    pub fn field(&self, label: &str) -> Option<&CardField> {
        self.fields.iter().find(|field| field.label() == Some(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_skipped() {
        let card = Card::new(1, "Harvey Dent")
            .body("")
            .text("Alias", "")
            .optional_text("First Appearance", None)
            .flag("Alive", None)
            .list("Abilities", &[]);

        assert!(card.fields.is_empty());
    }

    #[test]
    fn flags_render_as_yes_or_no() {
        let card = Card::new(1, "Jason Todd")
            .flag("Alive", Some(false))
            .flag("Vigilante", Some(true));

        assert_eq!(
            card.field("Alive"),
            Some(&CardField::Text {
                label: "Alive",
                value: "No".to_string()
            })
        );
        assert_eq!(
            card.field("Vigilante"),
            Some(&CardField::Text {
                label: "Vigilante",
                value: "Yes".to_string()
            })
        );
    }

    #[test]
    fn list_or_falls_back_to_the_placeholder() {
        let card = Card::new(1, "Fear Toxin").list_or("Related Locations", &[], "No related locations");

        assert_eq!(
            card.field("Related Locations"),
            Some(&CardField::List {
                label: "Related Locations",
                items: vec!["No related locations".to_string()]
            })
        );
    }

    #[test]
    fn always_keeps_empty_values() {
        let card = Card::new(1, "Year One").always("Artist", "");

        assert_eq!(card.fields.len(), 1);
    }
}
