use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A product as stored and exchanged over HTTP.
///
/// Missing fields deserialize to their defaults. `Product::default()` is
/// the empty placeholder returned when an update fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Product {
    /// Client-chosen identifier
    #[schema(example = "p-100")]
    pub id: String,
    #[schema(example = "Desk lamp")]
    pub name: String,
    /// Price as entered, e.g. `"300"`. A JSON number is accepted and kept
    /// in its textual form.
    #[schema(example = "300")]
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    pub purchased: bool,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        purchased: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            purchased,
        }
    }

    /// Copy the mutable fields of `changes`, keeping `self.id`.
    pub fn apply_update(&mut self, changes: Product) {
        self.name = changes.name;
        self.price = changes.price;
        self.purchased = changes.purchased;
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

/// Query string of `PUT /update`
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateQuery {
    /// Id of the product to update
    pub id: String,
}
