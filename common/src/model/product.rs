use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the product grid.
///
/// Records are produced by the stub data service (`GET /api/products/small`)
/// and are only ever mutated through an accepted cell edit
/// (see `crate::editing`). They are never created or deleted on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    /// File name of the product picture, relative to the image host.
    pub image: String,
    /// Unit price in USD. Never negative.
    pub price: f64,
    pub category: String,
    pub quantity: u64,
    /// `INSTOCK`, `LOWSTOCK` or `OUTOFSTOCK` in the demo catalogue.
    pub inventory_status: String,
    pub rating: f64,
    /// Country code picked from the dropdown editor. The catalogue does not
    /// ship one, so it stays `None` until the user selects a value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Names every field of a [`Product`].
///
/// The grid addresses cells by field rather than by string key; the string
/// form returned by [`ProductField::as_str`] matches the JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Code,
    Name,
    Description,
    Image,
    Price,
    Category,
    Quantity,
    InventoryStatus,
    Rating,
    Country,
}

impl ProductField {
    pub const ALL: [ProductField; 11] = [
        ProductField::Id,
        ProductField::Code,
        ProductField::Name,
        ProductField::Description,
        ProductField::Image,
        ProductField::Price,
        ProductField::Category,
        ProductField::Quantity,
        ProductField::InventoryStatus,
        ProductField::Rating,
        ProductField::Country,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Code => "code",
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Image => "image",
            ProductField::Price => "price",
            ProductField::Category => "category",
            ProductField::Quantity => "quantity",
            ProductField::InventoryStatus => "inventoryStatus",
            ProductField::Rating => "rating",
            ProductField::Country => "country",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown product field '{}'", s))
    }
}

/// A typed cell value, read from or written to a [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(u64),
    Number(f64),
    /// An optional field with nothing stored (only `country` today).
    Empty,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Empty => Ok(()),
        }
    }
}

impl Product {
    /// Reads `field` as a [`FieldValue`].
    pub fn value(&self, field: ProductField) -> FieldValue {
        match field {
            ProductField::Id => FieldValue::Text(self.id.clone()),
            ProductField::Code => FieldValue::Text(self.code.clone()),
            ProductField::Name => FieldValue::Text(self.name.clone()),
            ProductField::Description => FieldValue::Text(self.description.clone()),
            ProductField::Image => FieldValue::Text(self.image.clone()),
            ProductField::Price => FieldValue::Number(self.price),
            ProductField::Category => FieldValue::Text(self.category.clone()),
            ProductField::Quantity => FieldValue::Integer(self.quantity),
            ProductField::InventoryStatus => FieldValue::Text(self.inventory_status.clone()),
            ProductField::Rating => FieldValue::Number(self.rating),
            ProductField::Country => self
                .country
                .clone()
                .map_or(FieldValue::Empty, FieldValue::Text),
        }
    }

    /// Raw text used to seed an editor for `field`.
    pub fn editor_seed(&self, field: ProductField) -> String {
        self.value(field).to_string()
    }
}
