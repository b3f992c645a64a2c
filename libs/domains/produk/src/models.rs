use rust_decimal::Decimal;
use sea_orm::FromQueryResult;
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form clients send numbers as strings; a blank string counts as absent.
fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i32),
        Text(String),
    }

    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(n)) => Ok(Some(n)),
        Some(IntOrString::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse().map(Some).map_err(|_| {
                de::Error::invalid_value(Unexpected::Str(&text), &"an integer or numeric string")
            })
        }
    }
}

fn decimal_or_blank<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DecimalOrText {
        Decimal(Decimal),
        Text(String),
    }

    match Option::<DecimalOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(DecimalOrText::Decimal(value)) => Ok(Some(value)),
        Some(DecimalOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(DecimalOrText::Text(text)) => Err(de::Error::invalid_value(
            Unexpected::Str(&text),
            &"a number or decimal string",
        )),
    }
}

/// A product row as returned by the list endpoint, with brand and category
/// names resolved.
///
/// `nama_merk` and `nama_kategori` are null when the referenced row does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct ProductSummary {
    pub id: i32,
    pub nama_produk: String,
    pub tahun_rilis: Option<i32>,
    pub nama_merk: Option<String>,
    pub nama_kategori: Option<String>,
    /// Exact decimal, serialized as a string
    #[schema(value_type = Option<String>, example = "15000000.00")]
    pub harga: Option<Decimal>,
}

/// A single product with every stored column plus brand and category names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct ProductDetail {
    pub id: i32,
    pub nama_produk: String,
    pub tahun_rilis: Option<i32>,
    pub merk_id: Option<i32>,
    pub kategori_id: Option<i32>,
    #[schema(value_type = Option<String>, example = "15000000.00")]
    pub harga: Option<Decimal>,
    pub nama_merk: Option<String>,
    pub nama_kategori: Option<String>,
}

/// Body of `POST /`.
///
/// `nama_produk`, `merk_id` and `kategori_id` must be present and non-empty;
/// everything else is optional. Numeric fields take a JSON number or a
/// numeric string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Laptop X")]
    pub nama_produk: Option<String>,
    #[serde(default, deserialize_with = "int_or_numeric_string")]
    #[schema(example = 2024)]
    pub tahun_rilis: Option<i32>,
    #[serde(default, deserialize_with = "int_or_numeric_string")]
    #[schema(example = 1)]
    pub merk_id: Option<i32>,
    #[serde(default, deserialize_with = "int_or_numeric_string")]
    #[schema(example = 2)]
    pub kategori_id: Option<i32>,
    /// Accepts a JSON number or a decimal string
    #[serde(default, deserialize_with = "decimal_or_blank")]
    #[schema(value_type = Option<String>, example = "15000000")]
    pub harga: Option<Decimal>,
}

impl CreateProduct {
    /// Name, brand and category are present, and neither empty nor zero.
    pub fn has_required_fields(&self) -> bool {
        self.nama_produk.as_deref().is_some_and(|name| !name.is_empty())
            && self.merk_id.is_some_and(|id| id != 0)
            && self.kategori_id.is_some_and(|id| id != 0)
    }
}

/// Body of `PUT /{id}`.
///
/// All five columns are overwritten; a field left out is written as NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub nama_produk: Option<String>,
    #[serde(default, deserialize_with = "int_or_numeric_string")]
    pub tahun_rilis: Option<i32>,
    #[serde(default, deserialize_with = "int_or_numeric_string")]
    pub merk_id: Option<i32>,
    #[serde(default, deserialize_with = "int_or_numeric_string")]
    pub kategori_id: Option<i32>,
    #[serde(default, deserialize_with = "decimal_or_blank")]
    #[schema(value_type = Option<String>)]
    pub harga: Option<Decimal>,
}

/// Response of a successful create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedProduct {
    pub message: String,
    #[serde(rename = "insertedId")]
    pub inserted_id: u64,
}

/// Response of a successful update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductMessage {
    pub message: String,
}
