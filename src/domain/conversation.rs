// src/domain/conversation.rs

use base64::Engine;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::errors::StoreError;
use crate::geos::BR_STATES;

pub const DEFAULT_ID_BYTES: usize = 12;

/// Declares a closed set of values that travel as their display label
/// (form fields, JSON, SQL columns all use the label).
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.label() == label)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum!(
    /// What the contact was about.
    Category {
        Purchase => "Compra",
        Sale => "Venda",
        Financing => "Financiamento",
        Consortium => "Consórcio",
        Appraisal => "Avaliação",
        QuickQuestion => "Pergunta rápida",
        Support => "Suporte",
        Other => "Outro",
    }
);

labelled_enum!(
    /// Pipeline stages, declared in pipeline order.
    Status {
        Started => "Iniciada",
        InProgress => "Em andamento",
        AwaitingReply => "Aguardando resposta",
        Completed => "Concluída",
        Lost => "Perdida",
    }
);

labelled_enum!(
    /// Channel the contact came through.
    Source {
        WhatsApp => "WhatsApp",
        Instagram => "Instagram",
        Site => "Site",
        Referral => "Indicação",
    }
);

/// One of the 27 state codes in `geos::BR_STATES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Region(&'static str);

// Equivalent to `#[serde(try_from = "String")]`; written by hand because the
// derive would infer a `'de: 'static` bound from the `&'static str` field.
impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Region::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl Region {
    pub fn all() -> impl Iterator<Item = Region> {
        BR_STATES.iter().map(|(code, _)| Region(code))
    }

    /// Case-insensitive lookup of a state code ("sp" and "SP" both resolve).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        BR_STATES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(c, _)| Region(c))
    }

    pub fn code(self) -> &'static str {
        self.0
    }

    pub fn name(self) -> &'static str {
        BR_STATES
            .iter()
            .find(|(c, _)| *c == self.0)
            .map(|(_, name)| *name)
            .unwrap_or(self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl TryFrom<String> for Region {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Region::from_code(&value).ok_or_else(|| format!("unknown region code {value:?}"))
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0.to_string()
    }
}

/// A tracked conversation/lead.
///
/// The legacy browser-storage shape (Portuguese keys, numeric ids) is accepted
/// on read so an old blob can be used as the snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "telefone")]
    pub phone: String,
    #[serde(alias = "categoria")]
    pub category: Category,
    #[serde(alias = "estado")]
    pub region: Region,
    #[serde(alias = "origem")]
    pub source: Source,
    #[serde(default, alias = "descricao")]
    pub description: String,
    #[serde(alias = "data")]
    pub conversation_date: NaiveDate,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConversationRecord {
    /// Phone reduced to digits, as used by wa.me links.
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.phone_digits())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Text(s) => Ok(s),
        RawId::Number(n) => Ok(n.to_string()),
    }
}

/// `updated_at` for a mutation at `now`: strictly after `previous` even when
/// the clock has not moved (or moved backwards).
pub fn next_update_stamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

/// Generate a fresh record id from the OS RNG.
pub fn new_record_id() -> String {
    let mut rng = OsRng;
    generate_id(&mut rng, DEFAULT_ID_BYTES)
}

/// URL-safe base64 (no padding) of `nbytes` random bytes.
pub fn generate_id<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// What the add form submits. Enum fields are `None` when the submitted
/// value was missing or not a member of the fixed domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordInput {
    pub name: String,
    pub phone: String,
    pub category: Option<Category>,
    pub region: Option<Region>,
    pub source: Option<Source>,
    pub description: String,
    pub conversation_date: Option<NaiveDate>,
    pub status: Option<Status>,
}

impl RecordInput {
    /// The form's initial values.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            category: Some(Category::Purchase),
            region: Region::from_code("SP"),
            source: Some(Source::WhatsApp),
            description: String::new(),
            conversation_date: Some(today),
            status: Some(Status::Started),
        }
    }

    /// Build a draft from decoded form fields. Unknown or empty values become `None`.
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).map(String::as_str).unwrap_or("");

        Self {
            name: get("name").to_string(),
            phone: get("phone").to_string(),
            category: Category::from_label(get("category")),
            region: Region::from_code(get("region")),
            source: Source::from_label(get("source")),
            description: get("description").to_string(),
            conversation_date: NaiveDate::parse_from_str(get("conversation_date").trim(), "%Y-%m-%d")
                .ok(),
            status: Status::from_label(get("status")),
        }
    }

    /// Check required fields and produce the record. Text fields are kept verbatim.
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> Result<ConversationRecord, StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation { field: "name" });
        }
        if self.phone.trim().is_empty() {
            return Err(StoreError::Validation { field: "phone" });
        }
        let category = self.category.ok_or(StoreError::Validation { field: "category" })?;
        let region = self.region.ok_or(StoreError::Validation { field: "region" })?;
        let source = self.source.ok_or(StoreError::Validation { field: "source" })?;
        let conversation_date = self
            .conversation_date
            .ok_or(StoreError::Validation { field: "conversation_date" })?;
        let status = self.status.ok_or(StoreError::Validation { field: "status" })?;

        Ok(ConversationRecord {
            id,
            name: self.name,
            phone: self.phone,
            category,
            region,
            source,
            description: self.description,
            conversation_date,
            status,
            created_at: now,
            updated_at: now,
        })
    }
}
