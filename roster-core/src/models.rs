//! Profile record and metadata normalization.

use crate::slug::title_from_slug;
use serde_yaml::{Mapping, Value};

/// Metadata keys that hold a list of strings.
const LIST_FIELDS: [&str; 4] = ["titles", "domains", "fiefs", "gallery"];

/// A link from a profile's `links` list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileLink {
    pub url: Option<String>,
    pub label: Option<String>,
}

impl ProfileLink {
    /// Link target, `#` when no url was given
    pub fn href(&self) -> &str {
        self.url.as_deref().unwrap_or("#")
    }

    /// Link text: the label, else the url, else `Lien`
    pub fn text(&self) -> &str {
        self.label
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or("Lien")
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Mapping(entry) => Some(Self {
                url: optional_string(entry.get("url")),
                label: optional_string(entry.get("label")),
            }),
            Value::String(url) => Some(Self {
                url: Some(url.clone()),
                label: None,
            }),
            Value::Tagged(tagged) => Self::from_value(&tagged.value),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        let mut entry = Mapping::new();
        if let Some(url) = &self.url {
            entry.insert("url".into(), url.as_str().into());
        }
        if let Some(label) = &self.label {
            entry.insert("label".into(), label.as_str().into());
        }
        Value::Mapping(entry)
    }
}

/// A character profile, built once per source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// File name without extension; also the output directory
    pub slug: String,

    /// Display name
    pub name: String,

    pub subtitle: String,
    pub portrait: String,
    pub guild: String,
    pub religion: String,
    pub member_since: String,
    pub offgame_role: String,

    pub titles: Vec<String>,
    pub domains: Vec<String>,
    pub fiefs: Vec<String>,
    pub gallery: Vec<String>,

    pub links: Vec<ProfileLink>,

    /// Markdown biography, always newline-terminated
    pub biography_md: String,
}

impl Profile {
    /// Build a profile from loosely-typed frontmatter.
    ///
    /// This never fails: missing keys take defaults, list fields accept a
    /// single scalar, and unknown keys are ignored.
    pub fn from_metadata(slug: &str, metadata: &Mapping, biography_md: String) -> Self {
        let name = string_field(metadata, "name");
        let name = if name.is_empty() {
            title_from_slug(slug)
        } else {
            name
        };

        let mut biography_md = biography_md;
        if !biography_md.ends_with('\n') {
            biography_md.push('\n');
        }

        Self {
            slug: slug.to_string(),
            name,
            subtitle: string_field(metadata, "subtitle"),
            portrait: string_field(metadata, "portrait"),
            guild: string_field(metadata, "guild"),
            religion: string_field(metadata, "religion"),
            member_since: string_field(metadata, "member_since"),
            offgame_role: string_field(metadata, "offgame_role"),
            titles: list_field(metadata, "titles"),
            domains: list_field(metadata, "domains"),
            fiefs: list_field(metadata, "fiefs"),
            gallery: list_field(metadata, "gallery"),
            links: links_field(slug, metadata),
            biography_md,
        }
    }

    /// Metadata that normalizes back into this exact profile
    pub fn to_metadata(&self) -> Mapping {
        let mut metadata = Mapping::new();
        let scalars = [
            ("name", &self.name),
            ("subtitle", &self.subtitle),
            ("portrait", &self.portrait),
            ("guild", &self.guild),
            ("religion", &self.religion),
            ("member_since", &self.member_since),
            ("offgame_role", &self.offgame_role),
        ];
        for (key, value) in scalars {
            metadata.insert(key.into(), value.as_str().into());
        }

        let lists = [&self.titles, &self.domains, &self.fiefs, &self.gallery];
        for (key, values) in LIST_FIELDS.into_iter().zip(lists) {
            metadata.insert(key.into(), values.clone().into());
        }

        let links = self.links.iter().map(ProfileLink::to_value).collect();
        metadata.insert("links".into(), Value::Sequence(links));

        metadata
    }
}

fn string_field(metadata: &Mapping, key: &str) -> String {
    metadata.get(key).map(value_to_string).unwrap_or_default()
}

/// Coerce a list-typed field: falsy means empty, a sequence is stringified
/// and trimmed item by item, anything else becomes a single item.
fn list_field(metadata: &Mapping, key: &str) -> Vec<String> {
    let Some(value) = metadata.get(key) else {
        return Vec::new();
    };
    if is_falsy(value) {
        return Vec::new();
    }

    let items: Vec<String> = match untag(value) {
        Value::Sequence(items) => items
            .iter()
            .map(|item| value_to_string(item).trim().to_string())
            .collect(),
        other => vec![value_to_string(other).trim().to_string()],
    };

    items.into_iter().filter(|item| !item.is_empty()).collect()
}

fn links_field(slug: &str, metadata: &Mapping) -> Vec<ProfileLink> {
    let Some(value) = metadata.get("links") else {
        return Vec::new();
    };

    match untag(value) {
        Value::Null => Vec::new(),
        Value::Sequence(entries) => entries
            .iter()
            .filter_map(|entry| {
                let link = ProfileLink::from_value(entry);
                if link.is_none() {
                    tracing::warn!("{}: ignoring link entry that is not a mapping: {:?}", slug, entry);
                }
                link
            })
            .collect(),
        other => {
            tracing::warn!("{}: `links` should be a list, ignoring {:?}", slug, other);
            Vec::new()
        }
    }
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => Some(value_to_string(value)),
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn is_falsy(value: &Value) -> bool {
    match untag(value) {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(entries) => entries.is_empty(),
        Value::Tagged(_) => false,
    }
}

/// String form of an arbitrary metadata value
fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => String::from("True"),
        Value::Bool(false) => String::from("False"),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|yaml| yaml.trim_end().to_string())
            .unwrap_or_default(),
        Value::Tagged(tagged) => value_to_string(&tagged.value),
    }
}
