//! # roster-core
//!
//! Core library for the guild roster profile page builder.
//!
//! Profiles are Markdown documents with YAML frontmatter. Each one is split,
//! normalized into a [`Profile`], rendered to an HTML fragment, and injected
//! into the site's shared page template.

pub mod builder;
pub mod config;
pub mod frontmatter;
pub mod markdown;
pub mod models;
pub mod render;
pub mod slug;
pub mod template;

pub use builder::{BuildError, BuildOutcome, BuildSummary, SiteBuilder, SkippedProfile};
pub use config::Config;
pub use frontmatter::{split_frontmatter, FrontmatterError};
pub use markdown::MarkdownProcessor;
pub use models::{Profile, ProfileLink};
pub use render::render_profile;
pub use template::{PageTemplate, TemplateError};
