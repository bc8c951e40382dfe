//! HTML fragment rendering for a single profile.
//!
//! Field values are interpolated as-is. Profile authors are trusted and may
//! use inline markup in names, subtitles and list entries.

use crate::markdown::MarkdownProcessor;
use crate::models::Profile;

/// Render the page body for a profile
///
/// Layout, in order: title heading, header (portrait, subtitle, the four
/// meta rows), Titres / Domaines / Fiefs lists, biography, Liens, Galerie.
/// List sections with no entries are left out entirely.
pub fn render_profile(profile: &Profile, markdown: &MarkdownProcessor) -> String {
    let bio_html = markdown.convert(&profile.biography_md);

    let portrait_html = if profile.portrait.is_empty() {
        String::new()
    } else {
        portrait_img(&profile.portrait, &profile.name)
    };

    format!(
        r#"
<h1 class="page-title profile-title">{name}</h1>
<div class="profile-header">
  {portrait}
  <div>
    <p class="profile-subtitle">{subtitle}</p>
    <div class="profile-meta">
      <div><strong>Guilde</strong>{guild}</div>
      <div><strong>Religion</strong>{religion}</div>
      <div><strong>Membre depuis</strong>{member_since}</div>
      <div><strong>Responsabilite hors jeu</strong>{offgame_role}</div>
    </div>
  </div>
</div>
{titles}
{domains}
{fiefs}
<section class="profile-section">
  <h2>Biographie</h2>
  {bio}
</section>
{links}
{gallery}
"#,
        name = profile.name,
        portrait = portrait_html,
        subtitle = profile.subtitle,
        guild = profile.guild,
        religion = profile.religion,
        member_since = profile.member_since,
        offgame_role = profile.offgame_role,
        titles = section_list("Titres", &profile.titles),
        domains = section_list("Domaines", &profile.domains),
        fiefs = section_list("Fiefs", &profile.fiefs),
        bio = bio_html,
        links = links_section(profile),
        gallery = gallery_section(profile),
    )
}

fn portrait_img(src: &str, name: &str) -> String {
    format!(r#"<img src="{}" alt="Portrait de {}" />"#, src, name)
}

fn section_list(title: &str, values: &[String]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let mut html = format!(r#"<section class="profile-section"><h2>{}</h2><ul>"#, title);
    for value in values {
        html.push_str(&format!("<li>{}</li>", value));
    }
    html.push_str("</ul></section>");
    html
}

fn links_section(profile: &Profile) -> String {
    if profile.links.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<section class="profile-section"><h2>Liens</h2><ul>"#);
    for link in &profile.links {
        html.push_str(&format!(
            r#"<li><a href="{}">{}</a></li>"#,
            link.href(),
            link.text()
        ));
    }
    html.push_str("</ul></section>");
    html
}

fn gallery_section(profile: &Profile) -> String {
    if profile.gallery.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        r#"<section class="profile-section"><h2>Galerie</h2><div class="profile-gallery">"#,
    );
    for src in &profile.gallery {
        html.push_str(&portrait_img(src, &profile.name));
    }
    html.push_str("</div></section>");
    html
}
