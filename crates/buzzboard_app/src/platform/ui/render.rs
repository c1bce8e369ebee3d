use buzzboard_core::AppViewModel;

/// Renders the view model into terminal lines. Pure so the shape of the
/// screen can be asserted in tests.
pub fn render(view: &AppViewModel, updated_at: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() * 2 + 3);

    lines.push(format!(
        "== Buzzboard | {} | {} headlines | updated {} ==",
        view.category,
        view.rows.len(),
        updated_at
    ));

    for (i, row) in view.rows.iter().enumerate() {
        let image_marker = if row.image_url.is_some() { "[img] " } else { "" };
        let link_marker = if row.has_link { "" } else { " (no link)" };
        lines.push(format!(
            "{:>3}. {}{}{}",
            i + 1,
            image_marker,
            row.title,
            link_marker
        ));
        lines.push(format!("     {}", row.summary));
    }

    if view.is_loading {
        lines.push("Loading...".to_string());
    } else if view.can_load_more {
        lines.push("-- type 'more' for older headlines --".to_string());
    } else {
        lines.push("-- end of headlines --".to_string());
    }

    lines
}
