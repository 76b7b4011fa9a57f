use storage::models::Enduro;
use storage::services::start_list::StartListEntry;

use super::layout::{escape, page};

pub fn list(enduro: &Enduro, entries: &[StartListEntry]) -> String {
    let mut rows = String::new();
    for entry in entries {
        rows.push_str(&format!(
            r#"<tr><td>{name}</td><td>{category}</td><td>{start_time}</td></tr>
"#,
            name = escape(&entry.competitor_name),
            category = escape(&entry.category_name),
            start_time = escape(&entry.start_time),
        ));
    }

    let body = format!(
        r#"<h2>Start list for {name}</h2>
<table>
<tr><th>Competitor</th><th>Category</th><th>Start</th></tr>
{rows}</table>
<p><a href="/enduros/{id}/">Back</a></p>"#,
        id = enduro.id,
        name = escape(&enduro.name),
    );

    page("Start list", None, &body)
}
