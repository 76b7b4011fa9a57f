use storage::models::Enduro;

use super::layout::{escape, page};
use crate::flash::Flash;

pub fn list(enduros: &[Enduro], flash: Option<&Flash>) -> String {
    let mut rows = String::new();
    for enduro in enduros {
        rows.push_str(&format!(
            r#"<tr>
<td><a href="/enduros/{id}/">{name}</a></td>
<td>{location}</td>
<td>{date}</td>
<td>{start_time}</td>
<td><a href="/enduros/{id}/edit/">edit</a>
<form method="post" action="/enduros/{id}/delete/"><button type="submit">delete</button></form></td>
</tr>
"#,
            id = enduro.id,
            name = escape(&enduro.name),
            location = escape(&enduro.location),
            date = escape(&enduro.date),
            start_time = escape(&enduro.start_time),
        ));
    }

    let body = format!(
        r#"<h2>Enduros</h2>
<table>
<tr><th>Name</th><th>Location</th><th>Date</th><th>Start</th><th></th></tr>
{rows}</table>
<p><a href="/enduros/create/">Register a new enduro</a></p>"#
    );

    page("Enduros", flash, &body)
}

pub fn detail(enduro: &Enduro, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h2>{name}</h2>
<p>{location}, {date}, first start at {start_time}</p>
<ul>
<li><a href="/enduros/{id}/competitors/">Competitors</a></li>
<li><a href="/enduros/{id}/checkpoints/">Checkpoints</a></li>
<li><a href="/enduros/{id}/categories/">Categories</a></li>
<li><a href="/enduros/{id}/listalargada/">Start list</a></li>
</ul>
<p><a href="/enduros/{id}/edit/">Edit</a> | <a href="/enduros/">All enduros</a></p>"#,
        id = enduro.id,
        name = escape(&enduro.name),
        location = escape(&enduro.location),
        date = escape(&enduro.date),
        start_time = escape(&enduro.start_time),
    );

    page(&enduro.name, flash, &body)
}

pub fn create_form() -> String {
    page(
        "New enduro",
        None,
        r#"<h2>Register enduro</h2>
<form method="post" action="/enduros/">
<p><label>Name <input name="name" required></label></p>
<p><label>Location <input name="location" required></label></p>
<p><label>Date <input name="date" type="date" required></label></p>
<p><label>Start time <input name="start_time" type="time" required></label></p>
<button type="submit">Create</button>
</form>"#,
    )
}

pub fn edit_form(enduro: &Enduro) -> String {
    let body = format!(
        r#"<h2>Edit {name}</h2>
<form method="post" action="/enduros/{id}/update/">
<p><label>Name <input name="name" value="{name}" required></label></p>
<p><label>Location <input name="location" value="{location}" required></label></p>
<p><label>Date <input name="date" type="date" value="{date}" required></label></p>
<p><label>Start time <input name="start_time" type="time" value="{start_time}" required></label></p>
<button type="submit">Save</button>
</form>"#,
        id = enduro.id,
        name = escape(&enduro.name),
        location = escape(&enduro.location),
        date = escape(&enduro.date),
        start_time = escape(&enduro.start_time),
    );

    page("Edit enduro", None, &body)
}
