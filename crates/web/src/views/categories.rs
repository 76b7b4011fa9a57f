use storage::models::{Category, Enduro};

use super::layout::{escape, page};
use crate::flash::Flash;

pub fn list(enduro_id: i64, categories: &[Category], flash: Option<&Flash>) -> String {
    let mut rows = String::new();
    for category in categories {
        rows.push_str(&format!(
            r#"<tr>
<td>{name}</td>
<td><a href="/enduros/{enduro_id}/categories/{id}/edit/">edit</a>
<form method="post" action="/enduros/{enduro_id}/categories/{id}/delete/"><button type="submit">delete</button></form></td>
</tr>
"#,
            id = category.id,
            name = escape(&category.name),
        ));
    }

    let body = format!(
        r#"<h2>Categories</h2>
<table>
<tr><th>Name</th><th></th></tr>
{rows}</table>
<p><a href="/enduros/{enduro_id}/category/create">Add a category</a> |
<a href="/enduros/{enduro_id}/">Back</a></p>"#
    );

    page("Categories", flash, &body)
}

pub fn create_form(enduro: &Enduro) -> String {
    let body = format!(
        r#"<h2>Add category to {name}</h2>
<form method="post" action="/enduros/{id}/category/create">
<p><label>Name <input name="name" required></label></p>
<button type="submit">Create</button>
</form>"#,
        id = enduro.id,
        name = escape(&enduro.name),
    );

    page("New category", None, &body)
}

pub fn edit_form(enduro_id: i64, category: &Category) -> String {
    let body = format!(
        r#"<h2>Edit {name}</h2>
<form method="post" action="/enduros/{enduro_id}/categories/{id}/update/">
<p><label>Name <input name="name" value="{name}" required></label></p>
<button type="submit">Save</button>
</form>"#,
        id = category.id,
        name = escape(&category.name),
    );

    page("Edit category", None, &body)
}
