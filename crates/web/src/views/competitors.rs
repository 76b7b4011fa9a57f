use storage::models::{Category, Competitor, CompetitorWithCategory, Enduro};
use storage::services::start_list::NO_CATEGORY;

use super::layout::{escape, page};
use crate::flash::Flash;

pub fn list(
    enduro: &Enduro,
    competitors: &[CompetitorWithCategory],
    flash: Option<&Flash>,
) -> String {
    let mut rows = String::new();
    for competitor in competitors {
        rows.push_str(&format!(
            r#"<tr>
<td>{name}</td>
<td>{plate}</td>
<td>{category}</td>
<td><a href="/enduros/{enduro_id}/competitors/{id}/edit/">edit</a></td>
</tr>
"#,
            enduro_id = enduro.id,
            id = competitor.id,
            name = escape(&competitor.name),
            plate = escape(&competitor.plate),
            category = escape(competitor.category_name.as_deref().unwrap_or(NO_CATEGORY)),
        ));
    }

    let body = format!(
        r#"<h2>Competitors of {name}</h2>
<table>
<tr><th>Name</th><th>Plate</th><th>Category</th><th></th></tr>
{rows}</table>
<p><a href="/enduros/{id}/competitors/create">Enter a competitor</a> |
<a href="/enduros/{id}/">Back</a></p>"#,
        id = enduro.id,
        name = escape(&enduro.name),
    );

    page("Competitors", flash, &body)
}

fn category_options(categories: &[Category], selected: Option<i64>) -> String {
    let mut options = String::new();
    for category in categories {
        options.push_str(&format!(
            r#"<option value="{id}"{selected}>{name}</option>
"#,
            id = category.id,
            name = escape(&category.name),
            selected = if selected == Some(category.id) {
                " selected"
            } else {
                ""
            },
        ));
    }
    options
}

pub fn create_form(enduro_id: i64, categories: &[Category]) -> String {
    let body = format!(
        r#"<h2>Enter competitor</h2>
<form method="post" action="/enduros/{enduro_id}/competitors/">
<p><label>Name <input name="name" required></label></p>
<p><label>Plate <input name="plate" required></label></p>
<p><label>Category <select name="category_id" required>
{options}</select></label></p>
<button type="submit">Create</button>
</form>"#,
        options = category_options(categories, None),
    );

    page("New competitor", None, &body)
}

pub fn edit_form(enduro_id: i64, competitor: &Competitor, categories: &[Category]) -> String {
    let body = format!(
        r#"<h2>Edit {name}</h2>
<form method="post" action="/enduros/{enduro_id}/competitors/{id}/update/">
<p><label>Name <input name="name" value="{name}" required></label></p>
<p><label>Plate <input name="plate" value="{plate}" required></label></p>
<p><label>Category <select name="category_id" required>
{options}</select></label></p>
<button type="submit">Save</button>
</form>"#,
        id = competitor.id,
        name = escape(&competitor.name),
        plate = escape(&competitor.plate),
        options = category_options(categories, Some(competitor.category_id)),
    );

    page("Edit competitor", None, &body)
}
