use storage::models::{Checkpoint, Enduro};
use storage::services::start_list::seconds_to_hms;

use super::layout::{escape, page};
use crate::flash::Flash;

pub fn list(enduro: &Enduro, checkpoints: &[Checkpoint], flash: Option<&Flash>) -> String {
    let mut rows = String::new();
    for checkpoint in checkpoints {
        rows.push_str(&format!(
            r#"<tr>
<td>{name}</td>
<td>{reference_time}</td>
<td><a href="/enduros/{enduro_id}/checkpoints/{id}/competitors/">record times</a></td>
</tr>
"#,
            enduro_id = enduro.id,
            id = checkpoint.id,
            name = escape(&checkpoint.name),
            reference_time = seconds_to_hms(checkpoint.reference_time),
        ));
    }

    let body = format!(
        r#"<h2>Checkpoints of {name}</h2>
<table>
<tr><th>Name</th><th>Reference time</th><th></th></tr>
{rows}</table>
<p><a href="/enduros/{id}/checkpoints/create/">Add a checkpoint</a> |
<a href="/enduros/{id}/">Back</a></p>"#,
        id = enduro.id,
        name = escape(&enduro.name),
    );

    page("Checkpoints", flash, &body)
}

pub fn create_form(enduro: &Enduro) -> String {
    let body = format!(
        r#"<h2>Add checkpoint to {name}</h2>
<form method="post" action="/enduros/{id}/checkpoints/">
<p><label>Name <input name="name" required></label></p>
<p><label>Reference time (seconds) <input name="reference_time" type="number" min="0" step="any" required></label></p>
<button type="submit">Create</button>
</form>"#,
        id = enduro.id,
        name = escape(&enduro.name),
    );

    page("New checkpoint", None, &body)
}
