use storage::models::{Checkpoint, Competitor, Enduro};

use super::layout::{escape, page};
use crate::flash::Flash;

/// Timing entry page: one submit control per competitor at this checkpoint.
pub fn entry(
    enduro: &Enduro,
    checkpoint: &Checkpoint,
    competitors: &[Competitor],
    flash: Option<&Flash>,
) -> String {
    let mut rows = String::new();
    for competitor in competitors {
        rows.push_str(&format!(
            r#"<tr>
<td>{name}</td>
<td>{plate}</td>
<td><form method="post" action="/enduros/{enduro_id}/checkpoints/{checkpoint_id}/competitors/{id}/update/">
<button type="submit">record time</button>
</form></td>
</tr>
"#,
            enduro_id = enduro.id,
            checkpoint_id = checkpoint.id,
            id = competitor.id,
            name = escape(&competitor.name),
            plate = escape(&competitor.plate),
        ));
    }

    let body = format!(
        r#"<h2>{checkpoint_name}: timing for {enduro_name}</h2>
<table>
<tr><th>Competitor</th><th>Plate</th><th></th></tr>
{rows}</table>
<p><a href="/enduros/{id}/checkpoints/">Back to checkpoints</a></p>"#,
        id = enduro.id,
        enduro_name = escape(&enduro.name),
        checkpoint_name = escape(&checkpoint.name),
    );

    page("Timing entry", flash, &body)
}
