use std::io::Write;
use std::path::Path;

use anyhow::Context;

use dietmate_core::Session;
use dietmate_core::shopping::write_shopping_list;

use crate::plan_cmds::explain;

/// Export the current plan's shopping list to `output`, or stdout.
pub fn run_shopping_list(
    session: &Session,
    header: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let items = session.shopping_list().map_err(explain)?;

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {}", path.display()))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };

    write_shopping_list(&mut writer, header, &items).context("failed to write shopping list")?;
    writer.flush()?;

    if let Some(path) = output {
        println!("Shopping list saved to {} ({} items)", path.display(), items.len());
    }

    Ok(())
}
