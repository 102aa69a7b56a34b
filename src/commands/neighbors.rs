//! `borderpath neighbors` command - countries sharing a border

use crate::commands::dispatch::CommandContext;
use crate::commands::path::display_name;
use crate::output_by_format;
use borderpath_core::dataset::CountryId;
use borderpath_core::error::Result;
use borderpath_core::records::{format_country_record, format_edge_record, format_header};

/// Execute the neighbors command
pub fn execute(ctx: &CommandContext, country: &str) -> Result<()> {
    let finder = ctx.finder()?;
    let language = ctx.language();
    let dataset = finder.dataset();

    let id = dataset.resolve(country, language)?;
    let neighbors = finder.neighbors(id.as_str())?;
    let name = |id: &CountryId| display_name(dataset, id.as_str(), language);

    output_by_format!(ctx.cli.format,
        json => {
            let entries: Vec<_> = neighbors
                .iter()
                .map(|n| serde_json::json!({ "id": n, "name": name(n) }))
                .collect();
            let output = serde_json::json!({
                "id": id,
                "name": name(&id),
                "neighbors": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if neighbors.is_empty() {
                if !ctx.cli.quiet {
                    println!("{} ({}) has no land borders", name(&id), id);
                }
            } else {
                for n in neighbors {
                    println!("{}\t{}", n, name(n));
                }
            }
            Ok(())
        },
        records => {
            println!(
                "{}",
                format_header(
                    "neighbors",
                    &[("id", id.to_string()), ("count", neighbors.len().to_string())]
                )
            );
            println!("{}", format_country_record(&id, &name(&id)));
            for n in neighbors {
                println!("{}", format_edge_record(&id, n));
            }
            Ok(())
        }
    )
}
