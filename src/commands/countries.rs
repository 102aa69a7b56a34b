//! `borderpath countries` command - list the dataset

use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use borderpath_core::error::Result;
use borderpath_core::records::{format_country_record, format_header};

/// Execute the countries command
///
/// Only reads the dataset; adjacency is never derived here.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let language = ctx.language();

    output_by_format!(ctx.cli.format,
        json => {
            let entries: Vec<_> = dataset
                .features()
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "id": f.id,
                        "name": f.display_name(language),
                        "has_geometry": f.boundary().is_some(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        },
        human => {
            for f in dataset.features() {
                println!("{}\t{}", f.id, f.display_name(language));
            }
            if !ctx.cli.quiet {
                println!();
                println!("{} countries, names in {}", dataset.len(), language.label());
            }
            Ok(())
        },
        records => {
            println!(
                "{}",
                format_header(
                    "countries",
                    &[("count", dataset.len().to_string()), ("language", language.to_string())]
                )
            );
            for f in dataset.features() {
                println!("{}", format_country_record(&f.id, f.display_name(language)));
            }
            Ok(())
        }
    )
}
