//! `borderpath path` command - shortest route between two countries

use tracing::debug;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use borderpath_core::dataset::{Dataset, Language};
use borderpath_core::error::Result;
use borderpath_core::graph::{weight_for, PathResult, SearchAlgorithm, WeightKind};
use borderpath_core::log_resource_metrics;
use borderpath_core::records::{format_country_record, format_header, format_path_record};

/// Execute the path command
pub fn execute(ctx: &CommandContext, from: &str, to: &str, weighted: bool) -> Result<()> {
    let finder = ctx.finder()?;
    let language = ctx.language();

    let from = finder.dataset().resolve(from, language)?;
    let to = finder.dataset().resolve(to, language)?;

    // --weighted overrides the configured search
    let (algorithm, weight_kind) = if weighted {
        (SearchAlgorithm::Dijkstra, WeightKind::CentroidDistance)
    } else {
        (ctx.config.search.algorithm, ctx.config.search.weight)
    };
    let weight = weight_for(weight_kind);

    let result = finder.find_path(from.as_str(), to.as_str(), algorithm, weight.as_ref())?;
    debug!(
        hops = result.hops,
        algorithm = %algorithm,
        elapsed = ?ctx.start.elapsed(),
        "path"
    );
    if ctx.cli.verbose {
        log_resource_metrics!(finder.cache().metrics(), "path");
    }

    let dataset = finder.dataset();
    output_by_format!(ctx.cli.format,
        json => output_json(&result, dataset, language, weight_kind),
        human => output_human(ctx, &result, dataset, language, weight_kind),
        records => output_records(&result, dataset, language)
    )
}

fn output_json(
    result: &PathResult,
    dataset: &Dataset,
    language: Language,
    weight: WeightKind,
) -> Result<()> {
    let countries: Vec<_> = result
        .path
        .countries()
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": display_name(dataset, id.as_str(), language),
            })
        })
        .collect();

    let output = serde_json::json!({
        "from": result.from,
        "to": result.to,
        "algorithm": result.algorithm,
        "weight": weight.to_string(),
        "hops": result.hops,
        "cost": result.cost,
        "path": countries,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(
    ctx: &CommandContext,
    result: &PathResult,
    dataset: &Dataset,
    language: Language,
    weight: WeightKind,
) -> Result<()> {
    let route: Vec<String> = result
        .path
        .countries()
        .iter()
        .map(|id| format!("{} ({})", display_name(dataset, id.as_str(), language), id))
        .collect();
    println!("{}", route.join(" -> "));

    if !ctx.cli.quiet {
        let crossings = match result.hops {
            1 => "1 border crossing".to_string(),
            n => format!("{} border crossings", n),
        };
        match weight {
            WeightKind::CentroidDistance => {
                println!("{}, about {:.0} km", crossings, result.cost.value())
            }
            WeightKind::Unit => println!("{}", crossings),
        }
    }
    Ok(())
}

fn output_records(result: &PathResult, dataset: &Dataset, language: Language) -> Result<()> {
    println!(
        "{}",
        format_header(
            "path",
            &[("from", result.from.as_str()), ("to", result.to.as_str())]
        )
    );
    println!("{}", format_path_record(result));
    for id in result.path.countries() {
        println!(
            "{}",
            format_country_record(id, &display_name(dataset, id.as_str(), language))
        );
    }
    Ok(())
}

pub(crate) fn display_name(dataset: &Dataset, id: &str, language: Language) -> String {
    dataset
        .get(id)
        .map(|f| f.display_name(language).to_string())
        .unwrap_or_else(|| id.to_string())
}
