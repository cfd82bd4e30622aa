mod cli;
mod instance_type;
mod prelude;
mod pricing;
mod projection;
mod quantity;
mod render;
mod tables;

use std::fs;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, GenerateArgs, InputArgs, RatesArgs},
    prelude::*,
    pricing::PriceIndex,
    render::{render_chart_page, render_index_page},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Generate(args) => generate(&args)?,
        Command::Rates(args) => rates(&args)?,
    }

    info!("done!");
    Ok(())
}

fn load_price_index(args: &InputArgs) -> Result<PriceIndex> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read `{}`", args.input.display()))?;
    let document = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse `{}`", args.input.display()))?;
    let index = pricing::extract(&document)?;
    info!(n_instance_types = index.len(), "extracted the rates");
    Ok(index)
}

fn generate(args: &GenerateArgs) -> Result {
    // Extraction runs to completion before anything is written, so a bad
    // document never leaves partial output behind.
    let index = load_price_index(&args.input)?;
    let reports = render::build_reports(&index);

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create `{}`", args.output_dir.display()))?;

    let mut n_pages = 0_usize;
    for types in reports.values() {
        for report in types.values() {
            let path = args.output_dir.join(report.file_name());
            fs::write(&path, render_chart_page(report)?)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            n_pages += 1;
        }
    }

    let index_path = args.output_dir.join("index.html");
    fs::write(&index_path, render_index_page(&reports))
        .with_context(|| format!("failed to write `{}`", index_path.display()))?;
    info!(n_pages, "wrote the chart pages and the index");

    println!("{}", tables::build_summary_table(&index));
    Ok(())
}

fn rates(args: &RatesArgs) -> Result {
    let index = load_price_index(&args.input)?;
    let plans = index
        .get(&args.instance_type)
        .and_then(|regions| regions.get(&args.region))
        .with_context(|| format!("no pricing for {} in {}", args.instance_type, args.region))?;
    println!("{}", tables::build_plan_table(plans));
    Ok(())
}
