// File: crates/ghg-report/src/main.rs
// Summary: Loads the emissions CSV once and renders both charts to PNGs plus an HTML host page.

use anyhow::{Context, Result};
use ghg_core::source::resolve_path;
use ghg_core::{build_report, write_page, Config, FileSource};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_INPUT: &str = "data/OECD.ENV.EPI,DSD_AIR_GHG@DF_AIR_GHG,+.A.GHG._T.KG_CO2E_PS.csv";
const DEFAULT_OUT: &str = "target/out";

struct Args {
    input: String,
    config: Option<PathBuf>,
    out: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { input: DEFAULT_INPUT.to_string(), config: None, out: PathBuf::from(DEFAULT_OUT) };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = Some(it.next().context("--config needs a file path")?.into()),
            "--out" => args.out = it.next().context("--out needs a directory")?.into(),
            flag if flag.starts_with("--") => anyhow::bail!("unknown option {flag}"),
            _ => args.input = arg,
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    let _ = ghg_core::telemetry::init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => Config::from_path(path).with_context(|| format!("loading config '{}'", path.display()))?,
        None => Config::default(),
    };

    let (path, _) = resolve_path(&args.input);
    info!(input = %path.display(), "using input file");

    let source = FileSource::new(&path);
    let opts = config.render_options();
    let page = build_report(&source, &config, &opts, &args.out)
        .with_context(|| format!("rendering charts into '{}'", args.out.display()))?;
    write_page(&page, &args.out).context("writing host page")?;

    if let Some(banner) = &page.banner {
        eprintln!("{banner}");
    }
    println!("Wrote {} chart(s) and {}", page.chart_count(), args.out.join(ghg_core::report::INDEX_HTML).display());
    Ok(())
}
