use anyhow::Result;
use clap::Parser;

use textmark::cli::{CliArgs, ReplayMode};
use textmark::replay::{link_spans, type_text};
use textmark::{EditSession, StyledText};

fn main() -> Result<()> {
    textmark::tracing::init();

    let args = CliArgs::parse();
    let config = args.load_config()?;
    let input = args.read_input()?;
    let link_key = config.link_key.clone();

    let mut session = EditSession::new(config, |uri| {
        tracing::info!("Link interaction: {}", uri);
    });

    let text = match args.mode() {
        ReplayMode::Typed => type_text(&mut session, &input),
        ReplayMode::Whole => session.highlight_all(&StyledText::new(input)),
    };

    let spans = link_spans(&text, &link_key);
    tracing::debug!("Found {} link spans", spans.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
    } else {
        for span in &spans {
            println!("{}\t{}\t{:?}", span.range, span.target, span.text);
        }
    }

    Ok(())
}
