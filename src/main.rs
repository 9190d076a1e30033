use std::io::{IsTerminal, Read, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;

use sourceview::assets::{self, AssetLayout};
use sourceview::cli::{CliArgs, SelectionRequest};
use sourceview::config::ViewerConfig;
use sourceview::theme::{list_available_themes, ThemeSource};
use sourceview::view::{paint, PaintOptions};
use sourceview::Viewer;

fn main() -> Result<()> {
    sourceview::tracing::init();

    let args = CliArgs::parse();
    let config = args.viewer_config(ViewerConfig::load())?;

    if args.save_config {
        let path = config.save()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Process-wide base path: set once, before any viewer exists
    if let Some(base) = &config.base_path {
        assets::set_base_path(base.clone())?;
    }

    if args.install_themes {
        let layout = AssetLayout::global().context("--install-themes needs --base-path")?;
        let written = layout.install_builtin_themes()?;
        for path in &written {
            println!("{}", path.display());
        }
        return Ok(());
    }

    if args.list_themes {
        for info in list_available_themes(AssetLayout::global().as_ref()) {
            let source = match info.source {
                ThemeSource::Assets => "assets",
                ThemeSource::User => "user",
                ThemeSource::Builtin => "builtin",
            };
            println!(
                "{:<20} {:<24} {:<8} {}",
                info.id,
                info.name,
                source,
                info.description.as_deref().unwrap_or("")
            );
        }
        return Ok(());
    }

    let text = read_input(&args)?;
    let mut viewer = Viewer::with_config(&text, config);

    match args
        .selection_request(viewer.len_chars())
        .map_err(anyhow::Error::msg)?
    {
        Some(SelectionRequest::Offsets { from, to }) => viewer.set_selection(from, to),
        Some(SelectionRequest::Span(span)) => viewer.set_selection_span(span),
        None => {}
    }

    if let Some((from, to)) = viewer.selection() {
        tracing::info!(from, to, "Applied selection");
    }

    let options = PaintOptions {
        color: !args.no_color && std::io::stdout().is_terminal(),
        line_numbers: !args.no_line_numbers,
    };
    let output = {
        let surface = viewer.root_node().surface();
        paint(
            surface.rows(),
            viewer.document().line_count(),
            viewer.theme(),
            options,
        )
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn read_input(args: &CliArgs) -> Result<String> {
    if args.reads_stdin() {
        if std::io::stdin().is_terminal() {
            bail!("No input: pass a FILE or pipe text on stdin");
        }
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    let path = args.file.as_ref().context("No input file")?;
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
