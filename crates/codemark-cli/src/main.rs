//! codemark - render Markdown to HTML with syntax-highlighted code

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use codemark_core::{render_markdown, render_page, CodeNodeRenderer, Settings, SyntaxRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "codemark")]
#[command(about = "Render Markdown to HTML with syntax-highlighted code blocks")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to <config dir>/codemark/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// syntect theme to highlight with
    #[arg(long)]
    theme: Option<String>,

    /// Color saturation, 0.0 (gray) to 1.0 (theme colors)
    #[arg(long)]
    saturation: Option<f32>,

    /// Escape block code instead of highlighting it
    #[arg(long)]
    no_block_highlighting: bool,

    /// Emit a complete HTML page including the code stylesheet
    #[arg(long)]
    standalone: bool,

    /// Print the available theme names and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the available language names and exit
    #[arg(long)]
    list_languages: bool,
}

impl Cli {
    /// Settings from the config file with command-line overrides applied
    fn settings(&self) -> Result<Settings> {
        let mut settings = match self.config.clone().or_else(Settings::default_path) {
            Some(path) => Settings::load(&path)?,
            None => Settings::default(),
        };

        if let Some(theme) = &self.theme {
            settings.theme = theme.clone();
        }
        if let Some(saturation) = self.saturation {
            settings.saturation = saturation;
        }
        if self.no_block_highlighting {
            settings.block_highlighting = false;
        }

        Ok(settings)
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut markdown = String::new();
                io::stdin()
                    .read_to_string(&mut markdown)
                    .context("Failed to read stdin")?;
                Ok(markdown)
            }
        }
    }

    fn title(&self) -> String {
        self.input
            .as_ref()
            .and_then(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "codemark".to_string())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    let registry = SyntaxRegistry::from_settings(&settings)
        .context("Failed to load syntax definitions")?;

    if cli.list_themes || cli.list_languages {
        let names = if cli.list_themes {
            registry.theme_names()
        } else {
            registry.language_names()
        };
        let mut stdout = io::stdout().lock();
        for name in names {
            writeln!(stdout, "{}", name)?;
        }
        return Ok(());
    }

    if registry.theme(&settings.theme).is_err() {
        tracing::warn!(
            theme = %settings.theme,
            "Unknown theme, code will be rendered without colors"
        );
    }

    let markdown = cli.read_input()?;
    let font_family = settings.font_family.clone();
    let renderer = CodeNodeRenderer::with_syntect(registry.into_shared(), settings.into_shared());

    let html = if cli.standalone {
        render_page(&markdown, &renderer, &cli.title(), &font_family)
    } else {
        render_markdown(&markdown, &renderer)
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote HTML");
        }
        None => io::stdout()
            .lock()
            .write_all(html.as_bytes())
            .context("Failed to write stdout")?,
    }

    Ok(())
}
