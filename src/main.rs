//! unimark - Markdown to plain-Unicode formatter

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use unimark::{
    FontStyle, convert_markdown_to_fb, convert_to_unicode, convert_to_unicode_rich, post_process,
    style_config,
};

#[derive(Parser)]
#[command(name = "unimark")]
#[command(version, about = "Markdown to plain-Unicode formatter", long_about = None)]
#[command(after_help = "EXAMPLES:
    unimark post.md                      Format with the structured preset
    unimark post.md -s social --pangu    Social preset + CJK boundary spacing
    unimark --font fraktur post.md       Apply a raw font style instead
    unimark --list-styles                Show the available font styles")]
struct Cli {
    /// Input file ('-' or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Style preset: minimal, structured, or social
    #[arg(short, long, default_value = "structured")]
    style: String,

    /// Insert spaces at CJK/Latin boundaries
    #[arg(short, long)]
    pangu: bool,

    /// Skip the Markdown pipeline and apply a font style to the raw text
    #[arg(long, value_name = "STYLE", conflicts_with = "style")]
    font: Option<String>,

    /// With --font, emit per-character conversion info as JSON
    #[arg(long, requires = "font")]
    rich: bool,

    /// List the available font styles and exit
    #[arg(long)]
    list_styles: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list_styles {
        for style in FontStyle::ALL {
            println!("{style}");
        }
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let input = read_input(cli.input.as_deref()).map_err(|e| e.to_string())?;

    let output = if let Some(tag) = &cli.font {
        let style: FontStyle = tag.parse().map_err(|e: unimark::Error| e.to_string())?;
        if cli.rich {
            let rich = convert_to_unicode_rich(&input, style);
            serde_json::to_string_pretty(&rich).map_err(|e| e.to_string())?
        } else {
            convert_to_unicode(&input, style)
        }
    } else {
        let config = style_config(&cli.style).map_err(|e| e.to_string())?;
        let rendered = convert_markdown_to_fb(&input, config);
        post_process(&rendered, cli.pangu)
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &output).map_err(|e| e.to_string())?;
            if !cli.quiet {
                println!("wrote {path}");
            }
        }
        None => println!("{output}"),
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}
