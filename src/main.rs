//! zhanghui - novel TXT chapter inspector

use std::process::ExitCode;

use clap::Parser;

use zhanghui::{ParsedContent, TextEncoding};

#[derive(Parser)]
#[command(name = "zhanghui")]
#[command(version, about = "Novel TXT chapter inspector", long_about = None)]
#[command(after_help = "EXAMPLES:
    zhanghui novel.txt              Show chapter table and totals
    zhanghui novel.txt --json       Dump the full parse as JSON
    zhanghui novel.txt -c 3         Print the text of chapter 3")]
struct Cli {
    /// Input TXT file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Dump the full parse result as JSON
    #[arg(long)]
    json: bool,

    /// Print the text of one chapter instead of the table
    #[arg(short, long, value_name = "N")]
    chapter: Option<u32>,

    /// Force an encoding instead of detecting (utf-8, gbk, gb2312, gb18030, big5)
    #[arg(short, long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Suppress the file banner
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let bytes = std::fs::read(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;

    let encoding = match &cli.encoding {
        Some(label) => TextEncoding::for_label(label)
            .ok_or_else(|| format!("unknown encoding label: {label}"))?,
        None => zhanghui::resolve_encoding(&bytes),
    };
    let text = encoding.decode(&bytes);
    let parsed = zhanghui::assemble(zhanghui::segment(&text));

    if cli.json {
        let json = serde_json::to_string_pretty(&parsed).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    if let Some(number) = cli.chapter {
        return print_chapter(&parsed, number);
    }

    if !cli.quiet {
        println!("File: {}", cli.input);
        println!("Encoding: {}", encoding.label());
        println!("Chapters: {}", parsed.total_chapters);
        println!("Lines: {}", parsed.total_lines);
    }
    for ch in &parsed.chapters {
        println!(
            "{:>6}  {:>6}-{:<6}  {}",
            ch.chapter, ch.start_line, ch.end_line, ch.title
        );
    }
    Ok(())
}

fn print_chapter(parsed: &ParsedContent, number: u32) -> Result<(), String> {
    if parsed.chapter(number).is_none() {
        return Err(format!("no chapter numbered {number}"));
    }
    for line in parsed.chapter_lines(number) {
        println!("{}", line.content);
    }
    Ok(())
}
