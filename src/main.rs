use std::env;
use std::fs;
use std::path::Path;

use ygo_deck_codec::{DeckCodecs, DeckError, DeckFormat, Fidelity};

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <deck-code-or-file> [--to ydk|ydke] [--name <NAME>] [--json]",
        program
    );
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ygo-deck-codec");

    if args.len() < 2 {
        usage(program);
    }

    let source = &args[1];
    let mut target: Option<DeckFormat> = None;
    let mut name_override: Option<String> = None;
    let mut json = false;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--to" => match rest.next().map(|s| s.parse::<DeckFormat>()) {
                Some(Ok(format)) => target = Some(format),
                Some(Err(e)) => {
                    eprintln!("ERROR: {}", e);
                    std::process::exit(1);
                }
                None => {
                    eprintln!("ERROR: --to flag requires an argument.");
                    std::process::exit(1);
                }
            },
            "--name" => match rest.next() {
                Some(name) => name_override = Some(name.clone()),
                None => {
                    eprintln!("ERROR: --name flag requires an argument.");
                    std::process::exit(1);
                }
            },
            "--json" => json = true,
            _ => usage(program),
        }
    }

    // Treat the argument as a path when it names a file, otherwise as the code itself
    let input = if Path::new(source).is_file() {
        match fs::read_to_string(source) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("ERROR: Failed to read {}: {}", source, e);
                std::process::exit(1);
            }
        }
    } else {
        source.clone()
    };

    let codecs: DeckCodecs = DeckCodecs::default();
    let (format, mut decoded) = match codecs.decode_any(input.trim_end()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("ERROR: Failed to decode deck");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };
    if decoded.deck.is_failure() {
        eprintln!("ERROR: Failed to decode deck");
        eprintln!("  {}", DeckError::EmptyDeck { format });
        std::process::exit(1);
    }
    if let Some(name) = name_override {
        decoded.name = name;
    }
    if decoded.fidelity == Fidelity::BestEffort {
        eprintln!(
            "WARNING: {} decoding is best-effort; the deck below is a placeholder.",
            format
        );
    }

    if json {
        match serde_json::to_string_pretty(&decoded) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("ERROR: Failed to serialize deck: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(target) = target {
        match codecs.encode_as(target, &decoded.deck, &decoded.name) {
            Ok(code) => println!("{}", code),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Format: {}", format);
    println!("Name: {}", decoded.name);
    println!("Fidelity: {:?}", decoded.fidelity);
    for (zone, cards) in decoded.deck.zones() {
        println!("  {}: {} cards", zone, cards.len());
    }
    println!("Total: {} cards", decoded.deck.len());
}
