//! detset-dump: print the per-frame contents of a detection dataset.
//!
//! Optionally copies the dataset back out through the matching writer,
//! which normalizes ids and drops unrecognized keys.

use std::path::PathBuf;
use std::process::ExitCode;

use detset::FormatRegistry;

const USAGE: &str = "usage: detset-dump [--format <id>] [--copy <output>] <annotations-file>";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut format = String::from("coco");
    let mut copy: Option<PathBuf> = None;
    let mut input: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => match args.next() {
                Some(value) => format = value,
                None => {
                    eprintln!("{USAGE}");
                    return ExitCode::FAILURE;
                }
            },
            "--copy" => match args.next() {
                Some(value) => copy = Some(PathBuf::from(value)),
                None => {
                    eprintln!("{USAGE}");
                    return ExitCode::FAILURE;
                }
            },
            "--help" | "-h" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ => {
                if input.is_some() {
                    eprintln!("{USAGE}");
                    return ExitCode::FAILURE;
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }
    let Some(input) = input else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let registry = FormatRegistry::new();
    let Some(mut reader) = registry.create_reader(&format) else {
        eprintln!(
            "unknown format '{}', available: {}",
            format,
            registry.reader_ids().join(", ")
        );
        return ExitCode::FAILURE;
    };

    let mut writer = None;
    if let Some(path) = &copy {
        let Some(mut w) = registry.create_writer(&format) else {
            eprintln!("format '{}' has no writer", format);
            return ExitCode::FAILURE;
        };
        if let Err(e) = w.open(path) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
        writer = Some(w);
    }

    if let Err(e) = reader.open(&input) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let mut frames = 0u64;
    let mut detections = 0usize;
    loop {
        match reader.read_set() {
            Ok(Some((set, file_name))) => {
                let display = if file_name.is_empty() {
                    "<no image>"
                } else {
                    file_name.as_str()
                };
                println!("frame {:>6}  {:>5} detections  {}", frames, set.len(), display);
                detections += set.len();

                if let Some(writer) = writer.as_mut() {
                    if let Err(e) = writer.write_set(&set, &file_name) {
                        eprintln!("error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
                frames += 1;
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    reader.close();

    if let Some(mut writer) = writer {
        if let Err(e) = writer.close() {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    println!("{} frames, {} detections", frames, detections);
    ExitCode::SUCCESS
}
