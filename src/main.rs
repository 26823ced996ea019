use chordsheet::{
    document_lines, extract_meta, parse_steps, prepare_song, strip_chordpro_directives,
    transpose_chordpro, ChordsheetError,
};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

const USAGE: &str = "\
Usage: chordsheet transpose <input> <steps> [output]
       chordsheet strip <input> [output]
       chordsheet meta [--json] <input>
       chordsheet lines <input>
       chordsheet song <input> [steps]

Use '-' as <input> to read from stdin.";

fn read_input(path: &str) -> Result<String, ChordsheetError> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| ChordsheetError::Io { path: "<stdin>".to_string(), source })?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| ChordsheetError::Io { path: path.to_string(), source })
}

fn write_output(output_path: Option<&String>, text: &str) -> Result<(), ChordsheetError> {
    match output_path {
        Some(path) => {
            fs::write(path, text)
                .map_err(|source| ChordsheetError::Io { path: path.clone(), source })?;
            eprintln!("Wrote {}", path);
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn required<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a String, ChordsheetError> {
    args.get(index)
        .ok_or_else(|| ChordsheetError::Usage(format!("missing {}", what)))
}

fn run(args: &[String]) -> Result<(), ChordsheetError> {
    let command = required(args, 1, "command")?;

    match command.as_str() {
        "transpose" => {
            let source = read_input(required(args, 2, "input")?)?;
            let steps = parse_steps(required(args, 3, "steps")?)?;
            log::info!("transposing by {} semitones", steps);
            write_output(args.get(4), &transpose_chordpro(&source, steps))
        }
        "strip" => {
            let source = read_input(required(args, 2, "input")?)?;
            write_output(args.get(3), &strip_chordpro_directives(&source))
        }
        "meta" => {
            let json = args.get(2).map(String::as_str) == Some("--json");
            let input_index = if json { 3 } else { 2 };
            let source = read_input(required(args, input_index, "input")?)?;
            let meta = extract_meta(&source);
            let rendered = if json {
                serde_json::to_string_pretty(&meta)?
            } else {
                serde_yaml::to_string(&meta)?
            };
            write_output(None, rendered.trim_end())
        }
        "lines" => {
            let source = read_input(required(args, 2, "input")?)?;
            for line in document_lines(&source) {
                println!("{:>4} {:<9} {}", line.number, format!("{:?}", line.kind), line.text);
            }
            Ok(())
        }
        "song" => {
            let source = read_input(required(args, 2, "input")?)?;
            let steps = match args.get(3) {
                Some(arg) => parse_steps(arg)?,
                None => 0,
            };
            let song = prepare_song(&source, steps);
            write_output(None, &serde_json::to_string_pretty(&song)?)
        }
        "-h" | "--help" | "help" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => Err(ChordsheetError::Usage(format!("unknown command '{}'", other))),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        if matches!(e, ChordsheetError::Usage(_)) {
            eprintln!("{}", USAGE);
        }
        process::exit(1);
    }
}
