use clp::{CommandLineParser, Parameter};

fn main() {
    let parser = CommandLineParser::new("echo")
        .version("1.0.0")
        .about("Write arguments to the standard output.")
        .example("Print a message without the trailing newline:", "-n Hello World")
        .example(
            "Enable interpretation of backslash escapes (special characters):",
            "-e Column 1\\tColumn 2",
        )
        .copyright("Copyright (c) 2020 Julius Behrens.")
        .copyright("All rights reserved.")
        .add(Parameter::<bool>::flag("no-newline", Some('n')).help("Do not output a trailing newline."))
        .add(
            Parameter::<bool>::flag("escape", Some('e'))
                .help("Enable interpretation of backslash escape sequences."),
        )
        .add(
            Parameter::<String>::argument("STRING")
                .bounds(0, 99)
                .help("The strings to display on the standard output."),
        )
        .build()
        .unwrap_or_else(|error| {
            eprintln!("{error}");
            std::process::exit(1);
        });

    let results = parser.parse();
    let no_newline = results.get::<bool>("no-newline").unwrap_or_default();
    let escape = results.get::<bool>("escape").unwrap_or_default();
    let message = results.list::<String>("STRING").unwrap_or_default().join(" ");
    let message = if escape { unescape(&message) } else { message };

    if no_newline {
        print!("{message}");
    } else {
        println!("{message}");
    }
}

fn unescape(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut characters = message.chars();

    while let Some(c) = characters.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match characters.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
