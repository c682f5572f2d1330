use clp::{prelude::*, CommandLineParser, Parameter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    On,
    Off,
    Auto,
}

impl Enumeration for Status {
    fn variants() -> &'static [&'static str] {
        &["ON", "OFF", "AUTO"]
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        [Status::On, Status::Off, Status::Auto].get(ordinal).copied()
    }
}

fn main() {
    let parser = CommandLineParser::new("my_prog")
        .version("1.0.0")
        .about("This is an example program.")
        .about("It does nothing.")
        .example("Do nothing and again nothing:", "-v -i 99 text text")
        .example("To do absolutely nothing:", "--status AUTO -i 12 a b c")
        .copyright("MyProg 1.0.0")
        .copyright("Copyright (c) 2020 Julius Behrens.")
        .copyright("All rights reserved.")
        .add(Parameter::<bool>::flag("verbose", Some('v')).help("Enable verbose output."))
        .add(
            Parameter::<i64>::flag("integer", Some('i'))
                .bounds(1, 1)
                .help("The integer that must be provided."),
        )
        .add(
            Parameter::<Status>::flag_choice("status", Some('s'))
                .default(Status::Auto)
                .help("Specify the status (default: AUTO)."),
        )
        .add(Parameter::<String>::flag("text", Some('t')).help("Provide some text."))
        .add(
            Parameter::<String>::flag("invisible", None)
                .hidden()
                .help("A string flag."),
        )
        .add(
            Parameter::<char>::flag("char", Some('c'))
                .bounds(0, 3)
                .help("A char flag."),
        )
        .add(
            Parameter::<String>::argument("STRING")
                .bounds(2, 3)
                .help("A string argument."),
        )
        .build()
        .unwrap_or_else(|error| {
            eprintln!("{error}");
            std::process::exit(1);
        });

    let results = parser.parse();
    let mut names: Vec<&String> = results.iter().map(|(name, _)| name).collect();
    names.sort();

    for name in names {
        if let Some(entry) = results.entry(name) {
            println!("{name}\t{entry}");
        }
    }

    if results.get::<bool>("verbose").unwrap_or_default() {
        let status = results.choice::<Status>("status").unwrap_or(Status::Auto);
        println!("status is {status:?}");
    }
}
