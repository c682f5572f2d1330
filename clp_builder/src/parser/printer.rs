use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::matcher::Bound;
use crate::parser::base::Settings;
use crate::parser::interface::{chunk, ColumnRenderer, UserInterface, MINIMUM_TEXT_WIDTH};

pub(crate) struct FlagParameter {
    name: String,
    short: Option<char>,
    is_bool: bool,
    bound: Bound,
    help: Option<String>,
    meta: String,
    hidden: bool,
}

impl FlagParameter {
    pub(crate) fn new(
        name: impl Into<String>,
        short: Option<char>,
        is_bool: bool,
        bound: Bound,
        help: Option<String>,
        meta: impl Into<String>,
        hidden: bool,
    ) -> Self {
        Self {
            name: name.into(),
            short,
            is_bool,
            bound,
            help,
            meta: meta.into(),
            hidden,
        }
    }

    /// The flag as it would be written in the usage summary: `-i <int>`.
    fn usage(&self) -> String {
        let flag = match self.short {
            Some(s) => format!("-{s}"),
            None => format!("--{}", self.name),
        };

        if self.is_bool {
            flag
        } else {
            format!("{flag} {}", self.meta)
        }
    }

    /// The flag as it is listed: `-i|--integer=<int>`.
    fn listing(&self) -> String {
        let name = &self.name;
        let flag = match self.short {
            Some(s) => format!("-{s}|--{name}"),
            None => format!("--{name}"),
        };

        if self.is_bool {
            flag
        } else {
            format!("{flag}={}", self.meta)
        }
    }
}

pub(crate) struct ArgumentParameter {
    name: String,
    bound: Bound,
    help: Option<String>,
    meta: Option<String>,
    hidden: bool,
}

impl ArgumentParameter {
    pub(crate) fn new(
        name: impl Into<String>,
        bound: Bound,
        help: Option<String>,
        meta: Option<String>,
        hidden: bool,
    ) -> Self {
        Self {
            name: name.into(),
            bound,
            help,
            meta,
            hidden,
        }
    }

    fn display(&self) -> &str {
        self.meta.as_deref().unwrap_or(&self.name)
    }
}

/// The free text sections of the help message.
#[derive(Debug, Default)]
pub(crate) struct Sections {
    pub(crate) about: Vec<String>,
    pub(crate) examples: Vec<(String, String)>,
    pub(crate) copyright: Vec<String>,
}

pub(crate) struct Printer {
    flags: Vec<FlagParameter>,
    arguments: Vec<ArgumentParameter>,
    sections: Sections,
    settings: Settings,
    terminal_width: Option<usize>,
}

const SECTION_INDENT: &str = " ";
const TEXT_INDENT: &str = "   ";
const REQUIRED_PREFIX: &str = "  * ";
const OPTIONAL_PREFIX: &str = "    ";
const PADDING_WIDTH: usize = 2;
const HELP_MESSAGE: &str = "Display this help and exit";
const VERSION_MESSAGE: &str = "Display version information and exit";

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(
            Vec::default(),
            Vec::default(),
            Sections::default(),
            Settings::default(),
            None,
        )
    }

    pub(crate) fn terminal(
        flags: Vec<FlagParameter>,
        arguments: Vec<ArgumentParameter>,
        sections: Sections,
        settings: Settings,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(flags, arguments, sections, settings, terminal_width)
    }

    pub(crate) fn new(
        flags: Vec<FlagParameter>,
        arguments: Vec<ArgumentParameter>,
        sections: Sections,
        settings: Settings,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            flags: flags.into_iter().filter(|f| !f.hidden).collect(),
            arguments: arguments.into_iter().filter(|a| !a.hidden).collect(),
            sections,
            settings,
            terminal_width,
        }
    }

    pub(crate) fn print_help(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(format!("{SECTION_INDENT}USAGE"));
        self.print_text(&self.usage(program), user_interface);

        if !self.sections.about.is_empty() {
            user_interface.print("".to_string());
            user_interface.print(format!("{SECTION_INDENT}DESCRIPTION"));

            for line in &self.sections.about {
                self.print_text(line, user_interface);
            }
        }

        let flag_rows = self.flag_rows();
        let argument_rows: Vec<(bool, String, &str)> = self
            .arguments
            .iter()
            .map(|a| {
                (
                    a.bound.min() > 0,
                    a.display().to_string(),
                    a.help.as_deref().unwrap_or_default(),
                )
            })
            .collect();
        let left_width = flag_rows
            .iter()
            .chain(argument_rows.iter())
            .map(|(_, left, _)| left.chars().count())
            .max()
            .unwrap_or_default();
        let renderer = ColumnRenderer::guided(
            REQUIRED_PREFIX.len(),
            PADDING_WIDTH,
            left_width,
            self.terminal_width,
        );

        if !argument_rows.is_empty() {
            user_interface.print("".to_string());
            user_interface.print(format!("{SECTION_INDENT}ARGUMENTS"));
            print_rows(&renderer, &argument_rows, user_interface);
        }

        if !flag_rows.is_empty() {
            user_interface.print("".to_string());
            user_interface.print(format!("{SECTION_INDENT}FLAGS"));
            print_rows(&renderer, &flag_rows, user_interface);
        }

        if !self.sections.examples.is_empty() {
            user_interface.print("".to_string());
            user_interface.print(format!("{SECTION_INDENT}EXAMPLES"));

            for (i, (caption, invocation)) in self.sections.examples.iter().enumerate() {
                if i > 0 {
                    user_interface.print("".to_string());
                }

                self.print_text(caption, user_interface);
                user_interface.print(format!("{TEXT_INDENT}{program} {invocation}"));
            }
        }

        if !self.sections.copyright.is_empty() {
            user_interface.print("".to_string());
            user_interface.print(format!("{SECTION_INDENT}COPYRIGHT"));

            for line in &self.sections.copyright {
                self.print_text(line, user_interface);
            }
        }
    }

    fn print_text(&self, text: &str, user_interface: &(impl UserInterface + ?Sized)) {
        let lines = match self.terminal_width {
            Some(width) => chunk(
                text,
                std::cmp::max(
                    width.saturating_sub(TEXT_INDENT.len() + 1),
                    MINIMUM_TEXT_WIDTH,
                ),
            ),
            None if text.is_empty() => Vec::default(),
            None => vec![text.to_string()],
        };

        if lines.is_empty() {
            user_interface.print(String::default());
        }

        for line in lines {
            user_interface.print(format!("{TEXT_INDENT}{line}"));
        }
    }

    fn flag_rows(&self) -> Vec<(bool, String, &str)> {
        let mut rows: Vec<(bool, String, &str)> = self
            .flags
            .iter()
            .map(|f| {
                (
                    f.bound.min() > 0,
                    f.listing(),
                    f.help.as_deref().unwrap_or_default(),
                )
            })
            .collect();

        if self.settings.help_request {
            rows.push((false, HELP_TOKEN.to_string(), HELP_MESSAGE));
        }

        if self.settings.version_request {
            rows.push((false, VERSION_TOKEN.to_string(), VERSION_MESSAGE));
        }

        rows
    }

    fn usage(&self, program: &str) -> String {
        let mut summary = vec![program.to_string()];
        let required_bundle: String = self
            .flags
            .iter()
            .filter(|f| is_bundle(f, 1))
            .filter_map(|f| f.short)
            .collect();
        let optional_bundle: String = self
            .flags
            .iter()
            .filter(|f| is_bundle(f, 0))
            .filter_map(|f| f.short)
            .collect();

        if !required_bundle.is_empty() {
            summary.push(format!("-{required_bundle}"));
        }

        if !optional_bundle.is_empty() {
            summary.push(format!("[-{optional_bundle}]"));
        }

        for flag in self
            .flags
            .iter()
            .filter(|f| !is_bundle(f, 0) && !is_bundle(f, 1))
        {
            summary.extend(occurrences(&flag.usage(), flag.bound));
        }

        if self.settings.help_request {
            summary.push(format!("[{HELP_TOKEN}]"));
        }

        if self.settings.version_request {
            summary.push(format!("[{VERSION_TOKEN}]"));
        }

        for argument in &self.arguments {
            summary.extend(occurrences(argument.display(), argument.bound));
        }

        summary.join(" ")
    }
}

/// Whether the flag is summarized as part of a `-abc` bundle (`min` of 1) or a `[-abc]` bundle (`min` of 0).
fn is_bundle(flag: &FlagParameter, min: u32) -> bool {
    flag.is_bool && flag.short.is_some() && flag.bound.min() == min && flag.bound.max() == 1
}

/// The `token` repeated for each required occurrence, then its optional remainder.
fn occurrences(token: &str, bound: Bound) -> Vec<String> {
    let mut out: Vec<String> = (0..bound.min()).map(|_| token.to_string()).collect();

    match bound.max() - bound.min() {
        0 => {}
        1 => out.push(format!("[{token}]")),
        _ => out.push(format!("[{token}]...")),
    }

    out
}

fn print_rows(
    renderer: &ColumnRenderer,
    rows: &[(bool, String, &str)],
    user_interface: &(impl UserInterface + ?Sized),
) {
    for (required, left, text) in rows {
        let prefix = if *required {
            REQUIRED_PREFIX
        } else {
            OPTIONAL_PREFIX
        };

        for line in renderer.render(prefix, left, text) {
            user_interface.print(line);
        }
    }
}
