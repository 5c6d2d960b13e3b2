//! Module for handling command line arguments.

mod model;
mod parser;


use std::env;
use std::ffi::OsString;

use super::{NAME, VERSION};
pub use self::model::{ArgsError, Options};
use self::parser::create_parser;


/// Parse command line arguments and return `Options` object.
#[inline]
pub fn parse() -> Result<Options, ArgsError> {
    parse_from_argv(env::args_os())
}

/// Parse application options from given array of arguments
/// (*all* arguments, including binary name).
#[inline]
pub fn parse_from_argv<I, T>(argv: I) -> Result<Options, ArgsError>
    where I: IntoIterator<Item=T>, T: Clone + Into<OsString>
{
    let parser = create_parser();
    let matches = parser.get_matches_from_safe(argv)?;
    Options::from_matches(&matches)
}


#[cfg(test)]
mod tests {
    use bionic::{Alignment, Background, Composition, Stacking, Style, Theme};
    use spectral::prelude::*;
    use super::parse_from_argv;
    use ::NAME;

    #[test]
    fn no_args() {
        assert_that!(parse_from_argv(Vec::<&str>::new())).is_err();
        assert_that!(parse_from_argv(vec![*NAME])).is_err();
    }

    #[test]
    fn just_texts() {
        let opts = parse_from_argv(vec![*NAME, "builders", "club"]).unwrap();
        assert_eq!("BUILDERS", opts.lockup.text1);
        assert_eq!("CLUB", opts.lockup.text2);
        // Defaults.
        assert_eq!(Style::Overlapping, opts.lockup.style);
        assert_eq!(Composition::Range, opts.lockup.composition);
        assert_eq!(Stacking::Box2, opts.lockup.stacking);
        assert_eq!(Alignment::Center, opts.lockup.alignment);
        assert_eq!(Theme::Primary, opts.lockup.theme);
        assert_eq!(Background::White, opts.lockup.background);
        assert_eq!(100.0, opts.lockup.font_size);
        assert_eq!(1.0, opts.lockup.scale);
    }

    #[test]
    fn single_text_is_enough() {
        let opts = parse_from_argv(vec![*NAME, "builders"]).unwrap();
        assert_eq!("BUILDERS", opts.lockup.text1);
        assert_eq!("", opts.lockup.text2);
    }

    #[test]
    fn all_the_knobs() {
        let opts = parse_from_argv(vec![
            *NAME, "one", "two",
            "--style", "standard", "--composition", "offset",
            "--stacking", "box1", "--align", "left",
            "--theme", "blue", "--background", "transparent",
            "--size", "120", "--scale", "1.5",
        ]).unwrap();
        assert_eq!(Style::Standard, opts.lockup.style);
        assert_eq!(Composition::Offset, opts.lockup.composition);
        assert_eq!(Stacking::Box1, opts.lockup.stacking);
        assert_eq!(Alignment::Left, opts.lockup.alignment);
        assert_eq!(Theme::Blue, opts.lockup.theme);
        assert_eq!(Background::Transparent, opts.lockup.background);
        assert_eq!(120.0, opts.lockup.font_size);
        assert_eq!(1.5, opts.lockup.scale);
    }

    #[test]
    fn sliders_are_clamped() {
        let opts = parse_from_argv(vec![
            *NAME, "big", "--size", "9000", "--scale", "0.01"]).unwrap();
        assert_eq!(160.0, opts.lockup.font_size);
        assert_eq!(0.4, opts.lockup.scale);
    }

    #[test]
    fn bad_knob_values() {
        assert_that!(parse_from_argv(vec![*NAME, "x", "--size", "huge"])).is_err();
        assert_that!(parse_from_argv(vec![*NAME, "x", "--theme", "magenta"])).is_err();
    }

    #[test]
    fn output_path() {
        let opts = parse_from_argv(vec![*NAME, "x", "-o", "out.png"]).unwrap();
        assert_eq!("out.png",
                   opts.output_path.unwrap().to_str().unwrap());
    }

    #[test]
    fn verbosity() {
        let opts = parse_from_argv(vec![*NAME, "x", "-v", "-v"]).unwrap();
        assert_eq!(2, opts.verbosity);
        let opts = parse_from_argv(vec![*NAME, "x", "-q"]).unwrap();
        assert_eq!(-1, opts.verbosity);
    }

    #[test]
    fn json_conflicts_with_texts() {
        assert_that!(parse_from_argv(vec![*NAME, "text", "--json", "lockup.json"]))
            .is_err();
    }
}
