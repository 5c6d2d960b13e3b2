//! Module defining the command line argument parser.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{self, AppSettings, Arg, ArgMatches};
use serde_json;

use bionic::{Alignment, Background, Composition, Lockup, Stacking, Style, Theme};
use super::{NAME, VERSION};
use super::model::{ArgsError, Options, ValueError};


impl Options {
    pub(super) fn from_matches(matches: &ArgMatches) -> Result<Options, ArgsError> {
        let verbose_count = matches.occurrences_of(OPT_VERBOSE) as isize;
        let quiet_count = matches.occurrences_of(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let lockup = match matches.value_of(OPT_JSON) {
            Some(path) => {
                let json = read_json_input(path)?;
                serde_json::from_str(&json)?
            }
            None => lockup_from_flags(matches)?,
        };

        let font_dir = PathBuf::from(matches.value_of(OPT_FONT_DIR).unwrap());
        let output_path = matches.value_of(OPT_OUTPUT)
            .map(|p| p.trim())
            .and_then(|p| if p.is_empty() { None } else { Some(p) })
            .map(|p| PathBuf::from(p));

        Ok(Options{
            verbosity: verbosity,
            lockup: lockup,
            font_dir: font_dir,
            output_path: output_path,
        })
    }
}

/// Read the JSON lockup specification,
/// either from a file or (for the `-` path) from standard input.
fn read_json_input(path: &str) -> io::Result<String> {
    let mut json = String::new();
    if path == "-" {
        io::stdin().read_to_string(&mut json)?;
    } else {
        fs::File::open(path)?.read_to_string(&mut json)?;
    }
    Ok(json)
}

/// Assemble a `Lockup` from the individual command line flags.
fn lockup_from_flags(matches: &ArgMatches) -> Result<Lockup, ArgsError> {
    let font_size = parse_number(matches, OPT_SIZE)?;
    let scale = parse_number(matches, OPT_SCALE)?;

    Ok(Lockup::build()
        .text1(matches.value_of(ARG_TEXT1).unwrap_or(""))
        .text2(matches.value_of(ARG_TEXT2).unwrap_or(""))
        .style(match matches.value_of(OPT_STYLE).unwrap() {
            "standard" => Style::Standard,
            _ => Style::Overlapping,
        })
        .composition(match matches.value_of(OPT_COMPOSITION).unwrap() {
            "offset" => Composition::Offset,
            _ => Composition::Range,
        })
        .stacking(match matches.value_of(OPT_STACKING).unwrap() {
            "box1" => Stacking::Box1,
            _ => Stacking::Box2,
        })
        .alignment(match matches.value_of(OPT_ALIGN).unwrap() {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            _ => Alignment::Center,
        })
        .theme(match matches.value_of(OPT_THEME).unwrap() {
            "alt" => Theme::Alt,
            "blue" => Theme::Blue,
            "grey" => Theme::Grey,
            _ => Theme::Primary,
        })
        .background(match matches.value_of(OPT_BACKGROUND).unwrap() {
            "navy" => Background::Navy,
            "orange" => Background::Orange,
            "transparent" => Background::Transparent,
            _ => Background::White,
        })
        .font(matches.value_of(OPT_FONT).unwrap())
        .font_size(font_size)
        .scale(scale)
        .build())
}

fn parse_number(matches: &ArgMatches, flag: &'static str) -> Result<f32, ArgsError> {
    let value = matches.value_of(flag).unwrap();
    value.trim().parse().map_err(|_| ArgsError::Value(ValueError{
        flag: flag,
        value: value.to_owned(),
    }))
}


// Parser definition

/// Type of the argument parser object
/// (which is called an "App" in clap's silly nomenclature).
pub type Parser<'p> = clap::App<'p, 'p>;


lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

const ARG_TEXT1: &'static str = "text1";
const ARG_TEXT2: &'static str = "text2";
const OPT_STYLE: &'static str = "style";
const OPT_COMPOSITION: &'static str = "composition";
const OPT_STACKING: &'static str = "stacking";
const OPT_ALIGN: &'static str = "align";
const OPT_THEME: &'static str = "theme";
const OPT_BACKGROUND: &'static str = "background";
const OPT_SIZE: &'static str = "size";
const OPT_SCALE: &'static str = "scale";
const OPT_FONT: &'static str = "font";
const OPT_FONT_DIR: &'static str = "font-dir";
const OPT_JSON: &'static str = "json";
const OPT_OUTPUT: &'static str = "output";
const OPT_VERBOSE: &'static str = "verbose";
const OPT_QUIET: &'static str = "quiet";


/// Create the parser for application's command line.
#[allow(unknown_lints, dangerous_implicit_autorefs)]
pub fn create_parser<'p>() -> Parser<'p> {
    let mut parser = Parser::new(*NAME);
    if let Some(version) = *VERSION {
        parser = parser.version(version);
    }
    parser
        .about(*ABOUT)
        .author(crate_authors!(", "))

        .setting(AppSettings::StrictUtf8)

        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DontCollapseArgsInUsage)
        .setting(AppSettings::DeriveDisplayOrder)

        // Lockup texts.
        .arg(Arg::with_name(ARG_TEXT1)
            .value_name("TEXT1")
            .required_unless(OPT_JSON)
            .conflicts_with(OPT_JSON)
            .help("Text of the first (upper) box"))
        .arg(Arg::with_name(ARG_TEXT2)
            .value_name("TEXT2")
            .required(false)
            .conflicts_with(OPT_JSON)
            .help("Text of the second (lower) box"))

        // Lockup knobs.
        .arg(Arg::with_name(OPT_STYLE)
            .long("style").takes_value(true)
            .possible_values(&["standard", "overlapping"])
            .default_value("overlapping")
            .help("Style of the two-box stack"))
        .arg(Arg::with_name(OPT_COMPOSITION)
            .long("composition").takes_value(true)
            .possible_values(&["range", "offset"])
            .default_value("range")
            .help("Horizontal composition of the boxes"))
        .arg(Arg::with_name(OPT_STACKING)
            .long("stacking").takes_value(true)
            .possible_values(&["box1", "box2"])
            .default_value("box2")
            .help("Which box paints on top at the seam"))
        .arg(Arg::with_name(OPT_ALIGN)
            .long("align").short("a").takes_value(true)
            .possible_values(&["left", "center", "right"])
            .default_value("center")
            .help("Alignment of the group (also decides the offset direction)"))
        .arg(Arg::with_name(OPT_THEME)
            .long("theme").short("t").takes_value(true)
            .possible_values(&["primary", "alt", "blue", "grey"])
            .default_value("primary")
            .help("Brand color theme"))
        .arg(Arg::with_name(OPT_BACKGROUND)
            .long("background").short("b").takes_value(true)
            .possible_values(&["white", "navy", "orange", "transparent"])
            .default_value("white")
            .help("Background of the exported frame"))
        .arg(Arg::with_name(OPT_SIZE)
            .long("size").short("s").takes_value(true)
            .value_name("PIXELS")
            .default_value("100")
            .help("Base font size"))
        .arg(Arg::with_name(OPT_SCALE)
            .long("scale").takes_value(true)
            .value_name("FACTOR")
            .default_value("1.0")
            .help("Scale of the group within the exported frame"))
        .arg(Arg::with_name(OPT_FONT)
            .long("font").takes_value(true)
            .value_name("NAME")
            .default_value("Poppins-Black")
            .help("Name of the font to set the text in"))
        .arg(Arg::with_name(OPT_FONT_DIR)
            .long("font-dir").takes_value(true)
            .value_name("DIR")
            .default_value("fonts")
            .help("Directory to load fonts from"))

        // Alternative input.
        .arg(Arg::with_name(OPT_JSON)
            .long("json").takes_value(true)
            .value_name("FILE")
            .help("Read the complete lockup specification as JSON")
            .long_help(concat!(
                "Read the complete lockup specification from given JSON file.\n\n",
                "Pass `-` (a single dash) to read the JSON from standard input. ",
                "Flags that describe the lockup cannot be combined with this option.")))

        // Output flags.
        .arg(Arg::with_name(OPT_OUTPUT)
            .long("output").short("o").takes_value(true)
            .value_name("PATH")
            .required(false)
            .help("File to write the rendered image to")
            .long_help(concat!(
                "What file should the final image be written to.\n\n",
                "By default, a timestamped PNG file is created ",
                "in the current directory.")))

        // Verbosity flags.
        .arg(Arg::with_name(OPT_VERBOSE)
            .long("verbose").short("v")
            .multiple(true)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::with_name(OPT_QUIET)
            .long("quiet").short("q")
            .multiple(true)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))

        .help_short("H")
        .version_short("V")
}
