//! The textual command language.
//!
//! A command line is split on whitespace. The first token names the command;
//! the rest are positional arguments followed by options:
//!
//! ```text
//! create <point|line|ray|seg|circle> <arg1> <arg2> [as <id>] [--show true|false] [--color RRGGBB]
//! midpoint <pt1> <pt2> [as <id>] [--show true|false] [--color RRGGBB]
//! move-pt <pt1> [pt2 ...] to <dst1> [dst2 ...]
//! show <name>...
//! hide <name>...
//! load-src <path>
//! list
//! info <name>
//! ```
//!
//! Parsing is purely syntactic. Names are resolved when the command runs.

use std::path::PathBuf;

use planar_types::{
    looks_numeric, parse_bool, parse_coord, parse_number, Coord, ObjectId, ObjectKind, Rgb,
};

use crate::board::{Destination, ObjectOptions, RadiusArg};
use crate::error::{CommandError, CommandResult};

pub const USAGE: &str = "\
commands:
  create <point|line|ray|seg|circle> <arg1> <arg2> [as <id>] [--show true|false] [--color RRGGBB]
  midpoint <pt1> <pt2> [as <id>] [--show true|false] [--color RRGGBB]
  move-pt <pt1> [pt2 ...] to <dst1> [dst2 ...]
  show <name>...
  hide <name>...
  load-src <path>
  list
  info <name>
  help";

const CREATE_USAGE: &str = "\
create point <x> <y>
create seg|ray|line <pt1> <pt2>
create circle <center> <radius|pt>
options: [as <id>] [--show true|false] [--color RRGGBB]";

const MIDPOINT_USAGE: &str =
    "midpoint <pt1> <pt2> [as <id>] [--show true|false] [--color RRGGBB]";

const LIST_USAGE: &str = "list\nprints every object with its current coordinates";

const MOVE_USAGE: &str = "\
move-pt <pt1> [pt2 ...] to <dst1> [dst2 ...]
a destination is a point name or an x,y coordinate";

/// What a `create` command builds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CreateArgs {
    Point(Coord),
    /// A segment, ray, or line between two named points.
    LineLike {
        kind: ObjectKind,
        a: ObjectId,
        b: ObjectId,
    },
    Circle {
        center: ObjectId,
        radius: RadiusArg,
    },
}

impl CreateArgs {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Point(_) => ObjectKind::Point,
            Self::LineLike { kind, .. } => *kind,
            Self::Circle { .. } => ObjectKind::Circle,
        }
    }
}

/// A parsed command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Create {
        args: CreateArgs,
        options: ObjectOptions,
    },
    Midpoint {
        a: ObjectId,
        b: ObjectId,
        options: ObjectOptions,
    },
    MovePoints {
        points: Vec<ObjectId>,
        destinations: Vec<Destination>,
    },
    Show(Vec<ObjectId>),
    Hide(Vec<ObjectId>),
    LoadSource(PathBuf),
    List,
    Info(ObjectId),
}

impl Command {
    /// Parse one line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments. `help`, bare or
    /// as the first argument of a command, yields
    /// [`CommandError::HelpRequested`].
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(None);
        };
        if name.starts_with('#') {
            return Ok(None);
        }

        let command = match name {
            "create" => parse_create(args)?,
            "midpoint" => parse_midpoint(args)?,
            "move-pt" => parse_move(args)?,
            "show" => Command::Show(parse_names("show", args)?),
            "hide" => Command::Hide(parse_names("hide", args)?),
            "load-src" => Command::LoadSource(PathBuf::from(single("load-src", args)?)),
            "list" => match args.first() {
                None => Command::List,
                Some(&"help") => return Err(CommandError::HelpRequested(LIST_USAGE.into())),
                Some(extra) => return Err(CommandError::UnknownArgument(extra.to_string())),
            },
            "info" => Command::Info(ObjectId::from_name(single("info", args)?)),
            "help" => return Err(CommandError::HelpRequested(USAGE.into())),
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_create(args: &[&str]) -> CommandResult<Command> {
    let Some((&token, rest)) = args.split_first() else {
        return Err(CommandError::missing("create"));
    };
    if token == "help" {
        return Err(CommandError::HelpRequested(CREATE_USAGE.into()));
    }
    let kind: ObjectKind = token
        .parse()
        .map_err(|e| CommandError::invalid("object type", e))?;
    let [arg1, arg2, options @ ..] = rest else {
        return Err(CommandError::not_enough("create"));
    };

    let args = match kind {
        ObjectKind::Point => CreateArgs::Point(Coord::new(
            parse_number(arg1).map_err(|e| CommandError::invalid("x coordinate", e))?,
            parse_number(arg2).map_err(|e| CommandError::invalid("y coordinate", e))?,
        )),
        ObjectKind::Segment | ObjectKind::Ray | ObjectKind::Line => CreateArgs::LineLike {
            kind,
            a: ObjectId::from_name(arg1),
            b: ObjectId::from_name(arg2),
        },
        ObjectKind::Circle => CreateArgs::Circle {
            center: ObjectId::from_name(arg1),
            radius: parse_radius(arg2)?,
        },
    };
    Ok(Command::Create {
        args,
        options: parse_options(options)?,
    })
}

fn parse_radius(token: &str) -> CommandResult<RadiusArg> {
    if !looks_numeric(token) {
        return Ok(RadiusArg::Through(ObjectId::from_name(token)));
    }
    let r = parse_number(token).map_err(|e| CommandError::invalid("radius", e))?;
    if r < 0.0 {
        return Err(CommandError::invalid("radius", format!("{token} is negative")));
    }
    Ok(RadiusArg::Length(r))
}

fn parse_midpoint(args: &[&str]) -> CommandResult<Command> {
    match args {
        [] => Err(CommandError::missing("midpoint")),
        ["help", ..] => Err(CommandError::HelpRequested(MIDPOINT_USAGE.into())),
        [_] => Err(CommandError::not_enough("midpoint")),
        [a, b, options @ ..] => Ok(Command::Midpoint {
            a: ObjectId::from_name(a),
            b: ObjectId::from_name(b),
            options: parse_options(options)?,
        }),
    }
}

fn parse_move(args: &[&str]) -> CommandResult<Command> {
    match args {
        [] => return Err(CommandError::missing("move-pt")),
        ["help", ..] => return Err(CommandError::HelpRequested(MOVE_USAGE.into())),
        _ => {}
    }
    let split = args
        .iter()
        .position(|t| *t == "to")
        .ok_or_else(|| CommandError::not_enough("move-pt"))?;
    let (sources, destinations) = (&args[..split], &args[split + 1..]);
    if sources.is_empty() || destinations.is_empty() {
        return Err(CommandError::not_enough("move-pt"));
    }
    if sources.len() != destinations.len() {
        return Err(CommandError::invalid(
            "destinations",
            format!(
                "{} points but {} destinations",
                sources.len(),
                destinations.len()
            ),
        ));
    }

    let destinations = destinations
        .iter()
        .map(|t| parse_destination(t))
        .collect::<CommandResult<Vec<_>>>()?;
    Ok(Command::MovePoints {
        points: sources.iter().map(|t| ObjectId::from_name(t)).collect(),
        destinations,
    })
}

fn parse_destination(token: &str) -> CommandResult<Destination> {
    if token.contains(',') {
        parse_coord(token)
            .map(Destination::At)
            .map_err(|e| CommandError::invalid("coordinate", e))
    } else {
        Ok(Destination::Point(ObjectId::from_name(token)))
    }
}

fn parse_names(command: &str, args: &[&str]) -> CommandResult<Vec<ObjectId>> {
    match args {
        [] => Err(CommandError::missing(command)),
        ["help", ..] => Err(CommandError::HelpRequested(format!("{command} <name>..."))),
        names => Ok(names.iter().map(|t| ObjectId::from_name(t)).collect()),
    }
}

fn single<'a>(command: &str, args: &[&'a str]) -> CommandResult<&'a str> {
    match args {
        [] => Err(CommandError::missing(command)),
        ["help"] => Err(CommandError::HelpRequested(format!("{command} <arg>"))),
        [arg] => Ok(*arg),
        [_, extra, ..] => Err(CommandError::UnknownArgument(extra.to_string())),
    }
}

/// A name for a new object. It must not read as a number or a coordinate,
/// or later commands could not refer to it as a circle radius point or a
/// move destination.
fn parse_new_name(token: &str) -> CommandResult<ObjectId> {
    if looks_numeric(token) || token.contains(',') {
        return Err(CommandError::invalid(
            "object name",
            format!("{token} reads as a number or coordinate"),
        ));
    }
    Ok(ObjectId::from_name(token))
}

fn parse_options(tokens: &[&str]) -> CommandResult<ObjectOptions> {
    let mut options = ObjectOptions::default();
    let mut iter = tokens.iter();
    while let Some(&token) = iter.next() {
        let mut value = || iter.next().copied().ok_or_else(|| CommandError::missing(token));
        match token {
            "as" => options.id = Some(parse_new_name(value()?)?),
            "--show" => {
                let v = value()?;
                options.visible =
                    Some(parse_bool(v).map_err(|e| CommandError::invalid("display flag", e))?);
            }
            "--color" => {
                let v = value()?;
                options.color = Some(Rgb::from_hex(v).map_err(|e| CommandError::invalid("color", e))?);
            }
            other => return Err(CommandError::UnknownArgument(other.to_string())),
        }
    }
    Ok(options)
}
