// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Placecard CLI entrypoint.
//!
//! By default this opens the interactive viewer on a solver plan plus its
//! guest and table documents. `--scene` instead prints the computed scene
//! description and score as JSON and exits, for surfaces that are not a
//! terminal.

use std::error::Error;
use std::fs;

use placecard::model::{GuestDirectory, SeatingPlan, TableShapes, Weights};
use placecard::render::render_plan;
use placecard::score::{format_score, weighted_score};
use placecard::solver::{
    guest_directory, table_shapes, GuestDto, SeatingPlanResponse, TableConfigDto, WeightsDto,
};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <plan.json> <guests.json> [tables.json] [--weights <weights.json>] [--scene]\n  {program} --demo [--scene]\n\nInputs:\n  plan.json     solver response (tables, metrics, attemptsMade)\n  guests.json   JSON array of guest records\n  tables.json   JSON array of table configs; omitted tables default to round\n  weights.json  scoring weight profile; defaults to the shipped profile\n\n--demo uses a built-in sample event and cannot be combined with input paths.\n--scene prints the scene description and score as JSON instead of opening the viewer."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    scene: bool,
    plan_path: Option<String>,
    guests_path: Option<String>,
    tables_path: Option<String>,
    weights_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--scene" => {
                if options.scene {
                    return Err(());
                }
                options.scene = true;
            }
            "--weights" => {
                if options.weights_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.weights_path = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.plan_path.is_none() {
                    options.plan_path = Some(arg);
                } else if options.guests_path.is_none() {
                    options.guests_path = Some(arg);
                } else if options.tables_path.is_none() {
                    options.tables_path = Some(arg);
                } else {
                    return Err(());
                }
            }
        }
    }

    if options.demo && options.plan_path.is_some() {
        return Err(());
    }

    if !options.demo && (options.plan_path.is_none() || options.guests_path.is_none()) {
        return Err(());
    }

    Ok(options)
}

fn load_inputs(
    options: &CliOptions,
) -> Result<(SeatingPlan, GuestDirectory, TableShapes), Box<dyn Error>> {
    let plan_path = options.plan_path.as_deref().expect("plan path (validated)");
    let guests_path = options
        .guests_path
        .as_deref()
        .expect("guests path (validated)");

    let response: SeatingPlanResponse = serde_json::from_str(&fs::read_to_string(plan_path)?)?;
    let guests: Vec<GuestDto> = serde_json::from_str(&fs::read_to_string(guests_path)?)?;

    let shapes = match options.tables_path.as_deref() {
        Some(path) => {
            let tables: Vec<TableConfigDto> = serde_json::from_str(&fs::read_to_string(path)?)?;
            table_shapes(tables)?
        }
        None => TableShapes::new(),
    };

    Ok((response.into_plan()?, guest_directory(guests)?, shapes))
}

fn load_weights(options: &CliOptions) -> Result<Weights, Box<dyn Error>> {
    match options.weights_path.as_deref() {
        Some(path) => {
            let dto: WeightsDto = serde_json::from_str(&fs::read_to_string(path)?)?;
            Ok(Weights::from(dto))
        }
        None => Ok(Weights::default()),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "placecard".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let (plan, directory, shapes) = if options.demo {
            placecard::tui::demo_inputs()
        } else {
            load_inputs(&options)?
        };
        let weights = load_weights(&options)?;

        if options.scene {
            let scenes = render_plan(&plan, &directory, &shapes);
            let score = weighted_score(plan.metrics(), &weights);
            let dump = serde_json::json!({
                "score": score,
                "scoreDisplay": format_score(score),
                "attemptsMade": plan.attempts_made(),
                "scenes": scenes,
            });
            println!("{}", serde_json::to_string_pretty(&dump)?);
            return Ok(());
        }

        placecard::tui::run(&plan, &directory, &shapes, &weights)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("placecard: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| (*value).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn rejects_empty_args() {
        parse_options(std::iter::empty()).unwrap_err();
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(args(&["--demo"])).expect("parse options");
        assert!(options.demo);
        assert!(!options.scene);
        assert!(options.plan_path.is_none());
    }

    #[test]
    fn parses_plan_and_guest_paths() {
        let options =
            parse_options(args(&["plan.json", "guests.json"])).expect("parse options");
        assert_eq!(
            options,
            CliOptions {
                plan_path: Some("plan.json".to_owned()),
                guests_path: Some("guests.json".to_owned()),
                ..CliOptions::default()
            }
        );
    }

    #[test]
    fn parses_optional_tables_path_and_scene_flag() {
        let options = parse_options(args(&["plan.json", "guests.json", "tables.json", "--scene"]))
            .expect("parse options");
        assert_eq!(options.tables_path.as_deref(), Some("tables.json"));
        assert!(options.scene);
    }

    #[test]
    fn parses_weights_path() {
        let options =
            parse_options(args(&["--demo", "--weights", "weights.json"])).expect("parse options");
        assert_eq!(options.weights_path.as_deref(), Some("weights.json"));
    }

    #[test]
    fn rejects_missing_weights_value() {
        parse_options(args(&["--demo", "--weights"])).unwrap_err();
    }

    #[test]
    fn rejects_demo_with_input_paths() {
        parse_options(args(&["--demo", "plan.json"])).unwrap_err();
        parse_options(args(&["plan.json", "guests.json", "--demo"])).unwrap_err();
    }

    #[test]
    fn rejects_plan_without_guests() {
        parse_options(args(&["plan.json"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_flags_and_extra_positionals() {
        parse_options(args(&["--nope"])).unwrap_err();
        parse_options(args(&["a", "b", "c", "d"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(args(&["--demo", "--demo"])).unwrap_err();
        parse_options(args(&["--demo", "--scene", "--scene"])).unwrap_err();
    }
}
